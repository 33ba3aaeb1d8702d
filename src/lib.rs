//! # glucose-tracker
//!
//! A terminal dashboard that polls the LibreLinkUp API for the latest glucose
//! reading and shows a color-coded history of the last 20 readings.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          Application                          │
//! │  ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌─────────┐  │
//! │  │   app    │───▶│   data   │───▶│  render  │───▶│   ui    │  │
//! │  │ (cycle)  │    │(extract, │    │ (model)  │    │(ratatui)│  │
//! │  └────┬─────┘    │ history) │    └──────────┘    └─────────┘  │
//! │       │          └──────────┘                                 │
//! │       ▼                                                       │
//! │  ┌──────────┐    ┌──────────┐                                 │
//! │  │ schedule │    │  source  │◀── LibreViewSource | test fakes │
//! │  │ (timer)  │    │ (fetch)  │                                 │
//! │  └──────────┘    └──────────┘                                 │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and the fetch → extract → record cycle
//! - **[`config`]**: API credentials from the local INI config file
//! - **[`source`]**: [`ReadingSource`] trait and the LibreView HTTP implementation
//! - **[`data`]**: Readings, threshold bands, trend labels and the bounded [`History`]
//! - **[`render`]**: Toolkit-independent [`RenderModel`] of styled text segments
//! - **[`schedule`]**: Cancellable [`RepeatingTask`] driving the poll interval
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Reads [API] patient_id and token from ./config.conf
//! glucose-tracker
//!
//! # Poll every minute with a different config file
//! glucose-tracker --config ~/.config/glucose.conf --refresh 60
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use std::time::{Duration, Instant};
//! use glucose_tracker::{App, LibreViewSource, Theme};
//!
//! let source = LibreViewSource::new("patient-id", "token").unwrap();
//! let mut app = App::new(Box::new(source), Duration::from_secs(120), Theme::dark());
//! app.start(Instant::now());
//! app.tick(Instant::now());
//! println!("{}", app.render_model().to_plain_text());
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod render;
pub mod schedule;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use data::{GlucoseBand, History, Reading, Trend};
pub use render::{RenderLine, RenderModel, Segment};
pub use schedule::RepeatingTask;
pub use source::{FetchError, LibreViewClient, LibreViewSource, ReadingSource};
pub use ui::Theme;
