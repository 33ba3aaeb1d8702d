//! Data models and processing for glucose readings.
//!
//! ## Submodules
//!
//! - [`extract`]: Pulls a [`Reading`] out of a raw API response body
//! - [`history`]: Bounded buffer of the most recent readings
//! - [`reading`]: Core data model ([`Reading`], [`GlucoseBand`], [`Trend`])
//!
//! ## Data Flow
//!
//! ```text
//! serde_json::Value (raw response)
//!        │
//!        ▼
//! extract_reading()
//!        │
//!        ├──▶ Reading (value, timestamp, trend code)
//!        │
//!        └──▶ History::record() (oldest evicted past 20)
//! ```

pub mod extract;
pub mod history;
pub mod reading;

pub use extract::{extract_reading, try_extract, ExtractError};
pub use history::{History, MAX_HISTORY_SIZE};
pub use reading::{trend_label, GlucoseBand, Reading, Trend};
