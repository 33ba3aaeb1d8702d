//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`readings`]: Scrollable panel showing the reading history
//! - [`common`]: Shared components (header, refresh button, status bar, warning modal)
//! - [`theme`]: Dark/light theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Readings (readings::render)          │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │            [ Refresh Data ]          │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_warning
//! ```

pub mod common;
pub mod readings;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::App;

/// Width of the dashboard column, borders included.
pub const PANEL_WIDTH: u16 = 54;

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 10;

/// Draw the whole dashboard.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        common::render_too_small(frame, area);
        app.refresh_button = None;
        return;
    }

    let column = centered_column(area, PANEL_WIDTH);
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(4),    // Readings
        Constraint::Length(1), // Refresh button
        Constraint::Length(1), // Status bar
    ])
    .split(column);

    common::render_header(frame, app, chunks[0]);
    readings::render(frame, app, chunks[1]);
    common::render_button_bar(frame, app, chunks[2]);
    common::render_status_bar(frame, app, chunks[3]);

    if app.warning.is_some() {
        common::render_warning(frame, app, area);
    }
}

/// A full-height column of at most `width`, centered horizontally.
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
