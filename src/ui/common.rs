//! Common UI components.
//!
//! This module contains the header bar, refresh button, status bar, and the
//! warning overlay.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::MAX_HISTORY_SIZE;
use crate::render::UNIT;

/// Label drawn on the refresh button.
pub const REFRESH_LABEL: &str = " Refresh Data ";

/// Render the header bar with the latest reading.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(latest) = app.history.latest() else {
        let line = Line::from(vec![
            Span::styled(" GLUCOSE TRACKER ", app.theme.header),
            Span::raw("│ Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let band_style = app.theme.band_style(latest.band());
    let line = Line::from(vec![
        Span::styled(" ● ", band_style),
        Span::styled("GLUCOSE TRACKER ", app.theme.header),
        Span::raw("│ "),
        Span::styled(format!("{:.1} {}", latest.value, UNIT), band_style),
        Span::raw(format!(" {} │ ", latest.trend().label())),
        Span::styled(
            format!("{}/{}", app.history.len(), MAX_HISTORY_SIZE),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the right-aligned refresh button and remember where it is.
pub fn render_button_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = (REFRESH_LABEL.len() as u16).min(area.width);
    let button = Rect::new(area.x + area.width - width, area.y, width, 1);

    frame.render_widget(Paragraph::new(REFRESH_LABEL).style(app.theme.button), button);
    app.refresh_button = Some(button);
}

/// Render the status bar at the bottom.
///
/// Shows: countdown to the next cycle and available controls, or the last
/// fetch error.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let countdown = app
        .schedule
        .time_until_due(Instant::now())
        .map(format_countdown)
        .unwrap_or_else(|| "-".to_string());

    let status = if let Some(ref err) = app.last_error {
        format!(" Error: {} | next {} | r:retry q:quit", err, countdown)
    } else if app.last_updated.is_some() {
        format!(" Next refresh in {} | r:refresh ↑↓:scroll q:quit", countdown)
    } else {
        format!(" Loading from {} | q:quit", app.source_description())
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the warning modal.
///
/// Displayed as a centered box on top of everything else.
pub fn render_warning(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref message) = app.warning else {
        return;
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Warning ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.borderline));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let width = 40u16.min(area.width.saturating_sub(4));
    let height = 6u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let modal = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal);
    frame.render_widget(paragraph, modal);
}

/// Render the message shown when the terminal is below the minimum size.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nResize to continue",
        area.width, area.height
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let y = area.y + area.height.saturating_sub(2) / 2;
    frame.render_widget(paragraph, Rect::new(area.x, y, area.width, 2.min(area.height)));
}

/// Format a countdown as "1m 05s" or "42s".
pub fn format_countdown(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
