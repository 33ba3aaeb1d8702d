//! Reading panel rendering.
//!
//! Maps the [`RenderModel`] onto a scrollable ratatui paragraph.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use crate::app::App;
use crate::render::RenderModel;
use crate::ui::Theme;

/// Render the reading history panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let model = app.render_model();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .style(app.theme.panel_style());

    let lines = if model.is_empty() {
        vec![Line::from(Span::styled(
            "Waiting for the first reading...",
            Style::default().add_modifier(Modifier::DIM),
        ))]
    } else {
        to_lines(&model, &app.theme)
    };
    let line_count = lines.len();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);

    if line_count > area.height.saturating_sub(2) as usize {
        let mut state = ScrollbarState::new(line_count).position(app.scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

/// Convert the render model into styled ratatui lines.
pub fn to_lines(model: &RenderModel, theme: &Theme) -> Vec<Line<'static>> {
    model
        .lines
        .iter()
        .map(|line| {
            Line::from(
                line.segments
                    .iter()
                    .map(|segment| match segment.band {
                        Some(band) => Span::styled(segment.text.clone(), theme.band_style(band)),
                        None => Span::raw(segment.text.clone()),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}
