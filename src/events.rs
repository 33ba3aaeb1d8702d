use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;

/// Lines moved by PageUp/PageDown.
const PAGE: u16 = 10;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If the warning is shown, any key closes it
    if app.warning.is_some() {
        app.dismiss_warning();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Refresh Data
        KeyCode::Char('r') => {
            app.refresh();
        }

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // The warning takes all input; only a click closes it
    if app.warning.is_some() {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            app.dismiss_warning();
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(1),
        MouseEventKind::ScrollDown => app.scroll_down(1),

        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(button) = app.refresh_button {
                let inside = mouse.column >= button.x
                    && mouse.column < button.x + button.width
                    && mouse.row >= button.y
                    && mouse.row < button.y + button.height;
                if inside {
                    app.refresh();
                }
            }
        }

        _ => {}
    }
}
