//! Application state and the fetch cycle.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::info;

use crate::data::{extract_reading, History};
use crate::render::{RenderModel, LINES_PER_READING};
use crate::schedule::RepeatingTask;
use crate::source::ReadingSource;
use crate::ui::Theme;

/// Text of the warning shown when a cycle yields no reading.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to retrieve glucose data.";

/// Main application state.
pub struct App {
    pub running: bool,

    // Data source
    source: Box<dyn ReadingSource>,
    pub history: History,
    pub schedule: RepeatingTask,
    pub last_updated: Option<Instant>,
    pub last_error: Option<String>,

    /// Modal warning; blocks other input until dismissed.
    pub warning: Option<String>,

    // UI
    pub theme: Theme,
    pub scroll: u16,
    /// Screen area of the refresh button from the last draw, for mouse hits.
    pub refresh_button: Option<Rect>,
}

impl App {
    /// Create a new App polling `source` every `interval`.
    ///
    /// The schedule is not started; call [`App::start`] to make the first
    /// cycle due.
    pub fn new(source: Box<dyn ReadingSource>, interval: Duration, theme: Theme) -> Self {
        Self {
            running: true,
            source,
            history: History::new(),
            schedule: RepeatingTask::new(interval),
            last_updated: None,
            last_error: None,
            warning: None,
            theme,
            scroll: 0,
            refresh_button: None,
        }
    }

    /// Start the schedule with the first cycle due at `now`.
    pub fn start(&mut self, now: Instant) {
        self.schedule.start(now);
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Run one fetch → extract → record cycle.
    ///
    /// Returns true if a reading was stored. On failure the history is left
    /// unchanged and the warning is raised.
    pub fn run_cycle(&mut self) -> bool {
        let body = self.source.fetch();

        match extract_reading(body.as_ref()) {
            Some(reading) => {
                info!(
                    "Stored reading {:.1} ({}) at {}",
                    reading.value,
                    reading.trend().label(),
                    reading.timestamp
                );
                self.history.record(reading);
                self.last_updated = Some(Instant::now());
                self.last_error = None;
                self.scroll = 0;
                true
            }
            None => {
                self.last_error = Some(
                    self.source
                        .error()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Unexpected response structure".to_string()),
                );
                self.warning = Some(FETCH_FAILED_MESSAGE.to_string());
                false
            }
        }
    }

    /// Run a cycle if one is due at `now`, then schedule the next.
    ///
    /// Returns true if a cycle ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.schedule.is_due(now) {
            return false;
        }
        self.run_cycle();
        self.schedule.reschedule(now);
        true
    }

    /// Run a cycle right away without touching the schedule.
    pub fn refresh(&mut self) -> bool {
        self.run_cycle()
    }

    /// Build the render model for the current history.
    pub fn render_model(&self) -> RenderModel {
        RenderModel::from_history(&self.history)
    }

    /// Close the warning modal.
    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Highest useful scroll offset.
    pub fn max_scroll(&self) -> u16 {
        let lines = self.history.len() * LINES_PER_READING;
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Scroll the reading panel down by n lines.
    pub fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll());
    }

    /// Scroll the reading panel up by n lines.
    pub fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Signal the application to quit and stop the schedule.
    pub fn quit(&mut self) {
        self.schedule.cancel();
        self.running = false;
    }
}
