//! Render model for the reading history.
//!
//! The presenter turns a [`History`] into lines of styled text segments.
//! Only glucose values carry a style (their [`GlucoseBand`]); the UI layer
//! decides which concrete colors that maps to. Each segment has its own
//! style, so any mix of bands can appear in one redraw.

use crate::data::{GlucoseBand, History, Reading};

/// Unit label printed after each value.
pub const UNIT: &str = "mg/dL";

/// Separator printed after each reading.
pub const SEPARATOR: &str = "-----------------------------------------------";

/// Number of lines emitted per reading.
pub const LINES_PER_READING: usize = 4;

/// A run of text with an optional band color.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub band: Option<GlucoseBand>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            band: None,
        }
    }

    pub fn colored(text: impl Into<String>, band: GlucoseBand) -> Self {
        Self {
            text: text.into(),
            band: Some(band),
        }
    }
}

/// One display line made of segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderLine {
    pub segments: Vec<Segment>,
}

impl RenderLine {
    fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Concatenated text of all segments.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Everything the reading panel shows, top to bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderModel {
    pub lines: Vec<RenderLine>,
}

impl RenderModel {
    /// Build the model for a history, newest reading first.
    pub fn from_history(history: &History) -> Self {
        let lines = history.newest_first().flat_map(reading_lines).collect();
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of the whole model, one line per entry.
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(RenderLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The display lines for a single reading.
pub fn reading_lines(reading: &Reading) -> [RenderLine; LINES_PER_READING] {
    [
        RenderLine::new(vec![
            Segment::plain("Glucose Level: "),
            Segment::colored(format!("{:.1} {}", reading.value, UNIT), reading.band()),
        ]),
        RenderLine::new(vec![Segment::plain(format!(
            "Trend: {}",
            reading.trend().label()
        ))]),
        RenderLine::new(vec![Segment::plain(format!(
            "Timestamp: {}",
            reading.timestamp
        ))]),
        RenderLine::new(vec![Segment::plain(SEPARATOR)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_renders_nothing() {
        let model = RenderModel::from_history(&History::new());
        assert!(model.is_empty());
        assert_eq!(model.to_plain_text(), "");
    }

    #[test]
    fn test_reading_lines_format() {
        let lines = reading_lines(&Reading::new(6.54, "T1", 3));
        assert_eq!(lines[0].text(), "Glucose Level: 6.5 mg/dL");
        assert_eq!(lines[1].text(), "Trend: Stable");
        assert_eq!(lines[2].text(), "Timestamp: T1");
        assert_eq!(lines[3].text(), SEPARATOR);
        assert_eq!(SEPARATOR.len(), 47);
    }

    #[test]
    fn test_only_value_is_colored() {
        let lines = reading_lines(&Reading::new(3.6, "T", 1));
        assert_eq!(lines[0].segments[0].band, None);
        assert_eq!(lines[0].segments[1].band, Some(GlucoseBand::Borderline));
        assert!(lines[1..].iter().all(|l| l.segments.iter().all(|s| s.band.is_none())));
    }

    #[test]
    fn test_newest_first_with_independent_colors() {
        let mut history = History::new();
        history.record(Reading::new(5.0, "T1", 3));
        history.record(Reading::new(3.5, "T2", 2));
        history.record(Reading::new(12.0, "T3", 5));

        let model = RenderModel::from_history(&history);
        assert_eq!(model.lines.len(), 3 * LINES_PER_READING);

        let bands: Vec<_> = model
            .lines
            .iter()
            .step_by(LINES_PER_READING)
            .map(|l| l.segments[1].band)
            .collect();
        assert_eq!(
            bands,
            vec![
                Some(GlucoseBand::OutOfRange),
                Some(GlucoseBand::Borderline),
                Some(GlucoseBand::InRange),
            ]
        );
        assert_eq!(model.lines[2].text(), "Timestamp: T3");
        assert_eq!(model.lines[10].text(), "Timestamp: T1");
    }
}
