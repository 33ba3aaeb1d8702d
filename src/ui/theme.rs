//! Theme configuration for the TUI.
//!
//! Dark is the default; a light theme and terminal detection are available.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::GlucoseBand;

/// Color and style theme for the TUI.
///
/// Use [`Theme::dark()`]/[`Theme::light()`] explicitly, or
/// [`Theme::auto_detect()`] to pick based on terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background of the reading panel.
    pub background: Color,
    /// Default foreground text.
    pub text: Color,
    /// Color for in-range values.
    pub in_range: Color,
    /// Color for borderline values.
    pub borderline: Color,
    /// Color for out-of-range values.
    pub out_of_range: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the title bar.
    pub header: Style,
    /// Style for the refresh button.
    pub button: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x1C, 0x1C, 0x1C),
            text: Color::White,
            in_range: Color::Green,
            borderline: Color::Rgb(0xFF, 0xA5, 0x00),
            out_of_range: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x44, 0x44, 0x44))
                .add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Black,
            in_range: Color::Green,
            borderline: Color::Rgb(0xCC, 0x7A, 0x00),
            out_of_range: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Foreground color for a glucose band.
    pub fn band_color(&self, band: GlucoseBand) -> Color {
        match band {
            GlucoseBand::InRange => self.in_range,
            GlucoseBand::Borderline => self.borderline,
            GlucoseBand::OutOfRange => self.out_of_range,
        }
    }

    /// Style for a glucose band.
    pub fn band_style(&self, band: GlucoseBand) -> Style {
        match band {
            GlucoseBand::OutOfRange => Style::default()
                .fg(self.out_of_range)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(self.band_color(band)),
        }
    }

    /// Style of the reading panel body.
    pub fn panel_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.band_color(GlucoseBand::InRange), Color::Green);
        assert_eq!(theme.band_color(GlucoseBand::Borderline), Color::Rgb(0xFF, 0xA5, 0x00));
        assert_eq!(theme.band_color(GlucoseBand::OutOfRange), Color::Red);
        assert_eq!(theme.band_style(GlucoseBand::OutOfRange).fg, Some(Color::Red));
    }
}
