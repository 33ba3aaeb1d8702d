//! Glucose readings and their classification.

/// A single glucose measurement taken from the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Measured value, in the unit reported by the account (mmol/L scale).
    pub value: f64,
    /// Timestamp string exactly as the API reports it.
    pub timestamp: String,
    /// Raw trend arrow code (1..=5 when known).
    pub trend_code: i64,
}

impl Reading {
    pub fn new(value: f64, timestamp: impl Into<String>, trend_code: i64) -> Self {
        Self {
            value,
            timestamp: timestamp.into(),
            trend_code,
        }
    }

    /// Classification of the value against the fixed threshold table.
    pub fn band(&self) -> GlucoseBand {
        GlucoseBand::classify(self.value)
    }

    pub fn trend(&self) -> Trend {
        Trend::from_code(self.trend_code)
    }
}

/// Range band a glucose value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GlucoseBand {
    /// 3.9 to 8.7 inclusive.
    InRange,
    /// 3.4 up to 3.9, or above 8.7 up to 9.2.
    Borderline,
    /// Everything else.
    OutOfRange,
}

impl GlucoseBand {
    /// Classify a value using the fixed threshold table.
    pub fn classify(value: f64) -> Self {
        if (3.9..=8.7).contains(&value) {
            GlucoseBand::InRange
        } else if (3.4..3.9).contains(&value) || (value > 8.7 && value <= 9.2) {
            GlucoseBand::Borderline
        } else {
            GlucoseBand::OutOfRange
        }
    }

    /// Color name used for this band.
    pub fn color_name(&self) -> &'static str {
        match self {
            GlucoseBand::InRange => "green",
            GlucoseBand::Borderline => "orange",
            GlucoseBand::OutOfRange => "red",
        }
    }
}

/// Direction the glucose value is moving in, as reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    DroppingFast,
    GoingLow,
    Stable,
    GoingHigh,
    IncreasingFast,
    Unknown,
}

impl Trend {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Trend::DroppingFast,
            2 => Trend::GoingLow,
            3 => Trend::Stable,
            4 => Trend::GoingHigh,
            5 => Trend::IncreasingFast,
            _ => Trend::Unknown,
        }
    }

    /// Returns the display label for this trend.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::DroppingFast => "Dropping Fast",
            Trend::GoingLow => "Going Low",
            Trend::Stable => "Stable",
            Trend::GoingHigh => "Going High",
            Trend::IncreasingFast => "Increasing Fast",
            Trend::Unknown => "Unknown",
        }
    }
}

/// Label for a raw trend code.
pub fn trend_label(code: i64) -> &'static str {
    Trend::from_code(code).label()
}
