//! Bounded history of recent readings.

use std::collections::VecDeque;

use super::reading::Reading;

/// Maximum number of readings to keep.
pub const MAX_HISTORY_SIZE: usize = 20;

/// The most recent readings, oldest first.
///
/// New readings are appended at the back; once the buffer is over
/// capacity the oldest reading is evicted from the front.
#[derive(Debug, Clone)]
pub struct History {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty history holding up to [`MAX_HISTORY_SIZE`] readings.
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest if over capacity.
    ///
    /// Returns the evicted reading, if any.
    pub fn record(&mut self, reading: Reading) -> Option<Reading> {
        self.readings.push_back(reading);
        if self.readings.len() > self.capacity {
            self.readings.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recently recorded reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Iterate from newest to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter().rev()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(i: usize) -> Reading {
        Reading::new(5.0 + i as f64 / 10.0, format!("T{}", i), 3)
    }

    #[test]
    fn test_record_keeps_order() {
        let mut history = History::new();
        history.record(reading(1));
        history.record(reading(2));

        let newest: Vec<&str> = history.newest_first().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(newest, vec!["T2", "T1"]);
        assert_eq!(history.latest().unwrap().timestamp, "T2");
    }

    #[test]
    fn test_twenty_first_reading_evicts_oldest() {
        let mut history = History::new();
        for i in 1..=20 {
            assert!(history.record(reading(i)).is_none());
        }
        assert_eq!(history.len(), 20);

        let evicted = history.record(reading(21));
        assert_eq!(evicted.unwrap().timestamp, "T1");
        assert_eq!(history.len(), 20);
        assert_eq!(history.iter().next().unwrap().timestamp, "T2");
        assert_eq!(history.latest().unwrap().timestamp, "T21");
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut history = History::with_capacity(3);
        for i in 0..50 {
            history.record(reading(i));
            assert!(history.len() <= 3);
        }
        assert_eq!(history.capacity(), 3);
    }

    #[test]
    fn test_empty_history() {
        let history = History::default();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.newest_first().count(), 0);
    }
}
