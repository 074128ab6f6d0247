use serde::Serialize;

use crate::util::Counter;

/// Raw texts longer than this are counted as overlong.
pub const TWEET_LIMIT: usize = 140;

/// Length statistics over a run, before and after cleaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct LengthStats {
    pub records: Counter<u64>,
    pub empty: Counter<u64>,
    pub overlong: Counter<u64>,
    pub raw_chars: Counter<u64>,
    pub clean_chars: Counter<u64>,
    pub max_raw_len: usize,
}

impl LengthStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, raw: &str, clean: &str) {
        let raw_len = raw.chars().count();
        let clean_len = clean.chars().count();

        self.records.increment();
        self.raw_chars.increment_by(raw_len as u64);
        self.clean_chars.increment_by(clean_len as u64);
        self.max_raw_len = self.max_raw_len.max(raw_len);

        if raw_len > TWEET_LIMIT {
            self.overlong.increment();
        }
        if clean.is_empty() {
            self.empty.increment();
        }
    }

    pub fn merge(&mut self, other: &LengthStats) {
        self.records += other.records;
        self.empty += other.empty;
        self.overlong += other.overlong;
        self.raw_chars += other.raw_chars;
        self.clean_chars += other.clean_chars;
        self.max_raw_len = self.max_raw_len.max(other.max_raw_len);
    }

    pub fn mean_raw_len(&self) -> f64 {
        mean(*self.raw_chars, *self.records)
    }

    pub fn mean_clean_len(&self) -> f64 {
        mean(*self.clean_chars, *self.records)
    }
}

fn mean(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{LengthStats, TWEET_LIMIT};

    #[test]
    fn test_stats_observe() {
        let mut stats = LengthStats::new();
        stats.observe("@bob hi!!", "hi");
        stats.observe("?!", "");

        assert_eq!(*stats.records, 2);
        assert_eq!(*stats.empty, 1);
        assert_eq!(*stats.overlong, 0);
        assert_eq!(stats.max_raw_len, 9);
        assert_eq!(stats.mean_raw_len(), 5.5);
        assert_eq!(stats.mean_clean_len(), 1.0);
    }

    #[test]
    fn test_stats_counts_chars_not_bytes() {
        let mut stats = LengthStats::new();
        stats.observe(&"é".repeat(TWEET_LIMIT), "");
        assert_eq!(*stats.overlong, 0);
        assert_eq!(stats.max_raw_len, TWEET_LIMIT);

        stats.observe(&"x".repeat(TWEET_LIMIT + 1), "");
        assert_eq!(*stats.overlong, 1);
    }

    #[test]
    fn test_stats_merge() {
        let mut left = LengthStats::new();
        left.observe("one two", "one two");

        let mut right = LengthStats::new();
        right.observe("a much longer tweet", "much longer tweet");
        right.observe("", "");

        left.merge(&right);

        assert_eq!(*left.records, 3);
        assert_eq!(*left.empty, 1);
        assert_eq!(left.max_raw_len, 19);
    }

    #[test]
    fn test_stats_empty_mean() {
        let stats = LengthStats::new();
        assert_eq!(stats.mean_raw_len(), 0.0);
    }
}
