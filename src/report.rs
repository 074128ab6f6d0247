use std::{fs, path::Path};

use serde::Serialize;
use tweetprep::stats::LengthStats;

use crate::error::Error;

/// Totals of one cleaning run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub read: u64,
    pub written: u64,
    pub dropped: u64,
    pub stats: LengthStats,
}

/// A [`Summary`] with derived means, as written to the JSON report.
#[derive(Debug, Serialize)]
pub struct Report<'s> {
    #[serde(flatten)]
    pub summary: &'s Summary,
    pub mean_raw_len: f64,
    pub mean_clean_len: f64,
}

impl<'s> From<&'s Summary> for Report<'s> {
    fn from(summary: &'s Summary) -> Self {
        Self {
            summary,
            mean_raw_len: summary.stats.mean_raw_len(),
            mean_clean_len: summary.stats.mean_clean_len(),
        }
    }
}

impl Report<'_> {
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|error| Error::Report(error.to_string()))
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|error| Error::Report(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::report::{Report, Summary};

    #[test]
    fn test_report_json() {
        let mut summary = Summary {
            read: 2,
            written: 1,
            dropped: 1,
            ..Summary::default()
        };
        summary.stats.observe("hello world", "hello world");
        summary.stats.observe("!!!", "");

        let json = Report::from(&summary).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["read"], 2);
        assert_eq!(value["dropped"], 1);
        assert_eq!(value["stats"]["records"], 2);
        assert_eq!(value["stats"]["empty"], 1);
        assert_eq!(value["mean_raw_len"], 7.0);
        assert_eq!(value["mean_clean_len"], 5.5);
    }
}
