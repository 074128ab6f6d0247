use serde::Serialize;

/// One row of the raw dataset, as produced by the reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub id: String,
    pub label: u32,
    pub text: String,
}

impl RawRecord {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, label: u32, text: T) -> Self {
        Self {
            id: id.into(),
            label,
            text: text.into(),
        }
    }
}

/// Cleaned text with the label of the raw record it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CleanRecord {
    pub text: String,
    pub target: u32,
}

impl CleanRecord {
    pub fn new(text: String, target: u32) -> Self {
        Self { text, target }
    }
}
