use std::{fs::File, io, path::Path};

use csv::{ByteRecord, ReaderBuilder};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, IoError, RecordError},
    record::RawRecord,
};

/// Column positions in the raw dataset.
///
/// The default matches the headerless Sentiment140 layout:
/// `sentiment,id,date,query_string,user,text`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub label: usize,
    pub id: usize,
    pub text: usize,
    pub has_headers: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            label: 0,
            id: 1,
            text: 5,
            has_headers: false,
        }
    }
}

/// Reads [`RawRecord`]s out of a CSV source.
///
/// Fields are decoded lossily, so bytes that are not valid UTF-8 come
/// through as `U+FFFD` instead of failing the row.
pub struct RecordReader<R: io::Read> {
    inner: csv::Reader<R>,
    layout: Layout,
    record: ByteRecord,
}

impl RecordReader<File> {
    pub fn open<P: AsRef<Path>>(path: P, layout: Layout) -> Result<Self, Error> {
        match File::open(path) {
            Ok(file) => Ok(Self::from_reader(file, layout)),
            Err(error) => Err(IoError::File(error.kind()).into()),
        }
    }
}

impl<R: io::Read> RecordReader<R> {
    pub fn from_reader(reader: R, layout: Layout) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(layout.has_headers)
            .flexible(true)
            .from_reader(reader);

        Self {
            inner,
            layout,
            record: ByteRecord::new(),
        }
    }

    /// Next record, or `None` at the end of the input.
    pub fn read_record(&mut self) -> Result<Option<RawRecord>, Error> {
        match self.inner.read_byte_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => return Ok(None),
            Err(error) => return Err(IoError::Reader(error.to_string()).into()),
        }

        let line = self
            .record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();

        let label = self.field(line, "label", self.layout.label)?;
        let label = std::str::from_utf8(label)
            .ok()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .ok_or_else(|| RecordError::Label {
                line,
                value: String::from_utf8_lossy(label).into_owned(),
            })?;

        let id = String::from_utf8_lossy(self.field(line, "id", self.layout.id)?).into_owned();
        let text =
            String::from_utf8_lossy(self.field(line, "text", self.layout.text)?).into_owned();

        Ok(Some(RawRecord { id, label, text }))
    }

    fn field(&self, line: u64, field: &'static str, index: usize) -> Result<&[u8], RecordError> {
        self.record
            .get(index)
            .ok_or(RecordError::MissingField { line, field, index })
    }
}

impl<R: io::Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
