use std::{fs::File, io, path::Path};

use csv::{Terminator, WriterBuilder};

use crate::{
    error::{Error, IoError},
    record::CleanRecord,
};

/// Header of the clean dataset: an unnamed index column, then the record.
const HEADER: [&str; 3] = ["", "text", "target"];

/// Writes [`CleanRecord`]s as `index,text,target` rows under a `,text,target`
/// header, numbering rows from zero.
pub struct CleanWriter<W: io::Write> {
    inner: csv::Writer<W>,
    index: u64,
}

impl CleanWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match File::create(path) {
            Ok(file) => Self::from_writer(file),
            Err(error) => Err(IoError::File(error.kind()).into()),
        }
    }
}

impl<W: io::Write> CleanWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self, Error> {
        let mut inner = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        inner.write_record(HEADER).map_err(writer_error)?;

        Ok(Self { inner, index: 0 })
    }

    pub fn write(&mut self, record: &CleanRecord) -> Result<(), Error> {
        self.inner
            .serialize((self.index, &record.text, record.target))
            .map_err(writer_error)?;
        self.index += 1;
        Ok(())
    }

    /// Rows written so far, header excluded.
    pub fn written(&self) -> u64 {
        self.index
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner
            .flush()
            .map_err(|error| IoError::File(error.kind()).into())
    }

    pub fn into_inner(self) -> Result<W, Error> {
        self.inner
            .into_inner()
            .map_err(|error| IoError::Writer(error.to_string()).into())
    }
}

fn writer_error(error: csv::Error) -> Error {
    IoError::Writer(error.to_string()).into()
}
