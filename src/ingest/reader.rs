use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::core::ImportError;

/// One raw CSV row and where it came from.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// 1-based line number of the row's first line.
    pub line: u64,
    pub record: StringRecord,
}

/// Lazy reader over the rows of one invoice CSV.
pub struct CsvSource<R> {
    path: PathBuf,
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl CsvSource<BufReader<File>> {
    /// Open a CSV file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: Read> CsvSource<R> {
    /// Read CSV rows from any reader; `path` is only used in error messages.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        // Row width is checked by the mapper against the known layouts.
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self {
            path: path.into(),
            reader,
            record: StringRecord::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next row, or `None` at end of input.
    pub fn next_record(&mut self) -> Result<Option<SourceRecord>, ImportError> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|source| ImportError::Csv {
                path: self.path.clone(),
                source,
            })?;
        if !more {
            return Ok(None);
        }
        let line = self.record.position().map_or(0, |p| p.line());
        Ok(Some(SourceRecord {
            line,
            record: self.record.clone(),
        }))
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<SourceRecord, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
