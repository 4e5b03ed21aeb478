//! Sequential CSV → XML → SaveDocument pipeline.
//!
//! Files are processed one after another, rows one at a time, and each
//! request completes before the next row is read. The first error of any
//! kind aborts the run; nothing is retried.
//!
//! # Example
//!
//! ```ignore
//! use fattura24::api::SaveDocumentClient;
//! use fattura24::core::{ClientConfig, ImportConfig};
//! use fattura24::import::Importer;
//!
//! let client = SaveDocumentClient::new(ClientConfig::new("my-api-key"))?;
//! let mut importer = Importer::new(client, ImportConfig::default());
//! let summary = importer.import_files(&["january.csv", "february.csv"])?;
//! println!("{} documents saved", summary.documents);
//! ```

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::api::{Submit, classify_response};
use crate::core::{ImportConfig, ImportError, InvoiceLine};
use crate::document::to_fattura24_xml;
use crate::ingest::{CsvSource, SourceRecord};

/// Counts of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Files fully processed.
    pub files: usize,
    /// Documents accepted by the API.
    pub documents: usize,
}

/// Drives rows from CSV sources through mapping, rendering and submission.
pub struct Importer<S> {
    submitter: S,
    config: ImportConfig,
}

impl<S: Submit> Importer<S> {
    pub fn new(submitter: S, config: ImportConfig) -> Self {
        Self { submitter, config }
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn into_submitter(self) -> S {
        self.submitter
    }

    /// Import every file in order, stopping at the first error.
    pub fn import_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<ImportSummary, ImportError> {
        let mut summary = ImportSummary::default();
        for path in paths {
            summary.documents += self.import_file(path)?;
            summary.files += 1;
        }
        Ok(summary)
    }

    /// Import one file. Returns the number of accepted documents.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ImportError> {
        let mut source = CsvSource::open(path)?;
        self.import_source(&mut source)
    }

    /// Import every remaining row of a source.
    pub fn import_source<R: Read>(&mut self, source: &mut CsvSource<R>) -> Result<usize, ImportError> {
        let mut documents = 0;
        while let Some(row) = source.next_record()? {
            self.import_row(source.path(), &row)?;
            documents += 1;
        }
        info!(file = %source.path().display(), documents, "file imported");
        Ok(documents)
    }

    fn import_row(&mut self, path: &Path, row: &SourceRecord) -> Result<(), ImportError> {
        let line = InvoiceLine::from_record(&row.record).map_err(|source| ImportError::Record {
            path: path.to_path_buf(),
            line: row.line,
            source,
        })?;

        let xml = to_fattura24_xml(&line, self.config.layout)?;
        debug!(line = row.line, %xml, "rendered document");

        let response = self.submitter.submit(&xml)?;
        let response = classify_response(response).into_result()?;
        info!(
            file = %path.display(),
            line = row.line,
            customer = %line.customer_name,
            total = %line.total,
            status = response.status,
            "document saved"
        );
        Ok(())
    }
}
