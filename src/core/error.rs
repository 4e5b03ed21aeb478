use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an import run.
///
/// Every variant is fatal: the importer stops at the first one and the
/// binary exits non-zero.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer failed (I/O error or invalid UTF-8).
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row could not be mapped to an invoice line.
    #[error("{}:{line}: {source}", .path.display())]
    Record {
        path: PathBuf,
        line: u64,
        #[source]
        source: RecordError,
    },

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Network failure or failure reading the response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered, but the response was classified as a failure.
    #[error("unexpected response with code {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Invalid client or import configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors mapping a single CSV row to an [`InvoiceLine`](super::InvoiceLine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RecordError {
    /// The row has a column count matching no known layout.
    #[error("malformed record: expected {expected} columns, found {found}")]
    Malformed { found: usize, expected: &'static str },

    /// An amount column does not hold a decimal number.
    #[error("invalid amount in column '{column}': {value:?}")]
    InvalidAmount { column: &'static str, value: String },
}
