//! CSV ingestion.
//!
//! Streams headerless, comma-separated, quote-aware rows from a file (or any
//! reader). Rows are yielded lazily, one at a time, together with their line
//! number so mapping errors can point at the offending row.
//!
//! # Example
//!
//! ```
//! use fattura24::ingest::CsvSource;
//!
//! let data = "FE,\"Rossi, Mario\",Via Roma 1,00100,Roma,IT,RSSMRA80A01H501U,,100.00\n";
//! let mut source = CsvSource::from_reader("inline.csv", data.as_bytes());
//! let row = source.next_record().unwrap().unwrap();
//! assert_eq!(row.line, 1);
//! assert_eq!(&row.record[1], "Rossi, Mario");
//! assert!(source.next_record().unwrap().is_none());
//! ```

mod reader;

pub use reader::{CsvSource, SourceRecord};
