//! # fattura24
//!
//! Batch importer for the [Fattura24](https://www.fattura24.com) invoicing API:
//! each row of a CSV invoice table becomes a SaveDocument XML, which is posted
//! with a static API key. The run is strictly sequential and stops at the
//! first error.
//!
//! All amounts are handled as [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use fattura24::api::{ApiResponse, Submit};
//! use fattura24::core::{ImportConfig, ImportError};
//! use fattura24::import::Importer;
//! use fattura24::ingest::CsvSource;
//!
//! struct AlwaysOk(usize);
//!
//! impl Submit for AlwaysOk {
//!     fn submit(&mut self, _xml: &str) -> Result<ApiResponse, ImportError> {
//!         self.0 += 1;
//!         Ok(ApiResponse { status: 200, body: "Operazione completata".into() })
//!     }
//! }
//!
//! let csv = "FE,Mario Rossi,Via Roma 1,00100,Roma,IT,RSSMRA80A01H501U,IT12345678901,100.00\n";
//! let mut importer = Importer::new(AlwaysOk(0), ImportConfig::default());
//! let mut source = CsvSource::from_reader("inline.csv", csv.as_bytes());
//! assert_eq!(importer.import_source(&mut source).unwrap(), 1);
//! assert_eq!(importer.submitter().0, 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Invoice line schema, VAT derivation, configuration, errors |
//! | [`ingest`] | Lazy CSV reading |
//! | [`document`] | SaveDocument XML rendering |
//! | [`api`] | HTTP submission and response classification |
//! | [`import`] | The sequential pipeline |

pub mod api;
pub mod core;
pub mod document;
pub mod import;
pub mod ingest;

// Re-export core types at crate root for convenience
pub use crate::core::*;
