//! Core invoice types, record mapping, configuration and errors.
//!
//! A CSV row becomes an [`InvoiceLine`] through an explicit [`RecordLayout`]
//! schema; VAT is derived at the fixed Italian standard rate.

mod config;
mod error;
mod mapping;
mod types;

pub use config::*;
pub use error::*;
pub use mapping::{AMOUNT_SCALE, VAT_RATE, compute_vat, format_amount};
pub use types::*;
