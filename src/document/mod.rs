//! Fattura24 XML document rendering.
//!
//! Builds the `<Fattura24><Document>` tree expected by the SaveDocument API
//! with a structured writer, so CSV text containing `&`, `<` or quotes is
//! escaped instead of corrupting the document.
//!
//! # Example
//!
//! ```
//! use fattura24::core::{DocumentLayout, InvoiceLine};
//! use fattura24::document::to_fattura24_xml;
//!
//! let record = csv::StringRecord::from(vec![
//!     "FE", "Mario Rossi", "Via Roma 1", "00100", "Roma", "IT",
//!     "RSSMRA80A01H501U", "IT12345678901", "100.00",
//! ]);
//! let line = InvoiceLine::from_record(&record).unwrap();
//! let xml = to_fattura24_xml(&line, DocumentLayout::WithRow).unwrap();
//! assert!(xml.contains("<VatAmount>22.00</VatAmount>"));
//! assert!(xml.contains("<Total>122.00</Total>"));
//! ```

mod save_document;
mod xml_utils;

pub use save_document::{ROW_VAT_CODE, ROW_VAT_DESCRIPTION, to_fattura24_xml};
pub use xml_utils::{XmlResult, XmlWriter};
