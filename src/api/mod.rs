//! Fattura24 SaveDocument API client.
//!
//! Posts each rendered document together with the static API key and
//! classifies the response. The endpoint's status code is not a reliable
//! success signal, so the body is inspected instead (see
//! [`classify_response`]).
//!
//! # Example
//!
//! ```ignore
//! use fattura24::api::*;
//! use fattura24::core::ClientConfig;
//!
//! let mut client = SaveDocumentClient::new(ClientConfig::new("my-api-key"))?;
//! let response = client.submit(&xml)?;
//! classify_response(response).into_result()?;
//! ```

mod client;
mod response;

pub use client::{SaveDocumentClient, Submit};
pub use response::{ApiResponse, ERROR_MARKER, SUCCESS_MARKER, SubmissionResult, classify_response};
