use serde::{Deserialize, Serialize};

use crate::core::ImportError;

/// Body marker of a successful save: matches both "Operation completed"
/// and "Operazione completata".
pub const SUCCESS_MARKER: &str = "complet";

/// Body marker that overrides [`SUCCESS_MARKER`].
pub const ERROR_MARKER: &str = "error";

/// Raw SaveDocument response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Full response body.
    pub body: String,
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted(ApiResponse),
    Rejected(ApiResponse),
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Convert a rejection into the fatal [`ImportError::Rejected`].
    pub fn into_result(self) -> Result<ApiResponse, ImportError> {
        match self {
            Self::Accepted(resp) => Ok(resp),
            Self::Rejected(ApiResponse { status, body }) => {
                Err(ImportError::Rejected { status, body })
            }
        }
    }
}

/// Classify a SaveDocument response.
///
/// The endpoint answers 200 even when the document is refused, so the
/// status code is not consulted. A response is accepted when its body
/// contains [`SUCCESS_MARKER`] and does not contain [`ERROR_MARKER`].
/// Both checks are case-sensitive.
pub fn classify_response(response: ApiResponse) -> SubmissionResult {
    let body = response.body.as_str();
    if body.contains(SUCCESS_MARKER) && !body.contains(ERROR_MARKER) {
        SubmissionResult::Accepted(response)
    } else {
        SubmissionResult::Rejected(response)
    }
}
