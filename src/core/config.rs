use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ImportError;

/// Fattura24 v0.3 SaveDocument endpoint.
pub const SAVE_DOCUMENT_URL: &str = "https://www.app.fattura24.com/api/v0.3/SaveDocument";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shape of the rendered `<Document>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentLayout {
    /// Totals plus a single `<Rows><Row>` block priced at the pre-tax amount.
    #[default]
    WithRow,
    /// Totals only, no `<Rows>` block.
    Summary,
}

/// Settings for the SaveDocument HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint URL the documents are posted to.
    pub endpoint: String,
    /// Static API key sent with every request.
    pub api_key: String,
    /// Timeout for each request, including reading the body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: SAVE_DOCUMENT_URL.into(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the settings before a client is built from them.
    pub fn validate(&self) -> Result<(), ImportError> {
        if self.api_key.trim().is_empty() {
            return Err(ImportError::Config("API key must not be empty".into()));
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ImportError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.timeout.is_zero() {
            return Err(ImportError::Config("timeout must be greater than 0".into()));
        }
        Ok(())
    }
}

/// Settings for the import pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Layout of every rendered document.
    pub layout: DocumentLayout,
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: DocumentLayout) -> Self {
        self.layout = layout;
        self
    }
}
