use reqwest::blocking::Client;

use super::response::ApiResponse;
use crate::core::{ClientConfig, ImportError};

/// Something that delivers a rendered document and returns the raw response.
///
/// [`SaveDocumentClient`] posts to the Fattura24 API; tests substitute a
/// recording implementation.
pub trait Submit {
    fn submit(&mut self, xml: &str) -> Result<ApiResponse, ImportError>;
}

impl<S: Submit + ?Sized> Submit for &mut S {
    fn submit(&mut self, xml: &str) -> Result<ApiResponse, ImportError> {
        (**self).submit(xml)
    }
}

/// Blocking client for the SaveDocument endpoint.
///
/// One client is built per run and reused for every document.
pub struct SaveDocumentClient {
    http: Client,
    config: ClientConfig,
}

impl SaveDocumentClient {
    /// Build a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Config` for invalid settings and
    /// `ImportError::Http` if the TLS backend cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self, ImportError> {
        config.validate()?;
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Submit for SaveDocumentClient {
    /// POST `apiKey` and `xml` as `application/x-www-form-urlencoded` and
    /// read the full body.
    fn submit(&mut self, xml: &str) -> Result<ApiResponse, ImportError> {
        let resp = self
            .http
            .post(&self.config.endpoint)
            .form(&[("apiKey", self.config.api_key.as_str()), ("xml", xml)])
            .send()?;

        let status = resp.status().as_u16();
        let body = resp.text()?;

        Ok(ApiResponse { status, body })
    }
}
