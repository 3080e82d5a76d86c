//! The Technitium management API client.

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::types::AddRecordRequest;

/// Client for one Technitium DNS server.
///
/// Holds the base URL and session token; all calls go out as `POST` with
/// the parameters in the query string, which is the form the Technitium
/// API documents.
pub struct TechnitiumClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TechnitiumClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// A trailing slash on `base_url` is accepted and stripped.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Registers `zone` as a Primary (authoritative) zone.
    pub async fn create_zone(&self, zone: &str) -> Result<()> {
        let params = [
            ("token", self.token.clone()),
            ("zone", zone.to_string()),
            ("type", "Primary".to_string()),
        ];
        self.post("/api/zones/create", &params).await
    }

    /// Adds one record to its zone.
    pub async fn add_record(&self, request: &AddRecordRequest) -> Result<()> {
        let params = request.params(&self.token);
        self.post("/api/zones/records/add", &params).await
    }

    /// Performs a `POST` and maps the outcome to a [`Result`].
    ///
    /// The API signals success purely through HTTP 200; every other status
    /// is an error, with the response body carried for diagnostics.
    async fn post(&self, path: &str, params: &[(&'static str, String)]) -> Result<()> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    ApiError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        tracing::debug!("Response Status: {status}");

        if status == 200 {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}
