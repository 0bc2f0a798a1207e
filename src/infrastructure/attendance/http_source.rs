//! Remote attendance source reached over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::domain::repositories::AttendanceSource;
use crate::domain::summary::{AttendanceCounts, FetchFailure};

/// Fetches today's counts with `GET {url}`.
///
/// Expects a `2xx` response whose body is
/// `{"presentCount": <int>, "absentCount": <int>}`. Anything else is a
/// [`FetchFailure`]. No retries are attempted.
pub struct HttpAttendanceSource {
    client: Client,
    url: String,
}

impl HttpAttendanceSource {
    /// Builds the HTTP client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchFailure::Transport`] if the client cannot be constructed
    /// (for example when the TLS backend fails to initialise).
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchFailure> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchFailure::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

}

#[async_trait]
impl AttendanceSource for HttpAttendanceSource {
    async fn fetch_today(&self) -> Result<AttendanceCounts, FetchFailure> {
        debug!(url = %self.url, "Requesting attendance counts");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchFailure::Payload(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("remote ({})", self.url)
    }
}
