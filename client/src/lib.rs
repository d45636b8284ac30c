//! HTTP client for the Sentinel audit service.
//!
//! Two endpoints exist:
//!
//! - `POST {base_url}/api/audit` - submit a target for analysis; the 200 body
//!   deserializes into [`AuditReport`]
//! - `GET {base_url}/` - health probe; any 2xx means the service is online
//!
//! No retries are issued here: a failed audit is terminal until the operator
//! resubmits, so every request is sent exactly once.

use std::time::Duration;

use thiserror::Error;

use sentinel_types::{AuditReport, AuditRequest, ServiceHealth};

const AUDIT_PATH: &str = "/api/audit";

const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Audits run an LLM analysis server-side, so the overall deadline is
/// generous compared to the probe.
const AUDIT_TIMEOUT_SECS: u64 = 120;
const HEALTH_TIMEOUT_SECS: u64 = 5;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request to audit service failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("audit service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("audit service returned a malformed body: {0}")]
    MalformedBody(#[source] reqwest::Error),
}

/// Client bound to a single audit service base URL.
///
/// The base URL is resolved once at startup and injected; the client never
/// consults the environment.
#[derive(Debug, Clone)]
pub struct AuditClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuditClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one audit request and wait for the settled report.
    pub async fn audit(&self, request: &AuditRequest) -> Result<AuditReport, ClientError> {
        let url = format!("{}{AUDIT_PATH}", self.base_url);
        tracing::debug!(
            audit_target = request.target.as_str(),
            kind = request.kind.as_str(),
            %url,
            "Dispatching audit request"
        );

        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(AUDIT_TIMEOUT_SECS))
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped_error_body(response).await;
            return Err(ClientError::Api { status, body });
        }

        response
            .json::<AuditReport>()
            .await
            .map_err(ClientError::MalformedBody)
    }

    /// Probe the service root. Infallible by design: any failure, at any
    /// layer, simply reads as offline.
    pub async fn health(&self) -> ServiceHealth {
        let url = format!("{}/", self.base_url);
        let result = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
            .send()
            .await;
        match result {
            Ok(response) if response.status().is_success() => ServiceHealth::Online,
            Ok(response) => {
                tracing::debug!(status = %response.status(), "Health probe returned non-success");
                ServiceHealth::Offline
            }
            Err(e) => {
                tracing::debug!(%e, "Health probe failed");
                ServiceHealth::Offline
            }
        }
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

/// Read an error response body with a hard size cap so a misbehaving server
/// cannot balloon memory through an error path.
async fn read_capped_error_body(response: reqwest::Response) -> String {
    use futures_util::StreamExt;
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8000///".to_string()),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8000".to_string()),
            "http://127.0.0.1:8000"
        );
    }
}
