//! HTTP client for the remote analysis service.
//!
//! Two endpoints, two calls:
//! - `GET {base_url}/api/health` - one-shot liveness probe at startup.
//! - `POST {base_url}/api/analyze` - multipart form with `text` and
//!   `language` fields, answered with `{ success, analysis?, detail? }`.
//!
//! Every operation is a single attempt. There is no retry, no backoff,
//! and no request timeout: a hung service hangs that request, exactly as
//! the service's original client behaves.

use reqwest::multipart::Form;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{BackendStatus, HealthReport, Language};

/// Fallback host used when neither config nor environment provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors from the analyze operation.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned HTTP {status}: {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("malformed response body: {0}")]
    Malformed(#[source] reqwest::Error),

    #[error("analysis rejected by service: {0}")]
    Rejected(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Response body of the analyze endpoint.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    success: bool,
    #[serde(default)]
    analysis: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Error body shape for non-2xx responses. The service's error path
/// returns `{"detail": "..."}` with no `success` key.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Health payload. Only `ai_available` is read, and only best-effort.
#[derive(Debug, Deserialize)]
struct HealthBody {
    #[serde(default)]
    ai_available: Option<bool>,
}

/// Client for the analysis service. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL. A trailing slash is
    /// stripped so endpoint paths can be appended uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One-shot liveness probe. Never fails: any transport error or
    /// non-2xx response maps to `Unhealthy`. The body is parsed only to
    /// pick up the optional `ai_available` flag.
    pub async fn check_health(&self) -> HealthReport {
        let url = format!("{}/api/health", self.base_url);
        debug!("probing {}", url);

        match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                let ai_available = resp
                    .json::<HealthBody>()
                    .await
                    .ok()
                    .and_then(|body| body.ai_available);
                info!("backend healthy (ai_available: {:?})", ai_available);
                HealthReport {
                    status: BackendStatus::Healthy,
                    ai_available,
                }
            }
            Ok(resp) => {
                warn!("health probe got HTTP {}", resp.status());
                HealthReport::unhealthy()
            }
            Err(e) => {
                warn!("health probe failed: {}", e);
                HealthReport::unhealthy()
            }
        }
    }

    /// Submit document text for analysis. Returns the analysis text
    /// verbatim on success.
    pub async fn analyze(&self, text: &str, language: Language) -> ClientResult<String> {
        let url = format!("{}/api/analyze", self.base_url);
        info!(
            "submitting document ({} chars, language {})",
            text.chars().count(),
            language.code()
        );

        let form = Form::new()
            .text("text", text.to_string())
            .text("language", language.code());

        let resp = self.http.post(&url).multipart(form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            // The service's errors carry a `detail` field in the body.
            let detail = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| "no error detail provided".to_string());
            return Err(ClientError::Status { status, detail });
        }

        let body: AnalyzeResponse = resp.json().await.map_err(ClientError::Malformed)?;
        if body.success {
            Ok(body.analysis.unwrap_or_default())
        } else {
            Err(ClientError::Rejected(body.detail.unwrap_or_else(|| {
                "the service reported a failure without detail".to_string()
            })))
        }
    }
}

/// Compose the user-facing diagnostic shown in place of a result when the
/// analyze operation fails. Always includes the raw error description and
/// the configured base URL.
pub fn failure_notice(base_url: &str, error: &ClientError) -> String {
    format!(
        "Analysis failed: {error}\n\n\
         Please verify:\n\
         - the backend service is running and reachable\n\
         - the service's AI provider API key is configured\n\
         - the configured base URL is correct: {base_url}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://example.test:8000/");
        assert_eq!(client.base_url(), "http://example.test:8000");
    }

    #[tokio::test]
    async fn health_2xx_is_healthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "ai_available": true,
            })))
            .mount(&server)
            .await;

        let report = ApiClient::new(server.uri()).check_health().await;
        assert_eq!(report.status, BackendStatus::Healthy);
        assert_eq!(report.ai_available, Some(true));
    }

    #[tokio::test]
    async fn health_2xx_without_body_contract_is_healthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let report = ApiClient::new(server.uri()).check_health().await;
        assert_eq!(report.status, BackendStatus::Healthy);
        assert_eq!(report.ai_available, None);
    }

    #[tokio::test]
    async fn health_non_2xx_is_unhealthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let report = ApiClient::new(server.uri()).check_health().await;
        assert_eq!(report.status, BackendStatus::Unhealthy);
    }

    #[tokio::test]
    async fn health_connection_refused_is_unhealthy() {
        // Port 9 (discard) is reliably closed.
        let report = ApiClient::new("http://127.0.0.1:9").check_health().await;
        assert_eq!(report.status, BackendStatus::Unhealthy);
    }

    #[tokio::test]
    async fn analyze_success_returns_text_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .and(body_string_contains("name=\"text\""))
            .and(body_string_contains("name=\"language\""))
            .and(body_string_contains("shipment from Valencia"))
            .and(body_string_contains("EN"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "analysis": "X",
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let analysis = client
            .analyze("shipment from Valencia", Language::En)
            .await
            .unwrap();
        assert_eq!(analysis, "X");
    }

    #[tokio::test]
    async fn analyze_failure_flag_carries_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "detail": "bad doc",
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.analyze("doc", Language::Es).await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected(_)));

        let notice = failure_notice(client.base_url(), &err);
        assert!(notice.contains("bad doc"));
    }

    #[tokio::test]
    async fn analyze_non_2xx_uses_body_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "detail": "Error: upstream exploded",
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.analyze("doc", Language::Es).await.unwrap_err();
        assert!(err.to_string().contains("upstream exploded"));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn analyze_non_2xx_without_detail_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.analyze("doc", Language::Es).await.unwrap_err();
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("no error detail provided"));
    }

    #[tokio::test]
    async fn analyze_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.analyze("doc", Language::Es).await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[tokio::test]
    async fn transport_failure_notice_names_the_base_url() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.analyze("doc", Language::Es).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));

        let notice = failure_notice(client.base_url(), &err);
        assert!(notice.contains("http://127.0.0.1:9"));
    }
}
