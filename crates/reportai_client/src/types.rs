use serde::{Deserialize, Serialize};

/// Literal success marker in the analysis response.
pub const STATUS_OK: &str = "OK";

/// JSON body of the analysis submission. An absent category is sent as an
/// explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub url: String,
    pub analysis_type: Option<String>,
}

/// JSON body returned by the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    #[serde(default)]
    pub report_path: Option<String>,
}

impl AnalysisResponse {
    /// A report is fetchable only when `report_path` is present and
    /// non-empty.
    pub fn usable_report_path(&self) -> Option<&str> {
        self.report_path.as_deref().filter(|path| !path.is_empty())
    }
}

/// Outcome of one request cycle, delivered through the client handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// The endpoint reported a report and it was fetched. `html` is the
    /// body verbatim; `preview` is the sanitized text projection.
    ReportReady { html: String, preview: String },
    /// The endpoint accepted the request but named no report.
    ReportUnavailable,
    /// The cycle failed at some point; the error carries the cause.
    Failed { error: ApiError },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Failure classification for the diagnostic channel. Every kind collapses
/// into the same generic user-facing message upstream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("invalid payload")]
    InvalidPayload,
    #[error("unexpected status {status:?}")]
    UnexpectedStatus { status: String },
}
