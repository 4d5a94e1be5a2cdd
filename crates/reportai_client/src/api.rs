use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::types::{AnalysisRequest, AnalysisResponse, ApiError, FailureKind};

/// Where and how the analysis endpoint is reached.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiSettings {
    /// Default settings, with `REPORTAI_BASE_URL` overriding the endpoint
    /// when set and non-empty.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(base_url) = std::env::var("REPORTAI_BASE_URL") {
            if !base_url.is_empty() {
                settings.base_url = base_url;
            }
        }
        settings
    }

    fn submit_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    fn report_url(&self) -> String {
        format!("{}/report", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
pub trait ReportApi: Send + Sync {
    /// POST the analysis request and decode the endpoint's JSON reply.
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError>;

    /// GET the finished report. The body is taken verbatim.
    async fn fetch_report(&self) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpReportApi {
    settings: ApiSettings,
}

impl HttpReportApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ReportApi for HttpReportApi {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
        let body = serde_json::to_string(request)
            .map_err(|err| ApiError::new(FailureKind::InvalidPayload, err.to_string()))?;

        let client = self.build_client()?;
        let response = client
            .post(self.settings.submit_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let text = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&text)
            .map_err(|err| ApiError::new(FailureKind::InvalidPayload, err.to_string()))
    }

    async fn fetch_report(&self) -> Result<String, ApiError> {
        let client = self.build_client()?;
        let response = client
            .get(self.settings.report_url())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response.text().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
