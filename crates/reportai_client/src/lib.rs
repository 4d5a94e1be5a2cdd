//! Reportai client: HTTP access to the analysis endpoint and execution of
//! the request cycle off the UI thread.
mod api;
mod client;
mod preview;
mod sanitize;
mod types;

pub use api::{ApiSettings, HttpReportApi, ReportApi};
pub use client::{execute_request, ClientHandle};
pub use preview::{prepare_preview, MAX_PREVIEW_CONTENT};
pub use sanitize::sanitize_report;
pub use types::{
    AnalysisRequest, AnalysisResponse, ApiError, ClientEvent, FailureKind, STATUS_OK,
};
