#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlEdited(String),
    /// User edited the analysis-category input box.
    CategoryEdited(String),
    /// User clicked "Get report!".
    GetReportClicked,
    /// The request cycle finished and the report was fetched.
    ReportReady { html: String, preview: String },
    /// The endpoint accepted the request but named no report to fetch.
    ReportUnavailable,
    /// The request cycle failed; the cause went to the diagnostic channel.
    RequestFailed,
    /// UI tick used to drain pending client events.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
