#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one request cycle against the analysis endpoint.
    SubmitAnalysis {
        url: String,
        analysis_type: Option<String>,
    },
}
