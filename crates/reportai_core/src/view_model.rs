#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub url: String,
    pub category: String,
    pub report_preview: String,
    pub loading: bool,
    pub error: String,
}
