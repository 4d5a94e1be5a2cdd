use crate::view_model::FormViewModel;

/// The one user-facing message for any failed request cycle. The structured
/// cause is written to the log only.
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze the repository.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    url: String,
    category: String,
    report_html: String,
    report_preview: String,
    loading: bool,
    error: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            url: self.url.clone(),
            category: self.category.clone(),
            report_preview: self.report_preview.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    /// The report body exactly as the server returned it. The UI never
    /// renders this; only the sanitized preview is shown.
    pub fn report_html(&self) -> &str {
        &self.report_html
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.url = url;
    }

    pub(crate) fn set_category(&mut self, category: String) {
        self.category = category;
    }

    /// The category as it goes on the wire: `None` when empty, otherwise
    /// the verbatim string (no trimming).
    pub(crate) fn submitted_category(&self) -> Option<String> {
        if self.category.is_empty() {
            None
        } else {
            Some(self.category.clone())
        }
    }

    pub(crate) fn begin_cycle(&mut self) {
        self.error.clear();
        self.loading = true;
    }

    pub(crate) fn store_report(&mut self, html: String, preview: String) {
        self.report_html = html;
        self.report_preview = preview;
        self.loading = false;
    }

    pub(crate) fn settle_without_report(&mut self) {
        self.loading = false;
    }

    pub(crate) fn fail_cycle(&mut self) {
        self.error = ANALYZE_FAILED_MESSAGE.to_string();
        self.loading = false;
    }
}
