use crate::{Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::CategoryEdited(category) => {
            state.set_category(category);
            Vec::new()
        }
        Msg::GetReportClicked => {
            // Single-flight is a UI-level guard (the button is disabled
            // while loading); a bypassed guard is not rejected here.
            state.begin_cycle();
            vec![Effect::SubmitAnalysis {
                url: state.url().to_string(),
                analysis_type: state.submitted_category(),
            }]
        }
        Msg::ReportReady { html, preview } => {
            state.store_report(html, preview);
            Vec::new()
        }
        Msg::ReportUnavailable => {
            state.settle_without_report();
            Vec::new()
        }
        Msg::RequestFailed => {
            state.fail_cycle();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
