use log::{info, warn};
use reportai_client::{ApiSettings, ClientEvent, ClientHandle};
use reportai_core::{Effect, Msg};

/// Bridges core effects to the HTTP client and client events back to core
/// messages. Structured failure causes stop here, on the log; the core
/// only learns that the cycle failed.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self {
            client: ClientHandle::new(ApiSettings::from_env()),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis { url, analysis_type } => {
                    info!(
                        "submit analysis url_len={} category={:?}",
                        url.len(),
                        analysis_type
                    );
                    self.client.submit(url, analysis_type);
                }
            }
        }
    }

    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.client.try_recv() {
            msgs.push(match event {
                ClientEvent::ReportReady { html, preview } => {
                    info!("report ready ({} bytes)", html.len());
                    Msg::ReportReady { html, preview }
                }
                ClientEvent::ReportUnavailable => {
                    warn!("analysis finished without a report path; nothing to display");
                    Msg::ReportUnavailable
                }
                ClientEvent::Failed { error } => {
                    warn!("request cycle failed: {error}");
                    Msg::RequestFailed
                }
            });
        }
        msgs
    }
}
