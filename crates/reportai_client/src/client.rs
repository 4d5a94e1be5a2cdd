use std::sync::{mpsc, Arc};
use std::thread;

use log::{debug, info};

use crate::api::{ApiSettings, HttpReportApi, ReportApi};
use crate::preview::prepare_preview;
use crate::sanitize::sanitize_report;
use crate::types::{AnalysisRequest, ApiError, ClientEvent, FailureKind, STATUS_OK};

enum ClientCommand {
    Submit { request: AnalysisRequest },
}

/// Handle to the background request-cycle runner. Commands go in over a
/// channel; outcomes come back as events drained by the UI tick.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ApiSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(HttpReportApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, url: impl Into<String>, analysis_type: Option<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            request: AnalysisRequest {
                url: url.into(),
                analysis_type,
            },
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn ReportApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { request } => {
            let event = execute_request(api, &request).await;
            let _ = event_tx.send(event);
        }
    }
}

/// One full request cycle: submit the analysis, inspect the reply,
/// conditionally fetch the report. A failure of either call, a payload
/// decode error or an unexpected status all end the cycle as `Failed`.
pub async fn execute_request(api: &dyn ReportApi, request: &AnalysisRequest) -> ClientEvent {
    info!(
        "request cycle started url_len={} category={:?}",
        request.url.len(),
        request.analysis_type
    );
    let response = match api.submit(request).await {
        Ok(response) => response,
        Err(error) => return ClientEvent::Failed { error },
    };

    if response.status != STATUS_OK {
        return ClientEvent::Failed {
            error: ApiError::new(
                FailureKind::UnexpectedStatus {
                    status: response.status,
                },
                "analysis endpoint rejected the request",
            ),
        };
    }

    let Some(path) = response.usable_report_path() else {
        return ClientEvent::ReportUnavailable;
    };
    debug!("report available at {path:?}, fetching");

    match api.fetch_report().await {
        Ok(html) => {
            info!("report fetched ({} bytes)", html.len());
            let preview = prepare_preview(&sanitize_report(&html));
            ClientEvent::ReportReady { html, preview }
        }
        Err(error) => ClientEvent::Failed { error },
    }
}
