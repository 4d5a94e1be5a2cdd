mod app;
mod effects;
mod ui;

use app_logging::LogDestination;
use iced::Application;

fn main() -> iced::Result {
    app_logging::initialize(LogDestination::File);
    app::ReportApp::run(iced::Settings::default())
}
