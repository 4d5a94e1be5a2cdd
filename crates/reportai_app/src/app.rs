use std::time::Duration;

use iced::{executor, Application, Command, Element, Subscription, Theme};
use reportai_core::{update, FormState, Msg};

use crate::effects::EffectRunner;
use crate::ui;

/// Interval at which pending client events are drained into the core.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(75);

pub struct ReportApp {
    state: FormState,
    effects: EffectRunner,
}

impl Application for ReportApp {
    type Message = Msg;
    type Theme = Theme;
    type Executor = executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Msg>) {
        let app = Self {
            state: FormState::new(),
            effects: EffectRunner::new(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Report.ai".to_string()
    }

    fn update(&mut self, message: Msg) -> Command<Msg> {
        let drained = if matches!(message, Msg::Tick) {
            self.effects.poll()
        } else {
            Vec::new()
        };

        self.apply(message);
        for msg in drained {
            self.apply(msg);
        }

        Command::none()
    }

    fn view(&self) -> Element<Msg> {
        ui::view(self.state.view())
    }

    fn subscription(&self) -> Subscription<Msg> {
        iced::time::every(EVENT_POLL_INTERVAL).map(|_| Msg::Tick)
    }
}

impl ReportApp {
    fn apply(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }
}
