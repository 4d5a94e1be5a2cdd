use iced::theme;
use iced::widget::{Button, Column, Container, Row, Scrollable, Text, TextInput};
use iced::{Alignment, Color, Element, Length};
use reportai_core::{FormViewModel, Msg};

const ACCENT_COLOR: Color = Color::from_rgb(0.97, 0.45, 0.09);
const ERROR_COLOR: Color = Color::from_rgb(0.8, 0.1, 0.1);

const FORM_WIDTH: f32 = 380.0;

const SUBMIT_IDLE: &str = "Get report!";
const SUBMIT_BUSY: &str = "Generating...";

/// The single form view: two inputs, the submit button (disabled and
/// relabelled while a cycle is in flight), the error line and the
/// sanitized report preview.
pub fn view(model: FormViewModel) -> Element<'static, Msg> {
    let header = Row::new()
        .push(Text::new("Report").size(28))
        .push(Text::new(".ai").size(28).style(theme::Text::Color(ACCENT_COLOR)));

    let url_input = TextInput::new("url", &model.url)
        .on_input(Msg::UrlEdited)
        .padding(10)
        .width(Length::Fixed(FORM_WIDTH));

    let category_input = TextInput::new("analyze category", &model.category)
        .on_input(Msg::CategoryEdited)
        .padding(10)
        .width(Length::Fixed(FORM_WIDTH));

    let label = if model.loading { SUBMIT_BUSY } else { SUBMIT_IDLE };
    // A button without on_press renders disabled; that is the only guard
    // against a second in-flight cycle.
    let mut submit = Button::new(Text::new(label))
        .padding(10)
        .width(Length::Fixed(FORM_WIDTH));
    if !model.loading {
        submit = submit.on_press(Msg::GetReportClicked);
    }

    let mut form = Column::new()
        .push(header)
        .push(url_input)
        .push(category_input)
        .push(submit)
        .spacing(12)
        .align_items(Alignment::Center);

    if !model.error.is_empty() {
        form = form.push(Text::new(model.error).style(theme::Text::Color(ERROR_COLOR)));
    }

    let mut page = Column::new()
        .push(form)
        .spacing(24)
        .align_items(Alignment::Center)
        .width(Length::Fill);

    if !model.report_preview.is_empty() {
        page = page.push(
            Scrollable::new(
                Container::new(Text::new(model.report_preview)).padding(16),
            )
            .height(Length::Fill),
        );
    }

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .padding(24)
        .into()
}
