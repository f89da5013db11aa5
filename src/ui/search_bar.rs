//! Search form: three text fields and the Search button

use iced::widget::{button, row, text, text_input};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;

/// One labelled input of the search form
fn field<'a, Message: Clone + 'a>(
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(Padding::new(10.0))
        .size(15)
        .width(Length::FillPortion(1))
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(DarkTheme::SURFACE),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        })
        .into()
}

/// Role, skills and location inputs followed by the Search button.
/// Enter in any field triggers the same search as the button.
pub fn view<'a, Message: Clone + 'a>(
    role: &str,
    skills: &str,
    location: &str,
    on_role: impl Fn(String) -> Message + 'a,
    on_skills: impl Fn(String) -> Message + 'a,
    on_location: impl Fn(String) -> Message + 'a,
    on_search: Message,
) -> Element<'a, Message> {
    row![
        field("Role", role, on_role, on_search.clone()),
        field("Skills (comma-separated)", skills, on_skills, on_search.clone()),
        field("Location", location, on_location, on_search.clone()),
        button(text("Search").size(15))
            .padding(Padding::from([10.0, 16.0]))
            .style(button::primary)
            .on_press(on_search),
    ]
    .spacing(8)
    .into()
}
