//! Results table
//!
//! `rows` maps prospects to display rows; `view` draws them with iced
//! widgets. Keeping the mapping separate lets the headless exporter render
//! exactly the same cells.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::DarkTheme;
use crate::backend::types::Prospect;

/// Column titles, left to right
pub const HEADERS: [&str; 5] = ["Name", "Role", "Email", "Fit", "Profile"];

/// Label of the profile link
pub const LINK_LABEL: &str = "View";

const COLUMN_WEIGHTS: [u16; 5] = [3, 3, 4, 2, 2];

/// One rendered result row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Positional key; rows are only ever replaced as a whole
    pub key: usize,
    pub name: String,
    pub role: String,
    pub email: String,
    pub fit: String,
    pub profile_url: Option<String>,
}

impl TableRow {
    pub fn from_prospect(key: usize, prospect: &Prospect) -> Self {
        Self {
            key,
            name: prospect.name_cell(),
            role: prospect.role_cell(),
            email: prospect.email_cell(),
            fit: prospect.fit_cell(),
            profile_url: prospect.profile_link().map(str::to_string),
        }
    }

    /// The four text cells, without the link column
    pub fn text_cells(&self) -> [&str; 4] {
        [&self.name, &self.role, &self.email, &self.fit]
    }
}

/// Display rows for a result list, in order, one per prospect
pub fn rows(prospects: &[Prospect]) -> Vec<TableRow> {
    prospects
        .iter()
        .enumerate()
        .map(|(i, p)| TableRow::from_prospect(i, p))
        .collect()
}

fn cell<'a, Message: 'a>(content: Element<'a, Message>, weight: u16) -> Element<'a, Message> {
    container(content)
        .padding(Padding::from([8.0, 10.0]))
        .width(Length::FillPortion(weight))
        .into()
}

fn header<'a, Message: 'a>() -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = HEADERS
        .iter()
        .zip(COLUMN_WEIGHTS)
        .map(|(title, weight)| cell(text(*title).size(14).color(DarkTheme::TEXT).into(), weight))
        .collect();

    container(row(cells))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::HEADER)),
            border: Border::default().rounded(6),
            ..Default::default()
        })
        .into()
}

/// Draw the table. `on_open` builds the message for a clicked profile link;
/// rows without a profile URL get an inert link.
pub fn view<'a, Message: Clone + 'a>(
    prospects: &[Prospect],
    on_open: impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let body: Vec<Element<'a, Message>> = rows(prospects)
        .into_iter()
        .map(|table_row| {
            let link = button(text(LINK_LABEL).size(13))
                .padding(0)
                .style(|theme, status| button::Style {
                    text_color: DarkTheme::PRIMARY,
                    ..button::text(theme, status)
                })
                .on_press_maybe(table_row.profile_url.clone().map(&on_open));

            let mut cells: Vec<Element<'a, Message>> = table_row
                .text_cells()
                .into_iter()
                .zip(COLUMN_WEIGHTS)
                .map(|(value, weight)| {
                    cell(
                        text(value.to_string()).size(13).color(DarkTheme::TEXT).into(),
                        weight,
                    )
                })
                .collect();
            cells.push(cell(link.into(), COLUMN_WEIGHTS[4]));

            container(row(cells))
                .width(Length::Fill)
                .style(|_theme| container::Style {
                    border: Border {
                        color: DarkTheme::BORDER,
                        width: 1.0,
                        radius: 0.0.into(),
                    },
                    background: Some(Background::Color(Color::TRANSPARENT)),
                    ..Default::default()
                })
                .into()
        })
        .collect();

    column![
        header(),
        Space::with_height(4),
        scrollable(column(body).spacing(0)).height(Length::Fill),
    ]
    .into()
}
