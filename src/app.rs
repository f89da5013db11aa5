//! Core application state and Iced Application implementation
//!
//! One window: the search form on top, the results table below. Each search
//! is a single GET whose response replaces the whole table.

use std::sync::Arc;

use iced::widget::{column, container, text, Space};
use iced::{Background, Border, Element, Length, Task, Theme};

use crate::backend::api::ProspectsClient;
use crate::backend::types::{Prospect, SearchQuery};
use crate::error::ApiError;
use crate::native::browser;
use crate::ui::{search_bar, table, theme::DarkTheme};

// ============================================================================
// Application State
// ============================================================================

pub struct ProspectFinder {
    query: SearchQuery,
    prospects: Vec<Prospect>,
    backend: ProspectsClient,
    /// Sequence number of the last dispatched search
    last_request: u64,
    /// Sequence number of the request whose response is on screen
    shown_request: u64,
    in_flight: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    RoleChanged(String),
    SkillsChanged(String),
    LocationChanged(String),
    Search,
    SearchComplete {
        request: u64,
        result: Result<Vec<Prospect>, Arc<ApiError>>,
    },
    OpenProfile(String),
}

impl ProspectFinder {
    pub fn new(backend: ProspectsClient) -> Self {
        Self {
            query: SearchQuery::default(),
            prospects: Vec::new(),
            backend,
            last_request: 0,
            shown_request: 0,
            in_flight: 0,
        }
    }

    pub fn title(&self) -> String {
        String::from("HR Prospect Finder")
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn prospects(&self) -> &[Prospect] {
        &self.prospects
    }

    /// True while at least one search has not completed
    pub fn is_awaiting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RoleChanged(role) => {
                self.query.role = role;
                Task::none()
            }

            Message::SkillsChanged(skills) => {
                self.query.skills = skills;
                Task::none()
            }

            Message::LocationChanged(location) => {
                self.query.location = location;
                Task::none()
            }

            Message::Search => self.search(),

            Message::SearchComplete { request, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);

                match result {
                    Ok(prospects) => {
                        // Last response to arrive wins, even if it belongs
                        // to an older request.
                        if request < self.shown_request {
                            tracing::warn!(
                                "Search #{} finished after #{}; showing the older results",
                                request,
                                self.shown_request
                            );
                        }
                        tracing::info!("Search #{} returned {} prospects", request, prospects.len());
                        self.prospects = prospects;
                        self.shown_request = request;
                    }
                    Err(e) => {
                        tracing::warn!("Search #{} failed: {}", request, e);
                    }
                }
                Task::none()
            }

            Message::OpenProfile(url) => {
                tracing::info!("Opening profile {}", url);
                if let Err(e) = browser::open_url(&url) {
                    tracing::warn!("Could not open {}: {}", url, e);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = search_bar::view(
            &self.query.role,
            &self.query.skills,
            &self.query.location,
            Message::RoleChanged,
            Message::SkillsChanged,
            Message::LocationChanged,
            Message::Search,
        );

        let results = container(table::view(&self.prospects, Message::OpenProfile))
            .padding(8)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::SURFACE)),
                border: Border {
                    color: DarkTheme::BORDER,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            });

        let content = column![
            text("HR Prospect Finder").size(24).color(DarkTheme::TEXT),
            Space::with_height(16),
            form,
            Space::with_height(16),
            results,
        ];

        container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Business Logic
    // ========================================================================

    /// Dispatch one request for the current fields. Nothing is cancelled or
    /// debounced; overlapping searches all complete.
    fn search(&mut self) -> Task<Message> {
        self.last_request += 1;
        self.in_flight += 1;

        let request = self.last_request;
        let query = self.query.clone();
        let backend = self.backend.clone();

        tracing::info!(
            "Search #{} role={:?} skills={:?} location={:?}",
            request,
            query.role,
            query.skills,
            query.location
        );

        Task::perform(
            async move { backend.search(&query).await.map_err(Arc::new) },
            move |result| Message::SearchComplete { request, result },
        )
    }
}
