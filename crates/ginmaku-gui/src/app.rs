//! Application router.
//!
//! Owns the API clients, the poster cache, and the trending list, and
//! interprets the [`Action`]s the discover screen requests. Screens never
//! talk to the network directly.

use std::time::Duration;

use iced::{window, Element, Subscription, Task, Theme};

use ginmaku_api::{AppwriteClient, MovieCatalog, TmdbClient, TrendingStore};
use ginmaku_core::config::AppConfig;
use ginmaku_core::models::{Movie, TrendingEntry};

use crate::keyboard;
use crate::poster_cache::{self, PosterCache, PosterState};
use crate::screen::{discover, Action};
use crate::subscription;
use crate::theme::{self, ColorScheme};
use crate::window_state::WindowState;

/// Top-level application state.
pub struct Ginmaku {
    config: AppConfig,
    catalog: TmdbClient,
    /// Absent when the trending store is not configured; the app then
    /// runs search-only.
    store: Option<AppwriteClient>,
    colors: ColorScheme,
    discover: discover::Discover,
    trending: Vec<TrendingEntry>,
    posters: PosterCache,
    window_state: WindowState,
}

impl Default for Ginmaku {
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        });

        let catalog = TmdbClient::with_base_url(
            config.catalog.bearer_token(),
            config.catalog.base_url.clone(),
        );
        let store = config
            .trending
            .is_configured()
            .then(|| AppwriteClient::new(&config.trending));
        if store.is_none() {
            tracing::info!("Trending store not configured; search counts disabled");
        }
        let colors = ColorScheme::for_mode(theme::resolve_mode(config.ui.theme));

        Self {
            config,
            catalog,
            store,
            colors,
            discover: discover::Discover::new(),
            trending: Vec::new(),
            posters: PosterCache::default(),
            window_state: WindowState::load(),
        }
    }
}

/// Every message the router dispatches on.
#[derive(Debug, Clone)]
pub enum Message {
    Discover(discover::Message),
    TrendingLoaded(Result<Vec<TrendingEntry>, String>),
    SearchRecorded(Result<(), String>),
    PosterLoaded {
        movie_id: u64,
        result: Result<std::path::PathBuf, String>,
    },
    Shortcut(keyboard::Shortcut),
    WindowEvent(window::Event),
}

impl Ginmaku {
    pub fn new() -> (Self, Task<Message>) {
        let mut app = Self::default();
        let start = app.discover.start();
        let initial_fetch = app.handle_action(start);
        let trending = app.load_trending();
        (app, Task::batch([initial_fetch, trending]))
    }

    pub fn title(&self) -> String {
        String::from("Ginmaku")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Discover(msg) => {
                // A settled fetch is the only discover message that can
                // change which movies are on screen.
                let fetched = matches!(msg, discover::Message::Fetched { .. });
                let action = self.discover.update(msg);
                let action_task = self.handle_action(action);
                if fetched {
                    let posters = self.request_movie_posters();
                    return Task::batch([action_task, posters]);
                }
                action_task
            }
            Message::TrendingLoaded(result) => match result {
                Ok(entries) => {
                    self.trending = entries;
                    self.request_trending_posters()
                }
                Err(e) => {
                    tracing::warn!("Trending fetch failed: {e}");
                    Task::none()
                }
            },
            Message::SearchRecorded(result) => match result {
                Ok(()) => self.load_trending(),
                Err(e) => {
                    // Counting failures never disturb the search flow.
                    tracing::warn!("Trending update failed: {e}");
                    Task::none()
                }
            },
            Message::PosterLoaded { movie_id, result } => {
                match result {
                    Ok(path) => {
                        self.posters
                            .states
                            .insert(movie_id, PosterState::Loaded(path));
                    }
                    Err(_) => {
                        self.posters.states.insert(movie_id, PosterState::Failed);
                    }
                }
                Task::none()
            }
            Message::Shortcut(shortcut) => {
                let msg = match shortcut {
                    keyboard::Shortcut::Refresh => discover::Message::Refresh,
                    keyboard::Shortcut::ClearSearch => discover::Message::ClearSearch,
                };
                let action = self.discover.update(msg);
                self.handle_action(action)
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => self.window_state.set_size(size),
                    window::Event::Moved(position) => self.window_state.set_position(position),
                    _ => {}
                }
                Task::none()
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::ScheduleDebounce { generation } => {
                let delay = Duration::from_millis(self.config.ui.debounce_ms);
                Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        generation
                    },
                    |generation| Message::Discover(discover::Message::DebounceFired(generation)),
                )
            }
            Action::Fetch(request) => {
                let catalog = self.catalog.clone();
                Task::perform(
                    async move {
                        let seq = request.seq;
                        let outcome = catalog
                            .fetch_page(&request.term, request.page)
                            .await
                            .map_err(|e| e.to_string());
                        (seq, outcome)
                    },
                    |(seq, outcome)| Message::Discover(discover::Message::Fetched { seq, outcome }),
                )
            }
            Action::RecordSearch { term, movie } => self.record_search(term, movie),
        }
    }

    /// Bump the search count for a term, fire-and-forget. Failures are
    /// logged when the result message comes back; a success refreshes
    /// the trending strip.
    fn record_search(&self, term: String, movie: Movie) -> Task<Message> {
        let Some(store) = self.store.clone() else {
            return Task::none();
        };
        Task::perform(
            async move {
                store
                    .record_search(&term, &movie)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::SearchRecorded,
        )
    }

    fn load_trending(&self) -> Task<Message> {
        let Some(store) = self.store.clone() else {
            return Task::none();
        };
        Task::perform(
            async move { store.trending().await.map_err(|e| e.to_string()) },
            Message::TrendingLoaded,
        )
    }

    /// Request poster downloads for every movie on the current page.
    fn request_movie_posters(&mut self) -> Task<Message> {
        let items: Vec<(u64, Option<String>)> = self
            .discover
            .movies()
            .iter()
            .map(|m| (m.id, m.poster_url()))
            .collect();
        self.batch_request_posters(items)
    }

    /// Request poster downloads for the trending strip.
    fn request_trending_posters(&mut self) -> Task<Message> {
        let items: Vec<(u64, Option<String>)> = self
            .trending
            .iter()
            .map(|t| (t.movie_id, t.poster_url.clone()))
            .collect();
        self.batch_request_posters(items)
    }

    /// Batch-request poster downloads for a set of (movie_id, url) pairs.
    fn batch_request_posters(&mut self, items: Vec<(u64, Option<String>)>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = items
            .into_iter()
            .map(|(id, url)| self.request_poster(id, url.as_deref()))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request a poster image download for a movie if not already requested.
    fn request_poster(&mut self, movie_id: u64, poster_url: Option<&str>) -> Task<Message> {
        let Some(url) = poster_url else {
            // No poster path on the movie; mark as failed so the
            // placeholder renders.
            self.posters
                .states
                .entry(movie_id)
                .or_insert(PosterState::Failed);
            return Task::none();
        };
        if self.posters.states.contains_key(&movie_id) {
            return Task::none();
        }
        // A file already on disk skips the download entirely.
        let path = poster_cache::poster_path(movie_id);
        if path.exists() {
            self.posters
                .states
                .insert(movie_id, PosterState::Loaded(path));
            return Task::none();
        }
        self.posters.states.insert(movie_id, PosterState::Loading);
        let url = url.to_string();
        Task::perform(
            async move { poster_cache::fetch_poster(movie_id, url).await },
            move |result| Message::PosterLoaded { movie_id, result },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.discover
            .view(&self.colors, &self.posters, &self.trending)
            .map(Message::Discover)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::events()
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.colors)
    }
}
