use iced::widget::{button, column, container, row, rule, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use ginmaku_core::models::{Movie, MoviePage, TrendingEntry};
use ginmaku_core::search::{Effect, Event, LoadState, SearchFlow};

use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

// ── State ─────────────────────────────────────────────────────────

/// Discover screen state.
///
/// All search and pagination rules live in [`SearchFlow`]; this type
/// translates UI messages into flow events and renders the result.
pub struct Discover {
    flow: SearchFlow,
}

// ── Messages ──────────────────────────────────────────────────────

/// Messages handled by the Discover screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ClearSearch,
    DebounceFired(u64),
    PrevPage,
    NextPage,
    Refresh,
    Fetched {
        seq: u64,
        outcome: Result<MoviePage, String>,
    },
}

// ── Implementation ────────────────────────────────────────────────

impl Discover {
    pub fn new() -> Self {
        Self {
            flow: SearchFlow::new(),
        }
    }

    /// Movies on the currently displayed page.
    pub fn movies(&self) -> &[Movie] {
        self.flow.movies()
    }

    /// Issue the initial popularity-sorted fetch. Called once at startup.
    pub fn start(&mut self) -> Action {
        effect_to_action(self.flow.start())
    }

    pub fn update(&mut self, message: Message) -> Action {
        let event = match message {
            Message::SearchChanged(term) => Event::TermEdited(term),
            Message::ClearSearch => Event::TermEdited(String::new()),
            Message::DebounceFired(generation) => Event::DebounceElapsed(generation),
            Message::PrevPage => Event::PageRequested(self.flow.page().saturating_sub(1)),
            Message::NextPage => Event::PageRequested(self.flow.page() + 1),
            Message::Refresh => Event::Refresh,
            Message::Fetched { seq, outcome } => Event::PageFetched { seq, outcome },
        };
        effect_to_action(self.flow.apply(event))
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        trending: &'a [TrendingEntry],
    ) -> Element<'a, Message> {
        let mut content = column![self.search_header(cs), rule::horizontal(1)]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill);

        if !trending.is_empty() {
            content = content.push(trending_strip(cs, posters, trending));
        }

        content = content.push(self.results_heading(cs));
        content = content.push(self.results_body(cs, posters));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn search_header(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let term = self.flow.raw_term();

        let glyph = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let field = text_input("Search through thousands of movies...", term)
            .on_input(Message::SearchChanged)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let clear = (!term.is_empty()).then(|| clear_button(cs));

        let bar = container(
            row![glyph, field]
                .push(clear)
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
        )
        .style(theme::search_bar(cs))
        .padding([style::SPACE_SM, style::SPACE_MD])
        .width(Length::Fill);

        container(bar)
            .padding([style::SPACE_SM, style::SPACE_LG])
            .into()
    }

    fn results_heading(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let committed = self.flow.committed_term().trim();
        let label = if committed.is_empty() {
            "All Movies".to_string()
        } else {
            format!("Results for \"{committed}\"")
        };

        let heading = text(label)
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .color(cs.on_surface);

        container(heading)
            .padding([style::SPACE_SM, style::SPACE_LG])
            .into()
    }

    /// Exactly one of spinner, error, empty state, or grid is shown,
    /// driven by the flow's load state.
    fn results_body<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
    ) -> Element<'a, Message> {
        match self.flow.load() {
            LoadState::Idle | LoadState::Loading => notice(
                text("Loading...")
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant),
            ),
            LoadState::Failed(message) => {
                let retry = button(text("Retry").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::Refresh)
                    .style(theme::ghost_button(cs));

                notice(
                    column![
                        text(message.as_str()).size(style::TEXT_SM).color(cs.error),
                        retry,
                    ]
                    .spacing(style::SPACE_MD)
                    .align_x(Alignment::Center),
                )
            }
            LoadState::Loaded if self.flow.movies().is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film(),
                "No movies found",
                "Try a different search term.",
            ),
            LoadState::Loaded => self.movie_grid(cs, posters),
        }
    }

    fn movie_grid<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
    ) -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = self
            .flow
            .movies()
            .iter()
            .map(|movie| widgets::movie_card(cs, posters, movie))
            .collect();

        let wrap = iced_aw::Wrap::with_elements(cards)
            .spacing(style::SPACE_MD)
            .line_spacing(style::SPACE_MD);

        let grid = widgets::styled_scrollable(
            container(wrap).padding([style::SPACE_SM, style::SPACE_LG]),
            cs,
        )
        .height(Length::Fill);

        column![grid, self.pagination(cs)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn pagination(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let flow = &self.flow;

        let prev = button(
            lucide_icons::iced::icon_chevron_left()
                .size(style::TEXT_BASE)
                .center(),
        )
        .padding([style::SPACE_XS, style::SPACE_MD])
        .style(theme::ghost_button(cs))
        .on_press_maybe(flow.has_prev_page().then_some(Message::PrevPage));

        let next = button(
            lucide_icons::iced::icon_chevron_right()
                .size(style::TEXT_BASE)
                .center(),
        )
        .padding([style::SPACE_XS, style::SPACE_MD])
        .style(theme::ghost_button(cs))
        .on_press_maybe(flow.has_next_page().then_some(Message::NextPage));

        let label = text(format!("Page {} of {}", flow.page(), flow.total_pages()))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant);

        container(
            row![prev, label, next]
                .spacing(style::SPACE_LG)
                .align_y(Alignment::Center),
        )
        .padding([style::SPACE_SM, style::SPACE_LG])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
    }
}

fn effect_to_action(effect: Effect) -> Action {
    match effect {
        Effect::None => Action::None,
        Effect::ScheduleDebounce { generation } => Action::ScheduleDebounce { generation },
        Effect::Fetch(request) => Action::Fetch(request),
        Effect::RecordSearch { term, movie } => Action::RecordSearch { term, movie },
    }
}

/// Square icon button sized to sit flush inside the search bar.
fn clear_button<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    let side = style::TEXT_SM + style::SPACE_XS * 2.0;
    let glyph = lucide_icons::iced::icon_x()
        .size(style::TEXT_SM)
        .color(cs.on_surface_variant);

    button(
        container(glyph)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::ClearSearch)
    .padding(0)
    .width(Length::Fixed(side))
    .height(Length::Fixed(side))
    .style(theme::icon_button(cs))
    .into()
}

/// Center a short status block in the results area.
fn notice<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(style::SPACE_3XL)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Horizontal strip of the most-searched terms, ranked.
fn trending_strip<'a>(
    cs: &'a ColorScheme,
    posters: &'a PosterCache,
    trending: &'a [TrendingEntry],
) -> Element<'a, Message> {
    let items = trending
        .iter()
        .enumerate()
        .map(|(index, entry)| trending_item(cs, posters, index + 1, entry));

    let bar = scrollable::Scrollbar::new().width(4).scroller_width(3).margin(2);
    let strip = scrollable(
        row(items)
            .spacing(style::SPACE_XL)
            .align_y(Alignment::Center),
    )
    .direction(scrollable::Direction::Horizontal(bar))
    .style(theme::overlay_scrollbar(cs));

    let heading = text("Trending Searches")
        .size(style::TEXT_XL)
        .font(style::FONT_HEADING)
        .color(cs.on_surface);

    container(column![heading, strip].spacing(style::SPACE_MD))
        .padding([style::SPACE_SM, style::SPACE_LG])
        .width(Length::Fill)
        .into()
}

/// One ranked entry: rank numeral, poster thumb, then the term itself.
fn trending_item<'a>(
    cs: &'a ColorScheme,
    posters: &'a PosterCache,
    rank: usize,
    entry: &'a TrendingEntry,
) -> Element<'a, Message> {
    row![
        text(rank.to_string())
            .size(style::TEXT_2XL)
            .font(style::FONT_HEADING)
            .color(cs.primary_dim),
        widgets::rounded_poster(
            cs,
            posters,
            entry.movie_id,
            style::THUMB_WIDTH,
            style::THUMB_HEIGHT,
            style::RADIUS_SM,
        ),
        text(entry.term.as_str())
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center)
    .into()
}
