use iced::widget::{column, container, text, Text};
use iced::{Color, Element, Length};

use ginmaku_core::models::Movie;

use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Card width: poster plus the card's own horizontal padding.
pub const CARD_WIDTH: f32 = style::POSTER_WIDTH + 2.0 * style::SPACE_SM;

/// Room for two title lines; the extra pixels keep descenders visible.
const TITLE_HEIGHT: f32 = style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0;

/// A compact movie card for grid display.
///
/// Shows the poster, a title clipped to two lines, the star rating, and
/// a vote count / language / year metadata line.
pub fn movie_card<'a, Message: 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    movie: &Movie,
) -> Element<'a, Message> {
    let poster = widgets::rounded_poster(
        cs,
        posters,
        movie.id,
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    let title = container(
        text(movie.title.clone())
            .size(style::TEXT_SM)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(TITLE_HEIGHT))
    .clip(true);

    let rating = caption(format!("\u{2605} {}", movie.rating_label()), cs.tertiary);
    let details = caption(
        format!(
            "{}  \u{00B7}  {}  \u{00B7}  {}",
            movie.votes_label(),
            movie.language_label(),
            movie.year_label()
        ),
        cs.on_surface_variant,
    );

    let body = column![poster, title, rating, details]
        .spacing(style::SPACE_XS)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .style(theme::card(cs))
        .into()
}

fn caption<'a>(value: String, color: Color) -> Text<'a> {
    text(value).size(style::TEXT_XS).color(color)
}
