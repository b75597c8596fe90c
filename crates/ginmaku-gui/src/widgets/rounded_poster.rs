use iced::widget::{container, Space};
use iced::{ContentFit, Element, Length};

use crate::poster_cache::{PosterCache, PosterState};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Poster image in a fixed rounded frame.
///
/// The frame keeps its footprint through every [`PosterState`]: a bare
/// fill while the download runs, the image cropped to cover once it
/// lands, and a film glyph when there is no poster to show. `Cover`
/// fit crops overflow instead of letterboxing, so grid rows stay even.
pub fn rounded_poster<'a, Message: 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    movie_id: u64,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match posters.get(movie_id) {
        Some(PosterState::Loaded(path)) => iced::widget::image(path.as_path())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .border_radius(radius)
            .into(),
        Some(PosterState::Loading) => Space::new().into(),
        Some(PosterState::Failed) | None => {
            let glyph = if width < style::POSTER_WIDTH {
                style::TEXT_BASE
            } else {
                style::TEXT_3XL
            };
            lucide_icons::iced::icon_film()
                .size(glyph)
                .color(cs.outline)
                .center()
                .into()
        }
    };

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::poster_frame(cs, radius))
        .into()
}
