pub mod empty_state;
pub mod movie_card;
pub mod rounded_poster;

pub use empty_state::empty_state;
pub use movie_card::movie_card;
pub use rounded_poster::rounded_poster;

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// Wraps content in a vertical scrollable with the overlay scrollbar.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    let bar = scrollable::Scrollbar::new().width(5).scroller_width(3).margin(2);
    scrollable(content)
        .direction(scrollable::Direction::Vertical(bar))
        .style(theme::overlay_scrollbar(cs))
}
