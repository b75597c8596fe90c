use iced::widget::{column, container, text, Text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::ColorScheme;

/// Placeholder shown when a screen has nothing to render.
///
/// Takes a bare glyph and applies size and tint here, so every call
/// site gets the same treatment.
pub fn empty_state<'a, Message: 'a>(
    cs: &ColorScheme,
    icon: Text<'a>,
    title: &'a str,
    subtitle: &'a str,
) -> Element<'a, Message> {
    let heading = text(title)
        .size(style::TEXT_XL)
        .font(style::FONT_HEADING)
        .color(cs.on_surface_variant);
    let caption = text(subtitle).size(style::TEXT_SM).color(cs.outline);

    let body = column![
        icon.size(style::TEXT_3XL).color(cs.outline).center(),
        heading,
        caption,
    ]
    .spacing(style::SPACE_MD)
    .align_x(Alignment::Center);

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
