//! Widget style closures, one per visual role.
//!
//! Every function captures the tokens it needs from a [`ColorScheme`]
//! and returns a closure for the widget's `.style()` method, so views
//! stay free of color literals.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::style;

use super::ColorScheme;

/// Movie card surface: rounded, borderless, one step above the page.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let fill = cs.surface_container;
    move |_theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: style::RADIUS_LG.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// The pill-shaped search bar wrapping icon, input, and clear button.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let fill = cs.surface_container_low;
    let stroke = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: stroke,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Text input stripped of its own chrome, for use inside [`search_bar`].
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let value = cs.on_surface;
    let placeholder = cs.outline;
    let selection = cs.primary;
    let icon = cs.on_surface_variant;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon,
        placeholder,
        value,
        selection,
    }
}

/// Outlined button for secondary actions (pagination, retry).
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let hover_fill = cs.surface_bright;
    let on_surface = cs.on_surface;
    let resting = cs.on_surface_variant;
    let stroke = cs.outline_variant;

    move |_theme, status| {
        let mut appearance = button::Style {
            background: None,
            text_color: resting,
            border: Border {
                color: stroke,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        };
        match status {
            button::Status::Hovered | button::Status::Pressed => {
                appearance.background = Some(Background::Color(hover_fill));
                appearance.text_color = on_surface;
            }
            button::Status::Disabled => {
                appearance.text_color = Color { a: 0.38, ..resting };
                appearance.border.color = Color { a: 0.38, ..stroke };
            }
            button::Status::Active => {}
        }
        appearance
    }
}

/// Bare icon button: circular hover fill, nothing at rest.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let hover_fill = cs.surface_bright;
    let icon = cs.on_surface_variant;

    move |_theme, status| button::Style {
        background: matches!(status, button::Status::Hovered)
            .then_some(Background::Color(hover_fill)),
        text_color: icon,
        border: Border {
            radius: style::RADIUS_FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Frame behind every poster: keeps its footprint and rounding while
/// the image is loading, and doubles as the missing-poster backdrop.
pub fn poster_frame(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let fill = cs.surface_container_high;
    move |_theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Thin overlay scrollbar: no rail, just a pill scroller that fades in
/// on hover and takes the accent color while dragged.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let thumb = cs.on_surface;
    let accent = cs.primary;

    move |_theme, status| {
        let scroller_fill = match status {
            scrollable::Status::Dragged { .. } => Color { a: 0.8, ..accent },
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            }
            | scrollable::Status::Hovered {
                is_horizontal_scrollbar_hovered: true,
                ..
            } => Color { a: 0.45, ..thumb },
            scrollable::Status::Hovered { .. } => Color { a: 0.22, ..thumb },
            _ => Color { a: 0.12, ..thumb },
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(scroller_fill),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: thumb,
            },
        }
    }
}
