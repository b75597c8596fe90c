//! Layout and typography tokens shared across the UI.
//!
//! Views never hardcode pixel values; they pull from these scales so
//! spacing and type stay consistent between screens and widgets.

use iced::font::{Family, Stretch, Style, Weight};
use iced::Font;

// Spacing scale

pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 24.0;
pub const SPACE_3XL: f32 = 48.0;

// Type scale

pub const TEXT_XS: f32 = 12.0;
pub const TEXT_SM: f32 = 14.0;
pub const TEXT_BASE: f32 = 16.0;
pub const TEXT_XL: f32 = 22.0;
pub const TEXT_2XL: f32 = 28.0;
pub const TEXT_3XL: f32 = 36.0;

pub const LINE_HEIGHT_NORMAL: f32 = 1.4;

// Corner radii

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_FULL: f32 = 9999.0;

// Poster dimensions (2:3 aspect)

pub const POSTER_WIDTH: f32 = 130.0;
pub const POSTER_HEIGHT: f32 = 195.0;
pub const THUMB_WIDTH: f32 = 40.0;
pub const THUMB_HEIGHT: f32 = 60.0;

/// Headings and emphasized labels.
pub const FONT_HEADING: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Semibold,
    stretch: Stretch::Normal,
    style: Style::Normal,
};
