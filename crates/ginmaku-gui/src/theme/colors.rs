//! Semantic color tokens for both appearance modes.
//!
//! Views and style closures take a [`ColorScheme`] and never touch raw
//! colors, so swapping dark for light touches nothing but this file.

use iced::Color;

pub use ginmaku_core::config::ThemeMode;

/// Semantic color roles used by every style closure in the catalog.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces, lowest to highest elevation.
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_container_highest: Color,
    pub surface_bright: Color,

    // Text hierarchy.
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent.
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // Rating accent.
    pub tertiary: Color,

    // Errors.
    pub error: Color,
    pub error_hover: Color,
    pub error_pressed: Color,
    pub on_error: Color,
}

impl ColorScheme {
    /// Deep indigo night scheme, the default appearance.
    pub fn dark() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0x01, 0x00, 0x0C),
            surface: Color::from_rgb8(0x03, 0x00, 0x14),
            surface_container_low: Color::from_rgb8(0x0A, 0x07, 0x22),
            surface_container: Color::from_rgb8(0x0F, 0x0D, 0x23),
            surface_container_high: Color::from_rgb8(0x1A, 0x16, 0x35),
            surface_container_highest: Color::from_rgb8(0x25, 0x20, 0x45),
            surface_bright: Color::from_rgb8(0x2E, 0x28, 0x57),

            on_surface: Color::from_rgb8(0xEC, 0xE9, 0xFF),
            on_surface_variant: Color::from_rgb8(0xCE, 0xCE, 0xFB),
            outline: Color::from_rgb8(0xA8, 0xB5, 0xDB),
            outline_variant: Color::from_rgb8(0x2A, 0x25, 0x50),

            primary: Color::from_rgb8(0xAB, 0x8B, 0xFF),
            primary_hover: Color::from_rgb8(0xBC, 0xA2, 0xFF),
            primary_dim: Color::from_rgb8(0x8F, 0x6B, 0xE8),
            on_primary: Color::from_rgb8(0x1E, 0x10, 0x38),
            primary_container: Color::from_rgb8(0x33, 0x2A, 0x5E),
            on_primary_container: Color::from_rgb8(0xD6, 0xC7, 0xFF),

            tertiary: Color::from_rgb8(0xF2, 0xC9, 0x4C),

            error: Color::from_rgb8(0xFF, 0x6B, 0x7A),
            error_hover: Color::from_rgb8(0xFF, 0x85, 0x91),
            error_pressed: Color::from_rgb8(0xE5, 0x50, 0x5F),
            on_error: Color::from_rgb8(0x2B, 0x06, 0x0B),
        }
    }

    /// Light counterpart with the same accent hue.
    pub fn light() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface: Color::from_rgb8(0xF7, 0xF6, 0xFC),
            surface_container_low: Color::from_rgb8(0xF0, 0xEE, 0xF9),
            surface_container: Color::from_rgb8(0xE9, 0xE6, 0xF6),
            surface_container_high: Color::from_rgb8(0xE0, 0xDC, 0xF1),
            surface_container_highest: Color::from_rgb8(0xD6, 0xD1, 0xEB),
            surface_bright: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            on_surface: Color::from_rgb8(0x19, 0x14, 0x33),
            on_surface_variant: Color::from_rgb8(0x3F, 0x38, 0x68),
            outline: Color::from_rgb8(0x6F, 0x6A, 0x92),
            outline_variant: Color::from_rgb8(0xCB, 0xC6, 0xE2),

            primary: Color::from_rgb8(0x6B, 0x4F, 0xD8),
            primary_hover: Color::from_rgb8(0x5A, 0x3F, 0xC4),
            primary_dim: Color::from_rgb8(0x4A, 0x32, 0xA8),
            on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            primary_container: Color::from_rgb8(0xE5, 0xDE, 0xFF),
            on_primary_container: Color::from_rgb8(0x2A, 0x17, 0x68),

            tertiary: Color::from_rgb8(0xA0, 0x74, 0x00),

            error: Color::from_rgb8(0xBA, 0x1A, 0x1A),
            error_hover: Color::from_rgb8(0xA3, 0x15, 0x15),
            error_pressed: Color::from_rgb8(0x8C, 0x11, 0x11),
            on_error: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        }
    }

    /// Scheme for an already resolved mode. `System` is expected to go
    /// through [`crate::theme::resolve_mode`] first and falls back to dark.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            _ => Self::dark(),
        }
    }
}
