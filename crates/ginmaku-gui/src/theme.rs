//! Application theming: color schemes and widget style catalog.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::theme::Palette;
use iced::Theme;

/// Collapse `ThemeMode::System` into a concrete appearance.
///
/// Detection failures fall back to dark, the app's native look.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    if mode != ThemeMode::System {
        return mode;
    }
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

/// Build the iced [`Theme`] backing built-in widget defaults.
///
/// Most widgets get explicit styles from the catalog; this palette covers
/// the few that fall through to theme defaults.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    let palette = Palette {
        background: cs.surface,
        text: cs.on_surface,
        primary: cs.primary,
        success: cs.primary,
        warning: cs.tertiary,
        danger: cs.error,
    };
    Theme::custom("Ginmaku", palette)
}
