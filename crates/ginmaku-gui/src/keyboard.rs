//! Application-wide keyboard shortcuts.
//!
//! Raw key presses become semantic [`Shortcut`] values here; the app
//! router decides what they mean for the discover screen.

use iced::keyboard::{key::Named, Key, Modifiers};

use crate::app::Message;

/// Shortcuts the whole application responds to.
#[derive(Debug, Clone)]
pub enum Shortcut {
    /// F5: refetch the current page.
    Refresh,
    /// Escape: clear the search input.
    ClearSearch,
}

pub(crate) fn map_shortcut(key: Key, modifiers: Modifiers) -> Option<Message> {
    // Plain keys only; chords belong to the text input and the OS.
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    let shortcut = match key {
        Key::Named(Named::F5) => Shortcut::Refresh,
        Key::Named(Named::Escape) => Shortcut::ClearSearch,
        _ => return None,
    };
    Some(Message::Shortcut(shortcut))
}
