//! Runtime event subscription.
//!
//! A single listener turns raw runtime events into app messages:
//! keyboard shortcuts and window geometry changes.

use iced::window;
use iced::Subscription;

use crate::app::Message;
use crate::keyboard;

pub fn events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            keyboard::map_shortcut(key, modifiers)
        }
        iced::Event::Window(event @ (window::Event::Moved(_) | window::Event::Resized(_))) => {
            Some(Message::WindowEvent(event))
        }
        _ => None,
    })
}
