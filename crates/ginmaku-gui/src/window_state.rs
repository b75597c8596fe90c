//! Window geometry persistence.
//!
//! A small JSON file in the platform data directory remembers the last
//! window size and position, so the app reopens where it was left.

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "window.json";

const DEFAULT_SIZE: Size = Size::new(1100.0, 720.0);
const MIN_SIZE: Size = Size::new(480.0, 360.0);

/// Persisted window geometry. Both fields are unset on first launch;
/// `position` stays unset until the user moves the window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    size: Option<(f32, f32)>,
    position: Option<(f32, f32)>,
}

impl WindowState {
    /// Window size to open with, clamped so a hand-edited or corrupt
    /// file cannot produce an unusably small window.
    pub fn size(&self) -> Size {
        match self.size {
            Some((w, h)) => Size::new(w.max(MIN_SIZE.width), h.max(MIN_SIZE.height)),
            None => DEFAULT_SIZE,
        }
    }

    /// Last saved window position, if any.
    pub fn position(&self) -> Option<Point> {
        self.position.map(|(x, y)| Point::new(x, y))
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = Some((size.width, size.height));
        self.save();
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = Some((position.x, position.y));
        self.save();
    }

    /// Load from disk; a missing or unreadable file yields the defaults.
    pub fn load() -> Self {
        state_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Write to disk. Errors are logged and dropped.
    fn save(&self) {
        let Some(path) = state_path() else { return };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize window state: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&path, json) {
            tracing::warn!("Failed to save window state: {e}");
        }
    }
}

fn state_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "ginmaku").map(|dirs| dirs.data_dir().join(FILE_NAME))
}
