pub mod discover;

use ginmaku_core::models::Movie;
use ginmaku_core::search::FetchRequest;

/// Side effects a screen asks the app router to perform.
///
/// Screens return these from `update()` instead of holding clients or
/// timers themselves; the app interprets them in one place.
pub enum Action {
    /// Nothing to do.
    None,
    /// Start a debounce timer carrying this keystroke generation.
    ScheduleDebounce { generation: u64 },
    /// Issue a catalog fetch.
    Fetch(FetchRequest),
    /// Count a successful search in the trending store.
    RecordSearch { term: String, movie: Movie },
}
