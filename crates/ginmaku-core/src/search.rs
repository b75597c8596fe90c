//! Search, pagination, and trending orchestration.
//!
//! `SearchFlow` is a pure state machine: the GUI feeds it [`Event`]s and
//! executes the returned [`Effect`]s (timers, network calls). Keeping the
//! rules here, away from any runtime, is what makes the debounce and
//! stale-response behavior unit-testable.

use tracing::{debug, warn};

use crate::models::{Movie, MoviePage};

/// Fixed user-facing message for any catalog fetch failure. Diagnostic
/// detail goes to the log, never to the UI.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching movies. Please try again later.";

/// Drives the mutually exclusive display of spinner, error, and list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// External stimulus applied to the flow.
#[derive(Debug, Clone)]
pub enum Event {
    /// The raw search text changed (one event per keystroke).
    TermEdited(String),
    /// A debounce timer fired. Stale generations are ignored.
    DebounceElapsed(u64),
    /// The user asked for a specific result page.
    PageRequested(u32),
    /// Re-fetch the current term and page.
    Refresh,
    /// A catalog fetch settled. Stale sequence numbers are ignored.
    PageFetched {
        seq: u64,
        outcome: Result<MoviePage, String>,
    },
}

/// A catalog request the GUI should issue.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub term: String,
    pub page: u32,
    pub seq: u64,
}

/// What the caller must do after applying an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start a debounce timer carrying this generation.
    ScheduleDebounce { generation: u64 },
    /// Issue a catalog fetch.
    Fetch(FetchRequest),
    /// Record a successful search in the trending store (fire and forget).
    RecordSearch { term: String, movie: Movie },
}

/// State for the single search screen.
///
/// Two counters close the races the naive flow has: `debounce_generation`
/// collapses rapid keystrokes into one committed term, and `fetch_seq`
/// tags every outgoing request so a response that was superseded while in
/// flight is discarded instead of overwriting newer results.
#[derive(Debug)]
pub struct SearchFlow {
    raw_term: String,
    committed_term: String,
    debounce_generation: u64,
    fetch_seq: u64,
    page: u32,
    total_pages: u32,
    load: LoadState,
    movies: Vec<Movie>,
}

impl Default for SearchFlow {
    fn default() -> Self {
        Self {
            raw_term: String::new(),
            committed_term: String::new(),
            debounce_generation: 0,
            fetch_seq: 0,
            page: 1,
            total_pages: 1,
            load: LoadState::Idle,
            movies: Vec::new(),
        }
    }
}

impl SearchFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_term(&self) -> &str {
        &self.raw_term
    }

    pub fn committed_term(&self) -> &str {
        &self.committed_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Kick off the initial fetch (empty term, page 1). Called once when
    /// the screen mounts.
    pub fn start(&mut self) -> Effect {
        self.load = LoadState::Loading;
        Effect::Fetch(self.issue_fetch(String::new(), 1))
    }

    /// Apply one event and return the effect the caller must run.
    pub fn apply(&mut self, event: Event) -> Effect {
        match event {
            Event::TermEdited(text) => {
                self.raw_term = text;
                self.debounce_generation += 1;
                Effect::ScheduleDebounce {
                    generation: self.debounce_generation,
                }
            }
            Event::DebounceElapsed(generation) => {
                if generation != self.debounce_generation {
                    // A newer keystroke superseded this timer.
                    return Effect::None;
                }
                if self.raw_term == self.committed_term {
                    return Effect::None;
                }
                self.committed_term = self.raw_term.clone();
                debug!(term = %self.committed_term, "Committing debounced search term");
                self.load = LoadState::Loading;
                let term = self.committed_term.clone();
                Effect::Fetch(self.issue_fetch(term, 1))
            }
            Event::PageRequested(page) => {
                if page < 1 || page > self.total_pages || page == self.page {
                    return Effect::None;
                }
                self.load = LoadState::Loading;
                let term = self.committed_term.clone();
                Effect::Fetch(self.issue_fetch(term, page))
            }
            Event::Refresh => {
                self.load = LoadState::Loading;
                let term = self.committed_term.clone();
                let page = self.page;
                Effect::Fetch(self.issue_fetch(term, page))
            }
            Event::PageFetched { seq, outcome } => {
                if seq != self.fetch_seq {
                    debug!(seq, latest = self.fetch_seq, "Discarding stale fetch response");
                    return Effect::None;
                }
                match outcome {
                    Ok(result) => {
                        self.total_pages = result.total_pages.max(1);
                        // The page count can shrink between request and
                        // response; keep the invariant page <= total_pages.
                        self.page = result.page.min(self.total_pages);
                        self.movies = result.movies;
                        self.load = LoadState::Loaded;

                        match (self.committed_term.trim().is_empty(), self.movies.first()) {
                            (false, Some(first)) => Effect::RecordSearch {
                                term: self.committed_term.clone(),
                                movie: first.clone(),
                            },
                            _ => Effect::None,
                        }
                    }
                    Err(detail) => {
                        warn!(error = %detail, "Catalog fetch failed");
                        self.load = LoadState::Failed(FETCH_ERROR_MESSAGE.to_string());
                        Effect::None
                    }
                }
            }
        }
    }

    fn issue_fetch(&mut self, term: String, page: u32) -> FetchRequest {
        self.fetch_seq += 1;
        self.page = page;
        FetchRequest {
            term,
            page,
            seq: self.fetch_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            release_date: Some("2020-01-01".into()),
            vote_average: Some(7.5),
            vote_count: Some(100),
            poster_path: Some(format!("/poster-{id}.jpg")),
            original_language: Some("en".into()),
        }
    }

    fn page(movies: Vec<Movie>, page: u32, total_pages: u32) -> MoviePage {
        MoviePage {
            movies,
            page,
            total_pages,
        }
    }

    /// Drive a flow to a loaded search for `term`, returning the final effect.
    fn loaded_search(flow: &mut SearchFlow, term: &str, result: MoviePage) -> Effect {
        flow.apply(Event::TermEdited(term.into()));
        let gen = match flow.apply(Event::TermEdited(term.into())) {
            Effect::ScheduleDebounce { generation } => generation,
            other => panic!("Expected ScheduleDebounce, got {other:?}"),
        };
        let seq = match flow.apply(Event::DebounceElapsed(gen)) {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };
        flow.apply(Event::PageFetched {
            seq,
            outcome: Ok(result),
        })
    }

    #[test]
    fn test_start_fetches_discover_page_one() {
        let mut flow = SearchFlow::new();
        match flow.start() {
            Effect::Fetch(req) => {
                assert_eq!(req.term, "");
                assert_eq!(req.page, 1);
                assert_eq!(req.seq, 1);
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
        assert_eq!(*flow.load(), LoadState::Loading);
    }

    #[test]
    fn test_rapid_edits_collapse_to_one_fetch() {
        let mut flow = SearchFlow::new();
        flow.apply(Event::TermEdited("b".into()));
        flow.apply(Event::TermEdited("ba".into()));
        let last = flow.apply(Event::TermEdited("bat".into()));
        let generation = match last {
            Effect::ScheduleDebounce { generation } => generation,
            other => panic!("Expected ScheduleDebounce, got {other:?}"),
        };
        assert_eq!(generation, 3);

        // Superseded timers fire harmlessly.
        assert_eq!(flow.apply(Event::DebounceElapsed(1)), Effect::None);
        assert_eq!(flow.apply(Event::DebounceElapsed(2)), Effect::None);
        assert_eq!(*flow.load(), LoadState::Idle);

        // Only the final value reaches the network, at page 1.
        match flow.apply(Event::DebounceElapsed(3)) {
            Effect::Fetch(req) => {
                assert_eq!(req.term, "bat");
                assert_eq!(req.page, 1);
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
        assert_eq!(*flow.load(), LoadState::Loading);
    }

    #[test]
    fn test_unchanged_term_does_not_refetch() {
        let mut flow = SearchFlow::new();
        flow.apply(Event::TermEdited("bat".into()));
        match flow.apply(Event::DebounceElapsed(1)) {
            Effect::Fetch(_) => {}
            other => panic!("Expected Fetch, got {other:?}"),
        }

        // Type something, then restore the committed value before the
        // timer fires: no new fetch.
        flow.apply(Event::TermEdited("batm".into()));
        flow.apply(Event::TermEdited("bat".into()));
        assert_eq!(flow.apply(Event::DebounceElapsed(3)), Effect::None);
    }

    #[test]
    fn test_successful_search_records_trending() {
        let mut flow = SearchFlow::new();
        let effect = loaded_search(&mut flow, "batman", page(vec![movie(1)], 1, 3));

        match effect {
            Effect::RecordSearch { term, movie } => {
                assert_eq!(term, "batman");
                assert_eq!(movie.id, 1);
            }
            other => panic!("Expected RecordSearch, got {other:?}"),
        }
        assert_eq!(*flow.load(), LoadState::Loaded);
        assert_eq!(flow.page(), 1);
        assert_eq!(flow.total_pages(), 3);
        assert!(flow.has_next_page());
        assert!(!flow.has_prev_page());
    }

    #[test]
    fn test_empty_term_never_records() {
        let mut flow = SearchFlow::new();
        let seq = match flow.start() {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };
        let effect = flow.apply(Event::PageFetched {
            seq,
            outcome: Ok(page(vec![movie(1), movie(2)], 1, 10)),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(*flow.load(), LoadState::Loaded);
    }

    #[test]
    fn test_whitespace_term_never_records() {
        let mut flow = SearchFlow::new();
        let effect = loaded_search(&mut flow, "   ", page(vec![movie(1)], 1, 1));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_empty_results_never_record() {
        let mut flow = SearchFlow::new();
        let effect = loaded_search(&mut flow, "zzzzzz", page(vec![], 1, 1));
        assert_eq!(effect, Effect::None);
        assert_eq!(*flow.load(), LoadState::Loaded);
        assert!(flow.movies().is_empty());
    }

    #[test]
    fn test_fetch_failure_shows_fixed_message() {
        let mut flow = SearchFlow::new();
        loaded_search(&mut flow, "batman", page(vec![movie(1)], 1, 3));

        let seq = match flow.apply(Event::Refresh) {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };
        let effect = flow.apply(Event::PageFetched {
            seq,
            outcome: Err("HTTP 500: internal error".into()),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(
            *flow.load(),
            LoadState::Failed(FETCH_ERROR_MESSAGE.to_string())
        );
        // Previous results stay in memory but the Failed state hides them.
        assert_eq!(flow.movies().len(), 1);
    }

    #[test]
    fn test_page_navigation_reuses_committed_term() {
        let mut flow = SearchFlow::new();
        loaded_search(&mut flow, "batman", page(vec![movie(1)], 1, 3));

        match flow.apply(Event::PageRequested(2)) {
            Effect::Fetch(req) => {
                assert_eq!(req.term, "batman");
                assert_eq!(req.page, 2);
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
        assert_eq!(*flow.load(), LoadState::Loading);
    }

    #[test]
    fn test_out_of_range_page_is_noop() {
        let mut flow = SearchFlow::new();
        loaded_search(&mut flow, "batman", page(vec![movie(1)], 1, 3));

        assert_eq!(flow.apply(Event::PageRequested(4)), Effect::None);
        assert_eq!(flow.apply(Event::PageRequested(0)), Effect::None);
        // Re-requesting the current page is also a no-op.
        assert_eq!(flow.apply(Event::PageRequested(1)), Effect::None);

        assert_eq!(flow.page(), 1);
        assert_eq!(*flow.load(), LoadState::Loaded);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut flow = SearchFlow::new();
        loaded_search(&mut flow, "batman", page(vec![movie(1)], 1, 5));

        let first = match flow.apply(Event::PageRequested(2)) {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };
        let second = match flow.apply(Event::PageRequested(3)) {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };

        // The older response arrives late and must not apply.
        let effect = flow.apply(Event::PageFetched {
            seq: first,
            outcome: Ok(page(vec![movie(7)], 2, 5)),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(*flow.load(), LoadState::Loading);

        // The newer one lands normally.
        flow.apply(Event::PageFetched {
            seq: second,
            outcome: Ok(page(vec![movie(8)], 3, 5)),
        });
        assert_eq!(flow.page(), 3);
        assert_eq!(flow.movies()[0].id, 8);
    }

    #[test]
    fn test_shrunken_page_count_clamps_current_page() {
        let mut flow = SearchFlow::new();
        loaded_search(&mut flow, "batman", page(vec![movie(1)], 1, 5));

        let seq = match flow.apply(Event::PageRequested(5)) {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };
        // The service now reports only 2 pages.
        flow.apply(Event::PageFetched {
            seq,
            outcome: Ok(page(vec![movie(9)], 5, 2)),
        });
        assert_eq!(flow.total_pages(), 2);
        assert_eq!(flow.page(), 2);
    }

    #[test]
    fn test_zero_total_pages_floors_at_one() {
        let mut flow = SearchFlow::new();
        let seq = match flow.start() {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };
        flow.apply(Event::PageFetched {
            seq,
            outcome: Ok(page(vec![], 1, 0)),
        });
        assert_eq!(flow.total_pages(), 1);
        assert_eq!(flow.page(), 1);
    }

    #[test]
    fn test_refresh_keeps_term_and_page() {
        let mut flow = SearchFlow::new();
        loaded_search(&mut flow, "batman", page(vec![movie(1)], 1, 3));
        let seq = match flow.apply(Event::PageRequested(2)) {
            Effect::Fetch(req) => req.seq,
            other => panic!("Expected Fetch, got {other:?}"),
        };
        flow.apply(Event::PageFetched {
            seq,
            outcome: Ok(page(vec![movie(2)], 2, 3)),
        });

        match flow.apply(Event::Refresh) {
            Effect::Fetch(req) => {
                assert_eq!(req.term, "batman");
                assert_eq!(req.page, 2);
                assert_eq!(req.seq, seq + 1);
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
    }
}
