//! Application state for the UI thread.
//!
//! `App` owns the [`FeedState`], the list selection, and the sender half of
//! the fetch-request channel.  The infinite-scroll behavior lives in
//! [`App::maybe_load_more`]: every selection change re-runs the check, so a
//! failed load-more is retried implicitly the next time the user scrolls.

use std::sync::mpsc;

use ratatui::widgets::ListState;

use crate::fetch::{FetchMsg, FetchRequest};
use crate::feed::{FeedEvent, FeedState};

/// How close to the end of the list the selection must be before the next
/// page is requested.
const SCROLL_THRESHOLD: usize = 3;

pub struct App {
    /// Loaded headlines plus paging metadata.
    pub feed: FeedState,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Category shown in the feed title (e.g. "general").
    pub category: String,
    /// Progress bar value (0–100) for the initial load checkpoints.
    pub progress: u16,
    /// True while an initial/refresh load is in flight; drives the
    /// full-screen spinner instead of the card list.
    pub initial_in_flight: bool,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Bottom status line.
    pub status: String,
    /// Sender half of the fetch-request channel.
    requests: mpsc::Sender<FetchRequest>,
}

impl App {
    pub fn new(category: String, requests: mpsc::Sender<FetchRequest>) -> Self {
        Self {
            feed: FeedState::new(),
            list_state: ListState::default(),
            category,
            progress: 0,
            initial_in_flight: false,
            quit: false,
            status: "Starting…".into(),
            requests,
        }
    }

    /// Issue the page-1 fetch that (re)builds the whole feed.
    ///
    /// Used both on startup and for the `r` refresh binding; the response
    /// replaces the loaded sequence rather than merging into it.
    pub fn start_initial_load(&mut self) {
        self.feed.apply(FeedEvent::FetchStarted { initial: true });
        self.initial_in_flight = true;
        self.progress = 0;
        self.status = "Loading…".into();
        let _ = self.requests.send(FetchRequest { page: 1, initial: true });
    }

    /// Request the next page if the scroll position warrants it.
    ///
    /// Fires only when no fetch is in flight, the provider claims more data,
    /// and the selection is within [`SCROLL_THRESHOLD`] rows of the end.
    pub fn maybe_load_more(&mut self) {
        if self.feed.loading || !self.feed.has_more() {
            return;
        }
        let Some(selected) = self.list_state.selected() else {
            return;
        };
        if selected + SCROLL_THRESHOLD < self.feed.articles.len() {
            return;
        }

        self.feed.apply(FeedEvent::FetchStarted { initial: false });
        let _ = self.requests.send(FetchRequest {
            page: self.feed.next_page(),
            initial: false,
        });
    }

    /// Fold one worker message into the feed state.
    pub fn handle_msg(&mut self, msg: FetchMsg) {
        match msg {
            FetchMsg::Progress(pct) => {
                self.progress = pct;
            }
            FetchMsg::Loaded { page, data, initial } => {
                self.feed.apply(FeedEvent::PageLoaded {
                    page,
                    articles: data.articles,
                    total_results: data.total_results,
                    initial,
                });
                if initial {
                    self.initial_in_flight = false;
                    self.list_state.select(if self.feed.articles.is_empty() {
                        None
                    } else {
                        Some(0)
                    });
                }
                self.status = format!(
                    "{} of {} headlines",
                    self.feed.articles.len(),
                    self.feed.total_results
                );
            }
            FetchMsg::Failed { initial } => {
                self.feed.apply(FeedEvent::FetchFailed { initial });
                if initial {
                    self.initial_in_flight = false;
                    self.list_state.select(None);
                    self.status = "0 of 0 headlines".into();
                }
                // A failed load-more keeps its status line; the next scroll
                // re-requests the same page.
            }
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.feed.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.feed.articles.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.maybe_load_more();
    }

    pub fn select_previous(&mut self) {
        if self.feed.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.feed.articles.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.feed.articles.is_empty() {
            self.list_state.select(Some(self.feed.articles.len() - 1));
            self.maybe_load_more();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
