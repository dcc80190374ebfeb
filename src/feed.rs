//! Feed state and its transition function.
//!
//! All pagination bookkeeping lives here as a pure state machine: the UI
//! thread feeds [`FeedEvent`]s into [`FeedState::apply`] and nothing else
//! mutates the feed.  This keeps the loader semantics unit-testable without
//! a terminal or a network.
//!
//! The lifecycle is deliberately small: `idle → loading → (loaded |
//! empty-on-error)` for the initial fetch, and `loaded → loading → loaded`
//! for every load-more, which never re-enters a full reset.

use crate::source::Headline;

/// The feed's in-memory view of loaded headlines plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    /// Loaded articles in arrival order, append-only across pages.
    ///
    /// Not de-duplicated: overlapping upstream pages may repeat a URL, and
    /// that upstream artifact is displayed as-is.
    pub articles: Vec<Headline>,

    /// Last successfully fetched page number; starts at 1.
    pub page: u32,

    /// The provider's self-reported total, as of the last successful fetch.
    pub total_results: u64,

    /// True while a fetch is in flight.
    pub loading: bool,
}

/// A state-changing moment in the feed's life.
///
/// `initial` distinguishes an initial (or refresh) load, which replaces the
/// feed, from a load-more, which appends to it.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// A fetch was issued.
    FetchStarted {
        /// True for an initial/refresh load, which resets the page counter
        /// at issue time; false for a load-more.
        initial: bool,
    },

    /// A page arrived and parsed successfully.
    PageLoaded {
        /// The page number that was requested.
        page: u32,
        /// The articles on that page.
        articles: Vec<Headline>,
        /// The provider's reported total at the time of this response.
        total_results: u64,
        /// True for an initial/refresh load, false for a load-more.
        initial: bool,
    },

    /// A fetch failed — transport error or malformed response.
    FetchFailed {
        /// True for an initial/refresh load, false for a load-more.
        initial: bool,
    },
}

impl FeedState {
    /// An empty feed for a freshly mounted configuration.
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            page: 1,
            total_results: 0,
            loading: false,
        }
    }

    /// Whether the provider claims more data beyond what is loaded.
    ///
    /// The provider's total is trusted as-is; no independent counting or
    /// cursor is kept.
    pub fn has_more(&self) -> bool {
        (self.articles.len() as u64) < self.total_results
    }

    /// The page a load-more should request next.
    pub fn next_page(&self) -> u32 {
        self.page + 1
    }

    /// Advance the feed by one event.
    pub fn apply(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::FetchStarted { initial } => {
                if initial {
                    self.page = 1;
                }
                self.loading = true;
            }
            FeedEvent::PageLoaded {
                page,
                articles,
                total_results,
                initial: true,
            } => {
                // Full replacement, never a merge.
                self.articles = articles;
                self.total_results = total_results;
                self.page = page;
                self.loading = false;
            }
            FeedEvent::PageLoaded {
                page,
                articles,
                total_results,
                initial: false,
            } => {
                self.articles.extend(articles);
                self.total_results = total_results;
                self.page = page;
                self.loading = false;
            }
            FeedEvent::FetchFailed { initial: true } => {
                // Degrade to an empty feed; no error escapes to the caller.
                self.articles.clear();
                self.total_results = 0;
                self.loading = false;
            }
            FeedEvent::FetchFailed { initial: false } => {
                // Page and articles stay untouched so the next scroll
                // trigger re-requests the same page.
                self.loading = false;
            }
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_articles(count: usize, tag: &str) -> Vec<Headline> {
        (0..count)
            .map(|i| Headline {
                title: format!("{tag}-{i}"),
                description: String::new(),
                image_url: None,
                url: Some(format!("https://example.com/{tag}/{i}")),
                author: "Unknown".to_string(),
                published_at: None,
                source_name: "test".to_string(),
            })
            .collect()
    }

    fn loaded_state(count: usize, total: u64) -> FeedState {
        let mut state = FeedState::new();
        state.apply(FeedEvent::FetchStarted { initial: true });
        state.apply(FeedEvent::PageLoaded {
            page: 1,
            articles: make_articles(count, "p1"),
            total_results: total,
            initial: true,
        });
        state
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_feed_is_empty_and_idle() {
        let state = FeedState::new();
        assert!(state.articles.is_empty());
        assert_eq!(state.page, 1);
        assert_eq!(state.total_results, 0);
        assert!(!state.loading);
        assert!(!state.has_more());
    }

    // -- initial load --------------------------------------------------------

    #[test]
    fn fetch_started_sets_loading() {
        let mut state = FeedState::new();
        state.apply(FeedEvent::FetchStarted { initial: true });
        assert!(state.loading);
    }

    #[test]
    fn initial_fetch_resets_page_at_issue_time() {
        let mut state = loaded_state(8, 40);
        state.apply(FeedEvent::PageLoaded {
            page: 2,
            articles: make_articles(8, "p2"),
            total_results: 40,
            initial: false,
        });
        assert_eq!(state.page, 2);

        state.apply(FeedEvent::FetchStarted { initial: true });
        assert_eq!(state.page, 1);
    }

    #[test]
    fn initial_load_records_page_one_and_total() {
        let state = loaded_state(8, 40);
        assert_eq!(state.articles.len(), 8);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_results, 40);
        assert!(!state.loading);
        assert!(state.has_more());
    }

    #[test]
    fn initial_load_replaces_rather_than_merges() {
        let mut state = loaded_state(8, 40);
        state.apply(FeedEvent::FetchStarted { initial: true });
        state.apply(FeedEvent::PageLoaded {
            page: 1,
            articles: make_articles(3, "fresh"),
            total_results: 3,
            initial: true,
        });

        assert_eq!(state.articles.len(), 3);
        assert!(state.articles.iter().all(|a| a.title.starts_with("fresh")));
        assert_eq!(state.page, 1);
        assert!(!state.has_more());
    }

    #[test]
    fn initial_failure_degrades_to_empty_feed() {
        let mut state = loaded_state(8, 40);
        state.apply(FeedEvent::FetchStarted { initial: true });
        state.apply(FeedEvent::FetchFailed { initial: true });

        assert!(state.articles.is_empty());
        assert_eq!(state.total_results, 0);
        assert!(!state.loading);
        assert!(!state.has_more());
    }

    // -- load more -----------------------------------------------------------

    #[test]
    fn load_more_appends_and_advances_page() {
        let mut state = loaded_state(8, 40);
        state.apply(FeedEvent::FetchStarted { initial: false });
        state.apply(FeedEvent::PageLoaded {
            page: 2,
            articles: make_articles(8, "p2"),
            total_results: 40,
            initial: false,
        });

        assert_eq!(state.articles.len(), 16);
        assert_eq!(state.page, 2);
        assert_eq!(state.articles[0].title, "p1-0");
        assert_eq!(state.articles[8].title, "p2-0");
        assert!(state.has_more());
    }

    #[test]
    fn load_more_does_not_deduplicate() {
        let mut state = loaded_state(2, 4);
        state.apply(FeedEvent::PageLoaded {
            page: 2,
            articles: make_articles(2, "p1"), // same URLs as page 1
            total_results: 4,
            initial: false,
        });
        assert_eq!(state.articles.len(), 4);
    }

    #[test]
    fn load_more_updates_total_from_latest_response() {
        let mut state = loaded_state(8, 40);
        state.apply(FeedEvent::PageLoaded {
            page: 2,
            articles: make_articles(8, "p2"),
            total_results: 17, // provider total shrank between calls
            initial: false,
        });
        assert_eq!(state.total_results, 17);
        assert!(state.has_more());
    }

    #[test]
    fn failed_load_more_leaves_state_unchanged() {
        let before = loaded_state(8, 40);

        let mut state = before.clone();
        state.apply(FeedEvent::FetchStarted { initial: false });
        state.apply(FeedEvent::FetchFailed { initial: false });

        assert_eq!(state.articles, before.articles);
        assert_eq!(state.page, before.page);
        assert_eq!(state.total_results, before.total_results);
        assert!(!state.loading);
        // Same page is re-requested on the next trigger.
        assert_eq!(state.next_page(), before.next_page());
    }

    // -- pagination arithmetic ------------------------------------------------

    #[test]
    fn loaded_count_is_non_decreasing_across_successful_pages() {
        let mut state = loaded_state(8, 40);
        let mut previous = state.articles.len();

        for page in 2..=5 {
            state.apply(FeedEvent::FetchStarted { initial: false });
            state.apply(FeedEvent::PageLoaded {
                page,
                articles: make_articles(8, &format!("p{page}")),
                total_results: 40,
                initial: false,
            });
            assert!(state.articles.len() >= previous);
            assert_eq!(state.articles.len(), 8 * page as usize);
            previous = state.articles.len();
        }
    }

    #[test]
    fn has_more_goes_false_once_total_is_reached() {
        // Worked example: pageSize 8, totalResults 40.
        let mut state = loaded_state(8, 40);
        assert!(state.has_more());

        for page in 2..=5 {
            state.apply(FeedEvent::PageLoaded {
                page,
                articles: make_articles(8, &format!("p{page}")),
                total_results: 40,
                initial: false,
            });
        }

        assert_eq!(state.articles.len(), 40);
        assert_eq!(state.page, 5);
        assert!(!state.has_more());
    }

    #[test]
    fn has_more_is_false_when_loaded_exceeds_total() {
        let state = loaded_state(10, 7);
        assert!(!state.has_more());
    }

    #[test]
    fn next_page_is_current_plus_one() {
        let state = loaded_state(8, 40);
        assert_eq!(state.next_page(), 2);
    }
}
