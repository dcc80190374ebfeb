//! The core data types shared across headline sources.
//!
//! `Headline` represents a single article normalised from whatever wire
//! format a provider speaks.  Every source implementation converts its native
//! response into a `HeadlinePage` so the rest of the application can stay
//! provider-agnostic.
//!
//! ## For contributors
//!
//! If you are adding a new provider you do **not** need to modify this file
//! unless your provider requires extra fields.  Just construct `Headline`
//! values in your source's `fetch_page()` implementation.

use chrono::{DateTime, Utc};

/// A single news article, normalised from any provider.
///
/// Missing upstream fields are filled with display defaults at parse time
/// (empty title/description, `"Unknown"` author and source) so rendering
/// never has to special-case absent data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// Article headline; empty string when the provider omits it.
    pub title: String,

    /// Short summary text; empty string when the provider omits it.
    pub description: String,

    /// URL of the article's lead image, when one exists.
    pub image_url: Option<String>,

    /// Link to the full article.
    ///
    /// This is the only identity the provider gives us; it is used for
    /// display, not de-duplication — overlapping pages may repeat a URL.
    pub url: Option<String>,

    /// Byline; `"Unknown"` when the provider omits it.
    pub author: String,

    /// Publication timestamp exactly as the provider sent it
    /// (RFC 3339 text when present).
    pub published_at: Option<String>,

    /// Name of the outlet that published the article; `"Unknown"` when the
    /// provider omits it.
    pub source_name: String,
}

impl Headline {
    /// Human-readable publication date for the UI.
    ///
    /// Parses the provider's RFC 3339 text; falls back to the raw string
    /// when it doesn't parse and to `"no date"` when absent.
    pub fn published_display(&self) -> String {
        match &self.published_at {
            None => "no date".into(),
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|d| d.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| raw.clone()),
        }
    }
}

/// One page of results from a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinePage {
    /// The articles on this page, in provider order.
    pub articles: Vec<Headline>,

    /// The provider's self-reported total across *all* pages.
    ///
    /// Trusted as-is; it may be stale or inconsistent between calls.  Zero
    /// when the provider omits it.
    pub total_results: u64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
