//! NewsAPI-compatible headline source.
//!
//! This module shows how to implement the [`HeadlineSource`] trait for a
//! concrete provider.  Use it as a template when adding support for another
//! headlines API.
//!
//! ## For contributors — adding a new provider
//!
//! 1. Create a new file under `src/source/` (e.g. `gnews.rs`).
//! 2. Define a struct that holds any configuration your provider needs (base
//!    URL, API key, etc.).
//! 3. Implement [`HeadlineSource`] for your struct — `name()` returns a label
//!    and `fetch_page()` returns a [`HeadlinePage`].
//! 4. Re-export your struct from `src/source/mod.rs`.
//! 5. Wire it into `main.rs`.
//!
//! The implementation below is a complete worked example.

use anyhow::{bail, Result};
use serde::Deserialize;

use super::{Headline, HeadlinePage, HeadlineSource};
use crate::config::FeedConfig;

/// A top-headlines source backed by a NewsAPI-compatible provider.
///
/// Requests are routed through the configured relay prefix (when non-empty)
/// and fetched with blocking [`reqwest`].
pub struct NewsApiSource {
    config: FeedConfig,
}

// ---------------------------------------------------------------------------
// Wire model — the provider's JSON shape, kept private to this module
// ---------------------------------------------------------------------------

/// Top-level response body: `{ "articles": [...], "totalResults": N }`.
///
/// `articles` is optional here so that its *absence* can be detected and
/// treated as a malformed response rather than silently becoming an empty
/// page.
#[derive(Deserialize)]
struct ApiResponse {
    articles: Option<Vec<ApiArticle>>,
    #[serde(rename = "totalResults")]
    total_results: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiArticle {
    source: Option<ApiArticleSource>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
}

#[derive(Deserialize)]
struct ApiArticleSource {
    name: Option<String>,
}

impl From<ApiArticle> for Headline {
    fn from(a: ApiArticle) -> Self {
        Headline {
            title: a.title.unwrap_or_default(),
            description: a.description.unwrap_or_default(),
            image_url: a.url_to_image,
            url: a.url,
            author: a.author.unwrap_or_else(|| "Unknown".to_string()),
            published_at: a.published_at,
            source_name: a
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

impl NewsApiSource {
    /// Create a source for the given feed configuration.
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    /// Build the request URL for one page.
    ///
    /// The relay prefix is prepended verbatim in front of the real endpoint,
    /// and the query parameters keep a fixed order.
    pub fn page_url(&self, page: u32) -> String {
        let c = &self.config;
        format!(
            "{}{}/v2/top-headlines?country={}&category={}&apiKey={}&page={}&pageSize={}",
            c.relay, c.api_base, c.country, c.category, c.api_key, page, c.page_size,
        )
    }

    /// Parse an already-fetched response body into a [`HeadlinePage`].
    ///
    /// This is a pure function (no I/O) so that tests can exercise the
    /// parsing logic without hitting the network.  A body without an
    /// `articles` field is an error, not an empty page.
    pub fn parse_response(body: &[u8]) -> Result<HeadlinePage> {
        let parsed: ApiResponse = serde_json::from_slice(body)?;

        let Some(articles) = parsed.articles else {
            bail!("response has no `articles` field");
        };

        Ok(HeadlinePage {
            articles: articles.into_iter().map(Headline::from).collect(),
            total_results: parsed.total_results.unwrap_or(0),
        })
    }
}

impl HeadlineSource for NewsApiSource {
    fn name(&self) -> &str {
        "newsapi"
    }

    fn fetch_page(&self, page: u32, progress: &dyn Fn(u16)) -> Result<HeadlinePage> {
        progress(10);
        let response = reqwest::blocking::get(self.page_url(page))?;
        progress(30);
        let body = response.bytes()?;
        let parsed = Self::parse_response(body.as_ref())?;
        progress(70);
        Ok(parsed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
