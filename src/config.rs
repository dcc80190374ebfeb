//! Feed configuration and command-line parsing.
//!
//! Everything the fetcher needs — country, category, page size, API key, and
//! endpoint addresses — travels in one explicit [`FeedConfig`] value built at
//! startup.  There are no hidden globals; the relay and provider addresses
//! are ordinary overridable fields.

use clap::Parser;

/// headlines-tui - paginated top headlines in the terminal
#[derive(Parser, Debug)]
#[command(name = "headlines-tui")]
#[command(version)]
#[command(about = "Fetch paginated top headlines and scroll through them", long_about = None)]
pub struct Args {
    /// ISO country code to fetch headlines for
    #[arg(long, default_value = "in")]
    pub country: String,

    /// Headline category (general, business, sports, ...)
    #[arg(long, default_value = "general")]
    pub category: String,

    /// Number of articles requested per page
    #[arg(long, default_value_t = 8)]
    pub page_size: u32,

    /// Provider API key (also read from the environment)
    #[arg(long, env = "NEWS_API_KEY")]
    pub api_key: String,

    /// Base address of the headlines provider
    #[arg(long, default_value = "https://newsapi.org")]
    pub api_base: String,

    /// Relay prefix prepended in front of the provider address.
    /// Pass an empty string to talk to the provider directly.
    #[arg(long, default_value = "https://cors-anywhere.herokuapp.com/")]
    pub relay: String,

    /// Log level filter for the diagnostic log file (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved feed configuration.
///
/// The configuration identity (country + category + page size) is fixed for
/// the lifetime of the process; the feed state is created empty for it and
/// fully replaced on each refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// ISO country code (default `"in"`).
    pub country: String,
    /// Headline category (default `"general"`).
    pub category: String,
    /// Articles per page (default `8`).
    pub page_size: u32,
    /// Provider API key, sent as a plain query parameter (the provider's
    /// auth scheme — note that the relay sees it too).
    pub api_key: String,
    /// Provider base address.
    pub api_base: String,
    /// Relay prefix; empty string disables the relay.
    pub relay: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            country: "in".to_string(),
            category: "general".to_string(),
            page_size: 8,
            api_key: String::new(),
            api_base: "https://newsapi.org".to_string(),
            relay: "https://cors-anywhere.herokuapp.com/".to_string(),
        }
    }
}

impl From<&Args> for FeedConfig {
    fn from(args: &Args) -> Self {
        Self {
            country: args.country.clone(),
            category: args.category.clone(),
            page_size: args.page_size,
            api_key: args.api_key.clone(),
            api_base: args.api_base.clone(),
            relay: args.relay.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
