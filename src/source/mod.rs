//! Headline source abstraction layer.
//!
//! This module defines the [`HeadlineSource`] trait and the common
//! [`Headline`] / [`HeadlinePage`] types.  Concrete provider implementations
//! live in sub-modules (currently only [`newsapi`]).
//!
//! ## For contributors — adding a new provider
//!
//! 1. Create a new file in this directory (e.g. `gnews.rs`).
//! 2. Define a struct (e.g. `GnewsSource`) and implement [`HeadlineSource`].
//! 3. Add `mod gnews;` below and re-export your struct in the `pub use` block.
//! 4. Construct an instance in `main.rs`.
//!
//! That's it — the fetch worker, feed state, and UI are all provider-agnostic.

mod article;
mod newsapi;

// Re-export the public API of this module so callers can write
// `use crate::source::{Headline, HeadlinePage, HeadlineSource, NewsApiSource};`
pub use article::{Headline, HeadlinePage};
pub use newsapi::NewsApiSource;

use anyhow::Result;

/// Trait that every headline provider must implement.
///
/// The fetch worker calls [`fetch_page()`](HeadlineSource::fetch_page) on a
/// background thread, so implementations must be [`Send`].
///
/// ## Implementing a new provider
///
/// ```ignore
/// pub struct MySource { /* config fields */ }
///
/// impl HeadlineSource for MySource {
///     fn name(&self) -> &str { "my-provider" }
///
///     fn fetch_page(&self, page: u32, progress: &dyn Fn(u16)) -> Result<HeadlinePage> {
///         // Perform HTTP / IO, then convert into a HeadlinePage.
///         todo!()
///     }
/// }
/// ```
pub trait HeadlineSource: Send {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;

    /// Fetch one page of headlines (pages start at 1).
    ///
    /// `progress` is a purely cosmetic hook: implementations report
    /// percentage checkpoints (request issued, response received, parsing
    /// complete) and nothing else in the system depends on the values.
    /// Errors are logged by the worker and degrade to an empty or unchanged
    /// feed; they never reach the user as an error message.
    fn fetch_page(&self, page: u32, progress: &dyn Fn(u16)) -> Result<HeadlinePage>;
}
