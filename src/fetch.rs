//! Background headline fetching.
//!
//! Runs on a dedicated thread, fetching one page per request sent by the UI
//! thread and sending results back over an [`mpsc`] channel.
//!
//! ## For contributors
//!
//! The worker is intentionally simple: it blocks on the request channel,
//! fetches, replies, and loops.  The UI only sends a request while no fetch
//! is in flight, so there is never more than one request queued and no
//! parallel fetches for the same configuration.  There is no timeout and no
//! cancellation: a slow upstream stalls the loading indicator until it
//! answers.

use std::sync::mpsc;
use std::thread;

use crate::source::{HeadlinePage, HeadlineSource};

/// A single page fetch, requested by the UI thread.
pub struct FetchRequest {
    /// Page number to fetch (pages start at 1).
    pub page: u32,
    /// True for an initial/refresh load, false for a load-more.
    pub initial: bool,
}

/// Messages sent from the worker thread back to the UI thread.
pub enum FetchMsg {
    /// Cosmetic progress checkpoint (0–100) for an initial load.
    Progress(u16),
    /// A page was fetched and parsed successfully.
    Loaded {
        /// The page number that was requested.
        page: u32,
        /// Parsed page contents.
        data: HeadlinePage,
        /// Echoed from the request.
        initial: bool,
    },
    /// The fetch failed; a diagnostic has already been logged.
    Failed {
        /// Echoed from the request.
        initial: bool,
    },
}

/// Spawn the background fetch thread.
///
/// Returns the request sender and the message receiver the main loop should
/// drain on every tick.  The thread exits when the request sender is dropped
/// (or when the receiver is gone and a send fails).
pub fn spawn(source: Box<dyn HeadlineSource>) -> (mpsc::Sender<FetchRequest>, mpsc::Receiver<FetchMsg>) {
    let (req_tx, req_rx) = mpsc::channel::<FetchRequest>();
    let (msg_tx, msg_rx) = mpsc::channel();

    thread::spawn(move || {
        while let Ok(req) = req_rx.recv() {
            // Progress is only wired to the UI for initial loads; load-more
            // fetches signal through the feed's loading flag alone.
            let progress = |pct: u16| {
                if req.initial {
                    let _ = msg_tx.send(FetchMsg::Progress(pct));
                }
            };

            let msg = match source.fetch_page(req.page, &progress) {
                Ok(data) => FetchMsg::Loaded {
                    page: req.page,
                    data,
                    initial: req.initial,
                },
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        page = req.page,
                        error = %e,
                        "fetch failed"
                    );
                    FetchMsg::Failed { initial: req.initial }
                }
            };
            progress(100);

            // If the receiver is gone the main thread has exited;
            // silently stop fetching.
            if msg_tx.send(msg).is_err() {
                return;
            }
        }
    });

    (req_tx, msg_rx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
