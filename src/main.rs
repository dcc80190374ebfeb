//! headlines-tui — paginated top headlines with infinite scrolling, in the
//! terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  FetchMsg   ┌──────────┐  draw()  ┌──────────┐
//! │ fetch.rs │ ──────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread) │  (channel)  │ (state)  │          │ (render) │
//! └──────────┘ ◄────────── └──────────┘          └──────────┘
//!               FetchRequest    ▲
//!                               │ handle_key_event()
//!                          ┌──────────┐
//!                          │ input.rs │
//!                          └──────────┘
//! ```
//!
//! * **`source/`** — the `HeadlineSource` trait and concrete providers
//!   (currently NewsAPI only).
//! * **`feed`** — the feed state machine: pagination bookkeeping as a pure
//!   transition function.
//! * **`fetch`** — spawns a background thread that fetches one page per
//!   request.
//! * **`config`** — CLI arguments and the explicit `FeedConfig` object.
//! * **`app`** — owns all application state (feed, scroll position, etc.)
//!   and the infinite-scroll trigger.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`main`** — wires everything together: parse args, set up logging and
//!   the terminal, and run the event loop.

mod app;
mod config;
mod feed;
mod fetch;
mod input;
mod source;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;
use config::{Args, FeedConfig};
use source::{HeadlineSource, NewsApiSource};

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.  This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Initialize the diagnostic log.
///
/// The TUI owns the terminal, so diagnostics go to a file in the temp
/// directory; `RUST_LOG` overrides the `--log-level` default.  Returns the
/// appender guard that must stay alive for the process lifetime.
fn init_logging(level: &str) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = |lvl: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(lvl))
    };
    let log_path = std::env::temp_dir().join("headlines-tui.log");

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            tracing::info!(path = %log_path.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            // Fallback: stderr is wrong for a TUI but better than silence.
            tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_target(false)
                .with_writer(io::stderr)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- parse arguments -----------------------------------------------------
    let args = Args::parse();
    let _log_guard = init_logging(&args.log_level);

    let config = FeedConfig::from(&args);
    tracing::info!(
        country = %config.country,
        category = %config.category,
        page_size = config.page_size,
        "starting"
    );

    // -- configure the provider and start the fetch worker -------------------
    let category = config.category.clone();
    let provider: Box<dyn HeadlineSource> = Box::new(NewsApiSource::new(config));
    let (requests, messages) = fetch::spawn(provider);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(category, requests);
    app.start_initial_load();

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any messages from the fetch worker.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    // Load-more requests are issued from the scroll path only, so a failed
    // fetch is retried when the user next scrolls, not on a timer.
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process fetch messages
        while let Ok(msg) = messages.try_recv() {
            app.handle_msg(msg);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    tracing::info!("exiting");
    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
