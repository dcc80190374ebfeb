//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching business logic.
//!
//! ## For contributors
//!
//! * The layout is a three-row split: a one-line header (title or progress
//!   gauge), the card list, and a one-line status bar.
//! * The user-visible states are exactly: progress gauge while the initial
//!   load runs, headline cards once loaded, or the "No news articles found."
//!   text — fetch errors never render as errors.
//! * Colours and styles are defined inline — feel free to extract them into
//!   constants or a theme struct if the palette grows.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;

/// Draw the complete UI for one frame.
///
/// Called once per tick from the main loop.  Delegates to helper functions
/// for each screen region.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [header_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(app, frame, header_area);

    if app.initial_in_flight {
        draw_loading(frame, main_area);
    } else if app.feed.articles.is_empty() {
        draw_empty(frame, main_area);
    } else {
        draw_card_list(app, frame, main_area);
    }

    draw_status_bar(app, frame, status_area);
}

/// Render the header: a progress gauge while the initial load is running,
/// the feed title otherwise.
fn draw_header(app: &App, frame: &mut Frame, area: Rect) {
    if app.initial_in_flight {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(app.progress)
            .label("");
        frame.render_widget(gauge, area);
    } else {
        let title = Paragraph::new(Line::from(Span::styled(
            format!(" Top {} Headlines", capitalize_first(&app.category)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);
    }
}

/// Full-screen loading indication for the initial fetch.
fn draw_loading(frame: &mut Frame, area: Rect) {
    let spinner = Paragraph::new("Loading…")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(spinner, area);
}

/// Empty-state text shown when loading finished with no articles.
fn draw_empty(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No news articles found.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(empty, area);
}

/// Render the scrollable list of headline cards.
///
/// Each card is four lines: title, description, byline (author / date /
/// source), and the article URL.
fn draw_card_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .feed
        .articles
        .iter()
        .map(|article| {
            let byline = Line::from(vec![
                Span::styled(&article.author, Style::default().fg(Color::Green)),
                Span::raw("  "),
                Span::styled(
                    article.published_display(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", article.source_name),
                    Style::default().fg(Color::Cyan),
                ),
            ]);

            let mut lines = vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    article.description.clone(),
                    Style::default().fg(Color::Gray),
                )),
                byline,
                Line::from(Span::styled(
                    article.url.as_deref().unwrap_or("").to_string(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                )),
            ];
            // Terminals don't draw images; show the URL as text instead.
            if let Some(img) = &article.image_url {
                lines.push(Line::from(Span::styled(
                    format!("img: {img}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::raw(""));

            ListItem::new(lines)
        })
        .collect();

    let title = if app.feed.loading {
        " Headlines — loading more… "
    } else {
        " Headlines "
    };

    let list = List::new(list_items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("page {}", app.feed.page),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  ↑/↓: scroll  Home/End: jump  r: refresh"),
    ]));
    frame.render_widget(status, area);
}

/// Uppercase the first letter of a category for the feed title.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchMsg;
    use crate::source::{Headline, HeadlinePage};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::mpsc;

    fn make_app() -> App {
        // The request channel isn't exercised here; App ignores send errors.
        let (tx, _) = mpsc::channel();
        App::new("sports".into(), tx)
    }

    fn load(app: &mut App, count: usize, total: u64) {
        app.start_initial_load();
        app.handle_msg(FetchMsg::Loaded {
            page: 1,
            data: HeadlinePage {
                articles: (0..count)
                    .map(|i| Headline {
                        title: format!("Headline {i}"),
                        description: format!("Description {i}"),
                        image_url: Some(format!("https://img.example.com/{i}.jpg")),
                        url: Some(format!("https://example.com/{i}")),
                        author: "Reporter".to_string(),
                        published_at: Some("2024-06-15T12:30:00Z".to_string()),
                        source_name: "Wire".to_string(),
                    })
                    .collect(),
                total_results: total,
            },
            initial: true,
        });
    }

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        let buf = terminal.backend().buffer().clone();
        buf.content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    // -- capitalize_first ----------------------------------------------------

    #[test]
    fn capitalize_first_uppercases_one_letter() {
        assert_eq!(capitalize_first("sports"), "Sports");
        assert_eq!(capitalize_first("general"), "General");
    }

    #[test]
    fn capitalize_first_handles_empty_string() {
        assert_eq!(capitalize_first(""), "");
    }

    // -- rendering (smoke + content) -----------------------------------------

    #[test]
    fn draw_shows_loading_during_initial_fetch() {
        let mut app = make_app();
        app.start_initial_load();
        let text = render(&mut app);
        assert!(text.contains("Loading"));
    }

    #[test]
    fn draw_shows_empty_state_after_failed_initial_load() {
        let mut app = make_app();
        app.start_initial_load();
        app.handle_msg(FetchMsg::Failed { initial: true });
        let text = render(&mut app);
        assert!(text.contains("No news articles found."));
    }

    #[test]
    fn draw_shows_cards_and_category_title() {
        let mut app = make_app();
        load(&mut app, 3, 3);
        let text = render(&mut app);
        assert!(text.contains("Top Sports Headlines"));
        assert!(text.contains("Headline 0"));
        assert!(text.contains("Description 0"));
        assert!(text.contains("Reporter"));
        assert!(text.contains("[Wire]"));
        assert!(text.contains("img: https://img.example.com/0.jpg"));
    }

    #[test]
    fn draw_status_shows_counts_and_page() {
        let mut app = make_app();
        load(&mut app, 3, 9);
        let text = render(&mut app);
        assert!(text.contains("3 of 9 headlines"));
        assert!(text.contains("page 1"));
    }

    #[test]
    fn draw_does_not_panic_on_fresh_app() {
        let mut app = make_app();
        let _ = render(&mut app);
    }
}
