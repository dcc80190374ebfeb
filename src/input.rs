//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Adding a new keybinding is
//! a single match arm in [`handle_key_event`].
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action (if one doesn't exist).
//! 2. Add a `KeyCode` match arm in [`handle_key_event`] that calls it.
//! 3. Update the help text in [`crate::ui`]'s status bar.
//! 4. Update the keybindings table in `README.md`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.  Scrolling down is the
/// infinite-scroll trigger path: [`App::select_next`] re-checks whether the
/// next page should be requested.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('r') => app.start_initial_load(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn make_app() -> (App, mpsc::Receiver<crate::fetch::FetchRequest>) {
        let (tx, rx) = mpsc::channel();
        (App::new("general".into(), tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, crossterm::event::KeyModifiers::empty())
    }

    #[test]
    fn q_requests_quit() {
        let (mut app, _rx) = make_app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn esc_requests_quit() {
        let (mut app, _rx) = make_app();
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.quit);
    }

    #[test]
    fn r_triggers_a_fresh_initial_load() {
        let (mut app, rx) = make_app();
        handle_key_event(&mut app, press(KeyCode::Char('r')));
        let req = rx.try_recv().unwrap();
        assert_eq!(req.page, 1);
        assert!(req.initial);
    }

    #[test]
    fn release_events_are_ignored() {
        let (mut app, _rx) = make_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert!(!app.quit);
    }
}
