//! Keyboard event handling by picker state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::picker::{CursorMove, Paginated};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.picker.is_open() {
        handle_open_picker(app, key)
    } else {
        handle_closed_picker(key)
    }
}

fn handle_closed_picker(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => Action::TogglePicker,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn handle_open_picker(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') => Action::TogglePicker,
        KeyCode::Char('q') => Action::Quit,

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectAtCursor,

        // Cursor - arrows and vim style
        KeyCode::Char('h') | KeyCode::Left => Action::MoveCursor(CursorMove::Left),
        KeyCode::Char('l') | KeyCode::Right => Action::MoveCursor(CursorMove::Right),
        KeyCode::Char('k') | KeyCode::Up => Action::MoveCursor(CursorMove::Up),
        KeyCode::Char('j') | KeyCode::Down => Action::MoveCursor(CursorMove::Down),

        // Pagination, inert at either end
        KeyCode::Char('[') | KeyCode::Char('p') | KeyCode::PageUp => {
            if app.picker.has_prev_page() {
                Action::PrevPage
            } else {
                Action::None
            }
        }
        KeyCode::Char(']') | KeyCode::Char('n') | KeyCode::PageDown => {
            if app.picker.has_next_page() {
                Action::NextPage
            } else {
                Action::None
            }
        }

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_closed_picker_keys() {
        let app = App::for_tests(50);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::TogglePicker);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('j'))), Action::None);
    }

    #[test]
    fn test_open_picker_keys() {
        let mut app = App::for_tests(50);
        app.dispatch(Action::TogglePicker);

        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::TogglePicker);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::SelectAtCursor);
        assert_eq!(
            handle_key_event(&app, press(KeyCode::Char('l'))),
            Action::MoveCursor(CursorMove::Right)
        );
        assert_eq!(
            handle_key_event(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_page_keys_are_inert_at_the_ends() {
        // 50 icons at 6x6 is two pages
        let mut app = App::for_tests(50);
        app.dispatch(Action::TogglePicker);

        assert_eq!(handle_key_event(&app, press(KeyCode::PageUp)), Action::None);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char(']'))), Action::NextPage);

        app.dispatch(Action::NextPage);
        assert_eq!(handle_key_event(&app, press(KeyCode::PageDown)), Action::None);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('['))), Action::PrevPage);
    }
}
