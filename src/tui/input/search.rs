use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Abandon the search entirely
        (_, KeyCode::Esc) => {
            app.search.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        // Keep the query and go back to the list
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Backspace) => {
            app.search.pop();
            app.clamp_cursor();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search.push(c);
            app.clamp_cursor();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_search(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_filters_live() {
        let mut app = test_app();
        app.mode = Mode::Search;
        app.cursor = 4;
        for c in "work".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.search, "work");
        assert_eq!(app.visible_count(), 2);
        // Cursor was pulled back into the narrowed list
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn enter_keeps_the_query() {
        let mut app = test_app();
        app.mode = Mode::Search;
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.search, "x");
    }

    #[test]
    fn esc_discards_the_query() {
        let mut app = test_app();
        app.mode = Mode::Search;
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.search.is_empty());
        assert_eq!(app.visible_count(), 5);
    }

    #[test]
    fn backspace_widens_the_filter() {
        let mut app = test_app();
        app.mode = Mode::Search;
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.visible_count(), 0);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.visible_count(), 5);
    }
}
