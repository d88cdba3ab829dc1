use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let Some(confirm) = app.confirm.take() else {
                app.mode = Mode::Navigate;
                return;
            };
            app.mode = Mode::Navigate;
            match app.store.delete(&confirm.task_id) {
                Ok(true) => {
                    app.set_status(format!("deleted \"{}\"", confirm.title));
                    app.refresh_week();
                    app.clamp_cursor();
                }
                Ok(false) => {}
                Err(e) => app.set_status(format!("save failed: {}", e)),
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
