use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store_io::StorageError;
use crate::ops::filter::Tab;
use crate::tui::app::{App, ConfirmState, FormState, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts its own keys
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    // Any keypress dismisses a lingering status message
    app.status_message = None;

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,
        (KeyModifiers::NONE, KeyCode::Char('/')) => app.mode = Mode::Search,

        // Movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.visible_count().saturating_sub(1);
        }

        // Tab switching
        (_, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('l')) | (_, KeyCode::Right) => {
            switch_tab(app, app.tab.next());
        }
        (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('h')) | (_, KeyCode::Left) => {
            switch_tab(app, app.tab.prev());
        }
        (KeyModifiers::NONE, KeyCode::Char('1')) => switch_tab(app, Tab::All),
        (KeyModifiers::NONE, KeyCode::Char('2')) => switch_tab(app, Tab::InProgress),
        (KeyModifiers::NONE, KeyCode::Char('3')) => switch_tab(app, Tab::Completed),

        // Status toggles on the selected task
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            toggle_selected(app, |app, id| app.store.toggle_completed(id));
        }
        (KeyModifiers::NONE, KeyCode::Char('s')) => {
            toggle_selected(app, |app, id| app.store.toggle_in_progress(id));
        }
        (KeyModifiers::NONE, KeyCode::Char('f')) => {
            toggle_selected(app, |app, id| app.store.toggle_important(id));
        }

        // Add / edit / delete
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.form = Some(FormState::create());
            app.mode = Mode::Form;
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => open_edit_form(app),
        (KeyModifiers::NONE, KeyCode::Char('d')) => request_delete(app),

        // Clear an active search filter
        (_, KeyCode::Esc) => {
            if !app.search.is_empty() {
                app.search.clear();
                app.clamp_cursor();
            }
        }

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.visible_count();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    let cursor = app.cursor as isize + delta;
    app.cursor = cursor.clamp(0, count as isize - 1) as usize;
}

fn switch_tab(app: &mut App, tab: Tab) {
    if app.tab != tab {
        app.tab = tab;
        app.cursor = 0;
        app.scroll = 0;
    }
}

fn toggle_selected(
    app: &mut App,
    op: impl FnOnce(&mut App, &str) -> Result<bool, StorageError>,
) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    match op(app, &id) {
        Ok(true) => {
            // The task may have left the current tab's view
            app.refresh_week();
            app.clamp_cursor();
        }
        Ok(false) => {}
        Err(e) => app.set_status(format!("save failed: {}", e)),
    }
}

fn open_edit_form(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    if let Some(task) = app.store.get(&id) {
        app.form = Some(FormState::edit(task));
        app.mode = Mode::Form;
    }
}

fn request_delete(app: &mut App) {
    let Some(id) = app.selected_task_id() else {
        return;
    };
    if let Some(task) = app.store.get(&id) {
        app.confirm = Some(ConfirmState {
            task_id: id,
            title: task.title.clone(),
        });
        app.mode = Mode::Confirm;
    }
}
