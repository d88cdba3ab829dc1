use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::ops::form::FormMode;
use crate::tui::app::{App, FormField, FormState, Mode};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.form = None;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => commit_form(app),
        (_, KeyCode::Tab) | (_, KeyCode::Down) => focus_next(app, true),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => focus_next(app, false),
        (_, KeyCode::Left) => move_left(app),
        (_, KeyCode::Right) => move_right(app),
        (_, KeyCode::Home) => {
            if let Some(state) = &mut app.form {
                state.cursor = 0;
            }
        }
        (_, KeyCode::End) => {
            if let Some(state) = &mut app.form
                && let Some(text) = state.focused_text()
            {
                state.cursor = text.len();
            }
        }
        (_, KeyCode::Backspace) => delete_back(app),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => insert_char(app, c),
        _ => {}
    }
}

fn commit_form(app: &mut App) {
    let Some(state) = app.form.take() else {
        return;
    };
    match state.form.commit(&mut app.store) {
        Ok(true) => {
            let created = matches!(state.form.mode, FormMode::Create);
            app.set_status(if created { "added" } else { "updated" });
            app.mode = Mode::Navigate;
            app.refresh_week();
            if created {
                // New tasks land at the top of the list
                app.cursor = 0;
            }
            app.clamp_cursor();
        }
        Ok(false) => {
            app.set_status("a title is required");
            app.form = Some(state);
        }
        Err(e) => {
            app.set_status(format!("save failed: {}", e));
            app.mode = Mode::Navigate;
        }
    }
}

fn focus_next(app: &mut App, forward: bool) {
    let Some(state) = &mut app.form else {
        return;
    };
    state.field = if forward {
        state.field.next()
    } else {
        state.field.prev()
    };
    state.cursor = state.focused_text().map_or(0, str::len);
}

fn move_left(app: &mut App) {
    let Some(state) = &mut app.form else {
        return;
    };
    match state.field {
        FormField::Category => state.form.category = state.form.category.prev(),
        _ => {
            if let Some(text) = state.focused_text() {
                state.cursor = prev_boundary(text, state.cursor);
            }
        }
    }
}

fn move_right(app: &mut App) {
    let Some(state) = &mut app.form else {
        return;
    };
    match state.field {
        FormField::Category => state.form.category = state.form.category.next(),
        _ => {
            if let Some(text) = state.focused_text() {
                state.cursor = next_boundary(text, state.cursor);
            }
        }
    }
}

fn insert_char(app: &mut App, c: char) {
    let Some(state) = &mut app.form else {
        return;
    };
    match state.field {
        FormField::Category => {
            if c == ' ' {
                state.form.category = state.form.category.next();
            }
        }
        FormField::Important => {
            if c == ' ' {
                state.form.important = !state.form.important;
            }
        }
        _ => {
            let cursor = state.cursor;
            if let Some(text) = state.focused_text_mut() {
                text.insert(cursor, c);
                state.cursor += c.len_utf8();
            }
        }
    }
}

fn delete_back(app: &mut App) {
    let Some(state) = &mut app.form else {
        return;
    };
    let Some(text) = state.focused_text() else {
        return;
    };
    let start = prev_boundary(text, state.cursor);
    if start < state.cursor {
        let end = state.cursor;
        if let Some(text) = state.focused_text_mut() {
            text.replace_range(start..end, "");
        }
        state.cursor = start;
    }
}

/// Byte offset of the grapheme boundary before `cursor`
fn prev_boundary(text: &str, cursor: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < cursor)
        .last()
        .unwrap_or(0)
}

/// Byte offset of the grapheme boundary after `cursor`
fn next_boundary(text: &str, cursor: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .find(|&i| i > cursor)
        .unwrap_or(text.len())
}
