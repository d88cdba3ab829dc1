use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::task::Task;
use crate::tui::app::App;

/// Render the task list for the current tab and search query.
///
/// Takes `&mut App` because it adjusts the scroll offset to keep the
/// cursor row on screen.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;

    let ids = app.visible_ids();

    if ids.is_empty() {
        let message = if app.search.is_empty() {
            "no tasks here"
        } else {
            "no tasks match the search"
        };
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor visible
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll + height {
        app.scroll = app.cursor - height + 1;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (row, id) in ids.iter().enumerate().skip(app.scroll).take(height) {
        let Some(task) = app.store.get(id) else {
            continue;
        };
        let selected = row == app.cursor;
        lines.push(task_line(app, task, selected, width));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn task_line<'a>(app: &App, task: &'a Task, selected: bool, width: usize) -> Line<'a> {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let marker_color = if task.completed {
        app.theme.green
    } else if task.in_progress {
        app.theme.yellow
    } else {
        app.theme.dim
    };
    let marker = if task.completed {
        "[x]"
    } else if task.in_progress {
        "[>]"
    } else {
        "[ ]"
    };

    let mut title_style = Style::default()
        .fg(if task.completed {
            app.theme.dim
        } else {
            app.theme.text_bright
        })
        .bg(bg);
    if task.completed {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }

    let meta = format!("{} \u{2022} {}", task.time, task.category.name());
    let meta_width = meta.width();

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(marker, Style::default().fg(marker_color).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    if task.important {
        spans.push(Span::styled(
            "! ",
            Style::default().fg(app.theme.red).bg(bg).add_modifier(Modifier::BOLD),
        ));
    }

    // Truncate the title so the meta column fits on the right
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let title_max = width.saturating_sub(used + meta_width + 3);
    let (title, truncated) = truncate_to_width(&task.title, title_max);
    spans.push(Span::styled(title.to_string(), title_style));
    if truncated {
        spans.push(Span::styled("\u{2026}", title_style));
    }

    let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
    if content_width + meta_width + 1 < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - meta_width - 1),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            meta,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    Line::from(spans)
}

/// Longest prefix of `text` that fits in `max` display columns, plus
/// whether anything was cut
fn truncate_to_width(text: &str, max: usize) -> (&str, bool) {
    if text.width() <= max {
        return (text, false);
    }
    let mut used = 0;
    let mut end = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        end = i + c.len_utf8();
    }
    (&text[..end], true)
}
