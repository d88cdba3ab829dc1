use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::filter::completion_rate;
use crate::tui::app::App;

/// Render the week strip: Monday through Sunday with per-day task
/// markers, and a completion summary line below
pub fn render_week_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // separator
            Constraint::Length(1), // day labels
            Constraint::Length(1), // day numbers
            Constraint::Length(1), // completion summary
        ])
        .split(area);

    let sep = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(sep).style(Style::default().fg(app.theme.dim).bg(bg)),
        chunks[0],
    );

    render_day_row(frame, app, chunks[1], true);
    render_day_row(frame, app, chunks[2], false);
    render_summary(frame, app, chunks[3]);
}

fn render_day_row(frame: &mut Frame, app: &App, area: Rect, labels: bool) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    for cell in &app.week {
        let cell_bg = if cell.is_today {
            app.theme.selection_bg
        } else {
            bg
        };
        let text = if labels {
            format!(" {} ", cell.label)
        } else {
            format!(" {:>2}  ", cell.day)
        };
        let fg = if labels {
            if cell.is_today {
                app.theme.text_bright
            } else {
                app.theme.dim
            }
        } else if cell.is_completed {
            app.theme.green
        } else if cell.has_task {
            app.theme.accent
        } else {
            app.theme.text
        };
        let mut style = Style::default().fg(fg).bg(cell_bg);
        if cell.is_today {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(text, style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.store.tasks();
    let done = tasks.iter().filter(|t| t.completed).count();
    let rate = completion_rate(tasks);

    let line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            format!("{} of {} done", done, tasks.len()),
            Style::default().fg(app.theme.text).bg(bg),
        ),
        Span::styled(" \u{2022} ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            format!("{}%", rate),
            Style::default()
                .fg(if rate == 100 {
                    app.theme.green
                } else {
                    app.theme.yellow
                })
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
