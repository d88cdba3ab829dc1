use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /query▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.search),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            pad_with_hint(&mut spans, "Enter keep  Esc clear", app, width);
            Line::from(spans)
        }
        _ => {
            if let Some(ref message) = app.status_message {
                Line::from(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.yellow).bg(bg),
                ))
            } else if !app.search.is_empty() {
                // Show the active filter dimmed
                let mut spans = vec![Span::styled(
                    format!("/{}", app.search),
                    Style::default().fg(app.theme.dim).bg(bg),
                )];
                pad_with_hint(&mut spans, "Esc clear", app, width);
                Line::from(spans)
            } else {
                let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
                pad_with_hint(&mut spans, "? help", app, width);
                Line::from(spans)
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad spans to the full width with a right-aligned dim hint
fn pad_with_hint(spans: &mut Vec<Span>, hint: &'static str, app: &App, width: usize) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }
}
