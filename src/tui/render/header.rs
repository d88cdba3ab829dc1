use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: board title on the left, date and open count on
/// the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title = " My Tasks";
    let open = app
        .store
        .tasks()
        .iter()
        .filter(|t| !t.completed)
        .count();
    let right = format!("{}  {} open ", app.today.format("%a %b %-d"), open);

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let content_width = title.chars().count();
    let right_width = right.chars().count();
    if content_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            " ".repeat(width),
            Style::default().bg(bg),
        )),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
