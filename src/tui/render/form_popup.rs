use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField, FormState};

use super::centered_rect_fixed;

/// Render the add/edit task popup
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = &app.form else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 46.min(area.width.saturating_sub(2));

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", state.title()),
        header_style,
    )));
    lines.push(Line::from(Span::styled("", text_style)));

    lines.push(text_row(app, state, FormField::Title, "Title", &state.form.title));
    lines.push(text_row(app, state, FormField::Time, "Time", &state.form.time));
    lines.push(choice_row(
        app,
        state,
        FormField::Category,
        "Category",
        state.form.category.name(),
    ));
    lines.push(choice_row(
        app,
        state,
        FormField::Important,
        "Important",
        if state.form.important { "yes" } else { "no" },
    ));
    lines.push(Line::from(Span::styled("", text_style)));

    // Key hints; save is called out as unavailable on a blank title
    if state.form.can_commit() {
        lines.push(Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Enter", dim_style),
            Span::styled(" save  ", text_style),
            Span::styled("Tab", dim_style),
            Span::styled(" next field  ", text_style),
            Span::styled("Esc", dim_style),
            Span::styled(" cancel", text_style),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("enter a title to save  ", dim_style),
            Span::styled("Esc", dim_style),
            Span::styled(" cancel", text_style),
        ]));
    }

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

/// Row for a free-text field, with a block cursor when focused
fn text_row<'a>(
    app: &App,
    state: &FormState,
    field: FormField,
    label: &'a str,
    value: &str,
) -> Line<'a> {
    let bg = app.theme.background;
    let focused = state.field == field;

    let mut spans = vec![Span::styled(
        format!("  {:<10} ", label),
        label_style(app, focused),
    )];
    if focused {
        let (before, after) = value.split_at(state.cursor.min(value.len()));
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }
    Line::from(spans)
}

/// Row for a cycling or toggling field
fn choice_row<'a>(
    app: &App,
    state: &FormState,
    field: FormField,
    label: &'a str,
    value: &str,
) -> Line<'a> {
    let bg = app.theme.background;
    let focused = state.field == field;

    let mut spans = vec![Span::styled(
        format!("  {:<10} ", label),
        label_style(app, focused),
    )];
    if focused {
        spans.push(Span::styled(
            "\u{2039} ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            value.to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            " \u{203A}",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }
    Line::from(spans)
}

fn label_style(app: &App, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
