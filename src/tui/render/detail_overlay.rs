use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

use super::helpers::{centered_rect, push_tag_spans};

/// Render the modal detail overlay for the selected project.
/// Renders nothing when no project is selected.
pub fn render_detail_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(project) = app.selected_project() else {
        return;
    };

    let bg = app.theme.background;
    let overlay_area = centered_rect(70, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let preview_style = Style::default().fg(app.theme.cyan).bg(bg);
    let action_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let text_width = inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", project.description),
        dim_style,
    )));

    let preview = if project.image.is_empty() {
        Span::styled(" (no preview)".to_string(), dim_style)
    } else {
        Span::styled(format!(" {}", project.image), preview_style)
    };
    lines.push(Line::from(preview));
    lines.push(Line::from(""));

    // Cap the long-form writeup so the tag and action rows below it
    // always fit inside the overlay.
    let tag_rows = if project.tags.is_empty() { 0 } else { 2 };
    let reserved = lines.len() + 1 + tag_rows + 1; // spacer, tags, action row
    let avail = (inner.height as usize).saturating_sub(reserved);
    let wrapped = wrap_text(&project.details, text_width);
    if wrapped.len() <= avail {
        for row in wrapped {
            lines.push(Line::from(Span::styled(format!(" {}", row), text_style)));
        }
    } else {
        for row in wrapped.iter().take(avail.saturating_sub(1)) {
            lines.push(Line::from(Span::styled(format!(" {}", row), text_style)));
        }
        if avail > 0 {
            lines.push(Line::from(Span::styled(" \u{2026}".to_string(), dim_style)));
        }
    }
    lines.push(Line::from(""));

    if !project.tags.is_empty() {
        let mut tag_spans: Vec<Span<'static>> =
            vec![Span::styled(" ", Style::default().bg(bg))];
        push_tag_spans(&mut tag_spans, &project.tags, &app.theme, bg);
        lines.push(Line::from(tag_spans));
        lines.push(Line::from(""));
    }

    // Action row: exactly one visit affordance when a link exists,
    // and a dismiss affordance in every case.
    let mut action_spans: Vec<Span<'static>> = Vec::new();
    match &project.link {
        Some(link) => {
            action_spans.push(Span::styled(" \u{21B5} visit ".to_string(), action_style));
            action_spans.push(Span::styled(link.clone(), preview_style));
            action_spans.push(Span::styled("   esc close".to_string(), dim_style));
        }
        None => {
            action_spans.push(Span::styled(" \u{21B5} close".to_string(), action_style));
        }
    }
    lines.push(Line::from(action_spans));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
