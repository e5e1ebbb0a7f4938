use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the tab bar: site title plus one tab per view, with the
/// current view highlighted.
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let active_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let inactive_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        format!(" {} ", app.portfolio.config.profile.name),
        title_style,
    ));
    spans.push(Span::styled("  ", Style::default().bg(bg)));

    for (i, view) in View::ALL.iter().enumerate() {
        let style = if *view == app.view {
            active_style
        } else {
            inactive_style
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, view.label()), style));
    }

    let mut lines = vec![Line::from(spans)];

    // Separator row
    let sep: String = "\u{2500}".repeat(area.width as usize);
    lines.push(Line::from(Span::styled(
        sep,
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
