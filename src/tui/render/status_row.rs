use chrono::{Datelike, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, View};

/// Render the bottom status row: a transient message if one is pending,
/// otherwise context-sensitive key hints on the left and the author
/// attribution on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if let Some(msg) = &app.status_message {
        let line = Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let hints = if !app.portfolio.config.ui.show_key_hints {
        ""
    } else if app.selected.is_some() {
        " \u{21B5} visit/close  o open link  \u{2190}\u{2192} browse  esc close"
    } else {
        match app.view {
            View::Projects => " \u{2191}\u{2193} move  \u{21B5} details  tab views  ? help  q quit",
            _ => " \u{2191}\u{2193} scroll  tab views  ? help  q quit",
        }
    };

    let attribution = format!(
        "{} \u{2022} \u{00A9} {} ",
        app.portfolio.config.profile.name,
        Local::now().year()
    );

    // Right-align the attribution by padding between hints and it.
    let used = hints.width() + attribution.width();
    let pad = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(attribution, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
