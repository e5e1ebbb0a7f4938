use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Project;
use crate::tui::app::App;
use crate::tui::wrap::truncate_to_width;

use super::helpers::push_tag_spans;

/// Rows each summary card occupies (marker/title, preview, description,
/// tags, spacer).
pub const CARD_HEIGHT: usize = 5;

/// Render the project showcase: one summary card per catalog entry, in
/// catalog order.
pub fn render_projects_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.portfolio.projects().is_empty() {
        let empty = Paragraph::new(" No projects yet. Add [[projects]] entries to portfolio.toml.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor in range even if the catalog is smaller than the
    // saved cursor (e.g. after the file was edited).
    let count = app.portfolio.projects().len();
    if app.projects_cursor >= count {
        app.projects_cursor = count - 1;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let text_width = area.width.saturating_sub(5) as usize;

    for (idx, project) in app.portfolio.projects().iter().enumerate() {
        let is_cursor = idx == app.projects_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        push_card_lines(&mut lines, project, app, is_cursor, row_bg, text_width);
    }

    // Scroll to keep the cursor card fully visible
    let height = area.height as usize;
    let first = app.projects_cursor * CARD_HEIGHT;
    if first < app.projects_scroll {
        app.projects_scroll = first;
    } else if height > 0 && first + CARD_HEIGHT > app.projects_scroll + height {
        app.projects_scroll = first + CARD_HEIGHT - height;
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .scroll((app.projects_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn push_card_lines(
    lines: &mut Vec<Line<'static>>,
    project: &Project,
    app: &App,
    is_cursor: bool,
    row_bg: Color,
    text_width: usize,
) {
    let theme = &app.theme;
    let indicator_style = Style::default().fg(theme.selection_border).bg(row_bg);
    let title_style = Style::default()
        .fg(theme.text_bright)
        .bg(row_bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.text).bg(row_bg);
    let dim_style = Style::default().fg(theme.dim).bg(row_bg);
    let preview_style = Style::default().fg(theme.cyan).bg(row_bg);

    let indicator = |active: bool| -> Span<'static> {
        if active {
            Span::styled(" \u{258E}", indicator_style)
        } else {
            Span::styled("  ", Style::default().bg(row_bg))
        }
    };

    // Title row carries the card marker; one marker per catalog entry.
    lines.push(Line::from(vec![
        indicator(is_cursor),
        Span::styled("\u{25C6} ", indicator_style),
        Span::styled(project.title.clone(), title_style),
    ]));

    // Preview reference; an empty reference degrades to a placeholder.
    let preview = if project.image.is_empty() {
        Span::styled("(no preview)".to_string(), dim_style)
    } else {
        Span::styled(project.image.clone(), preview_style)
    };
    lines.push(Line::from(vec![
        indicator(false),
        Span::styled("  ", Style::default().bg(row_bg)),
        preview,
    ]));

    // Description, truncated to one row
    lines.push(Line::from(vec![
        indicator(false),
        Span::styled("  ", Style::default().bg(row_bg)),
        Span::styled(truncate_to_width(&project.description, text_width), text_style),
    ]));

    // Tag chips in authored order
    let mut tag_spans: Vec<Span<'static>> = vec![
        indicator(false),
        Span::styled("  ", Style::default().bg(row_bg)),
    ];
    push_tag_spans(&mut tag_spans, &project.tags, theme, row_bg);
    lines.push(Line::from(tag_spans));

    lines.push(Line::from(""));
}
