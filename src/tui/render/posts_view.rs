use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::wrap::truncate_to_width;

use super::helpers::push_tag_spans;

/// Rows each post entry occupies.
pub const ENTRY_HEIGHT: usize = 4;

/// Render the blog listing, in authored order.
pub fn render_posts_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.portfolio.posts().is_empty() {
        let empty = Paragraph::new(" No posts found.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let count = app.portfolio.posts().len();
    if app.posts_cursor >= count {
        app.posts_cursor = count - 1;
    }

    let text_width = area.width.saturating_sub(5) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (idx, post) in app.portfolio.posts().iter().enumerate() {
        let is_cursor = idx == app.posts_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let title_style = Style::default()
            .fg(app.theme.text_bright)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(app.theme.text).bg(row_bg);
        let dim_style = Style::default().fg(app.theme.dim).bg(row_bg);
        let indicator = if is_cursor {
            Span::styled(" \u{258E}", Style::default().fg(app.theme.selection_border).bg(row_bg))
        } else {
            Span::styled("  ", Style::default().bg(row_bg))
        };

        lines.push(Line::from(vec![
            indicator.clone(),
            Span::styled(format!("{:<16}", post.display_date()), dim_style),
            Span::styled(post.title.clone(), title_style),
        ]));
        lines.push(Line::from(vec![
            indicator.clone(),
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(truncate_to_width(&post.summary, text_width), text_style),
        ]));
        let mut tag_spans: Vec<Span<'static>> = vec![
            indicator,
            Span::styled("  ", Style::default().bg(row_bg)),
        ];
        push_tag_spans(&mut tag_spans, &post.tags, &app.theme, row_bg);
        lines.push(Line::from(tag_spans));
        lines.push(Line::from(""));
    }

    // Scroll to keep the cursor entry visible
    let height = area.height as usize;
    let first = app.posts_cursor * ENTRY_HEIGHT;
    if first < app.posts_scroll {
        app.posts_scroll = first;
    } else if height > 0 && first + ENTRY_HEIGHT > app.posts_scroll + height {
        app.posts_scroll = first + ENTRY_HEIGHT - height;
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .scroll((app.posts_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_posts_listed_in_order() {
        let mut app = app_with_posts(sample_posts());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_posts_view(frame, &mut app, area);
        });
        let first = output.find("Hello, world").unwrap();
        let second = output.find("Terminal UIs in anger").unwrap();
        assert!(first < second);
        assert!(output.contains("May 14, 2025"));
        assert!(output.contains("#meta"));
    }

    #[test]
    fn test_empty_posts_notice() {
        let mut app = app_with_posts(vec![]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_posts_view(frame, &mut app, area);
        });
        assert!(output.contains("No posts found."));
    }
}
