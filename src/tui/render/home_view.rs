use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

/// Render the home view: profile intro, social links, and the most
/// recent posts.
pub fn render_home_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let profile = &app.portfolio.config.profile;

    let name_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let link_style = Style::default().fg(app.theme.cyan).bg(bg);
    let badge_style = Style::default().fg(app.theme.green).bg(bg);

    let text_width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Hi, I'm {}", profile.name),
        name_style,
    )));
    if !profile.headline.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", profile.headline),
            text_style,
        )));
    }
    lines.push(Line::from(""));

    for wrapped in wrap_text(&profile.bio, text_width) {
        lines.push(Line::from(Span::styled(format!(" {}", wrapped), text_style)));
    }
    lines.push(Line::from(""));

    if !profile.location.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" \u{25CB} {}", profile.location),
            dim_style,
        )));
    }
    if !profile.availability.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" \u{25CF} {}", profile.availability),
            badge_style,
        )));
    }
    lines.push(Line::from(""));

    for (label, value) in [
        ("mail", &profile.email),
        ("github", &profile.github),
        ("cv", &profile.cv),
        ("linkedin", &profile.linkedin),
        ("twitter", &profile.twitter),
    ] {
        if !value.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<9}", label), dim_style),
                Span::styled(value.clone(), link_style),
            ]));
        }
    }

    // Recent posts, capped at MAX_RECENT_POSTS
    let recent = app.portfolio.recent_posts();
    if !recent.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Recent posts", name_style)));
        for post in recent {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<14}", post.display_date()), dim_style),
                Span::styled(post.title.clone(), text_style),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .scroll((app.home_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::portfolio::MAX_RECENT_POSTS;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_home_shows_profile() {
        let app = app_with_projects(sample_projects());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        assert!(output.contains("Hi, I'm Ada"));
        assert!(output.contains("Systems tinkerer"));
        assert!(output.contains("Available for new projects"));
        assert!(output.contains("ada@example.com"));
        assert!(output.contains("static/ada-cv.pdf"));
        // Unset socials are skipped
        assert!(!output.contains("linkedin"));
    }

    #[test]
    fn test_recent_posts_capped() {
        let posts: Vec<_> = (1u32..=8)
            .map(|i| crate::model::Post {
                slug: format!("p{}", i),
                title: format!("Post {}", i),
                date: chrono::NaiveDate::from_ymd_opt(2025, 1, i).unwrap(),
                summary: String::new(),
                cover_image: String::new(),
                tags: vec![],
            })
            .collect();
        let app = app_with_posts(posts);
        let output = render_to_string(TERM_W, 40, |frame, area| {
            render_home_view(frame, &app, area);
        });
        assert!(output.contains(&format!("Post {}", MAX_RECENT_POSTS)));
        assert!(!output.contains(&format!("Post {}", MAX_RECENT_POSTS + 1)));
    }
}
