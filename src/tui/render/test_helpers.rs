use std::path::PathBuf;

use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Portfolio, PortfolioConfig, Post, Profile, Project};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub fn sample_profile() -> Profile {
    Profile {
        name: "Ada".into(),
        headline: "Systems tinkerer".into(),
        bio: "I build small sharp tools.".into(),
        location: "Cambridge".into(),
        availability: "Available for new projects".into(),
        email: "ada@example.com".into(),
        github: "https://github.com/ada".into(),
        cv: "static/ada-cv.pdf".into(),
        linkedin: String::new(),
        twitter: String::new(),
    }
}

/// Two-project catalog: the first has an external link and a tag, the
/// second has neither.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "HR Agent".into(),
            description: "AI-powered HR assistant".into(),
            image: "static/images/hr.gif".into(),
            details: "Creates personalized onboarding tasks from a handful of preferences."
                .into(),
            link: Some("https://a.example".into()),
            tags: vec!["X".into()],
        },
        Project {
            id: 2,
            title: "Charity Connect".into(),
            description: "Donation site".into(),
            image: String::new(),
            details: "A platform for people in need to ask for help online.".into(),
            link: None,
            tags: vec![],
        },
    ]
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            slug: "hello".into(),
            title: "Hello, world".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
            summary: "First post".into(),
            cover_image: String::new(),
            tags: vec!["meta".into()],
        },
        Post {
            slug: "terminal-uis".into(),
            title: "Terminal UIs in anger".into(),
            date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            summary: "Notes from building one".into(),
            cover_image: String::new(),
            tags: vec![],
        },
    ]
}

/// Build a Portfolio with the given catalog and no posts.
pub fn portfolio_with_projects(projects: Vec<Project>) -> Portfolio {
    Portfolio {
        root: PathBuf::from("/tmp/test-folio"),
        file: PathBuf::from("/tmp/test-folio/portfolio.toml"),
        config: PortfolioConfig {
            profile: sample_profile(),
            projects,
            posts: vec![],
            ui: Default::default(),
        },
    }
}

/// Build an App over the given catalog.
pub fn app_with_projects(projects: Vec<Project>) -> App {
    App::new(portfolio_with_projects(projects))
}

/// Build an App with the sample posts loaded.
pub fn app_with_posts(posts: Vec<Post>) -> App {
    let mut portfolio = portfolio_with_projects(sample_projects());
    portfolio.config.posts = posts;
    App::new(portfolio)
}
