use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::portfolio_io::{discover_portfolio, load_portfolio};
use crate::model::{Portfolio, Project};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Projects,
    Posts,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Projects, View::Posts];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Projects => "Projects",
            View::Posts => "Posts",
        }
    }

    pub fn next(self) -> View {
        match self {
            View::Home => View::Projects,
            View::Projects => View::Posts,
            View::Posts => View::Home,
        }
    }

    pub fn prev(self) -> View {
        match self {
            View::Home => View::Posts,
            View::Projects => View::Home,
            View::Posts => View::Projects,
        }
    }
}

/// Main application state
pub struct App {
    pub portfolio: Portfolio,
    pub view: View,
    pub should_quit: bool,
    pub theme: Theme,
    /// Catalog index of the project open in the detail overlay.
    /// None means the overlay is hidden.
    pub selected: Option<usize>,
    /// Cursor into the project card list
    pub projects_cursor: usize,
    /// Scroll offset for the projects view (first visible row)
    pub projects_scroll: usize,
    /// Cursor into the posts list
    pub posts_cursor: usize,
    /// Scroll offset for the posts view
    pub posts_scroll: usize,
    /// Scroll offset for the home view
    pub home_scroll: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Transient message shown in the status row (e.g. link open result)
    pub status_message: Option<String>,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        let theme = Theme::from_config(&portfolio.config.ui);
        App {
            portfolio,
            view: View::Home,
            should_quit: false,
            theme,
            selected: None,
            projects_cursor: 0,
            projects_scroll: 0,
            posts_cursor: 0,
            posts_scroll: 0,
            home_scroll: 0,
            show_help: false,
            status_message: None,
        }
    }

    pub fn project_count(&self) -> usize {
        self.portfolio.projects().len()
    }

    /// The project currently shown in the detail overlay, if any.
    pub fn selected_project(&self) -> Option<&Project> {
        self.portfolio.projects().get(self.selected?)
    }

    /// Open the detail overlay for the project at the given catalog index.
    /// Replaces any existing selection; an out-of-range index is ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.project_count() {
            self.selected = Some(index);
        }
    }

    /// Close the detail overlay.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Open the overlay for the project under the cursor.
    pub fn activate_cursor(&mut self) {
        self.select(self.projects_cursor);
    }

    /// While the overlay is open, move directly to the next project
    /// (wrapping). The overlay never passes through the hidden state.
    pub fn select_next(&mut self) {
        let count = self.project_count();
        if let Some(idx) = self.selected
            && count > 0
        {
            let next = (idx + 1) % count;
            self.selected = Some(next);
            self.projects_cursor = next;
        }
    }

    /// While the overlay is open, move directly to the previous project
    /// (wrapping).
    pub fn select_prev(&mut self) {
        let count = self.project_count();
        if let Some(idx) = self.selected
            && count > 0
        {
            let prev = (idx + count - 1) % count;
            self.selected = Some(prev);
            self.projects_cursor = prev;
        }
    }

    /// Launch the selected project's external link, if it has one.
    pub fn open_selected_link(&mut self) {
        let Some(link) = self.selected_project().and_then(|p| p.link.clone()) else {
            return;
        };
        match open::that(&link) {
            Ok(()) => self.status_message = Some(format!("opened {}", link)),
            Err(e) => self.status_message = Some(format!("could not open {}: {}", link, e)),
        }
    }
}

/// Run the TUI application
pub fn run(dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    // Discover and load the portfolio
    let start = match dir {
        Some(d) => Path::new(d).to_path_buf(),
        None => std::env::current_dir()?,
    };
    let root = discover_portfolio(&start)?;
    let portfolio = load_portfolio(&root)?;

    let mut app = App::new(portfolio);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
