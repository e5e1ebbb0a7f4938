use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab => {
            app.view = app.view.next();
            return;
        }
        KeyCode::BackTab => {
            app.view = app.view.prev();
            return;
        }
        KeyCode::Char('1') => {
            app.view = View::Home;
            return;
        }
        KeyCode::Char('2') => {
            app.view = View::Projects;
            return;
        }
        KeyCode::Char('3') => {
            app.view = View::Posts;
            return;
        }
        _ => {}
    }

    match app.view {
        View::Home => handle_home(app, key),
        View::Projects => handle_projects(app, key),
        View::Posts => handle_posts(app, key),
    }
}

fn handle_home(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.home_scroll = app.home_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.home_scroll = app.home_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.home_scroll = 0,
        _ => {}
    }
}

fn handle_projects(app: &mut App, key: KeyEvent) {
    let count = app.project_count();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.projects_cursor + 1 < count {
                app.projects_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.projects_cursor = app.projects_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.projects_cursor = 0,
        KeyCode::Char('G') => {
            app.projects_cursor = count.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_cursor();
        }
        _ => {}
    }
}

fn handle_posts(app: &mut App, key: KeyEvent) {
    let count = app.portfolio.posts().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.posts_cursor + 1 < count {
                app.posts_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.posts_cursor = app.posts_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.posts_cursor = 0,
        KeyCode::Char('G') => {
            app.posts_cursor = count.saturating_sub(1);
        }
        _ => {}
    }
}
