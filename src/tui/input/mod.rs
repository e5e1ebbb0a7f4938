mod navigate;
mod overlay;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;

/// Handle a key event for the current UI state
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Status messages are transient: any keypress clears the previous one
    app.status_message = None;

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Detail overlay intercepts all input while visible
    if app.selected.is_some() {
        overlay::handle_overlay(app, key);
        return;
    }

    navigate::handle_navigate(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::View;
    use crate::tui::render::test_helpers::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_enter_on_card_opens_overlay() {
        let mut app = app_with_projects(sample_projects());
        app.view = View::Projects;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected, Some(0));
        assert_eq!(app.selected_project().unwrap().title, "HR Agent");
    }

    #[test]
    fn test_esc_dismisses_overlay() {
        let mut app = app_with_projects(sample_projects());
        app.view = View::Projects;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_switch_project_while_overlay_open() {
        let mut app = app_with_projects(sample_projects());
        app.view = View::Projects;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected, Some(0));
        // Moves directly to the next project, never through hidden
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, Some(1));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_enter_without_link_closes_overlay() {
        let mut app = app_with_projects(sample_projects());
        app.view = View::Projects;
        app.projects_cursor = 1; // "Charity Connect" has no link
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected, Some(1));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_help_overlay_intercepts_input() {
        let mut app = app_with_projects(sample_projects());
        app.view = View::Projects;
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // Keys other than dismiss are swallowed
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected, None);
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with_projects(sample_projects());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    /// Walk the two-project scenario end to end: open the linked project,
    /// dismiss, open the unlinked one, then jump back while still open.
    #[test]
    fn test_two_project_walkthrough() {
        let mut app = app_with_projects(sample_projects());
        app.view = View::Projects;

        // Activate card 1 -> overlay shows the linked project
        press(&mut app, KeyCode::Enter);
        let p = app.selected_project().unwrap();
        assert_eq!(p.title, "HR Agent");
        assert_eq!(p.link.as_deref(), Some("https://a.example"));

        // Dismiss -> hidden
        press(&mut app, KeyCode::Esc);
        assert!(app.selected_project().is_none());

        // Activate card 2 -> overlay shows the unlinked project
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        let q = app.selected_project().unwrap();
        assert_eq!(q.title, "Charity Connect");
        assert_eq!(q.link, None);

        // Jump to card 1 while card 2's overlay is open
        press(&mut app, KeyCode::Right); // wraps from last to first
        assert_eq!(app.selected_project().unwrap().title, "HR Agent");
    }
}
