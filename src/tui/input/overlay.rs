use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Keys while the detail overlay is visible.
///
/// Dismiss is always reachable: Esc, q, and x all close, and Enter closes
/// when the project has no external link.
pub(super) fn handle_overlay(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => {
            app.clear_selection();
        }
        KeyCode::Enter => {
            // Visit the link if there is one, otherwise act as the
            // close confirmation.
            if app.selected_project().is_some_and(|p| p.link.is_some()) {
                app.open_selected_link();
            } else {
                app.clear_selection();
            }
        }
        KeyCode::Char('o') => {
            app.open_selected_link();
        }
        // Browse neighboring projects without closing the overlay
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            app.select_next();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.select_prev();
        }
        _ => {}
    }
}
