use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{App, AppAction, ViewMode};

/// Cadence de poll : assez courte pour que l'animateur avance à ~30 images
/// par seconde entre deux saisies.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// Poll un événement clavier et retourne l'action correspondante.
pub fn handle_input(app: &App) -> std::io::Result<Option<AppAction>> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            return Ok(map_key(key, app));
        }
    }
    Ok(None)
}

/// Mappe un événement clavier à une action de l'application.
fn map_key(key: KeyEvent, app: &App) -> Option<AppAction> {
    // Ctrl+C quitte toujours.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppAction::Quit);
    }

    // Escape ferme l'overlay d'aide si actif.
    if key.code == KeyCode::Esc && app.view_mode == ViewMode::Help {
        return Some(AppAction::ToggleHelp);
    }

    // Shift+flèches : lancer avec élan.
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Left => return Some(AppAction::FlingLeft),
            KeyCode::Right => return Some(AppAction::FlingRight),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppAction::Quit),
        KeyCode::Char('?') => Some(AppAction::ToggleHelp),
        KeyCode::Left | KeyCode::Char('h') => Some(AppAction::StepLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(AppAction::StepRight),
        KeyCode::Char('H') => Some(AppAction::FlingLeft),
        KeyCode::Char('L') => Some(AppAction::FlingRight),
        KeyCode::Char('g') | KeyCode::Home => Some(AppAction::SelectFirst),
        KeyCode::Char('G') | KeyCode::End => Some(AppAction::SelectLast),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Some(AppAction::SelectIndex(c as usize - '0' as usize))
        }
        _ => None,
    }
}
