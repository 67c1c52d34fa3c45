use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Hauteur du bandeau du ruban (repère, cellules, repère).
const STRIP_HEIGHT: u16 = 7;

/// Zones principales de l'application.
pub struct AppLayout {
    /// Bandeau horizontal du ruban, centré verticalement.
    pub strip: Rect,
    /// Barre d'aide persistante en bas.
    pub help_bar: Rect,
}

/// Construit le layout principal de l'application.
///
/// Disposition :
/// ┌───────────────────────────┐
/// │                           │
/// │     Ruban (7 lignes)      │
/// │                           │
/// ├───────────────────────────┤
/// │      Aide (2 lignes)      │
/// └───────────────────────────┘
pub fn build_layout(area: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let strip_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Min(0),
        ])
        .split(main_chunks[0]);

    AppLayout {
        strip: strip_chunks[1],
        help_bar: main_chunks[1],
    }
}
