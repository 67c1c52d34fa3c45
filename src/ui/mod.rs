pub mod help_bar;
pub mod help_overlay;
pub mod input;
pub mod layout;
pub mod strip_view;
pub mod theme;

#[cfg(test)]
pub mod tests;

use ratatui::Frame;

use crate::app::ViewMode;
use crate::strip::StripSurface;

/// Point d'entrée du rendu : dessine le ruban et les barres.
pub fn render(
    frame: &mut Frame,
    items: &[String],
    surface: &StripSurface,
    selected: Option<usize>,
    view_mode: ViewMode,
) {
    let layout = layout::build_layout(frame.area());

    // Rendu du bandeau du ruban.
    strip_view::render(frame, items, surface, layout.strip);

    // Rendu de la barre d'aide.
    help_bar::render(frame, selected, items.len(), layout.help_bar);

    // Overlay d'aide (si actif).
    if view_mode == ViewMode::Help {
        help_overlay::render(frame, frame.area());
    }
}
