//! Tests de rendu pour les composants UI.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::app::ViewMode;
use crate::picker::PickerGeometry;
use crate::strip::StripSurface;

/// Helper pour capturer le rendu d'un composant.
pub fn render_to_string<F>(width: u16, height: u16, render_fn: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            render_fn(frame);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer_to_string(buffer)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }
    output
}

fn test_items() -> Vec<String> {
    (0..10).map(|i| i.to_string()).collect()
}

#[test]
fn test_render_shows_visible_labels() {
    let items = test_items();
    let surface = StripSurface::new(PickerGeometry::new(40.0), items.len());

    let output = render_to_string(40, 12, |frame| {
        super::render(frame, &items, &surface, None, ViewMode::Picker);
    });

    // À l'offset 0, les premières cellules sont visibles (libellés centrés,
    // donc entourés d'espaces).
    assert!(output.contains(" 0 "));
    assert!(output.contains(" 1 "));
    // Repères de la ligne médiane.
    assert!(output.contains('▼'));
    assert!(output.contains('▲'));
}

#[test]
fn test_render_help_bar_and_counter() {
    let items = test_items();
    let surface = StripSurface::new(PickerGeometry::new(100.0), items.len());

    let output = render_to_string(100, 12, |frame| {
        super::render(frame, &items, &surface, Some(4), ViewMode::Picker);
    });

    assert!(output.contains("5/10"));
    assert!(output.contains("quitter"));
}

#[test]
fn test_render_scrolled_strip_hides_first_cell() {
    let items = test_items();
    let mut surface = StripSurface::new(PickerGeometry::new(40.0), items.len());
    // Centrer la cellule 5 : la cellule 0 sort du viewport.
    use crate::picker::PickerSurface;
    surface.scroll_to(surface.geometry().centering_offset(5), false);

    let output = render_to_string(40, 12, |frame| {
        super::render(frame, &items, &surface, None, ViewMode::Picker);
    });

    assert!(output.contains(" 5 "));
    assert!(!output.contains(" 0 "));
}

#[test]
fn test_render_help_overlay() {
    let items = test_items();
    let surface = StripSurface::new(PickerGeometry::new(60.0), items.len());

    let output = render_to_string(60, 20, |frame| {
        super::render(frame, &items, &surface, None, ViewMode::Help);
    });

    assert!(output.contains("Aide"));
    assert!(output.contains("Sélection"));
}
