//! Rendu du ruban : cellules visibles, sélection et repères de centrage.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::picker::surface::PickerSurface;
use crate::strip::StripSurface;
use crate::ui::theme::current_theme;

/// Rend le bandeau du ruban : une ligne de repère, les cellules, une ligne
/// de repère. Les cellules partiellement hors du viewport sont rognées.
pub fn render(frame: &mut Frame, items: &[String], surface: &StripSurface, area: Rect) {
    if area.width == 0 || area.height < 3 {
        return;
    }

    let cells_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 2,
    };

    render_cells(frame, items, surface, cells_area);
    render_markers(frame, surface, area);
}

/// Rend chaque cellule visible, rognée aux bords du bandeau.
fn render_cells(frame: &mut Frame, items: &[String], surface: &StripSurface, area: Rect) {
    let theme = current_theme();
    let geometry = surface.geometry();
    let offset = surface.offset();

    for cell in surface.visible_cells() {
        let Some(label) = items.get(cell.index) else {
            continue;
        };

        let origin = geometry.cell_origin(cell.index, offset);
        let left = (origin.round() as i32).max(0);
        let right = ((origin + geometry.cell_width()).round() as i32).min(i32::from(area.width));
        if right <= left {
            continue;
        }

        let cell_rect = Rect {
            x: area.x + left as u16,
            y: area.y,
            width: (right - left) as u16,
            height: area.height,
        };

        // Fond alterné pair/impair, vert pour la cellule sélectionnée.
        let style = if surface.marked() == Some(cell.index) {
            Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
        } else if cell.index % 2 == 0 {
            Style::default().bg(theme.cell_even_bg).fg(theme.label_fg)
        } else {
            Style::default().bg(theme.cell_odd_bg).fg(theme.label_fg)
        };

        frame.render_widget(Block::default().style(style), cell_rect);

        // Libellé centré dans la cellule.
        let label_rect = Rect {
            x: cell_rect.x,
            y: cell_rect.y + cell_rect.height / 2,
            width: cell_rect.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(label.as_str())
                .alignment(Alignment::Center)
                .style(style),
            label_rect,
        );
    }
}

/// Rend les repères de la ligne médiane au-dessus et en dessous des cellules.
fn render_markers(frame: &mut Frame, surface: &StripSurface, area: Rect) {
    let theme = current_theme();
    let mid = surface.geometry().viewport_mid_x().round() as u16;
    if mid >= area.width {
        return;
    }

    let marker_style = Style::default().fg(theme.marker);
    let line = |symbol: &'static str| {
        Line::from(vec![
            Span::raw(" ".repeat(mid as usize)),
            Span::styled(symbol, marker_style),
        ])
    };

    let top = Rect { height: 1, ..area };
    let bottom = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(line("▼")), top);
    frame.render_widget(Paragraph::new(line("▲")), bottom);
}
