//! Surface de scroll terminale du ruban.

use crate::picker::{PickerGeometry, PickerSurface, ScrollAnimator, SettleKind, VisibleCell};

/// Implémentation terminale de [`PickerSurface`].
///
/// Possède la géométrie, l'animateur de scroll et l'état visuel des cellules
/// (l'unique index marqué sélectionné). Le rendu proprement dit est fait à
/// chaque image par `ui::strip_view`, qui lit cet état.
#[derive(Debug, Clone)]
pub struct StripSurface {
    geometry: PickerGeometry,
    scroll: ScrollAnimator,
    item_count: usize,
    marked: Option<usize>,
}

impl StripSurface {
    /// Crée une surface pour `item_count` cellules.
    pub fn new(geometry: PickerGeometry, item_count: usize) -> Self {
        let mut scroll = ScrollAnimator::new();
        scroll.set_max_offset(geometry.max_offset(item_count));
        Self {
            geometry,
            scroll,
            item_count,
            marked: None,
        }
    }

    /// Met à jour la géométrie et le nombre de cellules (appelé au layout).
    pub fn layout(&mut self, geometry: PickerGeometry, item_count: usize) {
        self.geometry = geometry;
        self.item_count = item_count;
        self.scroll.set_max_offset(geometry.max_offset(item_count));
        if let Some(marked) = self.marked {
            if marked >= item_count {
                self.marked = None;
            }
        }
    }

    /// Géométrie courante.
    pub fn geometry(&self) -> PickerGeometry {
        self.geometry
    }

    /// Offset de scroll courant.
    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Index actuellement marqué sélectionné, s'il existe.
    pub fn marked(&self) -> Option<usize> {
        self.marked
    }

    /// Un mouvement de scroll est-il en cours?
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Glissement sans élan (fraction de cellule).
    pub fn drag_by(&mut self, dx: f64) {
        self.scroll.drag_by(dx);
    }

    /// Lance un geste avec élan.
    pub fn fling(&mut self, velocity: f64) {
        self.scroll.fling(velocity);
    }

    /// Avance le scroll d'une image.
    pub fn tick(&mut self) -> Option<SettleKind> {
        self.scroll.tick()
    }
}

impl PickerSurface for StripSurface {
    fn render_cell(&mut self, index: usize, _label: &str, selected: bool) {
        // Le libellé est relu au moment du dessin ; seule la marque compte.
        if selected {
            self.marked = Some(index);
        } else if self.marked == Some(index) {
            self.marked = None;
        }
    }

    fn scroll_to(&mut self, x: f64, animated: bool) {
        if animated {
            self.scroll.animate_to(x);
        } else {
            self.scroll.jump_to(x);
        }
    }

    fn visible_cells(&self) -> Vec<VisibleCell> {
        self.geometry
            .visible_cells(self.item_count, self.scroll.offset())
    }
}
