//! Cœur du ruban : sélection par alignement sur la ligne médiane.

use crate::picker::geometry::PickerGeometry;
use crate::picker::surface::PickerSurface;

/// Sélecteur à centrage automatique.
///
/// Décide quel élément doit être sélectionné et centré, soit sur demande
/// explicite (`select_item`), soit à la fin d'un geste de scroll
/// (`on_scroll_settled`), et pilote la surface pour centrer cet élément.
///
/// Invariant : si une sélection existe, son index est valide, et au plus une
/// cellule est marquée sélectionnée à tout instant observable (l'ancienne est
/// dé-marquée avant que la nouvelle ne soit marquée).
#[derive(Debug, Clone)]
pub struct CenterSnapSelector {
    items: Vec<String>,
    selected: Option<usize>,
    geometry: PickerGeometry,
}

impl CenterSnapSelector {
    /// Crée un sélecteur sans sélection initiale.
    pub fn new(items: Vec<String>, geometry: PickerGeometry) -> Self {
        Self {
            items,
            selected: None,
            geometry,
        }
    }

    /// Met à jour la géométrie (fournie par l'hôte au moment du layout).
    pub fn set_geometry(&mut self, geometry: PickerGeometry) {
        self.geometry = geometry;
    }

    /// Remplace la séquence d'éléments.
    ///
    /// Si la sélection courante dépasse la nouvelle longueur, elle est
    /// ramenée au dernier index valide et re-centrée sans animation ; elle
    /// n'est effacée que si la nouvelle séquence est vide.
    pub fn set_items<S: PickerSurface>(&mut self, surface: &mut S, items: Vec<String>) {
        if let Some(selected) = self.selected {
            if let Some(label) = self.items.get(selected) {
                surface.render_cell(selected, label, false);
            }
        }
        self.items = items;

        match self.selected {
            Some(_) if self.items.is_empty() => self.selected = None,
            Some(selected) => {
                let clamped = selected.min(self.items.len() - 1);
                self.selected = None;
                self.select_item(surface, clamped, false);
            }
            None => {}
        }
    }

    /// Éléments courants.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Nombre d'éléments.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// La séquence est-elle vide?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index actuellement sélectionné, s'il existe.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Sélectionne l'élément `index` et demande son centrage.
    ///
    /// Un index hors bornes ne fait rien : pas d'erreur, pas de signal.
    /// Sinon : dé-marque l'ancienne sélection,
    /// marque la nouvelle, puis demande le scroll vers l'offset qui centre la
    /// cellule, en honorant le drapeau `animated` tel quel.
    pub fn select_item<S: PickerSurface>(&mut self, surface: &mut S, index: usize, animated: bool) {
        if index >= self.items.len() {
            return;
        }

        // Dé-marquer l'ancienne sélection avant de marquer la nouvelle.
        if let Some(previous) = self.selected.take() {
            if let Some(label) = self.items.get(previous) {
                surface.render_cell(previous, label, false);
            }
        }

        self.selected = Some(index);
        surface.render_cell(index, &self.items[index], true);
        surface.scroll_to(self.geometry.centering_offset(index), animated);
    }

    /// À appeler quand un geste se termine : fin de drag sans décélération
    /// (`will_decelerate = false`), sinon attendre la fin de la décélération.
    pub fn on_drag_ended<S: PickerSurface>(&mut self, surface: &mut S, will_decelerate: bool) {
        if !will_decelerate {
            self.on_scroll_settled(surface);
        }
    }

    /// Résout la cellule la mieux centrée et la sélectionne.
    ///
    /// Parmi les cellules visibles, ne garde que celles dont le point médian
    /// tombe strictement dans la bande médiane (largeur = une cellule,
    /// centrée sur la ligne médiane du viewport). En cas d'égalité, la
    /// dernière énumérée gagne. Si aucune ne qualifie, la résolution retombe
    /// sur l'index 0 (comportement historique, conservé à dessein).
    ///
    /// Les bords (premier et dernier index) sont alignés sans animation ;
    /// tous les index intérieurs sont animés.
    pub fn on_scroll_settled<S: PickerSurface>(&mut self, surface: &mut S) {
        let viewport_mid_x = self.geometry.viewport_mid_x();
        let half_cell = self.geometry.cell_width() / 2.0;

        let mut resolved = 0;
        for cell in surface.visible_cells() {
            let in_band =
                cell.mid_x > viewport_mid_x - half_cell && cell.mid_x < viewport_mid_x + half_cell;
            if in_band {
                resolved = cell.index;
            }
        }

        let last = self.items.len().saturating_sub(1);
        let animated = resolved != 0 && resolved != last;
        self.select_item(surface, resolved, animated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::geometry::VisibleCell;

    /// Surface factice qui enregistre les commandes émises par le sélecteur.
    #[derive(Debug, Default)]
    struct MockSurface {
        /// Journal des commandes render_cell : (index, selected).
        renders: Vec<(usize, bool)>,
        /// Journal des commandes scroll_to : (offset, animated).
        scrolls: Vec<(f64, bool)>,
        /// Cellules visibles retournées par l'instantané.
        visible: Vec<VisibleCell>,
        /// Ensemble des index actuellement marqués sélectionnés.
        marked: Vec<usize>,
        /// Nombre maximal d'index marqués simultanément observé.
        max_marked: usize,
    }

    impl PickerSurface for MockSurface {
        fn render_cell(&mut self, index: usize, _label: &str, selected: bool) {
            self.renders.push((index, selected));
            if selected {
                self.marked.push(index);
            } else {
                self.marked.retain(|&marked| marked != index);
            }
            self.max_marked = self.max_marked.max(self.marked.len());
        }

        fn scroll_to(&mut self, x: f64, animated: bool) {
            self.scrolls.push((x, animated));
        }

        fn visible_cells(&self) -> Vec<VisibleCell> {
            self.visible.clone()
        }
    }

    fn selector(count: usize) -> CenterSnapSelector {
        let items = (0..count).map(|index| index.to_string()).collect();
        CenterSnapSelector::new(items, PickerGeometry::new(80.0))
    }

    #[test]
    fn test_select_valid_index() {
        // Scénario : 10 éléments, aucune sélection initiale.
        let mut sel = selector(10);
        let mut surface = MockSurface::default();

        sel.select_item(&mut surface, 3, true);

        assert_eq!(sel.selected_index(), Some(3));
        assert_eq!(surface.marked, vec![3]);
        // Scroll demandé vers l'offset qui centre la cellule 3, animé.
        assert_eq!(surface.scrolls, vec![(60.0, true)]);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        sel.select_item(&mut surface, 4, true);
        surface.renders.clear();
        surface.scrolls.clear();

        sel.select_item(&mut surface, 10, true);

        // Sélection inchangée, aucune commande émise.
        assert_eq!(sel.selected_index(), Some(4));
        assert!(surface.renders.is_empty());
        assert!(surface.scrolls.is_empty());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();

        sel.select_item(&mut surface, 5, true);
        sel.select_item(&mut surface, 5, true);

        assert_eq!(sel.selected_index(), Some(5));
        assert_eq!(surface.marked, vec![5]);
    }

    #[test]
    fn test_previous_selection_unmarked_before_new_one() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();

        sel.select_item(&mut surface, 2, true);
        sel.select_item(&mut surface, 7, true);

        // L'ancienne cellule est dé-marquée avant que la nouvelle soit
        // marquée : jamais deux cellules sélectionnées en même temps.
        assert_eq!(
            surface.renders,
            vec![(2, true), (2, false), (7, true)]
        );
        assert_eq!(surface.max_marked, 1);
        assert_eq!(surface.marked, vec![7]);
    }

    #[test]
    fn test_explicit_select_honors_animated_flag_at_edges() {
        // Un appel explicite honore toujours le drapeau passé ; seul le
        // chemin de fin de scroll force animated=false aux bords.
        let mut sel = selector(10);
        let mut surface = MockSurface::default();

        sel.select_item(&mut surface, 0, true);

        assert_eq!(surface.scrolls, vec![(0.0, true)]);
    }

    #[test]
    fn test_settle_resolves_last_qualifying_cell() {
        // Scénario : cellules 4 et 5 toutes deux dans la bande médiane,
        // la dernière énumérée gagne.
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![
            VisibleCell { index: 4, mid_x: 31.0 },
            VisibleCell { index: 5, mid_x: 49.0 },
        ];

        sel.on_scroll_settled(&mut surface);

        assert_eq!(sel.selected_index(), Some(5));
        assert_eq!(surface.scrolls, vec![(100.0, true)]);
    }

    #[test]
    fn test_settle_band_bounds_are_strict() {
        // Bande médiane pour un conteneur de 80 : ]30, 50[. Un point médian
        // exactement sur la borne ne qualifie pas.
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![
            VisibleCell { index: 3, mid_x: 30.0 },
            VisibleCell { index: 4, mid_x: 50.0 },
            VisibleCell { index: 2, mid_x: 40.0 },
        ];

        sel.on_scroll_settled(&mut surface);

        assert_eq!(sel.selected_index(), Some(2));
    }

    #[test]
    fn test_settle_at_first_cell_is_not_animated() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![VisibleCell { index: 0, mid_x: 40.0 }];

        sel.on_scroll_settled(&mut surface);

        assert_eq!(sel.selected_index(), Some(0));
        assert_eq!(surface.scrolls, vec![(0.0, false)]);
    }

    #[test]
    fn test_settle_at_last_cell_is_not_animated() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![VisibleCell { index: 9, mid_x: 40.0 }];

        sel.on_scroll_settled(&mut surface);

        assert_eq!(sel.selected_index(), Some(9));
        assert_eq!(surface.scrolls, vec![(180.0, false)]);
    }

    #[test]
    fn test_settle_interior_cell_is_animated() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![VisibleCell { index: 6, mid_x: 41.5 }];

        sel.on_scroll_settled(&mut surface);

        assert_eq!(surface.scrolls, vec![(120.0, true)]);
    }

    #[test]
    fn test_settle_with_empty_band_falls_back_to_first() {
        // Aucune cellule dans la bande : la résolution retombe sur l'index 0
        // (comportement historique, conservé).
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![VisibleCell { index: 7, mid_x: 75.0 }];

        sel.on_scroll_settled(&mut surface);

        assert_eq!(sel.selected_index(), Some(0));
        assert_eq!(surface.scrolls, vec![(0.0, false)]);
    }

    #[test]
    fn test_drag_ended_without_deceleration_settles_immediately() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![VisibleCell { index: 3, mid_x: 38.0 }];

        sel.on_drag_ended(&mut surface, false);
        assert_eq!(sel.selected_index(), Some(3));

        // Avec décélération à venir : rien ne se passe encore.
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        surface.visible = vec![VisibleCell { index: 3, mid_x: 38.0 }];
        sel.on_drag_ended(&mut surface, true);
        assert_eq!(sel.selected_index(), None);
    }

    #[test]
    fn test_set_items_clamps_selection() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        sel.select_item(&mut surface, 8, true);

        let shorter = (0..4).map(|index| index.to_string()).collect();
        sel.set_items(&mut surface, shorter);

        // Ramenée au dernier index valide, re-centrée sans animation.
        assert_eq!(sel.selected_index(), Some(3));
        assert_eq!(surface.marked, vec![3]);
        assert_eq!(surface.scrolls.last(), Some(&(60.0, false)));
    }

    #[test]
    fn test_set_items_with_empty_sequence_clears_selection() {
        let mut sel = selector(10);
        let mut surface = MockSurface::default();
        sel.select_item(&mut surface, 2, true);

        sel.set_items(&mut surface, Vec::new());

        assert_eq!(sel.selected_index(), None);
        assert!(surface.marked.is_empty());
    }

    #[test]
    fn test_select_on_empty_sequence_is_noop() {
        let mut sel = selector(0);
        let mut surface = MockSurface::default();

        sel.select_item(&mut surface, 0, true);
        sel.on_scroll_settled(&mut surface);

        assert_eq!(sel.selected_index(), None);
        assert!(surface.renders.is_empty());
    }
}
