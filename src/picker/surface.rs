//! Interface de capacités entre le sélecteur et sa surface de rendu.

use crate::picker::geometry::VisibleCell;

/// Contrat que l'hôte implémente pour le sélecteur.
///
/// Le sélecteur ne dépend que de ce trait (inversion de dépendance) : il
/// émet des commandes de rendu et de scroll, et interroge la surface pour
/// obtenir l'instantané des cellules visibles. Aucune des opérations ne
/// bloque ni ne suspend ; tout s'exécute sur le fil d'événements de l'hôte.
pub trait PickerSurface {
    /// Re-rend la cellule `index` dans l'état visuel demandé.
    fn render_cell(&mut self, index: usize, label: &str, selected: bool);

    /// Demande le repositionnement du scroll à l'offset `x`.
    ///
    /// L'animation éventuelle est lancée puis oubliée : elle n'est ni
    /// attendue ni annulable par le sélecteur.
    fn scroll_to(&mut self, x: f64, animated: bool);

    /// Instantané des cellules intersectant le viewport, en ordre
    /// d'énumération de la surface.
    fn visible_cells(&self) -> Vec<VisibleCell>;
}
