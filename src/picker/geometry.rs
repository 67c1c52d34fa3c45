//! Géométrie du viewport : largeur des cellules, marges et points médians.

/// Cellule actuellement visible dans le viewport.
///
/// Instantané transitoire recalculé à la demande : l'index de la cellule et
/// l'abscisse de son point médian, exprimée dans le repère du conteneur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCell {
    /// Index de la cellule dans la séquence d'éléments.
    pub index: usize,
    /// Abscisse du point médian de la cellule à l'écran.
    pub mid_x: f64,
}

/// Géométrie du ruban : largeur du conteneur et largeur d'une cellule.
///
/// Toutes les grandeurs sont en colonnes (f64 pour que les points médians et
/// les offsets fractionnaires restent exacts pendant les animations).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerGeometry {
    container_width: f64,
    cell_width: f64,
}

/// Nombre de cellules couvrant la largeur du conteneur (une cellule occupe
/// un quart du conteneur).
const CELLS_PER_CONTAINER: f64 = 4.0;

impl PickerGeometry {
    /// Crée la géométrie pour un conteneur donné ; la largeur de cellule est
    /// dérivée du conteneur (un quart de sa largeur).
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            cell_width: container_width / CELLS_PER_CONTAINER,
        }
    }

    /// Largeur d'une cellule.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Marge horizontale sur chaque bord, telle que la première et la
    /// dernière cellule puissent être centrées.
    pub fn inset(&self) -> f64 {
        (self.container_width - self.cell_width) / 2.0
    }

    /// Abscisse de la ligne médiane du viewport.
    pub fn viewport_mid_x(&self) -> f64 {
        self.container_width / 2.0
    }

    /// Offset de scroll qui aligne le point médian de la cellule `index` sur
    /// la ligne médiane du viewport.
    ///
    /// Grâce à la marge `inset`, centrer la cellule 0 correspond à l'offset 0.
    pub fn centering_offset(&self, index: usize) -> f64 {
        index as f64 * self.cell_width
    }

    /// Offset maximal : celui qui centre la dernière cellule (0 si vide).
    pub fn max_offset(&self, item_count: usize) -> f64 {
        self.centering_offset(item_count.saturating_sub(1))
    }

    /// Origine (bord gauche) de la cellule `index` à l'écran, pour un offset
    /// de scroll donné.
    pub fn cell_origin(&self, index: usize, offset: f64) -> f64 {
        self.inset() + index as f64 * self.cell_width - offset
    }

    /// Point médian de la cellule `index` à l'écran.
    pub fn cell_mid_x(&self, index: usize, offset: f64) -> f64 {
        self.cell_origin(index, offset) + self.cell_width / 2.0
    }

    /// Énumère les cellules dont le cadre intersecte le viewport, en ordre
    /// d'index croissant (l'ordre d'énumération dont dépend le départage).
    pub fn visible_cells(&self, item_count: usize, offset: f64) -> Vec<VisibleCell> {
        (0..item_count)
            .filter(|&index| {
                let origin = self.cell_origin(index, offset);
                origin + self.cell_width > 0.0 && origin < self.container_width
            })
            .map(|index| VisibleCell {
                index,
                mid_x: self.cell_mid_x(index, offset),
            })
            .collect()
    }
}
