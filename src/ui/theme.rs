//! Configuration des thèmes et couleurs.

use ratatui::style::Color;

/// Thème de couleurs pour l'application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Couleur de fond des cellules paires
    pub cell_even_bg: Color,
    /// Couleur de fond des cellules impaires
    pub cell_odd_bg: Color,
    /// Couleur de fond de la cellule sélectionnée
    pub selected_bg: Color,
    /// Couleur du libellé de la cellule sélectionnée
    pub selected_fg: Color,
    /// Couleur des libellés non sélectionnés
    pub label_fg: Color,
    /// Couleur des repères de la ligne médiane
    pub marker: Color,
    /// Couleur des bordures
    pub border: Color,
    /// Couleur des touches dans la barre d'aide
    pub help_key: Color,
    /// Couleur du texte de la barre d'aide
    pub help_text: Color,
}

impl Theme {
    /// Thème sombre (défaut).
    pub fn dark() -> Self {
        Self {
            cell_even_bg: Color::Blue,
            cell_odd_bg: Color::Red,
            selected_bg: Color::Green,
            selected_fg: Color::Black,
            label_fg: Color::White,
            marker: Color::Cyan,
            border: Color::DarkGray,
            help_key: Color::Cyan,
            help_text: Color::DarkGray,
        }
    }

    /// Thème clair.
    pub fn light() -> Self {
        Self {
            cell_even_bg: Color::LightBlue,
            cell_odd_bg: Color::LightRed,
            selected_bg: Color::LightGreen,
            selected_fg: Color::Black,
            label_fg: Color::Black,
            marker: Color::Blue,
            border: Color::Gray,
            help_key: Color::Blue,
            help_text: Color::DarkGray,
        }
    }
}

/// Détecte automatiquement le thème du terminal au démarrage.
fn detect_theme() -> Theme {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.5 => Theme::light(),
        _ => Theme::dark(),
    }
}

/// Thème global de l'application (détection automatique).
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(detect_theme);

/// Retourne le thème actuel.
pub fn current_theme() -> &'static Theme {
    &THEME
}
