//! Cœur du ruban : géométrie, sélection par centrage et scroll.
//!
//! Ce module ne dépend d'aucune bibliothèque de rendu : le sélecteur ne voit
//! sa surface qu'à travers le trait [`PickerSurface`].

pub mod geometry;
pub mod scroll;
pub mod selector;
pub mod surface;

pub use geometry::{PickerGeometry, VisibleCell};
pub use scroll::{ScrollAnimator, SettleKind};
pub use selector::CenterSnapSelector;
pub use surface::PickerSurface;
