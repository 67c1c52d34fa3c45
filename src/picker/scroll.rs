//! Animateur de scroll : glissements, élans et animations commandées.
//!
//! Tient lieu de surface de scroll pour le terminal : un offset en colonnes,
//! avancé image par image. Deux sortes de mouvement coexistent sans jamais
//! se superposer : l'animation commandée (ease-out exponentiel vers une
//! cible, déclenchée par un `scroll_to` animé) et le geste (élan initial
//! amorti par friction, borné aux extrémités du contenu).

/// Sorte de mouvement qui vient de s'immobiliser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleKind {
    /// Fin d'une animation commandée (scroll programmatique animé).
    Command,
    /// Fin de la décélération d'un geste.
    Gesture,
}

/// Mouvement en cours.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    Command { target: f64 },
    Gesture { velocity: f64 },
}

/// Facteur d'ease-out par image pour les animations commandées.
/// `offset += (target - offset) * EASE` : settle visible en ~8 images à 30 fps.
const EASE: f64 = 0.35;

/// Distance (colonnes) sous laquelle une animation commandée s'aligne sur sa
/// cible et s'arrête.
const SNAP_EPSILON: f64 = 0.5;

/// Friction appliquée à la vitesse d'un geste à chaque image.
const FRICTION: f64 = 0.85;

/// Vitesse (colonnes/image) sous laquelle un geste est considéré immobile.
const REST_VELOCITY: f64 = 0.1;

/// Animateur de scroll horizontal borné.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    offset: f64,
    max_offset: f64,
    motion: Motion,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollAnimator {
    /// Crée un animateur immobile à l'offset 0.
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            motion: Motion::Idle,
        }
    }

    /// Offset courant.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Un mouvement est-il en cours?
    pub fn is_animating(&self) -> bool {
        self.motion != Motion::Idle
    }

    /// Définit la borne supérieure de l'offset (celle qui centre la dernière
    /// cellule) et y ramène l'offset courant si nécessaire.
    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        self.offset = self.clamp(self.offset);
        // Une cible commandée devenue hors bornes est ramenée aussi, sinon
        // l'animation ne s'achèverait jamais.
        if let Motion::Command { target } = self.motion {
            self.motion = Motion::Command {
                target: self.clamp(target),
            };
        }
    }

    /// Saute directement à `x` (scroll non animé). Interrompt tout mouvement.
    pub fn jump_to(&mut self, x: f64) {
        self.offset = self.clamp(x);
        self.motion = Motion::Idle;
    }

    /// Lance une animation commandée vers `x`.
    pub fn animate_to(&mut self, x: f64) {
        self.motion = Motion::Command {
            target: self.clamp(x),
        };
    }

    /// Déplace l'offset sans élan (glissement au doigt).
    pub fn drag_by(&mut self, dx: f64) {
        self.offset = self.clamp(self.offset + dx);
        self.motion = Motion::Idle;
    }

    /// Lance un geste avec une vitesse initiale (colonnes/image).
    pub fn fling(&mut self, velocity: f64) {
        self.motion = Motion::Gesture { velocity };
    }

    /// Avance le mouvement d'une image.
    ///
    /// Retourne la sorte de mouvement qui vient de s'immobiliser, le cas
    /// échéant — une seule fois par mouvement.
    pub fn tick(&mut self) -> Option<SettleKind> {
        match self.motion {
            Motion::Idle => None,
            Motion::Command { target } => {
                self.offset += (target - self.offset) * EASE;
                if (target - self.offset).abs() < SNAP_EPSILON {
                    self.offset = target;
                    self.motion = Motion::Idle;
                    Some(SettleKind::Command)
                } else {
                    None
                }
            }
            Motion::Gesture { velocity } => {
                self.offset += velocity;
                let clamped = self.clamp(self.offset);
                // Une butée absorbe tout l'élan restant.
                let velocity = if clamped != self.offset { 0.0 } else { velocity * FRICTION };
                self.offset = clamped;

                if velocity.abs() < REST_VELOCITY {
                    self.motion = Motion::Idle;
                    Some(SettleKind::Gesture)
                } else {
                    self.motion = Motion::Gesture { velocity };
                    None
                }
            }
        }
    }

    fn clamp(&self, x: f64) -> f64 {
        x.clamp(0.0, self.max_offset)
    }
}
