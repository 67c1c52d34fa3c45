use thiserror::Error;

/// Erreurs principales de ruban.
#[derive(Debug, Error)]
pub enum RubanError {
    #[error("Erreur I/O : {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur terminal : {0}")]
    Terminal(String),
}

/// Alias pratique pour Result avec RubanError.
pub type Result<T> = std::result::Result<T, RubanError>;
