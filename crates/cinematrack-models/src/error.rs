use thiserror::Error;

/// Errors raised while turning user-typed text into model values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown genre: {0}. Use one of Action, Drama, Comedy, Sci-Fi, Horror, Romance")]
    UnknownGenre(String),

    #[error("Unknown filter: {0}. Use 'all', 'watched' or 'unwatched'")]
    UnknownFilter(String),

    #[error("Invalid movie id: {0}")]
    InvalidId(String),
}
