use cinematrack_models::{Genre, MovieId, WatchFilter};
use std::fmt;

/// A discrete user action fed to the store, one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Title field edited
    SetPendingTitle(String),
    /// Genre selection changed
    SetPendingGenre(Genre),
    /// Add form submitted with whatever the pending buffers hold
    SubmitForm,
    /// Add a movie directly, bypassing the form buffers (they are still reset on success)
    AddMovie { title: String, genre: Genre },
    ToggleWatched(MovieId),
    DeleteMovie(MovieId),
    SetFilter(WatchFilter),
}

/// What an event did to the state
///
/// Purely informational: the store never fails, and an `Ignored` outcome
/// guarantees the state was left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { id: MovieId },
    Toggled { id: MovieId, watched: bool },
    Deleted { id: MovieId },
    FilterChanged { filter: WatchFilter },
    FormEdited,
    Ignored { reason: IgnoreReason },
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Title was empty after trimming
    BlankTitle,
    /// No entry carries this id
    UnknownId { id: MovieId },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::BlankTitle => write!(f, "title is empty"),
            IgnoreReason::UnknownId { id } => write!(f, "no movie with id {}", id),
        }
    }
}
