use cinematrack_models::MovieEntry;
use serde::Serialize;

/// Counters derived from the entry list. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub watched: usize,
    pub unwatched: usize,
    /// Non-empty list with every entry watched
    pub all_watched: bool,
}

impl Summary {
    pub fn from_entries(entries: &[MovieEntry]) -> Self {
        let total = entries.len();
        let watched = entries.iter().filter(|e| e.watched).count();
        Self {
            total,
            watched,
            unwatched: total - watched,
            all_watched: total > 0 && watched == total,
        }
    }
}
