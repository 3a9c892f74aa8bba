use cinematrack_models::{Genre, MovieId, WatchFilter};
use serde::Serialize;

use crate::store::WatchlistState;
use crate::summary::Summary;

pub const APP_TITLE: &str = "CinemaTrack";
pub const APP_SUBTITLE: &str = "Your Movie Watchlist";
pub const ALL_WATCHED_MESSAGE: &str = "You watched everything! Time to add more movies.";
pub const EMPTY_STATE_MESSAGE: &str = "No movies found. Add one!";

/// One visible list row, with the labels its controls carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    /// 1-based position in the visible list
    pub position: usize,
    pub id: MovieId,
    pub title: String,
    pub genre: Genre,
    pub watched: bool,
    pub status_label: &'static str,
    pub toggle_label: &'static str,
}

/// Everything a renderer needs for one frame, projected from the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchlistView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: Summary,
    pub filter: WatchFilter,
    pub pending_title: String,
    pub pending_genre: Genre,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub rows: Vec<EntryRow>,
}

impl WatchlistView {
    pub fn project(state: &WatchlistState) -> Self {
        let summary = state.summary();
        let rows: Vec<EntryRow> = state
            .visible_entries()
            .enumerate()
            .map(|(index, entry)| EntryRow {
                position: index + 1,
                id: entry.id,
                title: entry.title.clone(),
                genre: entry.genre,
                watched: entry.watched,
                status_label: if entry.watched { "Watched ✓" } else { "Unwatched" },
                toggle_label: if entry.watched { "Undo" } else { "Watch" },
            })
            .collect();

        Self {
            title: APP_TITLE,
            subtitle: APP_SUBTITLE,
            summary,
            filter: state.active_filter(),
            pending_title: state.form().title.clone(),
            pending_genre: state.form().genre,
            banner: summary.all_watched.then_some(ALL_WATCHED_MESSAGE),
            empty_message: rows.is_empty().then_some(EMPTY_STATE_MESSAGE),
            rows,
        }
    }

    /// Look up a row by its 1-based position
    pub fn row(&self, position: usize) -> Option<&EntryRow> {
        position.checked_sub(1).and_then(|index| self.rows.get(index))
    }
}

impl WatchlistState {
    pub fn view(&self) -> WatchlistView {
        WatchlistView::project(self)
    }
}
