use cinematrack_models::{Genre, MovieEntry, MovieId, WatchFilter};
use serde::Serialize;
use tracing::{debug, warn};

use crate::event::{Event, IgnoreReason, Outcome};
use crate::filter::visible_entries;
use crate::summary::Summary;

/// Ephemeral add-form input buffers. Not part of the watchlist itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PendingForm {
    pub title: String,
    pub genre: Genre,
}

/// Session-lifetime watchlist state: the entries plus the UI selection state
///
/// Every mutation is total: it either applies completely or leaves the state
/// as it was. Counts and the filtered list are derived on each read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchlistState {
    entries: Vec<MovieEntry>,
    active_filter: WatchFilter,
    form: PendingForm,
}

impl WatchlistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[MovieEntry] {
        &self.entries
    }

    pub fn active_filter(&self) -> WatchFilter {
        self.active_filter
    }

    pub fn form(&self) -> &PendingForm {
        &self.form
    }

    pub fn get(&self, id: &MovieId) -> Option<&MovieEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_entries(&self.entries)
    }

    /// Entries passing the active filter, in insertion order
    pub fn visible_entries(&self) -> impl Iterator<Item = &MovieEntry> + '_ {
        visible_entries(&self.entries, self.active_filter)
    }

    /// Apply one event in place
    pub fn apply(&mut self, event: Event) -> Outcome {
        match event {
            Event::SetPendingTitle(title) => self.set_pending_title(title),
            Event::SetPendingGenre(genre) => self.set_pending_genre(genre),
            Event::SubmitForm => self.submit_form(),
            Event::AddMovie { title, genre } => self.add_movie(&title, genre),
            Event::ToggleWatched(id) => self.toggle_watched(&id),
            Event::DeleteMovie(id) => self.delete_movie(&id),
            Event::SetFilter(filter) => self.set_filter(filter),
        }
    }

    /// Append a new unwatched entry and reset the form buffers.
    ///
    /// A title that is empty after trimming is ignored, and the buffers are kept.
    pub fn add_movie(&mut self, title: &str, genre: Genre) -> Outcome {
        let title = title.trim();
        if title.is_empty() {
            return Self::ignored("add_movie", IgnoreReason::BlankTitle);
        }

        let entry = MovieEntry::new(title.to_string(), genre);
        let id = entry.id;
        debug!(operation = "add_movie", id = %id, genre = %genre, title = title, "Added movie");
        self.entries.push(entry);
        self.form = PendingForm::default();

        Outcome::Added { id }
    }

    /// Add using the pending form buffers
    pub fn submit_form(&mut self) -> Outcome {
        let PendingForm { title, genre } = self.form.clone();
        self.add_movie(&title, genre)
    }

    pub fn set_pending_title(&mut self, title: String) -> Outcome {
        self.form.title = title;
        Outcome::FormEdited
    }

    pub fn set_pending_genre(&mut self, genre: Genre) -> Outcome {
        self.form.genre = genre;
        Outcome::FormEdited
    }

    /// Flip the watched flag of the matching entry. Unknown ids are a no-op.
    pub fn toggle_watched(&mut self, id: &MovieId) -> Outcome {
        match self.entries.iter_mut().find(|entry| entry.id == *id) {
            Some(entry) => {
                entry.watched = !entry.watched;
                debug!(operation = "toggle_watched", id = %id, watched = entry.watched, "Toggled watched");
                Outcome::Toggled {
                    id: *id,
                    watched: entry.watched,
                }
            }
            None => Self::ignored("toggle_watched", IgnoreReason::UnknownId { id: *id }),
        }
    }

    /// Remove the matching entry, keeping the order of the rest. Unknown ids are a no-op.
    pub fn delete_movie(&mut self, id: &MovieId) -> Outcome {
        match self.entries.iter().position(|entry| entry.id == *id) {
            Some(index) => {
                let removed = self.entries.remove(index);
                debug!(operation = "delete_movie", id = %id, title = %removed.title, "Deleted movie");
                Outcome::Deleted { id: *id }
            }
            None => Self::ignored("delete_movie", IgnoreReason::UnknownId { id: *id }),
        }
    }

    pub fn set_filter(&mut self, filter: WatchFilter) -> Outcome {
        self.active_filter = filter;
        debug!(operation = "set_filter", filter = %filter, "Changed filter");
        Outcome::FilterChanged { filter }
    }

    fn ignored(operation: &'static str, reason: IgnoreReason) -> Outcome {
        warn!(operation = operation, reason = %reason, "Ignoring {}", operation);
        Outcome::Ignored { reason }
    }
}
