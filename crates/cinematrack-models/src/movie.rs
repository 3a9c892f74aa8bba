use serde::{Deserialize, Serialize};

use crate::{Genre, MovieId};

/// One tracked movie
///
/// `id`, `title` and `genre` are fixed at creation; `watched` is the only
/// field that changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieEntry {
    pub id: MovieId,
    pub title: String,
    pub genre: Genre,
    pub watched: bool,
}

impl MovieEntry {
    /// Create an unwatched entry with a freshly generated id.
    ///
    /// The caller is responsible for passing an already trimmed, non-empty title.
    pub fn new(title: String, genre: Genre) -> Self {
        Self {
            id: MovieId::generate(),
            title,
            genre,
            watched: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_unwatched() {
        let entry = MovieEntry::new("Inception".to_string(), Genre::SciFi);
        assert_eq!(entry.title, "Inception");
        assert_eq!(entry.genre, Genre::SciFi);
        assert!(!entry.watched);
    }

    #[test]
    fn test_serializes_with_genre_label() {
        let entry = MovieEntry::new("Alien".to_string(), Genre::Horror);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["title"], "Alien");
        assert_eq!(json["genre"], "Horror");
        assert_eq!(json["watched"], false);
        assert_eq!(json["id"], entry.id.to_string());
    }
}
