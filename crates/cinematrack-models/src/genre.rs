use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Closed set of genres a movie can be filed under
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    /// Preselected in the add form, and restored after every successful add
    #[default]
    Action,
    Drama,
    Comedy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Horror,
    Romance,
}

impl Genre {
    /// All genres in the order the add form offers them
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Drama,
        Genre::Comedy,
        Genre::SciFi,
        Genre::Horror,
        Genre::Romance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::SciFi => "Sci-Fi",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "action" => Ok(Genre::Action),
            "drama" => Ok(Genre::Drama),
            "comedy" => Ok(Genre::Comedy),
            "sci-fi" | "scifi" | "sci_fi" => Ok(Genre::SciFi),
            "horror" => Ok(Genre::Horror),
            "romance" => Ok(Genre::Romance),
            _ => Err(ModelError::UnknownGenre(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_action() {
        assert_eq!(Genre::default(), Genre::Action);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DRAMA".parse::<Genre>().unwrap(), Genre::Drama);
        assert_eq!("Sci-Fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("scifi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!(" romance ".parse::<Genre>().unwrap(), Genre::Romance);
    }

    #[test]
    fn test_parse_unknown_genre() {
        assert_eq!(
            "Western".parse::<Genre>(),
            Err(ModelError::UnknownGenre("Western".to_string()))
        );
    }

    #[test]
    fn test_display_matches_form_labels() {
        let labels: Vec<String> = Genre::ALL.iter().map(|g| g.to_string()).collect();
        assert_eq!(labels, vec!["Action", "Drama", "Comedy", "Sci-Fi", "Horror", "Romance"]);
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"Sci-Fi\"");
        let genre: Genre = serde_json::from_str("\"Horror\"").unwrap();
        assert_eq!(genre, Genre::Horror);
    }
}
