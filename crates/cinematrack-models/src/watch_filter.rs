use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ModelError, MovieEntry};

/// Which entries the list shows. Applies to the displayed list only, never to
/// the underlying collection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WatchFilter {
    #[default]
    All,
    Watched,
    Unwatched,
}

impl WatchFilter {
    /// Filters in the order the filter controls present them
    pub const ALL: [WatchFilter; 3] = [WatchFilter::All, WatchFilter::Watched, WatchFilter::Unwatched];

    pub fn matches(&self, entry: &MovieEntry) -> bool {
        match self {
            WatchFilter::All => true,
            WatchFilter::Watched => entry.watched,
            WatchFilter::Unwatched => !entry.watched,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchFilter::All => "All",
            WatchFilter::Watched => "Watched",
            WatchFilter::Unwatched => "Unwatched",
        }
    }
}

impl fmt::Display for WatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(WatchFilter::All),
            "watched" => Ok(WatchFilter::Watched),
            "unwatched" => Ok(WatchFilter::Unwatched),
            _ => Err(ModelError::UnknownFilter(s.to_string())),
        }
    }
}
