use cinematrack_core::WatchlistView;
use cinematrack_models::{Genre, ModelError, MovieId, WatchFilter};
use thiserror::Error;

/// One line of session input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `add [-g GENRE] [TITLE...]`
    Add {
        genre: Option<Genre>,
        title: Option<String>,
    },
    /// `title TEXT`, edits the pending title
    Title(String),
    /// `genre GENRE`, edits the pending genre
    Genre(Genre),
    Submit,
    Toggle(EntryRef),
    Delete(EntryRef),
    Filter(WatchFilter),
    List,
    Help,
    Quit,
    Empty,
}

/// How the user points at an entry: a visible row number or a full id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef {
    Row(usize),
    Id(MovieId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a row number or movie id: {0}")]
    InvalidRef(String),

    #[error("No movie at row {0}")]
    NoSuchRow(usize),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl EntryRef {
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let text = text.trim();
        let number = text.strip_prefix('#').unwrap_or(text);
        if let Ok(row) = number.parse::<usize>() {
            return Ok(EntryRef::Row(row));
        }
        text.parse::<MovieId>()
            .map(EntryRef::Id)
            .map_err(|_| CommandError::InvalidRef(text.to_string()))
    }

    /// Turn the reference into an id against the rows currently on screen.
    ///
    /// Ids pass through unchecked; the store ignores ids it does not know.
    pub fn resolve(&self, view: &WatchlistView) -> Result<MovieId, CommandError> {
        match self {
            EntryRef::Row(row) => view
                .row(*row)
                .map(|r| r.id)
                .ok_or(CommandError::NoSuchRow(*row)),
            EntryRef::Id(id) => Ok(*id),
        }
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn required<'a>(rest: &'a str, command: &'static str, argument: &'static str) -> Result<&'a str, CommandError> {
    if rest.trim().is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn parse_add(rest: &str) -> Result<SessionCommand, CommandError> {
    let (flag, after_flag) = split_word(rest);
    let (genre, title) = match flag {
        "-g" | "--genre" => {
            let (genre, title) = split_word(after_flag);
            let genre = required(genre, "add --genre", "a genre")?;
            (Some(genre.parse::<Genre>()?), title)
        }
        _ => match flag.strip_prefix("--genre=") {
            Some(genre) => (Some(genre.parse::<Genre>()?), after_flag),
            None => (None, rest),
        },
    };

    let title = (!title.is_empty()).then(|| title.to_string());
    Ok(SessionCommand::Add { genre, title })
}

pub fn parse_command(line: &str) -> Result<SessionCommand, CommandError> {
    let (command, rest) = split_word(line);

    let parsed = match command.to_lowercase().as_str() {
        "" => SessionCommand::Empty,
        "add" | "a" => parse_add(rest)?,
        "title" => SessionCommand::Title(required(rest, "title", "the movie title")?.to_string()),
        "genre" => SessionCommand::Genre(required(rest, "genre", "a genre")?.parse()?),
        "submit" => SessionCommand::Submit,
        "toggle" | "watch" | "undo" | "t" => {
            SessionCommand::Toggle(EntryRef::parse(required(rest, "toggle", "a row number or id")?)?)
        }
        "delete" | "rm" | "d" => {
            SessionCommand::Delete(EntryRef::parse(required(rest, "delete", "a row number or id")?)?)
        }
        "filter" | "f" => SessionCommand::Filter(required(rest, "filter", "all, watched or unwatched")?.parse()?),
        "all" => SessionCommand::Filter(WatchFilter::All),
        "watched" => SessionCommand::Filter(WatchFilter::Watched),
        "unwatched" => SessionCommand::Filter(WatchFilter::Unwatched),
        "list" | "ls" => SessionCommand::List,
        "help" | "?" | "h" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinematrack_core::{Outcome, WatchlistState};

    #[test]
    fn test_parse_add_with_genre_flag() {
        assert_eq!(
            parse_command("add -g sci-fi Inception").unwrap(),
            SessionCommand::Add {
                genre: Some(Genre::SciFi),
                title: Some("Inception".to_string()),
            }
        );
        assert_eq!(
            parse_command("add --genre=drama The Godfather").unwrap(),
            SessionCommand::Add {
                genre: Some(Genre::Drama),
                title: Some("The Godfather".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_add_keeps_title_text() {
        assert_eq!(
            parse_command("add Face/Off  Returns").unwrap(),
            SessionCommand::Add {
                genre: None,
                title: Some("Face/Off  Returns".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_bare_add() {
        assert_eq!(
            parse_command("add").unwrap(),
            SessionCommand::Add { genre: None, title: None }
        );
        assert_eq!(
            parse_command("add -g horror").unwrap(),
            SessionCommand::Add {
                genre: Some(Genre::Horror),
                title: None,
            }
        );
    }

    #[test]
    fn test_parse_add_with_bad_genre() {
        assert_eq!(
            parse_command("add -g western Unforgiven"),
            Err(CommandError::Model(ModelError::UnknownGenre("western".to_string())))
        );
        assert_eq!(
            parse_command("add -g"),
            Err(CommandError::MissingArgument {
                command: "add --genre",
                argument: "a genre",
            })
        );
    }

    #[test]
    fn test_parse_form_commands() {
        assert_eq!(parse_command("title  Up").unwrap(), SessionCommand::Title("Up".to_string()));
        assert_eq!(parse_command("genre Comedy").unwrap(), SessionCommand::Genre(Genre::Comedy));
        assert_eq!(parse_command("submit").unwrap(), SessionCommand::Submit);
        assert!(parse_command("title").is_err());
    }

    #[test]
    fn test_parse_toggle_and_delete() {
        assert_eq!(parse_command("watch 2").unwrap(), SessionCommand::Toggle(EntryRef::Row(2)));
        assert_eq!(parse_command("undo #1").unwrap(), SessionCommand::Toggle(EntryRef::Row(1)));
        assert_eq!(parse_command("rm 3").unwrap(), SessionCommand::Delete(EntryRef::Row(3)));

        let id = MovieId::generate();
        assert_eq!(
            parse_command(&format!("delete {}", id)).unwrap(),
            SessionCommand::Delete(EntryRef::Id(id))
        );
        assert_eq!(
            parse_command("toggle abc"),
            Err(CommandError::InvalidRef("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(parse_command("filter watched").unwrap(), SessionCommand::Filter(WatchFilter::Watched));
        assert_eq!(parse_command("Unwatched").unwrap(), SessionCommand::Filter(WatchFilter::Unwatched));
        assert_eq!(parse_command("all").unwrap(), SessionCommand::Filter(WatchFilter::All));
        assert!(parse_command("filter seen").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("   ").unwrap(), SessionCommand::Empty);
        assert_eq!(parse_command("ls").unwrap(), SessionCommand::List);
        assert_eq!(parse_command("?").unwrap(), SessionCommand::Help);
        assert_eq!(parse_command("EXIT").unwrap(), SessionCommand::Quit);
        assert_eq!(
            parse_command("rewind"),
            Err(CommandError::UnknownCommand("rewind".to_string()))
        );
    }

    #[test]
    fn test_resolve_rows_against_view() {
        let mut state = WatchlistState::new();
        let id = match state.add_movie("Heat", Genre::Action) {
            Outcome::Added { id } => id,
            other => panic!("expected Added, got {:?}", other),
        };
        let view = state.view();

        assert_eq!(EntryRef::Row(1).resolve(&view), Ok(id));
        assert_eq!(EntryRef::Row(2).resolve(&view), Err(CommandError::NoSuchRow(2)));
        assert_eq!(EntryRef::Row(0).resolve(&view), Err(CommandError::NoSuchRow(0)));

        let stranger = MovieId::generate();
        assert_eq!(EntryRef::Id(stranger).resolve(&view), Ok(stranger));
    }
}
