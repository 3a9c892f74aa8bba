use super::parser::{parse_command, CommandError, SessionCommand};
use super::prompts;
use super::render::{Renderer, HELP};
use crate::output::{Output, OutputFormat};
use cinematrack_config::Config;
use cinematrack_core::{update, Event, WatchlistState, WatchlistView};
use color_eyre::Result;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal};
use tracing::{debug, info};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Render,
    Help,
    Quit,
    Nothing,
}

/// Owns the watchlist for one session and turns commands into store events
#[derive(Debug, Default)]
pub struct Session {
    state: WatchlistState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WatchlistState {
        &self.state
    }

    pub fn view(&self) -> WatchlistView {
        self.state.view()
    }

    /// Events for a command. Row numbers are resolved against what is on screen now.
    fn events_for(&self, command: SessionCommand) -> Result<Vec<Event>, CommandError> {
        let events = match command {
            SessionCommand::Add { genre, title } => {
                let mut events = Vec::new();
                if let Some(title) = title {
                    events.push(Event::SetPendingTitle(title));
                }
                if let Some(genre) = genre {
                    events.push(Event::SetPendingGenre(genre));
                }
                events.push(Event::SubmitForm);
                events
            }
            SessionCommand::Title(title) => vec![Event::SetPendingTitle(title)],
            SessionCommand::Genre(genre) => vec![Event::SetPendingGenre(genre)],
            SessionCommand::Submit => vec![Event::SubmitForm],
            SessionCommand::Toggle(entry) => vec![Event::ToggleWatched(entry.resolve(&self.view())?)],
            SessionCommand::Delete(entry) => vec![Event::DeleteMovie(entry.resolve(&self.view())?)],
            SessionCommand::Filter(filter) => vec![Event::SetFilter(filter)],
            SessionCommand::List
            | SessionCommand::Help
            | SessionCommand::Quit
            | SessionCommand::Empty => Vec::new(),
        };
        Ok(events)
    }

    pub fn handle(&mut self, command: SessionCommand) -> Result<Step, CommandError> {
        match command {
            SessionCommand::Quit => Ok(Step::Quit),
            SessionCommand::Help => Ok(Step::Help),
            SessionCommand::List => Ok(Step::Render),
            SessionCommand::Empty => Ok(Step::Nothing),
            command => {
                for event in self.events_for(command)? {
                    self.state = update(std::mem::take(&mut self.state), event);
                }
                Ok(Step::Render)
            }
        }
    }
}

pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Where command lines come from: a dialoguer prompt on a terminal, raw lines otherwise
pub enum LineSource<R> {
    Terminal { prompt: String },
    Reader(R),
}

impl<R: BufRead> LineSource<R> {
    /// Next line, or `None` once input is exhausted.
    ///
    /// Reader lines are decoded lossily: bytes that are not UTF-8 end up as
    /// replacement characters and fail to parse instead of ending the session.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self {
            LineSource::Terminal { prompt } => {
                let read = Input::<String>::new()
                    .with_prompt(prompt.as_str())
                    .allow_empty(true)
                    .interact_text();
                match read {
                    Ok(line) => Ok(Some(line)),
                    Err(dialoguer::Error::IO(e)) if is_end_of_input(&e) => Ok(None),
                    Err(e) => Err(color_eyre::eyre::eyre!("Failed to read command: {}", e)),
                }
            }
            LineSource::Reader(reader) => {
                let mut buf = Vec::new();
                let read = reader
                    .read_until(b'\n', &mut buf)
                    .map_err(|e| color_eyre::eyre::eyre!("Failed to read command: {}", e))?;
                if read == 0 {
                    return Ok(None);
                }
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
            }
        }
    }
}

fn is_end_of_input(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted)
}

/// On a terminal, a bare `add` opens the form prompts for the missing fields
fn fill_add_form(command: SessionCommand, state: &WatchlistState) -> Result<SessionCommand> {
    match command {
        SessionCommand::Add { genre, title: None } => {
            let form = state.form();
            let title = prompts::prompt_string("Movie Title", Some(&form.title))?;
            let genre = prompts::prompt_genre(genre.unwrap_or(form.genre))?;
            Ok(SessionCommand::Add {
                genre: Some(genre),
                title: Some(title),
            })
        }
        other => Ok(other),
    }
}

/// What the loop wants shown after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Render,
    Help,
    Warning(String),
    Error(String),
}

/// Read and apply lines until `quit` or end of input.
///
/// `fill_form` completes a bare `add` (prompts on a terminal); if it fails the
/// add is dropped and the session carries on. Only a failing input stream
/// ends the loop with an error.
pub fn drive<R: BufRead>(
    session: &mut Session,
    lines: &mut LineSource<R>,
    fill_form: &mut dyn FnMut(SessionCommand, &WatchlistState) -> Result<SessionCommand>,
    emit: &mut dyn FnMut(&Session, Feedback),
) -> Result<()> {
    emit(session, Feedback::Render);

    while let Some(line) = lines.next_line()? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                emit(session, Feedback::Error(e.to_string()));
                continue;
            }
        };
        let command = match fill_form(command, session.state()) {
            Ok(command) => command,
            Err(e) => {
                debug!(operation = "add_form", error = %e, "Add form cancelled");
                emit(session, Feedback::Warning("Add cancelled".to_string()));
                continue;
            }
        };

        match session.handle(command) {
            Ok(Step::Quit) => break,
            Ok(Step::Help) => emit(session, Feedback::Help),
            Ok(Step::Render) => emit(session, Feedback::Render),
            Ok(Step::Nothing) => {}
            Err(e @ CommandError::NoSuchRow(_)) => emit(session, Feedback::Warning(e.to_string())),
            Err(e) => emit(session, Feedback::Error(e.to_string())),
        }
    }

    Ok(())
}

pub fn run_session(config: &Config, output: &Output) -> Result<()> {
    let interactive = is_interactive();
    let renderer = Renderer::new(&config.ui, interactive && output.format() == OutputFormat::Human);
    let mut session = Session::new();
    let mut lines = if interactive {
        LineSource::Terminal {
            prompt: config.ui.prompt.trim().to_string(),
        }
    } else {
        LineSource::Reader(io::stdin().lock())
    };

    let mut fill_form = |command: SessionCommand, state: &WatchlistState| {
        if interactive {
            fill_add_form(command, state)
        } else {
            Ok(command)
        }
    };
    let mut emit = |session: &Session, feedback: Feedback| match feedback {
        Feedback::Render => renderer.render(&session.view(), output),
        Feedback::Help => output.println(HELP),
        Feedback::Warning(msg) => output.warn(msg),
        Feedback::Error(msg) => output.error(msg),
    };

    info!(operation = "session_start", interactive = interactive, "Starting watchlist session");
    drive(&mut session, &mut lines, &mut fill_form, &mut emit)?;

    let summary = session.state().summary();
    info!(
        operation = "session_end",
        total = summary.total,
        watched = summary.watched,
        "Session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinematrack_models::{Genre, WatchFilter};
    use std::io::Cursor;

    impl Session {
        fn handle_line(&mut self, line: &str) -> Result<Step, CommandError> {
            self.handle(parse_command(line)?)
        }
    }

    fn keep(command: SessionCommand, _: &WatchlistState) -> Result<SessionCommand> {
        Ok(command)
    }

    /// Drive a fresh session over `input`, collecting feedback with the row titles at each render
    fn drive_bytes(
        input: &[u8],
        fill_form: &mut dyn FnMut(SessionCommand, &WatchlistState) -> Result<SessionCommand>,
    ) -> (Session, Vec<Feedback>, Vec<Vec<String>>) {
        let mut session = Session::new();
        let mut lines = LineSource::Reader(Cursor::new(input.to_vec()));
        let mut feedback = Vec::new();
        let mut renders: Vec<Vec<String>> = Vec::new();
        let mut emit = |session: &Session, fb: Feedback| {
            if fb == Feedback::Render {
                renders.push(session.view().rows.iter().map(|r| r.title.clone()).collect());
            }
            feedback.push(fb);
        };
        drive(&mut session, &mut lines, fill_form, &mut emit).unwrap();
        (session, feedback, renders)
    }

    fn errors(feedback: &[Feedback]) -> usize {
        feedback.iter().filter(|f| matches!(f, Feedback::Error(_))).count()
    }

    fn run(session: &mut Session, lines: &[&str]) {
        for line in lines {
            session.handle_line(line).unwrap();
        }
    }

    #[test]
    fn test_add_then_watch_by_row() {
        let mut session = Session::new();
        run(&mut session, &["add -g sci-fi Inception", "add Heat", "watch 1"]);

        let view = session.view();
        assert_eq!(view.summary.total, 2);
        assert_eq!(view.summary.watched, 1);
        assert_eq!(view.rows[0].title, "Inception");
        assert_eq!(view.rows[0].genre, Genre::SciFi);
        assert!(view.rows[0].watched);
        assert_eq!(view.rows[1].genre, Genre::Action);
    }

    #[test]
    fn test_form_buffers_then_submit() {
        let mut session = Session::new();
        run(&mut session, &["title  Amelie ", "genre romance", "submit"]);

        let entry = &session.state().entries()[0];
        assert_eq!(entry.title, "Amelie");
        assert_eq!(entry.genre, Genre::Romance);
        assert_eq!(session.state().form().genre, Genre::Action);
        assert_eq!(session.state().form().title, "");
    }

    #[test]
    fn test_bare_add_without_terminal_submits_buffers() {
        let mut session = Session::new();
        run(&mut session, &["title Jaws", "add -g horror"]);
        assert_eq!(session.state().entries()[0].genre, Genre::Horror);
    }

    #[test]
    fn test_blank_add_is_silent() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("add").unwrap(), Step::Render);
        assert!(session.state().entries().is_empty());
    }

    #[test]
    fn test_rows_follow_the_active_filter() {
        let mut session = Session::new();
        run(&mut session, &["add A", "add B", "add C", "watch 2", "unwatched", "delete 2"]);

        let titles: Vec<&str> = session.state().entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(session.state().active_filter(), WatchFilter::Unwatched);
    }

    #[test]
    fn test_missing_row_changes_nothing() {
        let mut session = Session::new();
        run(&mut session, &["add A"]);
        let before = session.state().clone();

        assert_eq!(session.handle_line("rm 5"), Err(CommandError::NoSuchRow(5)));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_unknown_id_is_a_silent_noop() {
        let mut session = Session::new();
        run(&mut session, &["add A"]);
        let before = session.state().clone();

        let stranger = cinematrack_models::MovieId::generate();
        assert_eq!(session.handle_line(&format!("toggle {}", stranger)).unwrap(), Step::Render);
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_control_commands() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("").unwrap(), Step::Nothing);
        assert_eq!(session.handle_line("help").unwrap(), Step::Help);
        assert_eq!(session.handle_line("list").unwrap(), Step::Render);
        assert_eq!(session.handle_line("quit").unwrap(), Step::Quit);
    }

    #[test]
    fn test_reader_splits_lines() {
        let mut lines = LineSource::Reader(Cursor::new(b"add A\r\nlist\nquit".to_vec()));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("add A"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("list"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("quit"));
        assert_eq!(lines.next_line().unwrap(), None);
    }

    #[test]
    fn test_reader_decodes_invalid_utf8_lossily() {
        let mut lines = LineSource::Reader(Cursor::new(b"\xff\xfe\nadd Beta\n".to_vec()));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(lines.next_line().unwrap().as_deref(), Some("add Beta"));
    }

    #[test]
    fn test_invalid_utf8_line_is_reported_and_session_continues() {
        let (session, feedback, renders) = drive_bytes(b"add Alpha\n\xff\xfe\nadd Beta\nlist\n", &mut keep);

        assert_eq!(errors(&feedback), 1);
        let titles: Vec<&str> = session.state().entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
        assert_eq!(renders.last().unwrap(), &vec!["Alpha".to_string(), "Beta".to_string()]);
    }

    #[test]
    fn test_unknown_command_is_reported_and_session_continues() {
        let (session, feedback, _) = drive_bytes(b"rewind\nadd Heat\n", &mut keep);
        assert_eq!(errors(&feedback), 1);
        assert_eq!(session.state().entries().len(), 1);
    }

    #[test]
    fn test_renders_initially_and_after_each_command() {
        let (_, feedback, renders) = drive_bytes(b"add A\n\nhelp\nadd B\n", &mut keep);
        assert_eq!(
            feedback,
            vec![Feedback::Render, Feedback::Render, Feedback::Help, Feedback::Render]
        );
        assert_eq!(renders[0], Vec::<String>::new());
        assert_eq!(renders[2], vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _, _) = drive_bytes(b"add A\nquit\nadd B\n", &mut keep);
        assert_eq!(session.state().entries().len(), 1);
    }

    #[test]
    fn test_missing_row_is_a_warning() {
        let (_, feedback, _) = drive_bytes(b"watch 4\n", &mut keep);
        assert_eq!(feedback[1], Feedback::Warning("No movie at row 4".to_string()));
    }

    #[test]
    fn test_cancelled_add_form_keeps_session_running() {
        let mut cancel_bare_add = |command: SessionCommand, _: &WatchlistState| match command {
            SessionCommand::Add { title: None, .. } => {
                Err(color_eyre::eyre::eyre!("Failed to read input: interrupted"))
            }
            other => Ok(other),
        };
        let (session, feedback, _) = drive_bytes(b"add A\nadd\nadd B\n", &mut cancel_bare_add);

        assert!(feedback.contains(&Feedback::Warning("Add cancelled".to_string())));
        assert_eq!(errors(&feedback), 0);
        assert_eq!(session.state().entries().len(), 2);
    }
}
