use cinematrack_config::UiConfig;
use cinematrack_core::WatchlistView;
use cinematrack_models::WatchFilter;
use comfy_table::{modifiers, presets, Attribute, Cell, CellAlignment, Color, Table};
use owo_colors::OwoColorize;

use crate::output::{Output, OutputFormat};

pub const HELP: &str = "\
Commands:
  add [-g GENRE] TITLE   add a movie (bare 'add' fills in the form)
  title TEXT             set the pending title
  genre GENRE            set the pending genre (Action, Drama, Comedy, Sci-Fi, Horror, Romance)
  submit                 add the pending title and genre
  watch|undo|toggle REF  flip watched for a row number or movie id
  delete|rm REF          delete a row number or movie id
  filter all|watched|unwatched   (or just 'all', 'watched', 'unwatched')
  list                   redraw the list
  help                   show this help
  quit                   leave the session";

/// Draws a `WatchlistView` either as terminal tables or as one JSON document
pub struct Renderer {
    color: bool,
    show_ids: bool,
}

impl Renderer {
    pub fn new(ui: &UiConfig, color_capable: bool) -> Self {
        Self {
            color: ui.color && color_capable,
            show_ids: ui.show_ids,
        }
    }

    pub fn render(&self, view: &WatchlistView, output: &Output) {
        match output.format() {
            OutputFormat::Human => output.println(self.render_human(view)),
            OutputFormat::Json | OutputFormat::JsonPretty => match serde_json::to_value(view) {
                Ok(value) => output.document("view", value),
                Err(e) => output.error(format!("Failed to serialize view: {}", e)),
            },
        }
    }

    pub fn render_human(&self, view: &WatchlistView) -> String {
        let mut sections = vec![
            self.header(view),
            self.stats_board(view).to_string(),
            self.form_line(view),
            self.filter_controls(view.filter),
        ];

        if let Some(banner) = view.banner {
            sections.push(self.paint(banner, Paint::Success));
        }

        match view.empty_message {
            Some(message) => sections.push(self.paint(message, Paint::Dim)),
            None => sections.push(self.movie_list(view).to_string()),
        }

        sections.join("\n\n")
    }

    fn header(&self, view: &WatchlistView) -> String {
        format!(
            "{}\n{}",
            self.paint(view.title, Paint::Title),
            self.paint(view.subtitle, Paint::Dim)
        )
    }

    fn stats_board(&self, view: &WatchlistView) -> Table {
        let mut table = base_table();
        table.set_header(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new("Watched").add_attribute(Attribute::Bold),
            Cell::new("Unwatched").add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new(view.summary.total).set_alignment(CellAlignment::Center),
            self.colored(Cell::new(view.summary.watched), Color::Green)
                .set_alignment(CellAlignment::Center),
            self.colored(Cell::new(view.summary.unwatched), Color::DarkYellow)
                .set_alignment(CellAlignment::Center),
        ]);
        table
    }

    fn form_line(&self, view: &WatchlistView) -> String {
        let title = if view.pending_title.is_empty() {
            self.paint("Movie Title...", Paint::Dim)
        } else {
            view.pending_title.clone()
        };
        format!("Add Movie: [{}] ({})", title, view.pending_genre)
    }

    fn filter_controls(&self, active: WatchFilter) -> String {
        WatchFilter::ALL
            .iter()
            .map(|filter| {
                if *filter == active {
                    self.paint(&format!("[{}]", filter), Paint::Active)
                } else {
                    format!(" {} ", filter)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn movie_list(&self, view: &WatchlistView) -> Table {
        let mut table = base_table();
        let mut header = vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Genre").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Action").add_attribute(Attribute::Bold),
        ];
        if self.show_ids {
            header.push(Cell::new("Id").add_attribute(Attribute::Bold));
        }
        table.set_header(header);

        for row in &view.rows {
            let status_color = if row.watched { Color::Green } else { Color::DarkYellow };
            let mut cells = vec![
                Cell::new(row.position),
                Cell::new(&row.title),
                Cell::new(row.genre),
                self.colored(Cell::new(row.status_label), status_color),
                Cell::new(format!("{} / Delete", row.toggle_label)),
            ];
            if self.show_ids {
                cells.push(Cell::new(row.id));
            }
            table.add_row(cells);
        }
        table
    }

    fn colored(&self, cell: Cell, color: Color) -> Cell {
        if self.color {
            cell.fg(color)
        } else {
            cell
        }
    }

    fn paint(&self, text: &str, paint: Paint) -> String {
        if !self.color {
            return text.to_string();
        }
        match paint {
            Paint::Title => text.bright_cyan().bold().to_string(),
            Paint::Dim => text.dimmed().to_string(),
            Paint::Success => text.green().bold().to_string(),
            Paint::Active => text.bright_white().bold().to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Title,
    Dim,
    Success,
    Active,
}

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}
