use cinematrack_config::{Config, PathManager};
use clap::{ArgAction, Parser, Subcommand};
use commands::{config, session};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cinematrack")]
#[command(about = "CinemaTrack - Your movie watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a watchlist session (default)
    #[command(long_about = "Start an interactive watchlist session. Add movies, mark them watched, delete them and filter the list. The watchlist lives only as long as the session. When stdin is not a terminal, commands are read line by line until end of input.")]
    Session,
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file without asking
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let output = output::Output::new(cli.output, cli.quiet);
    let command = cli.command.unwrap_or(Commands::Session);

    let path_manager = match &cli.config {
        Some(path) => PathManager::for_config_file(path),
        None => PathManager::default(),
    };
    let config_file = cli.config.clone().unwrap_or_else(|| path_manager.config_file());

    // A broken config file must not lock the user out of `config init --force`
    let config = match Config::load_or_default(&config_file).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) if matches!(command, Commands::Config { .. }) => {
            output.warn(format!("Ignoring invalid config at {}: {}", config_file.display(), e));
            Config::default()
        }
        Err(e) => {
            return Err(color_eyre::eyre::eyre!(
                "Failed to load config from {}: {}",
                config_file.display(),
                e
            ))
        }
    };

    logging::init_logging(cli.verbose, cli.quiet, &config.logging, path_manager.log_dir())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    match command {
        Commands::Session => session::run_session(&config, &output),
        Commands::Config { cmd } => config::run_config(cmd, &path_manager, &config_file, &config, &output),
    }
}
