use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal presentation settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    /// Show the id column in the movie list
    #[serde(default)]
    pub show_ids: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    /// Write logs to a daily-rolling file instead of stderr. Relative paths
    /// live under the log directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "cinematrack".to_string()
}

fn default_log_level() -> String {
    "error".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            show_ids: false,
            prompt: default_prompt(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Log file to write, with a relative `file` placed under `log_dir`
    pub fn resolve_file(&self, log_dir: &Path) -> Option<PathBuf> {
        self.file.as_ref().map(|file| {
            if file.is_absolute() {
                file.clone()
            } else {
                log_dir.join(file)
            }
        })
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ui.prompt.trim().is_empty() {
            return Err(anyhow::anyhow!("ui.prompt cannot be empty"));
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid logging.level: {}. Use one of {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
