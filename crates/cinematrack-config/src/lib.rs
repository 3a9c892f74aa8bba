pub mod config;
pub mod paths;

pub use config::{Config, LoggingConfig, UiConfig, VALID_LOG_LEVELS};
pub use paths::PathManager;
