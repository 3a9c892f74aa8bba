use anyhow::Result;
use std::path::{Path, PathBuf};

/// Config directory override from the environment, if set
fn config_dir_override() -> Option<PathBuf> {
    std::env::var_os("CINEMATRACK_CONFIG_DIR").map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = match config_dir_override() {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .join("cinematrack"),
        };

        Ok(Self::with_base(base_dir))
    }

    /// Layout rooted at the directory holding an explicitly chosen config file
    pub fn for_config_file(config_file: &Path) -> Self {
        let base_dir = match config_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::with_base(base_dir)
    }

    pub fn with_base(base_dir: PathBuf) -> Self {
        Self {
            log_dir: base_dir.join("logs"),
            config_dir: base_dir,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // Fall back to the working directory when no platform config dir exists
        Self::new().unwrap_or_else(|_| Self::with_base(PathBuf::from(".cinematrack")))
    }
}
