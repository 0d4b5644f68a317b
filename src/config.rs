//! Configuration loading
//!
//! Reads `~/.config/searchbox/config.toml`. A missing file means defaults;
//! a file that exists but cannot be read or parsed is a startup error.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SearchboxError;

pub use types::{
    Config, DEFAULT_DIR, DEFAULT_ENDPOINT, RenderConfig, RenderStyle, SearchConfig,
    TransportConfig,
};

const CONFIG_DIR: &str = "searchbox";
const CONFIG_FILE: &str = "config.toml";

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, SearchboxError> {
    match path {
        Some(path) => load_config_from_path(path),
        None => match config_path() {
            Some(path) => load_config_from_path(&path),
            None => Ok(Config::default()),
        },
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, SearchboxError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(SearchboxError::Io(e)),
    };

    parse_config(&contents).map_err(|message| SearchboxError::Config {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
