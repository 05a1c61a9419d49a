use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Rows per table page. Fixed per run; not adjustable from the UI.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated startup delay before the shell leaves the loading screen.
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,

    /// Terminal widths below this count as a narrow viewport.
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            startup_delay_ms: default_startup_delay_ms(),
            narrow_width: default_narrow_width(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_startup_delay_ms() -> u64 {
    800
}

fn default_narrow_width() -> u16 {
    90
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("QUARTERDECK_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("quarterdeck").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("quarterdeck").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "quarterdeck", "quarterdeck")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("quarterdeck"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("quarterdeck"));
    }
    directories::ProjectDirs::from("io", "quarterdeck", "quarterdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_file_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("quarterdeck.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_toml_is_malformed() {
        let config = toml::from_str::<Config>("page_size = \"ten\"").unwrap_or_default();
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("page_size = 5").expect("valid toml");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.startup_delay_ms, 800);
        assert_eq!(config.narrow_width, 90);
    }
}
