//! netmon configuration (htoprc-style key=value format)
//!
//! Read from `$NETMON_CONFIG`, `%APPDATA%/netmon/netmonrc` on Windows, or
//! `$XDG_CONFIG_HOME/netmon/netmonrc` elsewhere.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::color_scheme::ColorSchemeId;
use crate::error::{MonitorError, Result};
use crate::system::window::DEFAULT_CAPACITY;

/// Resolve the config file path.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("NETMON_CONFIG") {
        return Some(PathBuf::from(explicit));
    }
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("netmon").join("netmonrc"));
    }
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .ok()?;
    Some(base.join("netmon").join("netmonrc"))
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct NetmonConfig {
    pub update_interval_ms: u64,
    /// Number of ticks kept in the rolling window
    pub history_size: usize,
    /// Maximum bar length in cells
    pub bar_width: usize,
    pub color_scheme_id: ColorSchemeId,
    pub show_sidebar: bool,
    pub log_file: PathBuf,
}

impl Default for NetmonConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 1000,
            history_size: DEFAULT_CAPACITY,
            bar_width: 30,
            color_scheme_id: ColorSchemeId::Default,
            show_sidebar: true,
            log_file: std::env::temp_dir().join("netmon.log"),
        }
    }
}

impl NetmonConfig {
    /// Load config from the default path, returning defaults if there is none.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(MonitorError::Config(format!(
                "cannot read '{}': {e}",
                path.display()
            ))),
        }
    }

    /// Parse `key=value` lines. Unknown keys and unparsable values are ignored.
    pub fn parse(content: &str) -> Self {
        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "update_interval_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        cfg.update_interval_ms = v.clamp(200, 10_000);
                    }
                }
                "history_size" => {
                    if let Ok(v) = value.parse::<usize>() {
                        cfg.history_size = v.clamp(1, 3600);
                    }
                }
                "bar_width" => {
                    if let Ok(v) = value.parse::<usize>() {
                        cfg.bar_width = v.clamp(1, 200);
                    }
                }
                "color_scheme" => {
                    if let Ok(idx) = value.parse::<usize>() {
                        cfg.color_scheme_id = ColorSchemeId::from_index(idx);
                    }
                }
                "show_sidebar" => cfg.show_sidebar = value == "1",
                "log_file" if !value.is_empty() => cfg.log_file = PathBuf::from(value),
                _ => {} // Ignore unknown keys
            }
        }

        cfg
    }

    pub fn update_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.update_interval_ms)
    }
}
