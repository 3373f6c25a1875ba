//! Dark/light theme: the palette the UI draws with, and the one piece
//! of state that survives a restart.
//!
//! The preference is stored as a small JSON file under the user's
//! config directory. It is read once at startup and written on every
//! toggle. A missing or unreadable file falls back to the default
//! theme rather than failing startup.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The visual theme of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default for a fresh install with no saved preference.
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Indicator text for the header.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The colors the UI should draw with under this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                dim: Color::DarkGray,
                highlight: Color::Yellow,
            },
            Theme::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                dim: Color::Gray,
                highlight: Color::Magenta,
            },
        }
    }

    /// Load the saved preference from `path`.
    ///
    /// Any failure (no file, unreadable, malformed JSON) yields the
    /// default theme — a broken config file must never prevent the
    /// app from starting.
    pub fn load(path: &Path) -> Theme {
        let Ok(raw) = fs::read_to_string(path) else {
            return Theme::default();
        };
        match serde_json::from_str::<ConfigFile>(&raw) {
            Ok(config) if config.dark_mode => Theme::Dark,
            Ok(_) => Theme::Light,
            Err(_) => Theme::default(),
        }
    }

    /// Persist this preference to `path`, creating parent directories
    /// as needed.
    pub fn save(self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let config = ConfigFile {
            dark_mode: self == Theme::Dark,
            updated_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&config)?;
        fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// On-disk shape of the config file.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    dark_mode: bool,
    updated_at: DateTime<Utc>,
}

/// Colors for one theme, consumed by the rendering layer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub dim: Color,
    pub highlight: Color,
}

/// Where the config file lives.
///
/// `NEWSBOARD_CONFIG` overrides the default location (handy for
/// scripting and tests); otherwise it is
/// `<platform config dir>/newsboard/config.json`.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("NEWSBOARD_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().context("no config directory on this platform")?;
    Ok(base.join("newsboard").join("config.json"))
}
