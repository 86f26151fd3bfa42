//! Glyphs used by the scene, optionally overridden from disk.
//!
//! A theme file at `~/.skyward/theme.json` may replace any glyph. Load
//! failure is non-fatal: the caller warns and falls back to the built-in
//! set, and the simulation is unaffected.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The glyph set for the play area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Bird while climbing (negative velocity).
    pub bird_climb: String,
    /// Bird while pinned (zero velocity).
    pub bird_level: String,
    /// Bird while falling (positive velocity).
    pub bird_dive: String,
    pub obstacle: String,
    pub sky: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bird_climb: "▲".to_string(),
            bird_level: "►".to_string(),
            bird_dive: "▼".to_string(),
            obstacle: "█".to_string(),
            sky: " ".to_string(),
        }
    }
}

impl Theme {
    /// Loads a theme from a JSON file. Missing fields keep their defaults.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Picks the bird glyph from the step it applied last tick.
    pub fn bird_glyph(&self, vertical_velocity: i32) -> &str {
        if vertical_velocity < 0 {
            &self.bird_climb
        } else if vertical_velocity > 0 {
            &self.bird_dive
        } else {
            &self.bird_level
        }
    }
}

/// Path of the optional theme file.
pub fn theme_path() -> io::Result<PathBuf> {
    Ok(crate::config::settings_dir()?.join("theme.json"))
}
