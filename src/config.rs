//! Gameplay configuration with documented defaults.
//!
//! Every tuning constant of the simulation is a field here rather than a
//! hardwired literal. A config file at `~/.skyward/config.json` may override
//! any subset of fields; everything else keeps its default.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// All simulation parameters, in playfield pixels and pixels-per-tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: i32,
    pub playfield_height: i32,
    pub bird_width: i32,
    pub bird_height: i32,
    pub bird_start_x: i32,
    pub bird_start_y: i32,
    /// Downward movement per gravity tick.
    pub gravity_step: i32,
    /// Upward movement per jump tick.
    pub jump_step: i32,
    /// Total elevation one jump impulse sequence covers.
    pub max_elevation: i32,
    pub obstacle_width: i32,
    /// Vertical clearance between an upper/lower obstacle pair.
    pub obstacle_gap: i32,
    /// Leftward movement of every obstacle per tick.
    pub obstacle_speed: i32,
    /// Horizontal distance between consecutive pairs at generation time.
    pub obstacle_spacing: i32,
    /// Pairs generated per refill.
    pub obstacle_batch: usize,
    /// Rows at the bottom the random split never claims, so the lower
    /// obstacle always keeps some body.
    pub split_margin: i32,
    /// The bird loses once its top edge drops below this row.
    pub floor_threshold: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_start_x: BIRD_START_X,
            bird_start_y: BIRD_START_Y,
            gravity_step: GRAVITY_STEP,
            jump_step: JUMP_STEP,
            max_elevation: MAX_ELEVATION,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_batch: OBSTACLE_BATCH,
            split_margin: SPLIT_MARGIN,
            floor_threshold: FLOOR_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Largest value the random split may take (exclusive).
    pub fn max_split_height(&self) -> i32 {
        self.playfield_height - self.obstacle_gap - self.split_margin
    }

    /// Largest y the bird's top edge may occupy.
    pub fn bird_floor(&self) -> i32 {
        self.playfield_height - self.bird_height
    }

    /// Rejects configurations the simulation cannot run on.
    ///
    /// Returns `InvalidInput` if the gap leaves no room for a split, the
    /// bird cannot fit the playfield, or any step/speed/size is non-positive.
    pub fn validate(&self) -> io::Result<()> {
        fn invalid(msg: String) -> io::Error {
            io::Error::new(io::ErrorKind::InvalidInput, msg)
        }

        if self.playfield_width <= 0 || self.playfield_height <= 0 {
            return Err(invalid(format!(
                "playfield must be positive, got {}x{}",
                self.playfield_width, self.playfield_height
            )));
        }
        if self.max_split_height() <= 0 {
            return Err(invalid(format!(
                "gap {} + split margin {} leave no room for obstacles in a {}px playfield",
                self.obstacle_gap, self.split_margin, self.playfield_height
            )));
        }
        if self.bird_width <= 0 || self.bird_height <= 0 {
            return Err(invalid(format!(
                "bird box must be positive, got {}x{}",
                self.bird_width, self.bird_height
            )));
        }
        if self.bird_height >= self.playfield_height {
            return Err(invalid(format!(
                "bird height {} does not fit a {}px playfield",
                self.bird_height, self.playfield_height
            )));
        }
        if !(0..=self.bird_floor()).contains(&self.bird_start_y) {
            return Err(invalid(format!(
                "bird start y {} is outside [0, {}]",
                self.bird_start_y,
                self.bird_floor()
            )));
        }
        if self.gravity_step <= 0 || self.jump_step <= 0 || self.max_elevation <= 0 {
            return Err(invalid(
                "gravity step, jump step, and max elevation must be positive".to_string(),
            ));
        }
        if self.obstacle_width <= 0
            || self.obstacle_speed <= 0
            || self.obstacle_spacing <= 0
            || self.obstacle_batch == 0
        {
            return Err(invalid(
                "obstacle width, speed, spacing, and batch size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads a config from a JSON file. Missing fields keep their defaults.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Directory holding the optional config and theme files (`~/.skyward`).
pub fn settings_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".skyward"))
}

/// Path of the optional config file.
pub fn config_path() -> io::Result<PathBuf> {
    Ok(settings_dir()?.join("config.json"))
}
