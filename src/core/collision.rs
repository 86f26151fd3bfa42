//! Axis-aligned collision and bottom-out detection.

use crate::config::GameConfig;
use crate::core::obstacles::ObstaclePair;

/// An axis-aligned rectangle in playfield pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the rectangles share at least one pixel of positive area.
    /// Edge-touching boxes and degenerate zero-size boxes never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Why the bird lost this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// The bird box overlaps an obstacle box.
    Obstacle,
    /// The bird fell past the floor threshold.
    BottomOut,
}

/// Checks the bird bounds against every obstacle pair, then the floor.
pub fn check(
    bird_bounds: &Rect,
    pairs: &[ObstaclePair],
    config: &GameConfig,
) -> Option<CollisionKind> {
    for pair in pairs {
        if bird_bounds.intersects(&pair.upper_rect(config))
            || bird_bounds.intersects(&pair.lower_rect(config))
        {
            return Some(CollisionKind::Obstacle);
        }
    }
    if bird_bounds.y > config.floor_threshold {
        return Some(CollisionKind::BottomOut);
    }
    None
}
