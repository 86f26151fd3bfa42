//! Bird vertical physics: gravity ticks and jump impulse sequences.
//!
//! Gravity and jump impulses are mutually exclusive, never summed. A jump
//! runs a fixed elevation budget down in fixed-size steps; while it is in
//! progress gravity has no effect.

use crate::config::GameConfig;
use crate::core::collision::Rect;

/// The controllable entity. `x` is fixed during play; only `y` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    pub x: i32,
    /// Top edge, in playfield pixels. Row 0 is the ceiling.
    pub y: i32,
    /// Step applied on the last tick (positive = down). Zero when clamped.
    pub vertical_velocity: i32,
    /// True while a jump impulse sequence is in progress.
    pub jumping: bool,
    /// Elevation budget consumed by the current jump.
    pub jump_elapsed: i32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_start_x,
            y: config.bird_start_y,
            vertical_velocity: 0,
            jumping: false,
            jump_elapsed: 0,
        }
    }

    /// The bird's bounding box.
    pub fn bounds(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, self.y, config.bird_width, config.bird_height)
    }

    /// Begins a jump impulse sequence. No-op while one is already running.
    pub fn start_jump(&mut self) {
        if self.jumping {
            return;
        }
        self.jumping = true;
        self.jump_elapsed = 0;
    }

    /// One physics tick: a jump sub-step while jumping, a gravity sub-step
    /// otherwise.
    pub fn step(&mut self, config: &GameConfig) {
        if self.jumping {
            self.apply_jump(config);
        } else {
            self.apply_gravity(config);
        }
    }

    fn apply_gravity(&mut self, config: &GameConfig) {
        let floor = config.bird_floor();
        if self.y < floor {
            self.y = (self.y + config.gravity_step).min(floor);
            self.vertical_velocity = config.gravity_step;
        } else {
            self.vertical_velocity = 0;
        }
    }

    /// A step whose target leaves `[0, bird_floor]` is dropped, but still
    /// consumes budget: hitting the ceiling truncates travel without
    /// extending the jump.
    fn apply_jump(&mut self, config: &GameConfig) {
        let target = self.y - config.jump_step;
        if (0..=config.bird_floor()).contains(&target) {
            self.y = target;
            self.vertical_velocity = -config.jump_step;
        } else {
            self.vertical_velocity = 0;
        }

        self.jump_elapsed += config.jump_step;
        if self.jump_elapsed >= config.max_elevation {
            self.jumping = false;
            self.jump_elapsed = 0;
        }
    }
}
