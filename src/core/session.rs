//! The per-tick state machine composing bird physics, obstacle scrolling,
//! collision detection, and scoring.
//!
//! One fixed-rate tick drives everything in a deterministic order. The
//! presentation layer consumes [`TickEvent`]s and immutable [`Snapshot`]s
//! and never touches simulation state directly.

use crate::config::GameConfig;
use crate::core::bird::Bird;
use crate::core::collision::{self, CollisionKind, Rect};
use crate::core::obstacles::ObstacleField;
use rand::Rng;
use std::io;

/// Session status. `Lost` is terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Lost,
}

/// A single event produced by a game tick.
///
/// The presentation layer maps these to log entries; the simulation never
/// touches UI types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// The bird passed an obstacle pair. Carries the score after the pass.
    PairPassed { score: u32 },
    /// The bird hit an obstacle.
    Collided,
    /// The bird fell past the floor threshold.
    BottomedOut,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
}

/// Immutable render view of the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub playfield_width: i32,
    pub playfield_height: i32,
    pub bird: Rect,
    /// Step the bird applied on the last tick (positive = down).
    pub vertical_velocity: i32,
    /// Both rectangles of every pair, in field order.
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub status: Status,
}

/// One run of the game: bird, obstacle field, score, and status.
///
/// Exclusively owned by the tick loop. Jump requests are queued and applied
/// at the next tick boundary, never mid-tick.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub bird: Bird,
    pub field: ObstacleField,
    pub score: u32,
    pub status: Status,
    pub jump_queued: bool,
}

impl GameSession {
    /// Creates a session, failing fast on an invalid configuration.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> io::Result<Self> {
        config.validate()?;
        let bird = Bird::new(&config);
        let field = ObstacleField::with_initial_batch(&config, rng);
        Ok(Self {
            config,
            bird,
            field,
            score: 0,
            status: Status::Active,
            jump_queued: false,
        })
    }

    /// Queues a jump for the next tick boundary. Ignored while lost.
    pub fn request_jump(&mut self) {
        if self.status == Status::Lost {
            return;
        }
        self.jump_queued = true;
    }

    /// Wholesale reset to initial constants: bird, field, score, status, and
    /// queued input. Nothing from the previous run survives.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.bird = Bird::new(&self.config);
        self.field = ObstacleField::with_initial_batch(&self.config, rng);
        self.score = 0;
        self.status = Status::Active;
        self.jump_queued = false;
    }

    /// One simulation tick, in fixed order: queued input, physics sub-step,
    /// obstacle advance, collision check, score update, refill and eviction.
    /// Suspended entirely while lost.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickResult {
        let mut result = TickResult::default();
        if self.status == Status::Lost {
            return result;
        }

        if self.jump_queued {
            self.bird.start_jump();
            self.jump_queued = false;
        }

        self.bird.step(&self.config);
        self.field.advance(self.config.obstacle_speed);

        match collision::check(&self.bird.bounds(&self.config), &self.field.pairs, &self.config)
        {
            Some(CollisionKind::Obstacle) => {
                self.status = Status::Lost;
                result.events.push(TickEvent::Collided);
            }
            Some(CollisionKind::BottomOut) => {
                self.status = Status::Lost;
                result.events.push(TickEvent::BottomedOut);
            }
            None => {}
        }

        let crossed = self.field.score_crossings(self.bird.x);
        for _ in 0..crossed {
            self.score += 1;
            result.events.push(TickEvent::PairPassed { score: self.score });
        }

        if self.field.should_refill(&self.config) {
            self.field.generate_batch(&self.config, rng);
        }
        self.field.evict_offscreen(&self.config);

        result
    }

    /// The immutable render view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            playfield_width: self.config.playfield_width,
            playfield_height: self.config.playfield_height,
            bird: self.bird.bounds(&self.config),
            vertical_velocity: self.bird.vertical_velocity,
            obstacles: self.field.rects(&self.config),
            score: self.score,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::obstacles::ObstaclePair;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn new_session() -> GameSession {
        GameSession::new(GameConfig::default(), &mut test_rng()).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = new_session();
        assert_eq!(session.score, 0);
        assert_eq!(session.status, Status::Active);
        assert!(!session.jump_queued);
        assert_eq!(session.bird.y, 300);
        assert_eq!(session.field.pairs.len(), 5);
    }

    #[test]
    fn test_invalid_config_rejected_at_creation() {
        let config = GameConfig {
            obstacle_gap: 720,
            ..Default::default()
        };
        assert!(GameSession::new(config, &mut test_rng()).is_err());
    }

    #[test]
    fn test_jump_request_applies_at_tick_boundary() {
        let mut session = new_session();
        let mut rng = test_rng();

        session.request_jump();
        // Queued, not applied yet
        assert!(!session.bird.jumping);
        assert_eq!(session.bird.y, 300);

        session.tick(&mut rng);
        assert!(session.bird.jumping);
        assert_eq!(session.bird.y, 290);
    }

    #[test]
    fn test_tick_advances_obstacles() {
        let mut session = new_session();
        let mut rng = test_rng();
        let before: Vec<i32> = session.field.pairs.iter().map(|p| p.x).collect();

        session.tick(&mut rng);

        for (pair, old_x) in session.field.pairs.iter().zip(before) {
            assert_eq!(pair.x, old_x - 5);
        }
    }

    #[test]
    fn test_floor_breach_transitions_to_lost() {
        let mut session = new_session();
        let mut rng = test_rng();
        session.bird.y = 635;

        let result = session.tick(&mut rng);

        assert_eq!(session.status, Status::Lost);
        assert!(result.events.contains(&TickEvent::BottomedOut));
    }

    #[test]
    fn test_collision_transitions_to_lost() {
        let mut session = new_session();
        let mut rng = test_rng();
        // A pair right on the bird with the gap well above it
        session.field.pairs.clear();
        session.field.pairs.push(ObstaclePair {
            x: 400,
            upper_height: 0,
            passed: true,
        });

        let result = session.tick(&mut rng);

        assert_eq!(session.status, Status::Lost);
        assert!(result.events.contains(&TickEvent::Collided));
    }

    #[test]
    fn test_lost_session_is_frozen() {
        let mut session = new_session();
        let mut rng = test_rng();
        session.status = Status::Lost;
        let frozen = session.snapshot();

        session.request_jump();
        let result = session.tick(&mut rng);

        assert!(result.events.is_empty());
        assert_eq!(session.snapshot(), frozen);
    }

    #[test]
    fn test_pair_pass_scores_once() {
        let mut session = new_session();
        let mut rng = test_rng();
        // Gap spans 250..450; the bird (300..345 after one tick) flies through
        session.field.pairs.clear();
        session.field.pairs.push(ObstaclePair {
            x: 402,
            upper_height: 250,
            passed: false,
        });

        let result = session.tick(&mut rng);

        assert_eq!(session.score, 1);
        assert!(result.events.contains(&TickEvent::PairPassed { score: 1 }));
        assert_eq!(session.status, Status::Active);

        // Refill repopulated the field; the passed pair never scores again
        session.tick(&mut rng);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_refill_keeps_field_populated() {
        let mut session = new_session();
        let mut rng = test_rng();
        session.field.pairs.clear();

        session.tick(&mut rng);

        assert_eq!(session.field.pairs.len(), 5);
    }

    #[test]
    fn test_eviction_runs_every_tick() {
        let mut session = new_session();
        let mut rng = test_rng();
        session.field.pairs.insert(
            0,
            ObstaclePair {
                x: -100,
                upper_height: 100,
                passed: true,
            },
        );

        session.tick(&mut rng);

        assert!(session.field.pairs.iter().all(|p| p.x + 80 >= 0));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = new_session();
        let mut rng = test_rng();
        for _ in 0..40 {
            session.tick(&mut rng);
        }
        session.request_jump();
        session.score = 7;
        session.status = Status::Lost;

        session.reset(&mut test_rng());

        let fresh = new_session();
        assert_eq!(session.snapshot(), fresh.snapshot());
        assert!(!session.jump_queued);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let session = new_session();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.bird, Rect::new(400, 300, 80, 45));
        assert_eq!(snapshot.obstacles.len(), 10);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.status, Status::Active);
        assert_eq!(snapshot.playfield_width, 1080);
        assert_eq!(snapshot.playfield_height, 720);
    }
}
