//! Obstacle pair generation, scrolling, scoring crossings, and eviction.

use crate::config::GameConfig;
use crate::core::collision::Rect;
use rand::Rng;

/// An upper/lower obstacle pair sharing one x-coordinate.
///
/// Only the split height is stored; both rectangles project from it, so
/// `lower.y == upper.height + gap` and
/// `upper_height + gap + lower_height == playfield_height` hold by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstaclePair {
    /// Left edge, in playfield pixels.
    pub x: i32,
    /// Height of the upper obstacle; 0 is degenerate but valid.
    pub upper_height: i32,
    /// Set once the bird has passed this pair (for scoring).
    pub passed: bool,
}

impl ObstaclePair {
    pub fn upper_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, 0, config.obstacle_width, self.upper_height)
    }

    pub fn lower_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            self.upper_height + config.obstacle_gap,
            config.obstacle_width,
            self.lower_height(config),
        )
    }

    pub fn lower_height(&self, config: &GameConfig) -> i32 {
        config.playfield_height - config.obstacle_gap - self.upper_height
    }
}

/// The ordered sequence of obstacle pairs. Pairs are never reordered; new
/// pairs are appended with larger x than all existing pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleField {
    pub pairs: Vec<ObstaclePair>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty field filled with its first batch.
    pub fn with_initial_batch<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut field = Self::new();
        field.generate_batch(config, rng);
        field
    }

    /// Appends `obstacle_batch` pairs spaced `obstacle_spacing` apart beyond
    /// the current rightmost generated x, each with a pseudo-random split.
    pub fn generate_batch<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let base = self
            .pairs
            .last()
            .map_or(config.playfield_width, |pair| pair.x);
        let max_height = config.max_split_height();

        for i in 0..config.obstacle_batch {
            self.pairs.push(ObstaclePair {
                x: base + (i as i32 + 1) * config.obstacle_spacing,
                upper_height: rng.gen_range(0..max_height),
                passed: false,
            });
        }
    }

    /// Shifts every pair left by `speed`.
    pub fn advance(&mut self, speed: i32) {
        for pair in &mut self.pairs {
            pair.x -= speed;
        }
    }

    /// True when the most recently generated pair has scrolled to or past
    /// the right edge of the playfield (or the field is empty).
    pub fn should_refill(&self, config: &GameConfig) -> bool {
        self.pairs
            .last()
            .map_or(true, |pair| pair.x <= config.playfield_width)
    }

    /// Counts pairs newly passed this tick: a pair is passed the first tick
    /// its x reaches the bird's column. The per-pair flag makes this a
    /// monotonic crossing test, independent of step alignment.
    pub fn score_crossings(&mut self, bird_x: i32) -> u32 {
        let mut crossed = 0;
        for pair in &mut self.pairs {
            if !pair.passed && pair.x <= bird_x {
                pair.passed = true;
                crossed += 1;
            }
        }
        crossed
    }

    /// Drops pairs that have fully left the playfield, bounding memory.
    pub fn evict_offscreen(&mut self, config: &GameConfig) {
        self.pairs
            .retain(|pair| pair.x + config.obstacle_width >= 0);
    }

    /// Both rectangles of every pair, in field order, for the render snapshot.
    pub fn rects(&self, config: &GameConfig) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.pairs.len() * 2);
        for pair in &self.pairs {
            rects.push(pair.upper_rect(config));
            rects.push(pair.lower_rect(config));
        }
        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_initial_batch_size_and_spacing() {
        let config = GameConfig::default();
        let field = ObstacleField::with_initial_batch(&config, &mut test_rng());

        assert_eq!(field.pairs.len(), 5);
        for (i, pair) in field.pairs.iter().enumerate() {
            assert_eq!(pair.x, 1080 + (i as i32 + 1) * 300);
            assert!(!pair.passed);
        }
    }

    #[test]
    fn test_split_invariant_holds_for_every_pair() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new();
        let mut rng = test_rng();
        for _ in 0..20 {
            field.generate_batch(&config, &mut rng);
        }

        for pair in &field.pairs {
            assert!(pair.upper_height >= 0);
            assert!(pair.upper_height < config.max_split_height());
            assert_eq!(
                pair.upper_height + config.obstacle_gap + pair.lower_height(&config),
                config.playfield_height
            );
            assert_eq!(
                pair.lower_rect(&config).y,
                pair.upper_rect(&config).height + config.obstacle_gap
            );
        }
    }

    #[test]
    fn test_batches_append_with_increasing_x() {
        let config = GameConfig::default();
        let mut field = ObstacleField::with_initial_batch(&config, &mut test_rng());
        field.advance(400);
        field.generate_batch(&config, &mut test_rng());

        let xs: Vec<i32> = field.pairs.iter().map(|pair| pair.x).collect();
        for window in xs.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_advance_shifts_everything_left() {
        let config = GameConfig::default();
        let mut field = ObstacleField::with_initial_batch(&config, &mut test_rng());
        let before: Vec<i32> = field.pairs.iter().map(|pair| pair.x).collect();

        field.advance(5);

        for (pair, old_x) in field.pairs.iter().zip(before) {
            assert_eq!(pair.x, old_x - 5);
        }
    }

    #[test]
    fn test_refill_triggers_at_right_edge() {
        let config = GameConfig::default();
        let mut field = ObstacleField::with_initial_batch(&config, &mut test_rng());
        assert!(!field.should_refill(&config));

        // Last pair starts at 1080 + 5*300 = 2580; scroll it to the edge
        field.advance(1500);
        assert!(field.should_refill(&config));
    }

    #[test]
    fn test_refill_true_when_empty() {
        let config = GameConfig::default();
        assert!(ObstacleField::new().should_refill(&config));
    }

    #[test]
    fn test_crossing_scores_once_per_pair() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new();
        field.pairs.push(ObstaclePair {
            x: 403,
            upper_height: 100,
            passed: false,
        });

        // Not yet at the bird's column
        assert_eq!(field.score_crossings(400), 0);

        // 403 -> 398 skips 400 exactly; the crossing still fires, once
        field.advance(config.obstacle_speed);
        assert_eq!(field.score_crossings(400), 1);
        assert_eq!(field.score_crossings(400), 0);

        field.advance(config.obstacle_speed);
        assert_eq!(field.score_crossings(400), 0);
    }

    #[test]
    fn test_crossing_fires_on_exact_alignment() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new();
        field.pairs.push(ObstaclePair {
            x: 405,
            upper_height: 100,
            passed: false,
        });

        field.advance(config.obstacle_speed);
        assert_eq!(field.pairs[0].x, 400);
        assert_eq!(field.score_crossings(400), 1);
    }

    #[test]
    fn test_eviction_drops_fully_offscreen_pairs() {
        let config = GameConfig::default();
        let mut field = ObstacleField::new();
        field.pairs.push(ObstaclePair {
            x: -81,
            upper_height: 100,
            passed: true,
        });
        field.pairs.push(ObstaclePair {
            x: -80,
            upper_height: 100,
            passed: true,
        });
        field.pairs.push(ObstaclePair {
            x: 500,
            upper_height: 100,
            passed: false,
        });

        field.evict_offscreen(&config);

        // x = -81 is gone; x = -80 still shows its last column
        assert_eq!(field.pairs.len(), 2);
        assert_eq!(field.pairs[0].x, -80);
    }

    #[test]
    fn test_degenerate_split_yields_zero_height_upper() {
        let config = GameConfig::default();
        let pair = ObstaclePair {
            x: 500,
            upper_height: 0,
            passed: false,
        };
        assert_eq!(pair.upper_rect(&config).height, 0);
        assert_eq!(pair.lower_height(&config), 720 - 200);
    }

    #[test]
    fn test_rects_lists_both_rects_in_order() {
        let config = GameConfig::default();
        let field = ObstacleField::with_initial_batch(&config, &mut test_rng());
        let rects = field.rects(&config);

        assert_eq!(rects.len(), field.pairs.len() * 2);
        assert_eq!(rects[0], field.pairs[0].upper_rect(&config));
        assert_eq!(rects[1], field.pairs[0].lower_rect(&config));
    }
}
