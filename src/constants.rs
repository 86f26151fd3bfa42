// Simulation timing constants
pub const TICK_INTERVAL_MS: u64 = 25;

// Playfield dimensions (pixels)
pub const PLAYFIELD_WIDTH: i32 = 1080;
pub const PLAYFIELD_HEIGHT: i32 = 720;

// Bird constants
pub const BIRD_WIDTH: i32 = 80;
pub const BIRD_HEIGHT: i32 = 45;
pub const BIRD_START_X: i32 = 400;
pub const BIRD_START_Y: i32 = 300;
pub const GRAVITY_STEP: i32 = 5;
pub const JUMP_STEP: i32 = 10;
pub const MAX_ELEVATION: i32 = 90;

// Obstacle constants
pub const OBSTACLE_WIDTH: i32 = 80;
pub const OBSTACLE_GAP: i32 = 200;
pub const OBSTACLE_SPEED: i32 = 5;
pub const OBSTACLE_SPACING: i32 = 300;
pub const OBSTACLE_BATCH: usize = 5;
pub const SPLIT_MARGIN: i32 = 100;

// The bird loses once its top edge drops below this row
pub const FLOOR_THRESHOLD: i32 = 634;

// UI constants
pub const EVENT_LOG_CAPACITY: usize = 8;
pub const INPUT_POLL_MS: u64 = 10;
