//! Core simulation: bird physics, obstacle field, collision, and the
//! per-tick state machine.

pub mod bird;
pub mod collision;
pub mod obstacles;
pub mod session;

#[allow(unused_imports)]
pub use bird::Bird;
#[allow(unused_imports)]
pub use collision::{CollisionKind, Rect};
#[allow(unused_imports)]
pub use obstacles::{ObstacleField, ObstaclePair};
#[allow(unused_imports)]
pub use session::{GameSession, Snapshot, Status, TickEvent, TickResult};
