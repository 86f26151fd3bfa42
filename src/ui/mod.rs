//! Terminal rendering. Read-only over simulation snapshots.

pub mod scene;
pub mod theme;

#[allow(unused_imports)]
pub use scene::draw_ui;
#[allow(unused_imports)]
pub use theme::Theme;
