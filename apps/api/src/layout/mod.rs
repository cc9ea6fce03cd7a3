// Word layout: the grid buffer and the greedy placement engine.
// Both are synchronous and pure; handlers run builds inside tokio::task::spawn_blocking.

pub mod grid;
pub mod handlers;
pub mod placement;

pub use grid::{Grid, DEFAULT_GRID_SIZE};
pub use placement::build_layout;
