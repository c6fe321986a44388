//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search on a 4-connected
//! occupancy grid. Instead of keeping parent links and reconstructing a path, the search
//! records its progress directly in the grid: queued cells become [CellState::Closed],
//! expanded cells become [CellState::Path] and the two endpoints are stamped with
//! [CellState::Start] and [CellState::Finish] once the goal is reached. Movement is
//! uniform-cost, so the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! used by [heuristic] is admissible and consistent.
//!
//! Grids are read from text with the [loader] module and turned back into text with
//! [render::Render].
pub mod cell;
pub mod cell_grid;
pub mod error;
pub mod loader;
pub mod render;
pub mod search;

pub use cell::CellState;
pub use cell_grid::CellGrid;
pub use error::SearchError;
pub use grid_util::point::Point;
pub use search::{search, SearchOutcome, SearchStats, Solution};

/// Fixed size of the neighbour buffers, one slot per axis-aligned direction.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Manhattan distance between two grid coordinates. Saturates at [u32::MAX] for points on
/// opposite extremes of the `i32` range.
pub fn heuristic(p1: &Point, p2: &Point) -> u32 {
    p1.x.abs_diff(p2.x).saturating_add(p1.y.abs_diff(p2.y))
}
