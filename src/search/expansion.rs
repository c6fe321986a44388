use crate::{cell::CellState, cell_grid::CellGrid, heuristic, N_SMALLVEC_SIZE};
use grid_util::point::Point;
use smallvec::SmallVec;

use super::open_set::{Node, OpenSet};

/// Unit moves in expansion order: up, left, down, right.
pub static DELTAS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// The four axis-aligned neighbours of `point`, in [DELTAS] order. Points off the grid are
/// included; filtering is left to [CellGrid::is_open].
pub fn neumann_neighborhood(point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
    DELTAS
        .iter()
        .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
        .collect()
}

/// Queues `node` and closes its cell so no later expansion can queue it again.
pub(crate) fn add_to_open(node: Node, open: &mut OpenSet, grid: &mut CellGrid) {
    grid.set_point(&node.point, CellState::Closed);
    open.push(node);
}

/// Queues every still-empty neighbour of `node` one step further from the start.
/// Returns how many neighbours were queued.
pub(crate) fn expand_neighbors(
    node: &Node,
    goal: &Point,
    open: &mut OpenSet,
    grid: &mut CellGrid,
) -> usize {
    let mut queued = 0;
    for next in neumann_neighborhood(&node.point) {
        if grid.is_open(&next) {
            let h = heuristic(&next, goal);
            add_to_open(Node::new(next, node.g + 1, h), open, grid);
            queued += 1;
        }
    }
    queued
}
