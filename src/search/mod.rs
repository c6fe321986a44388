use crate::{
    cell::CellState,
    cell_grid::CellGrid,
    error::{Endpoint, SearchError},
    heuristic,
};
use grid_util::point::Point;
use log::{debug, info, warn};

pub mod expansion;
pub mod open_set;

use expansion::{add_to_open, expand_neighbors};
use open_set::{Node, OpenSet};

/// Where a search currently stands. `Found` and `Exhausted` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Found,
    Exhausted,
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the open set.
    pub expanded: usize,
    /// Nodes put on the open set, the start included.
    pub queued: usize,
    /// Largest size the open set reached.
    pub max_open: usize,
}

/// A solved grid. Every expanded cell is marked [CellState::Path] except the endpoints,
/// which carry [CellState::Start] and [CellState::Finish].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub grid: CellGrid,
    /// Length of the walk the search discovered from start to goal: the goal's g, where every
    /// cell got g + 1 from the neighbour that first queued it. Cells keep that first g, so on
    /// grids with obstacles this can exceed the shortest distance.
    pub cost: u32,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of cells marked as part of the solution, endpoints included.
    pub fn path_len(&self) -> usize {
        self.grid.cells().filter(|(_, cell)| cell.on_path()).count()
    }
    pub fn into_grid(self) -> CellGrid {
        self.grid
    }
}

/// Result of a search that was allowed to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Solution),
    /// The open set ran dry before the goal was reached. The explored grid is dropped.
    Exhausted(SearchStats),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    pub fn solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::Exhausted(_) => None,
        }
    }
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found(solution) => &solution.stats,
            SearchOutcome::Exhausted(stats) => stats,
        }
    }
}

/// A* search over a [CellGrid] that owns the grid while it runs.
///
/// The search never stores parent links. Queued cells are marked [CellState::Closed] in the
/// grid itself, which is also what keeps a cell from being queued twice, and expanded cells
/// are marked [CellState::Path].
pub struct AstarSearch {
    grid: CellGrid,
    open: OpenSet,
    start: Point,
    goal: Point,
    state: SearchState,
    cost: u32,
    stats: SearchStats,
}

impl AstarSearch {
    /// Validates the endpoints and seeds the open set with the start.
    pub fn new(mut grid: CellGrid, start: Point, goal: Point) -> Result<AstarSearch, SearchError> {
        for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !grid.point_in_bounds(&point) {
                return Err(SearchError::OutOfBounds { endpoint, point });
            }
        }
        if grid.get_point(&start) == Some(CellState::Obstacle) {
            return Err(SearchError::BlockedStart(start));
        }
        let mut open = OpenSet::new();
        add_to_open(
            Node::new(start, 0, heuristic(&start, &goal)),
            &mut open,
            &mut grid,
        );
        debug!("Searching from {:?} to {:?}", start, goal);
        Ok(AstarSearch {
            grid,
            open,
            start,
            goal,
            state: SearchState::Running,
            cost: 0,
            stats: SearchStats {
                expanded: 0,
                queued: 1,
                max_open: 1,
            },
        })
    }

    /// Expands a single node. Does nothing once a terminal state has been reached.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }
        let Some(current) = self.open.pop() else {
            warn!("No path found from {:?} to {:?}", self.start, self.goal);
            self.state = SearchState::Exhausted;
            return self.state;
        };
        self.stats.expanded += 1;
        self.grid.set_point(&current.point, CellState::Path);

        if current.point == self.goal {
            self.grid.set_point(&self.start, CellState::Start);
            self.grid.set_point(&self.goal, CellState::Finish);
            self.cost = current.g;
            self.state = SearchState::Found;
            info!(
                "Found path from {:?} to {:?} with cost {} after expanding {} nodes",
                self.start, self.goal, self.cost, self.stats.expanded
            );
            return self.state;
        }

        self.stats.queued += expand_neighbors(&current, &self.goal, &mut self.open, &mut self.grid);
        self.stats.max_open = self.stats.max_open.max(self.open.len());
        self.state
    }

    /// Steps until the search has found the goal or run out of nodes.
    pub fn run(mut self) -> SearchOutcome {
        while self.step() == SearchState::Running {}
        self.into_outcome()
    }

    /// Converts a finished search into its outcome. A search that is still running counts
    /// as exhausted.
    pub fn into_outcome(self) -> SearchOutcome {
        match self.state {
            SearchState::Found => SearchOutcome::Found(Solution {
                grid: self.grid,
                cost: self.cost,
                stats: self.stats,
            }),
            SearchState::Running | SearchState::Exhausted => SearchOutcome::Exhausted(self.stats),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }
    pub fn open_len(&self) -> usize {
        self.open.len()
    }
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Searches for a 4-connected path from `start` to `goal`, marking the expanded cells in
/// `grid`.
///
/// Cells are closed as soon as they are queued and never re-opened, so the cost of the walk
/// found is only guaranteed minimal on grids without obstacles. Around obstacles a cell can
/// be discovered first through a longer detour and keep that cost.
///
/// Both endpoints must lie on the grid and the start must not be an obstacle. A goal that
/// cannot be reached, an obstacle goal included, yields [SearchOutcome::Exhausted].
pub fn search(grid: CellGrid, start: Point, goal: Point) -> Result<SearchOutcome, SearchError> {
    Ok(AstarSearch::new(grid, start, goal)?.run())
}
