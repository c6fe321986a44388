use crate::cell::CellState;
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;

/// Grid of [CellState] values indexed as `(x, y)` = (row, column).
///
/// Rows are stored independently and may differ in length, so bounds are always checked
/// against the length of the row being addressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellGrid {
    rows: Vec<Vec<CellState>>,
}

impl CellGrid {
    /// Creates a rectangular grid with `height` rows of `width` cells.
    pub fn new(width: usize, height: usize, default_value: CellState) -> CellGrid {
        CellGrid {
            rows: vec![vec![default_value; width]; height],
        }
    }
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> CellGrid {
        CellGrid { rows }
    }
    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.rows
    }
    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    /// Length of row `x`, zero for rows that do not exist.
    pub fn row_len(&self, x: usize) -> usize {
        self.rows.get(x).map_or(0, |row| row.len())
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (y as usize) < self.row_len(x as usize)
    }
    pub fn point_in_bounds(&self, point: &Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        if self.in_bounds(x, y) {
            Some(self.rows[x as usize][y as usize])
        } else {
            None
        }
    }
    pub fn get_point(&self, point: &Point) -> Option<CellState> {
        self.get(point.x, point.y)
    }

    /// Overwrites the state at `point`. Writes outside the grid are ignored.
    pub fn set_point(&mut self, point: &Point, state: CellState) {
        debug_assert!(self.point_in_bounds(point), "write outside of grid");
        if self.point_in_bounds(point) {
            self.rows[point.x as usize][point.y as usize] = state;
        }
    }

    /// A cell can be entered by the search if it lies on the grid and is still [CellState::Empty].
    /// The bounds test runs first so the grid is never indexed out of range.
    pub fn is_open(&self, point: &Point) -> bool {
        self.point_in_bounds(point)
            && self.rows[point.x as usize][point.y as usize] == CellState::Empty
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Iterates over all cells together with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.rows.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .map(move |(y, &cell)| (Point::new(x as i32, y as i32), cell))
        })
    }

    /// Links up 4-adjacent non-obstacle cells into connected components.
    pub fn components(&self) -> Components {
        let mut offsets = Vec::with_capacity(self.rows.len());
        let mut total = 0;
        for row in &self.rows {
            offsets.push(total);
            total += row.len();
        }
        let mut components = Components {
            union_find: UnionFind::new(total),
            offsets,
            total,
        };
        for (point, cell) in self.cells() {
            if cell.is_obstacle() {
                continue;
            }
            let parent_ix = components.offsets[point.x as usize] + point.y as usize;
            for p in [Point::new(point.x, point.y + 1), Point::new(point.x + 1, point.y)] {
                if self.get_point(&p).is_some_and(|n| !n.is_obstacle()) {
                    let ix = components.offsets[p.x as usize] + p.y as usize;
                    components.union_find.union(parent_ix, ix);
                }
            }
        }
        components
    }

    /// Checks whether `goal` can be reached from `start` by 4-directional moves over
    /// non-obstacle cells. Points that are off the grid or blocked are never reachable.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        let passable = |p: &Point| self.get_point(p).is_some_and(|cell| !cell.is_obstacle());
        passable(start) && passable(goal) && self.components().equiv(start, goal)
    }
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}

/// Connected components of a [CellGrid], see [CellGrid::components].
#[derive(Clone, Debug)]
pub struct Components {
    union_find: UnionFind<usize>,
    offsets: Vec<usize>,
    total: usize,
}

impl Components {
    /// Flat index of `point`, [None] if it lies off the grid the components were built from.
    fn ix(&self, point: &Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let x = point.x as usize;
        let row_end = self.offsets.get(x + 1).copied().unwrap_or(self.total);
        let ix = self.offsets.get(x)? + point.y as usize;
        (ix < row_end).then_some(ix)
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.ix(point).map(|ix| self.union_find.find(ix))
    }
    /// Checks if two points are on the same component. Points off the grid share no
    /// component with anything.
    pub fn equiv(&self, p1: &Point, p2: &Point) -> bool {
        match (self.ix(p1), self.ix(p2)) {
            (Some(ix1), Some(ix2)) => self.union_find.equiv(ix1, ix2),
            _ => false,
        }
    }
}
