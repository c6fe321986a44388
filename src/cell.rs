/// State of a single grid cell.
///
/// A search only ever moves a cell forward along `Empty -> Closed -> Path`. Obstacles are
/// never touched, and `Start`/`Finish` are written onto the endpoints once the goal is found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    /// Discovered and queued on the open set.
    Closed,
    /// Expanded by the search.
    Path,
    Start,
    Finish,
}

impl CellState {
    /// Occupancy value as found in board files: `0` is free, anything else is blocked.
    pub fn from_value(value: i64) -> CellState {
        if value == 0 {
            CellState::Empty
        } else {
            CellState::Obstacle
        }
    }

    pub fn is_obstacle(self) -> bool {
        self == CellState::Obstacle
    }

    /// Whether the cell was expanded as part of a solution, endpoints included.
    pub fn on_path(self) -> bool {
        matches!(self, CellState::Path | CellState::Start | CellState::Finish)
    }
}
