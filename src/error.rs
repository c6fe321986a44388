use grid_util::point::Point;

/// Which endpoint of a search a [SearchError] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Precondition violations detected before a search starts. Failing to find a path is not
/// an error, see [SearchOutcome::Exhausted](crate::SearchOutcome::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{endpoint} ({}, {}) lies outside of the grid", .point.x, .point.y)]
    OutOfBounds { endpoint: Endpoint, point: Point },
    #[error("start ({}, {}) is an obstacle", .0.x, .0.y)]
    BlockedStart(Point),
}
