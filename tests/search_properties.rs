use grid_astar::loader::parse_grid;
use grid_astar::render::{GlyphSet, Render};
use grid_astar::search::{AstarSearch, SearchState};
use grid_astar::{heuristic, search, CellGrid, CellState, Point, SearchOutcome};

const BOARD: &str = "0,1,0,0,0,0,
0,1,0,0,0,0,
0,1,0,0,0,0,
0,1,0,0,0,0,
0,0,0,0,1,0,
";

/// Without obstacles every first discovery is along a shortest path, and exactly the cells of
/// one such path are expanded.
#[test]
fn open_grid_marks_one_shortest_path() {
    let grid = CellGrid::new(6, 5, CellState::Empty);
    let start = Point::new(0, 0);
    let goal = Point::new(4, 5);
    let solution = search(grid, start, goal).unwrap().solution().unwrap();
    assert_eq!(solution.cost, 9);
    assert_eq!(solution.path_len(), 10);
    assert_eq!(solution.grid.get(0, 0), Some(CellState::Start));
    assert_eq!(solution.grid.get(4, 5), Some(CellState::Finish));
}

#[test]
fn open_grid_all_endpoint_pairs() {
    let (w, h) = (5, 4);
    for sx in 0..h {
        for sy in 0..w {
            for gx in 0..h {
                for gy in 0..w {
                    let start = Point::new(sx, sy);
                    let goal = Point::new(gx, gy);
                    let grid = CellGrid::new(w as usize, h as usize, CellState::Empty);
                    let solution = search(grid, start, goal).unwrap().solution().unwrap();
                    let distance = heuristic(&start, &goal);
                    assert_eq!(solution.cost, distance);
                    assert_eq!(solution.path_len(), 1 + distance as usize);
                    assert_eq!(solution.stats.expanded, 1 + distance as usize);
                }
            }
        }
    }
}

#[test]
fn solves_board_file() {
    let grid = parse_grid(BOARD);
    let solution = search(grid, Point::new(0, 0), Point::new(4, 5))
        .unwrap()
        .solution()
        .unwrap();
    assert_eq!(solution.cost, 11);
    assert_eq!(solution.path_len(), 13);
    let text = Render::new(&solution.grid, GlyphSet::Ascii).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "S#....");
    assert_eq!(lines[2], "*#....");
    assert_eq!(lines[3], "*#****");
    assert_eq!(lines[4], "****#G");
}

/// Closing cells when they are queued keeps the first cost they were discovered at. Here the
/// search commits to a detour through the left columns and reports 10 steps, while the route
/// through the middle row takes 8.
#[test]
fn first_discovery_cost_is_kept() {
    // |S##..|
    // |..###|
    // |.....|
    // |...#.|
    // |..#.G|
    let grid = parse_grid("0,1,1,0,0\n0,0,1,1,1\n0,0,0,0,0\n0,0,0,1,0\n0,0,1,0,0\n");
    let start = Point::new(0, 0);
    let goal = Point::new(4, 4);
    let solution = search(grid, start, goal).unwrap().solution().unwrap();
    assert_eq!(heuristic(&start, &goal), 8);
    assert_eq!(solution.cost, 10);
    assert_eq!(solution.path_len(), 15);
    assert_eq!(
        Render::new(&solution.grid, GlyphSet::Ascii).to_string(),
        "S##..\n**###\n*****\n***#*\n**#.G\n"
    );
}

/// The goal's four neighbours are obstacles, so the open set runs dry.
#[test]
fn enclosed_goal_is_exhausted() {
    // |S....|
    // |...#.|
    // |..#G#|
    // |...##|
    let grid = parse_grid("0,0,0,0,0\n0,0,0,1,0\n0,0,1,0,1\n0,0,0,1,1\n");
    let start = Point::new(0, 0);
    let goal = Point::new(2, 3);
    assert!(grid.unreachable(&start, &goal));

    let mut astar = AstarSearch::new(grid.clone(), start, goal).unwrap();
    let mut steps = 0;
    loop {
        let open_before = astar.open_len();
        let state = astar.step();
        steps += 1;
        match state {
            SearchState::Running => assert!(open_before > 0),
            SearchState::Exhausted => {
                assert_eq!(open_before, 0);
                assert_eq!(astar.open_len(), 0);
                break;
            }
            SearchState::Found => panic!("enclosed goal was reached"),
        }
    }
    let empty_cells = grid.count(CellState::Empty);
    assert_eq!(steps, empty_cells);
    assert!(matches!(
        astar.into_outcome(),
        SearchOutcome::Exhausted(stats) if stats.expanded == empty_cells - 1
    ));
}

#[test]
fn goal_walled_off_at_grid_edge() {
    let grid = parse_grid("0,0,0\n0,0,1\n0,1,0\n");
    let outcome = search(grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
    assert!(outcome.solution().is_none());
}

#[test]
fn ragged_rows_are_searched_safely() {
    // |...S|
    // |.|
    // |..G|
    let grid = parse_grid("0,0,0,0\n0\n0,0,0\n");
    let solution = search(grid, Point::new(0, 3), Point::new(2, 2))
        .unwrap()
        .solution()
        .unwrap();
    assert_eq!(solution.cost, 7);
    assert_eq!(solution.path_len(), 8);
    let text = Render::new(&solution.grid, GlyphSet::Ascii).to_string();
    assert_eq!(text, "***S\n*\n**G\n");
}

#[test]
fn leftover_closed_cells_render_as_default() {
    // Ties at the first expansion leave the right-hand neighbour queued but unexpanded.
    let grid = CellGrid::new(2, 2, CellState::Empty);
    let solution = search(grid, Point::new(0, 0), Point::new(1, 1))
        .unwrap()
        .solution()
        .unwrap();
    assert_eq!(solution.grid.get(0, 1), Some(CellState::Closed));
    assert_eq!(
        Render::new(&solution.grid, GlyphSet::Ascii).to_string(),
        "S.\n*G\n"
    );
}
