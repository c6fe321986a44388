use grid_astar::render::{GlyphSet, Render};
use grid_astar::{search, CellGrid, CellState, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = CellGrid::new(3, 3, CellState::Empty);
    grid.set_point(&Point::new(1, 1), CellState::Obstacle);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let solution = search(grid, start, end).unwrap().solution().unwrap();
    println!("Cost: {}", solution.cost);
    print!("{}", Render::new(&solution.grid, GlyphSet::Ascii));
}
