use grid_astar::loader::parse_grid;
use grid_astar::{search, Point, SearchOutcome};

// The goal G is boxed in by obstacles on all four sides:
//  _____
// |S    |
// |   # |
// |  #G#|
// |   ##|
//  _____

fn main() {
    let grid = parse_grid("0,0,0,0,0,\n0,0,0,1,0,\n0,0,1,0,1,\n0,0,0,1,1,\n");
    match search(grid, Point::new(0, 0), Point::new(2, 3)).unwrap() {
        SearchOutcome::Found(solution) => print!("{}", solution.grid),
        SearchOutcome::Exhausted(stats) => {
            println!("No path found after expanding {} nodes", stats.expanded)
        }
    }
}
