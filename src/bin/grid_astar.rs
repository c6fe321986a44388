//! Solves a board file and prints the grid with the discovered path.
//!
//! Usage:
//!   grid_astar                                  # boards/board.txt from (0,0) to (4,5)
//!   grid_astar my_board.txt --goal 7,3          # Custom board and goal
//!   grid_astar --ascii                          # Plain characters instead of emoji
//!
//! Log output is controlled through `RUST_LOG`.
use anyhow::{bail, Result};
use clap::Parser;
use grid_astar::loader::load_grid;
use grid_astar::render::{GlyphSet, Render};
use grid_astar::{search, CellGrid, Point, SearchOutcome};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments
#[derive(Parser)]
#[command(name = "grid_astar")]
#[command(about = "Find a path on an occupancy grid with A*")]
struct Args {
    /// Board file, one comma separated row per line (0 = free, other = obstacle)
    #[arg(default_value = "boards/board.txt")]
    board: PathBuf,

    /// Start cell as row,column
    #[arg(long, default_value = "0,0", value_parser = parse_point)]
    start: Point,

    /// Goal cell as row,column
    #[arg(long, default_value = "4,5", value_parser = parse_point)]
    goal: Point,

    /// Render with ASCII characters
    #[arg(long)]
    ascii: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,column but got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate '{v}': {e}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

/// Explains a failed search. Connectivity is only worked out here, on the grid as loaded,
/// since the search itself does not need it.
fn exhausted_message(grid: &CellGrid, args: &Args, expanded: usize) -> String {
    if grid.unreachable(&args.start, &args.goal) {
        format!("goal is not connected to the start ({expanded} cells explored)")
    } else {
        format!("search exhausted after exploring {expanded} cells")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let glyphs = if args.ascii {
        GlyphSet::Ascii
    } else {
        GlyphSet::Emoji
    };

    let grid = load_grid(&args.board);
    let pristine = grid.clone();
    match search(grid, args.start, args.goal)? {
        SearchOutcome::Found(solution) => {
            print!("{}", Render::new(&solution.grid, glyphs));
            Ok(())
        }
        SearchOutcome::Exhausted(stats) => {
            println!("No path found");
            bail!(exhausted_message(&pristine, &args, stats.expanded))
        }
    }
}
