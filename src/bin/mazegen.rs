//! Headless generation tool: prints a maze and a JSON summary so two runs
//! with the same arguments can be diffed for reproducibility.

use mazecrawl::{ui, Cell, GameMode, Maze};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <size> <seed> [players]", args[0]);
        std::process::exit(1);
    }
    let size: usize = args[1].parse()?;
    let seed: i64 = args[2].parse()?;
    let mode = if args.len() == 4 && args[3] == "2" {
        GameMode::Dual
    } else {
        GameMode::Single
    };

    let maze = Maze::generate(size, mode, seed)?;
    println!(
        "{}",
        ui::render_to_string(maze.grid(), Some(maze.start1()), maze.start2())
    );

    let summary = json!({
        "seed": seed,
        "size": size,
        "mode": mode,
        "exit": { "row": maze.exit().0, "col": maze.exit().1 },
        "start2": maze.start2().map(|(r, c)| json!({ "row": r, "col": c })),
        "bonuses": maze.grid().count(Cell::Bonus),
        "reachable": maze.is_exit_reachable(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
