//! Command-line front end for the patrol simulation.
//!
//! Reads a grid file, runs the guard once, searches for loop-inducing
//! obstructions, and prints both counts.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use patrol::search::{CandidateStrategy, ObstructionSearch};
use patrol::Summary;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "patrol",
    version,
    about = "Simulate a guard patrol and count loop-inducing obstructions"
)]
struct Cli {
    /// Grid file: one row per line using `.`, `#` and one of `^ > v <`.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Which cells to try as obstructions.
    #[arg(long, value_enum, default_value_t = Strategy::PatrolPath)]
    strategy: Strategy,

    /// Run obstruction trials on the calling thread only.
    #[arg(long, conflicts_with = "threads")]
    sequential: bool,

    /// Worker threads for obstruction trials (default: one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Every empty cell.
    Exhaustive,
    /// Only cells on the unobstructed patrol path.
    PatrolPath,
}

impl From<Strategy> for CandidateStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Exhaustive => CandidateStrategy::Exhaustive,
            Strategy::PatrolPath => CandidateStrategy::PatrolPath,
        }
    }
}

fn main() {
    patrol::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = ObstructionSearch::builder()
        .strategy(cli.strategy.into())
        .parallel(!cli.sequential);
    if let Some(threads) = cli.threads {
        builder = builder.threads(threads);
    }
    let search = builder.build().context("configure obstruction search")?;

    let summary = solve_file(&cli.input, &search)?;
    println!("{}", render(&summary, cli.json)?);
    Ok(())
}

fn solve_file(path: &Path, search: &ObstructionSearch) -> Result<Summary> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("read grid from {}", path.display()))?;
    patrol::solve(&input, search)
        .with_context(|| format!("simulate patrol for {}", path.display()))
}

fn render(summary: &Summary, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }
    Ok(format!(
        "The guard visited {} distinct positions before leaving the map.\n\
         There are {} possible obstruction positions.",
        summary.visited_cells, summary.loop_obstructions
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol::grid::GridError;
    use patrol::machine::SimulationError;

    fn sample() -> Summary {
        Summary {
            visited_cells: 41,
            loop_obstructions: 6,
        }
    }

    #[test]
    fn renders_text_lines() {
        let text = render(&sample(), false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "The guard visited 41 distinct positions before leaving the map.",
                "There are 6 possible obstruction positions.",
            ]
        );
    }

    #[test]
    fn renders_json_that_reads_back() {
        let json = render(&sample(), true).unwrap();
        assert!(json.contains("\"visited_cells\": 41"));
        let parsed: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let path = Path::new("no/such/grid.txt");
        let err = solve_file(path, &ObstructionSearch::new()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("read grid from no/such/grid.txt: "));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn invalid_grid_error_keeps_the_cause() {
        let path = std::env::temp_dir().join(format!("patrol-no-guard-{}.txt", std::process::id()));
        fs::write(&path, "...\n.#.\n").unwrap();
        let err = solve_file(&path, &ObstructionSearch::new()).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(format!("{:#}", err).starts_with("simulate patrol for "));
        assert_eq!(
            err.downcast_ref::<SimulationError>(),
            Some(&SimulationError::Grid(GridError::NoGuard))
        );
    }
}
