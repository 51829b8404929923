use anyhow::{Context, Result};
use clap::Parser;
use gridlock::io::{load_grid, read_grid, write_grid};
use gridlock::logger::TraceLogger;
use gridlock::solver::Puzzle;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridlock", version, about = "Backtracking Sudoku solver with placement traces")]
struct Cli {
    /// Puzzle file: nine comma-separated rows, or 81 chars with 0/. for blanks. If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the solved grid to this file as comma-separated rows
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every tentative placement as it is tried
    #[arg(long)]
    trace: bool,

    /// Also write the raw trace triples to this file
    #[arg(long)]
    trace_file: Option<PathBuf>,

    /// Step-by-step mode (pauses after each placement). Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Maximum trace lines to emit (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_lines: usize,

    /// Emit the console trace with colors
    #[arg(long)]
    color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let grid = match &cli.input {
        Some(p) => load_grid(p).with_context(|| format!("reading {}", p.display()))?,
        None => read_grid(&mut std::io::stdin()).context("reading puzzle from stdin")?,
    };

    let mut puzzle = Puzzle::new(grid);
    let solved = if cli.trace || cli.step || cli.trace_file.is_some() {
        let mut logger = TraceLogger::new(cli.trace_file.clone(), cli.color, cli.step, cli.max_lines)?;
        puzzle.solve_traced(&mut logger)
    } else {
        puzzle.solve()
    };

    if !solved {
        println!("No solution exists for this puzzle.");
        return Ok(());
    }

    println!("\nSolved grid:\n{}", puzzle.solved());
    if let Some(p) = &cli.output {
        write_grid(p, puzzle.solved()).with_context(|| format!("writing {}", p.display()))?;
    }
    Ok(())
}
