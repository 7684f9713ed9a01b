use std::{path::PathBuf, time::Instant};

use clap::Parser;
use necto::{
    error::Result,
    solver::{
        search::backtracking_search,
        stats::render_stats_table,
        strategy,
    },
    sudoku,
};
use tracing_subscriber::EnvFilter;

/// Solve a Sudoku board with a configurable backtracking strategy.
#[derive(Debug, Parser)]
#[command(name = "necto", version, about)]
struct Args {
    /// Path to a board file: one line of 81 characters, digits 1-9 for
    /// givens and '.' for empty cells.
    #[arg(short, long)]
    board: PathBuf,

    /// Variable-ordering strategy: first_unassigned_variable or mrv.
    #[arg(long = "varordering", default_value = "first_unassigned_variable")]
    variable_ordering: String,

    /// Value-ordering strategy: unordered_domain_values or lcv.
    #[arg(long = "valordering", default_value = "unordered_domain_values")]
    value_ordering: String,

    /// Inference strategy: no_inference, forward_checking or arc_cons.
    #[arg(short, long, default_value = "no_inference")]
    inference: String,

    /// Print search statistics as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    // Resolve strategies before touching the board, so a bad name fails
    // fast with no partial run.
    let mut variable_ordering = strategy::variable_selection::<char>(&args.variable_ordering)?;
    let value_ordering = strategy::value_ordering::<char>(&args.value_ordering)?;
    let inference = strategy::inference::<char>(&args.inference)?;

    let board = sudoku::load_board(&args.board)?;
    let csp = sudoku::build(&board)?;

    println!("{}", sudoku::render(&sudoku::clue_assignment(&csp)));

    let start = Instant::now();
    let (solution, stats) = backtracking_search(
        &csp,
        variable_ordering.as_mut(),
        value_ordering.as_ref(),
        inference.as_ref(),
    );
    let elapsed = start.elapsed();

    match solution {
        Some(assignment) => println!("{}", sudoku::render(&assignment)),
        None => println!("No solution."),
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", render_stats_table(&stats));
    }
    println!("Run time: {elapsed:.2?}");

    Ok(())
}
