use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over one backtracking search.
///
/// Purely diagnostic; nothing in the solver branches on these.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered (recursive calls).
    pub nodes_visited: u64,
    /// Tentative assignments made.
    pub assignments: u64,
    /// Candidate values abandoned after inference or recursion failed.
    pub backtracks: u64,
    /// Domain values removed by `suppose` and inference, counted before
    /// each restore.
    pub prunings: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Assignments"),
        Cell::new(&stats.assignments.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Prunings"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.to_string()
}
