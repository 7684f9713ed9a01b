//! The backtracking search driver.

use tracing::debug;

use crate::solver::{
    csp::{Assignment, Csp},
    domains::DomainStore,
    heuristics::{value::ValueOrdering, variable::VariableSelection},
    inference::InferenceStrategy,
    stats::SearchStats,
    value::Value,
};

/// Depth-first backtracking search for a complete, consistent assignment.
///
/// At each step the variable-selection strategy picks an unassigned
/// variable, the value-ordering strategy ranks its candidates, and each
/// locally-consistent candidate is tried in turn: tentatively assign,
/// restrict the variable's domain via `suppose`, run the inference
/// strategy, and recurse. Failure at any point restores the pruned domains
/// from the removal log and moves on to the next candidate.
///
/// Returns the solution (or `None` when the search space is exhausted)
/// together with diagnostic counters. The store of working domains is
/// created here and dropped with the call, so repeated searches over the
/// same [`Csp`] are independent.
///
/// # Panics
///
/// Panics if a returned assignment fails the goal test. That cannot happen
/// unless a strategy or the engine itself is buggy, so it is treated as a
/// hard fault rather than a recoverable error.
pub fn backtracking_search<V: Value>(
    csp: &Csp<V>,
    select_variable: &mut dyn VariableSelection<V>,
    order_values: &dyn ValueOrdering<V>,
    inference: &dyn InferenceStrategy<V>,
) -> (Option<Assignment<V>>, SearchStats) {
    let mut store = DomainStore::new();
    let mut assignment = Assignment::new();
    let mut stats = SearchStats::default();

    let found = backtrack(
        csp,
        &mut store,
        &mut assignment,
        select_variable,
        order_values,
        inference,
        &mut stats,
    );

    if found {
        assert!(
            csp.goal_test(&assignment),
            "search produced an assignment that fails the goal test"
        );
        (Some(assignment), stats)
    } else {
        debug!(
            nodes = stats.nodes_visited,
            "search exhausted without a solution"
        );
        (None, stats)
    }
}

fn backtrack<V: Value>(
    csp: &Csp<V>,
    store: &mut DomainStore<V>,
    assignment: &mut Assignment<V>,
    select_variable: &mut dyn VariableSelection<V>,
    order_values: &dyn ValueOrdering<V>,
    inference: &dyn InferenceStrategy<V>,
    stats: &mut SearchStats,
) -> bool {
    stats.nodes_visited += 1;

    if assignment.len() == csp.variables().len() {
        return true;
    }
    let Some(var) = select_variable.select(csp, store, assignment) else {
        // Unreachable while the assignment is incomplete; treated as a
        // dead end rather than a panic.
        return false;
    };

    for value in order_values.order(csp, store, var, assignment) {
        if csp.nconflicts(var, &value, assignment) != 0 {
            continue;
        }
        debug!(var, value = ?value, depth = assignment.len(), "trying assignment");
        assignment.assign(var, value.clone());
        stats.assignments += 1;

        let mut removals = store.suppose(csp, var, &value);
        let feasible = inference.infer(csp, store, var, &value, assignment, &mut removals);
        stats.prunings += removals.len() as u64;
        if feasible
            && backtrack(
                csp,
                store,
                assignment,
                select_variable,
                order_values,
                inference,
                stats,
            )
        {
            return true;
        }
        store.restore(removals);
        stats.backtracks += 1;
    }

    assignment.unassign(var);
    false
}
