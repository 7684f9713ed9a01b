//! Inference strategies run after each tentative assignment, pruning the
//! working domains of related variables before the search recurses.

use tracing::debug;

use crate::solver::{
    csp::{Assignment, Csp, VariableId},
    domains::{DomainStore, RemovalLog},
    value::Value,
};

/// A strategy for propagating the consequences of `var = value`.
///
/// Implementations prune neighbor domains through `store`, recording every
/// removal in `removals`, and report whether the state is still feasible.
/// A `false` return signals that some domain was emptied; the caller is
/// expected to undo the recorded prunings via
/// [`DomainStore::restore`] and try the next value.
pub trait InferenceStrategy<V: Value> {
    fn infer(
        &self,
        csp: &Csp<V>,
        store: &mut DomainStore<V>,
        var: VariableId,
        value: &V,
        assignment: &Assignment<V>,
        removals: &mut RemovalLog<V>,
    ) -> bool;
}

/// The baseline strategy: no propagation at all.
#[derive(Debug, Clone, Copy)]
pub struct NoInference;

impl<V: Value> InferenceStrategy<V> for NoInference {
    fn infer(
        &self,
        _csp: &Csp<V>,
        _store: &mut DomainStore<V>,
        _var: VariableId,
        _value: &V,
        _assignment: &Assignment<V>,
        _removals: &mut RemovalLog<V>,
    ) -> bool {
        true
    }
}

/// Prunes, from every unassigned neighbor of `var`, the values incompatible
/// with `var = value`.
///
/// Short-circuits as soon as a neighbor's domain empties; prunings already
/// made are left in place for the caller's restore to undo.
#[derive(Debug, Clone, Copy)]
pub struct ForwardChecking;

impl<V: Value> InferenceStrategy<V> for ForwardChecking {
    fn infer(
        &self,
        csp: &Csp<V>,
        store: &mut DomainStore<V>,
        var: VariableId,
        value: &V,
        assignment: &Assignment<V>,
        removals: &mut RemovalLog<V>,
    ) -> bool {
        store.support_pruning(csp);
        for &b_var in csp.neighbors(var) {
            if assignment.contains(b_var) {
                continue;
            }
            let candidates = store.choices(csp, b_var).to_vec();
            for b_value in &candidates {
                if !csp.check(var, value, b_var, b_value) {
                    store.prune(b_var, b_value, removals);
                }
            }
            if store.choices(csp, b_var).is_empty() {
                debug!(var = b_var, "forward checking emptied a domain");
                return false;
            }
        }
        true
    }
}

/// Maintains arc consistency around the assignment via [`ac3`].
#[derive(Debug, Clone, Copy)]
pub struct ArcConsistency;

impl<V: Value> InferenceStrategy<V> for ArcConsistency {
    fn infer(
        &self,
        csp: &Csp<V>,
        store: &mut DomainStore<V>,
        var: VariableId,
        _value: &V,
        _assignment: &Assignment<V>,
        removals: &mut RemovalLog<V>,
    ) -> bool {
        let queue = csp
            .neighbors(var)
            .iter()
            .map(|&x| (x, var))
            .collect::<Vec<_>>();
        ac3(csp, store, Some(queue), removals)
    }
}

/// The AC-3 propagation loop.
///
/// `queue` holds directed arcs `(xi, xj)`; when omitted, every arc of the
/// problem is enqueued, which makes this usable as a whole-problem
/// preprocessing pass. Arcs are popped LIFO. When revising `xi` against
/// `xj` removes values, arcs *into* `xi` from its other neighbors are
/// re-enqueued. That re-queue direction is kept as-is deliberately; do not
/// swap it for the textbook orientation without revisiting the callers.
///
/// Returns `false` as soon as any domain empties, leaving the removals
/// recorded for the caller to restore.
pub fn ac3<V: Value>(
    csp: &Csp<V>,
    store: &mut DomainStore<V>,
    queue: Option<Vec<(VariableId, VariableId)>>,
    removals: &mut RemovalLog<V>,
) -> bool {
    let mut queue = queue.unwrap_or_else(|| {
        csp.variables()
            .iter()
            .flat_map(|&xi| csp.neighbors(xi).iter().map(move |&xk| (xi, xk)))
            .collect()
    });
    store.support_pruning(csp);

    while let Some((xi, xj)) = queue.pop() {
        if revise(csp, store, xi, xj, removals) {
            if store.choices(csp, xi).is_empty() {
                debug!(var = xi, "arc consistency emptied a domain");
                return false;
            }
            for &xk in csp.neighbors(xi) {
                if xk != xi {
                    queue.push((xk, xi));
                }
            }
        }
    }
    true
}

/// Removes from `xi`'s domain every value with no supporting value in
/// `xj`'s domain. Returns true if anything was removed.
fn revise<V: Value>(
    csp: &Csp<V>,
    store: &mut DomainStore<V>,
    xi: VariableId,
    xj: VariableId,
    removals: &mut RemovalLog<V>,
) -> bool {
    let mut revised = false;
    let xs = store.choices(csp, xi).to_vec();
    for x in &xs {
        let supported = store
            .choices(csp, xj)
            .iter()
            .any(|y| csp.check(xi, x, xj, y));
        if !supported {
            store.prune(xi, x, removals);
            revised = true;
        }
    }
    revised
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use super::*;

    fn inequality_csp(domains: Vec<(VariableId, Vec<i32>)>, edges: Vec<(VariableId, VariableId)>) -> Csp<i32> {
        let domains = domains.into_iter().collect();
        let mut neighbors: HashMap<VariableId, Vec<VariableId>> = HashMap::new();
        for (a, b) in edges {
            neighbors.entry(a).or_default().push(b);
        }
        Csp::new(domains, neighbors, Arc::new(|_, a: &i32, _, b: &i32| a != b))
    }

    #[test]
    fn no_inference_prunes_nothing() {
        let csp = inequality_csp(vec![(0, vec![1, 2]), (1, vec![1, 2])], vec![(0, 1)]);
        let mut store = DomainStore::new();
        let mut assignment = Assignment::new();
        assignment.assign(0, 1);
        let mut removals = store.suppose(&csp, 0, &1);
        let before = removals.len();

        assert!(NoInference.infer(&csp, &mut store, 0, &1, &assignment, &mut removals));
        assert_eq!(removals.len(), before);
        assert_eq!(store.choices(&csp, 1), &[1, 2]);
    }

    #[test]
    fn forward_checking_prunes_incompatible_neighbor_values() {
        let csp = inequality_csp(vec![(0, vec![1, 2]), (1, vec![1, 2])], vec![(0, 1)]);
        let mut store = DomainStore::new();
        let mut assignment = Assignment::new();
        assignment.assign(0, 1);
        let mut removals = store.suppose(&csp, 0, &1);

        assert!(ForwardChecking.infer(&csp, &mut store, 0, &1, &assignment, &mut removals));
        assert_eq!(store.choices(&csp, 1), &[2]);
    }

    #[test]
    fn forward_checking_fails_on_emptied_domain() {
        // Neighbor starts with a single value equal to the assignment.
        let csp = inequality_csp(vec![(0, vec![1, 2]), (1, vec![1])], vec![(0, 1)]);
        let mut store = DomainStore::new();
        let mut assignment = Assignment::new();
        assignment.assign(0, 1);
        let mut removals = store.suppose(&csp, 0, &1);

        assert!(!ForwardChecking.infer(&csp, &mut store, 0, &1, &assignment, &mut removals));
        assert!(store.choices(&csp, 1).is_empty());

        // The caller's restore still undoes everything.
        store.restore(removals);
        assert_eq!(store.choices(&csp, 0), &[1, 2]);
        assert_eq!(store.choices(&csp, 1), &[1]);
    }

    #[test]
    fn forward_checking_skips_assigned_neighbors() {
        let csp = inequality_csp(
            vec![(0, vec![1]), (1, vec![1]), (2, vec![1, 2])],
            vec![(0, 1), (0, 2)],
        );
        let mut store = DomainStore::new();
        let mut assignment = Assignment::new();
        // Var 1 is already assigned; its (conflicting) singleton domain must
        // not be touched or treated as a failure here.
        assignment.assign(1, 1);
        assignment.assign(0, 1);
        let mut removals = store.suppose(&csp, 0, &1);

        assert!(ForwardChecking.infer(&csp, &mut store, 0, &1, &assignment, &mut removals));
        assert_eq!(store.choices(&csp, 1), &[1]);
        assert_eq!(store.choices(&csp, 2), &[2]);
    }

    #[test]
    fn ac3_detects_infeasible_singletons() {
        // Two neighbors both pinned to the same value under inequality.
        let csp = inequality_csp(vec![(0, vec![1]), (1, vec![1])], vec![(0, 1)]);
        let mut store = DomainStore::new();
        let mut removals = RemovalLog::new();

        assert!(!ac3(&csp, &mut store, None, &mut removals));
        let emptied = store.choices(&csp, 0).is_empty() || store.choices(&csp, 1).is_empty();
        assert!(emptied);
    }

    #[test]
    fn ac3_full_pass_reaches_arc_consistency() {
        // 0 != 1, 1 != 2, with 1 pinned: both ends lose value 2.
        let csp = inequality_csp(
            vec![(0, vec![1, 2]), (1, vec![2]), (2, vec![2, 3])],
            vec![(0, 1), (1, 2)],
        );
        let mut store = DomainStore::new();
        let mut removals = RemovalLog::new();

        assert!(ac3(&csp, &mut store, None, &mut removals));
        assert_eq!(store.choices(&csp, 0), &[1]);
        assert_eq!(store.choices(&csp, 2), &[3]);
    }

    #[test]
    fn arc_consistency_strategy_seeds_arcs_into_the_assigned_variable() {
        let csp = inequality_csp(vec![(0, vec![1, 2]), (1, vec![1, 2])], vec![(0, 1)]);
        let mut store = DomainStore::new();
        let mut assignment = Assignment::new();
        assignment.assign(0, 1);
        let mut removals = store.suppose(&csp, 0, &1);

        assert!(ArcConsistency.infer(&csp, &mut store, 0, &1, &assignment, &mut removals));
        assert_eq!(store.choices(&csp, 1), &[2]);
    }
}
