//! Strategies for ordering the candidate values of a chosen variable.

use crate::solver::{
    csp::{Assignment, Csp, VariableId},
    domains::DomainStore,
    value::Value,
};

/// A value-ordering strategy: given the variable being branched on, yields
/// its current candidates in the order they should be tried.
pub trait ValueOrdering<V: Value> {
    fn order(
        &self,
        csp: &Csp<V>,
        store: &DomainStore<V>,
        var: VariableId,
        assignment: &Assignment<V>,
    ) -> Vec<V>;
}

/// The default order: candidates exactly as they appear in the domain.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedValues;

impl<V: Value> ValueOrdering<V> for UnorderedValues {
    fn order(
        &self,
        csp: &Csp<V>,
        store: &DomainStore<V>,
        var: VariableId,
        _assignment: &Assignment<V>,
    ) -> Vec<V> {
        store.choices(csp, var).to_vec()
    }
}

/// Least-constraining-value: candidates sorted ascending by the number of
/// conflicts each would create with already-assigned neighbors, so the
/// values that keep the most options open are tried first. The sort is
/// stable, so tied values keep their relative domain order.
#[derive(Debug, Clone, Copy)]
pub struct LeastConstrainingValue;

impl<V: Value> ValueOrdering<V> for LeastConstrainingValue {
    fn order(
        &self,
        csp: &Csp<V>,
        store: &DomainStore<V>,
        var: VariableId,
        assignment: &Assignment<V>,
    ) -> Vec<V> {
        let mut values = store.choices(csp, var).to_vec();
        values.sort_by_key(|value| csp.nconflicts(var, value, assignment));
        values
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use super::*;

    // Variable 0 has three neighbors; the predicate is rigged per-value so
    // that candidates 1, 2, 3 conflict with 2, 0 and 1 of them respectively.
    fn rigged_csp() -> Csp<i32> {
        let mut domains = HashMap::new();
        domains.insert(0, vec![1, 2, 3]);
        for var in 1..=3 {
            domains.insert(var, vec![0]);
        }
        let mut neighbors = HashMap::new();
        neighbors.insert(0, vec![1, 2, 3]);
        let constraint: crate::solver::csp::ConstraintFn<i32> =
            Arc::new(|_, a: &i32, b_var, _b: &i32| match (*a, b_var) {
                (1, 1) | (1, 2) => false,
                (3, 3) => false,
                _ => true,
            });
        Csp::new(domains, neighbors, constraint)
    }

    #[test]
    fn unordered_returns_choices_as_is() {
        let csp = rigged_csp();
        let store = DomainStore::new();
        let order = UnorderedValues.order(&csp, &store, 0, &Assignment::new());
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn lcv_sorts_by_conflicts_ascending() {
        let csp = rigged_csp();
        let store = DomainStore::new();
        let mut assignment = Assignment::new();
        for var in 1..=3 {
            assignment.assign(var, 0);
        }

        // Conflicts-if-assigned are [2, 0, 1] for values [1, 2, 3].
        assert_eq!(csp.nconflicts(0, &1, &assignment), 2);
        assert_eq!(csp.nconflicts(0, &2, &assignment), 0);
        assert_eq!(csp.nconflicts(0, &3, &assignment), 1);

        let order = LeastConstrainingValue.order(&csp, &store, 0, &assignment);
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn lcv_is_stable_for_ties() {
        let mut domains = HashMap::new();
        domains.insert(0, vec![3, 1, 2]);
        domains.insert(1, vec![0]);
        let mut neighbors = HashMap::new();
        neighbors.insert(0, vec![1]);
        let csp: Csp<i32> = Csp::new(domains, neighbors, Arc::new(|_, _: &i32, _, _: &i32| true));

        // No conflicts anywhere: the domain order must survive the sort.
        let mut assignment = Assignment::new();
        assignment.assign(1, 0);
        let order = LeastConstrainingValue.order(&csp, &DomainStore::new(), 0, &assignment);
        assert_eq!(order, vec![3, 1, 2]);
    }
}
