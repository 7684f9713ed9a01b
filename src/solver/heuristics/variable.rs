//! Strategies for selecting which variable to branch on next.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::solver::{
    csp::{Assignment, Csp, VariableId},
    domains::DomainStore,
    value::Value,
};

/// A variable-selection strategy.
///
/// Implementors choose which unassigned variable the search should branch
/// on next. Selection may consult the working domains in `store`; a good
/// choice here dramatically shrinks the search tree.
///
/// `select` takes `&mut self` so that randomized strategies can own their
/// RNG state.
pub trait VariableSelection<V: Value> {
    /// Returns the next variable to assign, or `None` when every variable
    /// is already in the assignment.
    fn select(
        &mut self,
        csp: &Csp<V>,
        store: &DomainStore<V>,
        assignment: &Assignment<V>,
    ) -> Option<VariableId>;
}

/// The default order: the first unassigned variable in the problem's fixed
/// enumeration order.
#[derive(Debug, Clone, Copy)]
pub struct FirstUnassigned;

impl<V: Value> VariableSelection<V> for FirstUnassigned {
    fn select(
        &mut self,
        csp: &Csp<V>,
        _store: &DomainStore<V>,
        assignment: &Assignment<V>,
    ) -> Option<VariableId> {
        csp.variables()
            .iter()
            .copied()
            .find(|&var| !assignment.contains(var))
    }
}

/// The number of values still legal for `var`: its current domain size once
/// the store is initialized, otherwise the count of original-domain values
/// producing zero conflicts against the assignment.
pub fn num_legal_values<V: Value>(
    csp: &Csp<V>,
    store: &DomainStore<V>,
    var: VariableId,
    assignment: &Assignment<V>,
) -> usize {
    if let Some(domain) = store.current(var) {
        domain.len()
    } else {
        csp.domain(var)
            .iter()
            .filter(|value| csp.nconflicts(var, value, assignment) == 0)
            .count()
    }
}

/// Minimum-remaining-values: a fail-first strategy that branches on the
/// most constrained variable.
///
/// Ties are broken uniformly at random among the minimal candidates, not
/// first-found. The RNG is seedable so runs can be reproduced exactly; a
/// unique minimum is always selected deterministically.
#[derive(Debug, Clone)]
pub struct MinimumRemainingValues {
    rng: ChaCha8Rng,
}

impl MinimumRemainingValues {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimumRemainingValues {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> VariableSelection<V> for MinimumRemainingValues {
    fn select(
        &mut self,
        csp: &Csp<V>,
        store: &DomainStore<V>,
        assignment: &Assignment<V>,
    ) -> Option<VariableId> {
        let mut minimal: Vec<VariableId> = Vec::new();
        let mut best = usize::MAX;
        for &var in csp.variables() {
            if assignment.contains(var) {
                continue;
            }
            let legal = num_legal_values(csp, store, var, assignment);
            if legal < best {
                best = legal;
                minimal.clear();
                minimal.push(var);
            } else if legal == best {
                minimal.push(var);
            }
        }
        if minimal.is_empty() {
            None
        } else {
            Some(minimal[self.rng.gen_range(0..minimal.len())])
        }
    }
}
