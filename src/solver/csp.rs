use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::solver::value::Value;

pub type VariableId = u32;

/// The binary constraint predicate, evaluated only for neighbor pairs.
///
/// Must be pure: `(var_a, value_a, var_b, value_b) -> bool`, true when the
/// pair of assignments is compatible.
pub type ConstraintFn<V> = Arc<dyn Fn(VariableId, &V, VariableId, &V) -> bool + Send + Sync>;

/// An immutable binary-CSP problem definition.
///
/// A `Csp` holds the fixed parts of a problem: the variable set, each
/// variable's original domain, the symmetric neighbor relation, and the
/// constraint predicate. Everything that mutates during search lives
/// elsewhere — the [`Assignment`] owned by the search frame and the
/// [`DomainStore`](crate::solver::domains::DomainStore) owned by the
/// search session — so a single `Csp` can back any number of independent
/// solves.
pub struct Csp<V: Value> {
    variables: Vec<VariableId>,
    domains: HashMap<VariableId, Vec<V>>,
    neighbors: HashMap<VariableId, Vec<VariableId>>,
    constraint: ConstraintFn<V>,
}

impl<V: Value> Csp<V> {
    /// Builds a problem from per-variable original domains, a neighbor map
    /// and a constraint predicate.
    ///
    /// The variable set is the key set of `domains`, enumerated in
    /// ascending id order. The neighbor relation is normalized: self-loops
    /// are dropped, duplicates removed, and symmetry is enforced by
    /// mirroring every listed edge.
    pub fn new(
        domains: HashMap<VariableId, Vec<V>>,
        neighbors: HashMap<VariableId, Vec<VariableId>>,
        constraint: ConstraintFn<V>,
    ) -> Self {
        let mut variables: Vec<VariableId> = domains.keys().copied().collect();
        variables.sort_unstable();

        let mut edges: HashMap<VariableId, HashSet<VariableId>> =
            variables.iter().map(|&v| (v, HashSet::new())).collect();
        for (&var, vs) in &neighbors {
            for &other in vs {
                // Edges must connect two known variables; self-loops carry
                // no meaning for a binary constraint.
                if other == var || !edges.contains_key(&var) || !edges.contains_key(&other) {
                    continue;
                }
                if let Some(set) = edges.get_mut(&var) {
                    set.insert(other);
                }
                if let Some(set) = edges.get_mut(&other) {
                    set.insert(var);
                }
            }
        }
        let neighbors = edges
            .into_iter()
            .map(|(var, set)| {
                let mut vs: Vec<VariableId> = set.into_iter().collect();
                vs.sort_unstable();
                (var, vs)
            })
            .collect();

        Self {
            variables,
            domains,
            neighbors,
            constraint,
        }
    }

    /// The variable set, in the fixed enumeration order.
    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    /// The original (construction-time) domain of `var`.
    pub fn domain(&self, var: VariableId) -> &[V] {
        self.domains.get(&var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Variables sharing a binary constraint with `var`.
    pub fn neighbors(&self, var: VariableId) -> &[VariableId] {
        self.neighbors.get(&var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Evaluates the constraint predicate for a pair of assignments.
    pub fn check(&self, var_a: VariableId, a: &V, var_b: VariableId, b: &V) -> bool {
        (self.constraint)(var_a, a, var_b, b)
    }

    /// Counts assigned neighbors of `var` whose value is incompatible with
    /// `var = value`. Unassigned neighbors never contribute. Zero means the
    /// tentative assignment is locally consistent.
    pub fn nconflicts(&self, var: VariableId, value: &V, assignment: &Assignment<V>) -> usize {
        self.neighbors(var)
            .iter()
            .filter(|&&b_var| {
                assignment
                    .get(b_var)
                    .map_or(false, |b_val| !self.check(var, value, b_var, b_val))
            })
            .count()
    }

    /// True iff `assignment` covers every variable and no neighbor pair is
    /// in conflict.
    pub fn goal_test(&self, assignment: &Assignment<V>) -> bool {
        assignment.len() == self.variables.len()
            && self.variables.iter().all(|&var| {
                assignment
                    .get(var)
                    .map_or(false, |value| self.nconflicts(var, value, assignment) == 0)
            })
    }
}

impl<V: Value> std::fmt::Debug for Csp<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Csp")
            .field("variables", &self.variables.len())
            .finish_non_exhaustive()
    }
}

/// A partial (or complete) assignment of values to variables.
///
/// Entries are kept in assignment order, which makes search traces easy to
/// follow in logs. An `Assignment` is owned by the active search and never
/// outlives it.
#[derive(Debug, Clone, Default)]
pub struct Assignment<V> {
    values: HashMap<VariableId, V>,
    order: Vec<VariableId>,
}

impl<V: Value> Assignment<V> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Sets `var = value`, replacing any previous value for `var`.
    ///
    /// Performs no legality check; the caller is expected to have verified
    /// `nconflicts(var, value, ..) == 0` first. Re-assigning the same value
    /// is a no-op.
    pub fn assign(&mut self, var: VariableId, value: V) {
        if self.values.insert(var, value).is_none() {
            self.order.push(var);
        }
    }

    /// Removes `var` from the assignment. Touches only the assignment map;
    /// undoing domain pruning is the caller's job, via its removal log.
    pub fn unassign(&mut self, var: VariableId) {
        if self.values.remove(&var).is_some() {
            self.order.retain(|&v| v != var);
        }
    }

    pub fn get(&self, var: VariableId) -> Option<&V> {
        self.values.get(&var)
    }

    pub fn contains(&self, var: VariableId) -> bool {
        self.values.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &V)> + '_ {
        self.order.iter().filter_map(|&var| {
            self.values.get(&var).map(|value| (var, value))
        })
    }
}

/// Equality ignores assignment order: two assignments are equal when they
/// bind the same variables to the same values.
impl<V: Value> PartialEq for Assignment<V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<V: Value> Eq for Assignment<V> {}
