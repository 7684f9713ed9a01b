use std::collections::HashMap;

use crate::solver::{
    csp::{Csp, VariableId},
    value::Value,
};

/// An ordered record of `(variable, value)` prunings from one assign step.
///
/// Feeding the log back into [`DomainStore::restore`] re-adds every pruned
/// value exactly once, returning the affected domains to their pre-prune
/// contents. A log is scoped to a single assign/restore cycle; `restore`
/// consumes it so it cannot be replayed.
#[derive(Debug, Clone, Default)]
pub struct RemovalLog<V> {
    entries: Vec<(VariableId, V)>,
}

impl<V: Value> RemovalLog<V> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub(crate) fn push(&mut self, var: VariableId, value: V) {
        self.entries.push((var, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(VariableId, V)> + '_ {
        self.entries.iter()
    }
}

/// The mutable working domains of one search session.
///
/// The store starts uninitialized; until the first pruning-aware operation
/// runs, every variable's choices fall back to the problem's original
/// domain. [`support_pruning`](Self::support_pruning) allocates the working
/// copies, after which domains shrink via [`prune`](Self::prune) /
/// [`suppose`](Self::suppose) and grow back only via
/// [`restore`](Self::restore).
///
/// Keeping the store separate from [`Csp`] means concurrent solves of
/// different boards never share hidden state: each session owns its store.
#[derive(Debug, Clone, Default)]
pub struct DomainStore<V: Value> {
    current: Option<HashMap<VariableId, Vec<V>>>,
}

impl<V: Value> DomainStore<V> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Allocates the working domain copies if they do not exist yet.
    pub fn support_pruning(&mut self, csp: &Csp<V>) {
        self.init_current(csp);
    }

    fn init_current(&mut self, csp: &Csp<V>) -> &mut HashMap<VariableId, Vec<V>> {
        self.current.get_or_insert_with(|| {
            csp.variables()
                .iter()
                .map(|&var| (var, csp.domain(var).to_vec()))
                .collect()
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// The current domain of `var`, or `None` before initialization.
    pub fn current(&self, var: VariableId) -> Option<&[V]> {
        self.current.as_ref()?.get(&var).map(Vec::as_slice)
    }

    /// Current legal candidates for `var`: the working domain once
    /// initialized, the original domain otherwise.
    pub fn choices<'a>(&'a self, csp: &'a Csp<V>, var: VariableId) -> &'a [V] {
        match &self.current {
            Some(current) => current.get(&var).map(Vec::as_slice).unwrap_or(&[]),
            None => csp.domain(var),
        }
    }

    /// Restricts `var`'s working domain to exactly `[value]`, logging every
    /// other value so the caller can undo. Called once per search step,
    /// right after the tentative assignment.
    pub fn suppose(&mut self, csp: &Csp<V>, var: VariableId, value: &V) -> RemovalLog<V> {
        let mut log = RemovalLog::new();
        let current = self.init_current(csp);
        if let Some(domain) = current.get_mut(&var) {
            for v in domain.iter() {
                if v != value {
                    log.push(var, v.clone());
                }
            }
            *domain = vec![value.clone()];
        }
        log
    }

    /// Removes `value` from `var`'s working domain, recording the removal.
    ///
    /// Pruning a value that is not present is a no-op, as is pruning before
    /// the store has been initialized.
    pub fn prune(&mut self, var: VariableId, value: &V, log: &mut RemovalLog<V>) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        if let Some(domain) = current.get_mut(&var) {
            if let Some(pos) = domain.iter().position(|v| v == value) {
                domain.remove(pos);
                log.push(var, value.clone());
            }
        }
    }

    /// Re-adds every `(var, value)` recorded in `log`, fully reversing the
    /// corresponding prunings.
    pub fn restore(&mut self, log: RemovalLog<V>) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        for (var, value) in log.entries {
            if let Some(domain) = current.get_mut(&var) {
                domain.push(value);
            }
        }
    }
}
