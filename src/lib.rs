//! Necto is a backtracking solver for binary constraint satisfaction
//! problems (CSPs).
//!
//! The engine is problem-agnostic: a problem is a set of variables with
//! finite domains, a symmetric neighbor relation, and a pairwise
//! constraint predicate. Search behavior is assembled from three pluggable
//! pieces — a variable-selection strategy, a value-ordering strategy and
//! an inference strategy — so the classic combinations (MRV + LCV +
//! forward checking, or plain chronological backtracking) are all a few
//! lines apart.
//!
//! # Core Concepts
//!
//! - **[`Csp`](solver::csp::Csp)**: the immutable problem definition.
//! - **[`DomainStore`](solver::domains::DomainStore)**: the working
//!   domains of one search session, pruned and restored through an exact
//!   undo log.
//! - **[`backtracking_search`](solver::search::backtracking_search)**: the
//!   search driver composing the strategies.
//! - **[`sudoku`]**: a ready-made 9×9 Sudoku frontend.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `A != B` where `A` can be `1` or `2` and `B` can only be `1`:
//! the solver must deduce `A = 2`.
//!
//! ```
//! use std::{collections::HashMap, sync::Arc};
//!
//! use necto::solver::{
//!     csp::Csp,
//!     heuristics::{value::UnorderedValues, variable::FirstUnassigned},
//!     inference::ForwardChecking,
//!     search::backtracking_search,
//! };
//!
//! let a = 0;
//! let b = 1;
//!
//! let mut domains = HashMap::new();
//! domains.insert(a, vec![1, 2]);
//! domains.insert(b, vec![1]);
//!
//! let mut neighbors = HashMap::new();
//! neighbors.insert(a, vec![b]);
//!
//! let csp = Csp::new(domains, neighbors, Arc::new(|_, x: &i32, _, y: &i32| x != y));
//!
//! let (solution, _stats) =
//!     backtracking_search(&csp, &mut FirstUnassigned, &UnorderedValues, &ForwardChecking);
//! let solution = solution.unwrap();
//!
//! assert_eq!(solution.get(a), Some(&2));
//! assert_eq!(solution.get(b), Some(&1));
//! ```

pub mod error;
pub mod solver;
pub mod sudoku;
