pub mod csp;
pub mod domains;
pub mod heuristics;
pub mod inference;
pub mod search;
pub mod stats;
pub mod strategy;
pub mod value;
