//! Lookup of search strategies by name.
//!
//! This is the configuration seam for the CLI: each flag value maps to one
//! strategy object. Unknown names fail fast with
//! [`Error::UnknownStrategy`] before any search starts.

use crate::{
    error::{Error, Result},
    solver::{
        heuristics::{
            value::{LeastConstrainingValue, UnorderedValues, ValueOrdering},
            variable::{FirstUnassigned, MinimumRemainingValues, VariableSelection},
        },
        inference::{ArcConsistency, ForwardChecking, InferenceStrategy, NoInference},
        value::Value,
    },
};

pub const VARIABLE_ORDERINGS: &str = "first_unassigned_variable, mrv";
pub const VALUE_ORDERINGS: &str = "unordered_domain_values, lcv";
pub const INFERENCE_STRATEGIES: &str = "no_inference, forward_checking, arc_cons";

pub fn variable_selection<V: Value>(name: &str) -> Result<Box<dyn VariableSelection<V>>> {
    match name {
        "first_unassigned_variable" => Ok(Box::new(FirstUnassigned)),
        "mrv" => Ok(Box::new(MinimumRemainingValues::new())),
        _ => Err(Error::UnknownStrategy {
            kind: "variable ordering",
            name: name.to_owned(),
            expected: VARIABLE_ORDERINGS,
        }),
    }
}

pub fn value_ordering<V: Value>(name: &str) -> Result<Box<dyn ValueOrdering<V>>> {
    match name {
        "unordered_domain_values" => Ok(Box::new(UnorderedValues)),
        "lcv" => Ok(Box::new(LeastConstrainingValue)),
        _ => Err(Error::UnknownStrategy {
            kind: "value ordering",
            name: name.to_owned(),
            expected: VALUE_ORDERINGS,
        }),
    }
}

pub fn inference<V: Value>(name: &str) -> Result<Box<dyn InferenceStrategy<V>>> {
    match name {
        "no_inference" => Ok(Box::new(NoInference)),
        "forward_checking" => Ok(Box::new(ForwardChecking)),
        "arc_cons" => Ok(Box::new(ArcConsistency)),
        _ => Err(Error::UnknownStrategy {
            kind: "inference",
            name: name.to_owned(),
            expected: INFERENCE_STRATEGIES,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert!(variable_selection::<char>("first_unassigned_variable").is_ok());
        assert!(variable_selection::<char>("mrv").is_ok());
        assert!(value_ordering::<char>("unordered_domain_values").is_ok());
        assert!(value_ordering::<char>("lcv").is_ok());
        assert!(inference::<char>("no_inference").is_ok());
        assert!(inference::<char>("forward_checking").is_ok());
        assert!(inference::<char>("arc_cons").is_ok());
    }

    #[test]
    fn unknown_names_are_configuration_errors() {
        let Err(err) = inference::<char>("unit_propagation") else {
            panic!("expected an error");
        };
        match err {
            Error::UnknownStrategy { kind, name, .. } => {
                assert_eq!(kind, "inference");
                assert_eq!(name, "unit_propagation");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
