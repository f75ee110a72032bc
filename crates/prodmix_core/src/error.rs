use std::fmt;

use crate::model::Resource;

/// Errors surfaced by the product-mix solver.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The solver reported the model infeasible. The product-mix LP always
    /// admits the all-zero plan, so this indicates a solver defect.
    Infeasible,
    /// The solver reported the objective unbounded. Every resource
    /// constraint caps production, so this likewise indicates a defect.
    Unbounded,
    /// The solver failed internally.
    Solver(String),
    /// An envelope quantity was negative or non-finite.
    InvalidEnvelope { resource: Resource, value: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Infeasible => write!(f, "solver reported the model infeasible"),
            SolveError::Unbounded => write!(f, "solver reported the objective unbounded"),
            SolveError::Solver(msg) => write!(f, "solver failure: {msg}"),
            SolveError::InvalidEnvelope { resource, value } => {
                write!(f, "invalid envelope: {resource} = {value}")
            }
        }
    }
}

impl std::error::Error for SolveError {}
