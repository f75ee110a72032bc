//! Solver-backed tests for the product-mix core
//!
//! Tests are organized by topic:
//! - `scenarios` - Baseline plan and the three reference sweeps
//! - `invariants` - Feasibility, slack identity, and monotonicity properties

mod scenarios;
