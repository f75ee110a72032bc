//! Product-mix planning and resource sensitivity analysis library
//!
//! This crate solves the two-product hot-tub product-mix linear program
//! (Aqua-Spa and Hydro-Lux units competing for pumps, labor hours, and
//! tubing feet) and analyzes how the optimal profit responds as one
//! resource limit is varied:
//! - A single solve returns the optimal plan, profit, and per-resource
//!   consumption and slack.
//! - A sweep re-solves the LP across an integer range of one resource and
//!   collects the profit curve.
//! - Breakpoint scans locate where the resource's marginal value (shadow
//!   price) changes, i.e. where it stops being binding.
//!
//! The LP itself is solved by `good_lp`; this crate only formulates the
//! model and interprets the results.
//!
//! # Example
//!
//! ```ignore
//! use prodmix_core::model::{Resource, ResourceEnvelope};
//! use prodmix_core::sensitivity::{find_breakpoint, sweep};
//! use prodmix_core::solver::solve;
//!
//! let baseline = ResourceEnvelope::default();
//! let plan = solve(&baseline)?;
//! println!("profit ${:.2}", plan.profit);
//!
//! let series = sweep(Resource::Pumps, 200, 220, &baseline)?;
//! let result = find_breakpoint(&series);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod sensitivity;
pub mod solver;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::SolveError;
pub use model::{ProductPlan, Resource, ResourceEnvelope, ResourceUsage};
pub use sensitivity::{
    BreakpointOutcome, BreakpointResult, FirstChange, SensitivitySeries, SweepPoint,
    find_breakpoint, find_first_change, sweep,
};
pub use solver::solve;
