//! Resource sensitivity analysis: sweeps and breakpoint detection.
//!
//! A sweep re-solves the product-mix LP at every integer quantity of one
//! resource over a contiguous range, holding the other two fixed, and
//! collects the optimal profit at each quantity into a
//! [`SensitivitySeries`]. Two scans then classify the series:
//!
//! - [`find_breakpoint`] — the constant-marginal-region scan used for pumps
//!   and labor: takes the first profit delta as the marginal value of the
//!   initial (binding) region and reports where a later delta deviates from
//!   it.
//! - [`find_first_change`] — the first-change scan used for tubing: reports
//!   the first quantity at which profit moves at all, relative to a
//!   reference profit, without establishing a marginal region.
//!
//! The two scans agree when the swept resource is non-binding across the
//! whole range, but they are not equivalent in general and are kept as
//! separate operations.
//!
//! # Example
//!
//! ```ignore
//! use prodmix_core::model::{Resource, ResourceEnvelope};
//! use prodmix_core::sensitivity::{find_breakpoint, sweep};
//!
//! let baseline = ResourceEnvelope::default();
//! let series = sweep(Resource::Pumps, 200, 220, &baseline)?;
//! let result = find_breakpoint(&series);
//! println!(
//!     "marginal ${:.2}/pump, breakpoint {:?}",
//!     result.initial_marginal.unwrap_or(0.0),
//!     result.outcome,
//! );
//! ```

mod scan;
mod series;
mod sweep;

pub use scan::{
    BreakpointOutcome, BreakpointResult, FirstChange, MARGINAL_TOLERANCE, find_breakpoint,
    find_first_change,
};
pub use series::{SensitivitySeries, SweepPoint};
pub use sweep::sweep;
