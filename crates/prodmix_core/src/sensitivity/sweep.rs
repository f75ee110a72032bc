//! Sweep driver: repeated solves across one resource dimension.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::series::{SensitivitySeries, SweepPoint};
use crate::error::SolveError;
use crate::model::{Resource, ResourceEnvelope};
use crate::solver::solve;

/// Solve the product-mix LP at every integer quantity in `start..=stop` of
/// `resource`, holding the other two quantities of `fixed` unchanged.
///
/// Points come back in ascending quantity order, which the breakpoint scans
/// depend on. For the baseline scenario's pump and labor questions, start
/// the sweep at the baseline amounts (200 and 1566) so the baseline is the
/// series' first point.
///
/// # Errors
///
/// Any solve failure aborts the whole sweep; no partial series is returned
/// and nothing is retried, since a deterministic solve that fails once
/// fails every time.
pub fn sweep(
    resource: Resource,
    start: u32,
    stop: u32,
    fixed: &ResourceEnvelope,
) -> Result<SensitivitySeries, SolveError> {
    let values: Vec<u32> = (start..=stop).collect();

    let solve_at = |&value: &u32| -> Result<SweepPoint, SolveError> {
        let envelope = fixed.with_amount(resource, f64::from(value));
        let plan = solve(&envelope)?;
        Ok(SweepPoint {
            value,
            profit: plan.profit,
        })
    };

    // The parallel path buffers into an ordered collect, so the resulting
    // delta sequence is identical to a sequential sweep.
    #[cfg(feature = "parallel")]
    let points = values
        .par_iter()
        .map(solve_at)
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let points = values.iter().map(solve_at).collect::<Result<Vec<_>, _>>()?;

    Ok(SensitivitySeries { resource, points })
}
