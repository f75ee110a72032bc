//! LP formulation and solve for the hot-tub product-mix problem.
//!
//! Maximizes `350·aqua + 300·hydro` subject to the pump, labor, and tubing
//! constraints of a [`ResourceEnvelope`]. The optimization itself is
//! delegated to `good_lp`; this module only formulates the model and
//! derives consumption and slack from the returned variable values.

use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, constraint,
    default_solver, variable,
};

use crate::error::SolveError;
use crate::model::{ProductPlan, Resource, ResourceEnvelope, ResourceUsage};

/// Profit per Aqua-Spa sold.
const AQUA_SPA_PROFIT: f64 = 350.0;
/// Profit per Hydro-Lux sold.
const HYDRO_LUX_PROFIT: f64 = 300.0;

/// Pumps consumed per unit built.
const AQUA_SPA_PUMPS: f64 = 1.0;
const HYDRO_LUX_PUMPS: f64 = 1.0;
/// Labor hours consumed per unit built.
const AQUA_SPA_LABOR: f64 = 9.0;
const HYDRO_LUX_LABOR: f64 = 6.0;
/// Feet of tubing consumed per unit built.
const AQUA_SPA_TUBING: f64 = 12.0;
const HYDRO_LUX_TUBING: f64 = 16.0;

/// Solve the product-mix LP for the given resource envelope.
///
/// The decision variables are continuous and non-negative, so the all-zero
/// plan is always feasible and an all-zero envelope yields a zero-profit
/// plan rather than an error. Solver-reported infeasibility or unboundedness
/// is therefore surfaced as a failure instead of being silently mapped to
/// the zero plan.
///
/// # Errors
///
/// [`SolveError::InvalidEnvelope`] if any quantity is negative or
/// non-finite; [`SolveError::Infeasible`], [`SolveError::Unbounded`], or
/// [`SolveError::Solver`] if the underlying solver fails.
pub fn solve(envelope: &ResourceEnvelope) -> Result<ProductPlan, SolveError> {
    validate(envelope)?;

    let mut vars = ProblemVariables::new();
    let aqua = vars.add(variable().min(0.0).name("aqua_spa"));
    let hydro = vars.add(variable().min(0.0).name("hydro_lux"));

    let objective: Expression = AQUA_SPA_PROFIT * aqua + HYDRO_LUX_PROFIT * hydro;

    let solution = vars
        .maximise(objective.clone())
        .using(default_solver)
        .with(constraint!(
            AQUA_SPA_PUMPS * aqua + HYDRO_LUX_PUMPS * hydro <= envelope.pumps
        ))
        .with(constraint!(
            AQUA_SPA_LABOR * aqua + HYDRO_LUX_LABOR * hydro <= envelope.labor_hours
        ))
        .with(constraint!(
            AQUA_SPA_TUBING * aqua + HYDRO_LUX_TUBING * hydro <= envelope.tubing_feet
        ))
        .solve()
        .map_err(|err| match err {
            ResolutionError::Infeasible => SolveError::Infeasible,
            ResolutionError::Unbounded => SolveError::Unbounded,
            other => SolveError::Solver(other.to_string()),
        })?;

    // A numerically degenerate solve can hand back non-finite values; treat
    // them as zero before deriving consumption and slack.
    let aqua_spas = finite_or_zero(solution.value(aqua));
    let hydro_luxes = finite_or_zero(solution.value(hydro));
    let profit = finite_or_zero(solution.eval(&objective));

    let used = ResourceUsage {
        pumps: AQUA_SPA_PUMPS * aqua_spas + HYDRO_LUX_PUMPS * hydro_luxes,
        labor_hours: AQUA_SPA_LABOR * aqua_spas + HYDRO_LUX_LABOR * hydro_luxes,
        tubing_feet: AQUA_SPA_TUBING * aqua_spas + HYDRO_LUX_TUBING * hydro_luxes,
    };
    let slack = ResourceUsage {
        pumps: envelope.pumps - used.pumps,
        labor_hours: envelope.labor_hours - used.labor_hours,
        tubing_feet: envelope.tubing_feet - used.tubing_feet,
    };

    Ok(ProductPlan {
        aqua_spas,
        hydro_luxes,
        profit,
        used,
        slack,
    })
}

fn validate(envelope: &ResourceEnvelope) -> Result<(), SolveError> {
    for resource in Resource::ALL {
        let value = envelope.amount(resource);
        if !value.is_finite() || value < 0.0 {
            return Err(SolveError::InvalidEnvelope { resource, value });
        }
    }
    Ok(())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
