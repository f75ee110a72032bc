//! Reference scenario tests
//!
//! These pin the numbers of the Blue Ridge Hot Tubs scenario: the baseline
//! optimal plan and the three resource questions (additional pumps,
//! additional labor, additional tubing).

use crate::model::{Resource, ResourceEnvelope};
use crate::sensitivity::{BreakpointOutcome, find_breakpoint, find_first_change, sweep};
use crate::solver::solve;

/// Absolute tolerance for profits and plan quantities, loose enough for
/// solver numeric noise.
const PLAN_TOLERANCE: f64 = 0.5;

#[test]
fn test_baseline_plan() {
    let plan = solve(&ResourceEnvelope::default()).unwrap();

    assert!(
        (plan.aqua_spas - 122.0).abs() < PLAN_TOLERANCE,
        "expected ~122 Aqua-Spas, got {:.4}",
        plan.aqua_spas
    );
    assert!(
        (plan.hydro_luxes - 78.0).abs() < PLAN_TOLERANCE,
        "expected ~78 Hydro-Luxes, got {:.4}",
        plan.hydro_luxes
    );
    assert!(
        (plan.profit - 66_100.0).abs() < PLAN_TOLERANCE,
        "expected ~$66,100 profit, got {:.4}",
        plan.profit
    );

    // Pumps and labor bind at the baseline; tubing does not.
    assert!(plan.slack.pumps.abs() < PLAN_TOLERANCE);
    assert!(plan.slack.labor_hours.abs() < PLAN_TOLERANCE);
    assert!(
        (plan.slack.tubing_feet - 168.0).abs() < PLAN_TOLERANCE,
        "expected ~168 feet of tubing slack, got {:.4}",
        plan.slack.tubing_feet
    );
}

#[test]
fn test_degenerate_all_zero_envelope() {
    let plan = solve(&ResourceEnvelope::new(0.0, 0.0, 0.0)).unwrap();

    assert!(plan.aqua_spas.abs() < 1e-6);
    assert!(plan.hydro_luxes.abs() < 1e-6);
    assert!(plan.profit.abs() < 1e-6);
    for resource in Resource::ALL {
        assert!(
            plan.slack.amount(resource).abs() < 1e-6,
            "zero envelope leaves no {resource} slack"
        );
    }
}

#[test]
fn test_pump_sensitivity() {
    let baseline = ResourceEnvelope::default();
    let series = sweep(Resource::Pumps, 200, 220, &baseline).unwrap();
    assert_eq!(series.len(), 21);

    let result = find_breakpoint(&series);

    let marginal = result.initial_marginal.unwrap();
    assert!(
        (marginal - 200.0).abs() < 0.01,
        "expected ~$200 per additional pump, got {marginal:.4}"
    );
    // Labor stays binding until tubing runs out at 207 pumps.
    assert_eq!(result.outcome, BreakpointOutcome::ChangeAt(207));

    let peak = result.peak.unwrap();
    assert_eq!(peak.value, 207);
    assert!(
        (peak.profit - 67_500.0).abs() < PLAN_TOLERANCE,
        "expected ~$67,500 peak, got {:.4}",
        peak.profit
    );
}

#[test]
fn test_labor_sensitivity() {
    let baseline = ResourceEnvelope::default();
    let series = sweep(Resource::LaborHours, 1566, 1820, &baseline).unwrap();

    let result = find_breakpoint(&series);

    let marginal = result.initial_marginal.unwrap();
    assert!(
        (marginal - 50.0 / 3.0).abs() < 0.01,
        "expected ~$16.67 per additional labor hour, got {marginal:.4}"
    );
    // At 1800 hours every pump is on an Aqua-Spa and labor stops binding.
    assert_eq!(result.outcome, BreakpointOutcome::ChangeAt(1800));

    let peak = result.peak.unwrap();
    assert_eq!(peak.value, 1800);
    assert!(
        (peak.profit - 70_000.0).abs() < PLAN_TOLERANCE,
        "expected ~$70,000 peak, got {:.4}",
        peak.profit
    );
}

#[test]
fn test_tubing_non_binding() {
    let baseline = ResourceEnvelope::default();
    let base_profit = solve(&baseline).unwrap().profit;

    let series = sweep(Resource::TubingFeet, 2881, 2930, &baseline).unwrap();
    assert_eq!(series.len(), 50);

    assert_eq!(
        find_first_change(&series, base_profit),
        None,
        "tubing has slack at the baseline, extra feet must not move profit"
    );
}
