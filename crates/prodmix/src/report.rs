//! Textual and JSON reports over the analysis results.
//!
//! The textual output answers the three acquisition questions: whether to
//! acquire more pumps, more labor, or more tubing, and what each additional
//! unit is worth. The JSON output carries the raw series and breakpoint
//! data for an external charting tool.

use color_eyre::Result;
use serde::Serialize;

use prodmix_core::model::{ProductPlan, Resource, ResourceEnvelope};
use prodmix_core::sensitivity::{
    BreakpointOutcome, BreakpointResult, FirstChange, SensitivitySeries, find_breakpoint,
    find_first_change, sweep,
};
use prodmix_core::solver::solve;

/// Quantities tested above the baseline by `analyze`, per resource.
const PUMP_SWEEP_SPAN: u32 = 20;
const LABOR_SWEEP_SPAN: u32 = 254;
const TUBING_SWEEP_SPAN: u32 = 50;

#[derive(Debug, Serialize)]
struct SweepReport {
    series: SensitivitySeries,
    breakpoint: BreakpointResult,
}

#[derive(Debug, Serialize)]
struct TubingReport {
    series: SensitivitySeries,
    baseline_profit: f64,
    first_change: Option<FirstChange>,
}

#[derive(Debug, Serialize)]
struct AnalysisReport {
    baseline: ProductPlan,
    pumps: SweepReport,
    labor: SweepReport,
    tubing: TubingReport,
}

/// Solve the envelope and print the optimal plan.
pub fn baseline(envelope: &ResourceEnvelope, json: bool) -> Result<()> {
    let plan = solve(envelope)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(envelope, &plan);
    }
    Ok(())
}

/// Run one sweep and report its marginal value and breakpoint.
pub fn sweep_report(
    resource: Resource,
    start: u32,
    stop: u32,
    envelope: &ResourceEnvelope,
    json: bool,
) -> Result<()> {
    tracing::info!("sweeping {resource} from {start} to {stop}");
    let series = sweep(resource, start, stop, envelope)?;
    let breakpoint = find_breakpoint(&series);
    tracing::debug!(?breakpoint.outcome, "sweep finished");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&SweepReport { series, breakpoint })?
        );
    } else {
        print_sweep(resource, &breakpoint);
    }
    Ok(())
}

/// The full report: baseline plan plus the three resource questions.
pub fn analyze(envelope: &ResourceEnvelope, json: bool) -> Result<()> {
    let plan = solve(envelope)?;
    let baseline_profit = plan.profit;

    let pump_start = envelope.pumps.round() as u32;
    let labor_start = envelope.labor_hours.round() as u32;
    let tubing_start = envelope.tubing_feet.round() as u32 + 1;

    tracing::info!("running pump, labor, and tubing sweeps");
    let pump_series = sweep(Resource::Pumps, pump_start, pump_start + PUMP_SWEEP_SPAN, envelope)?;
    let pump_breakpoint = find_breakpoint(&pump_series);

    let labor_series = sweep(
        Resource::LaborHours,
        labor_start,
        labor_start + LABOR_SWEEP_SPAN,
        envelope,
    )?;
    let labor_breakpoint = find_breakpoint(&labor_series);

    // Tubing is expected to be non-binding, so it gets the first-change scan
    // against the baseline profit instead of a marginal-region scan.
    let tubing_series = sweep(
        Resource::TubingFeet,
        tubing_start,
        tubing_start + TUBING_SWEEP_SPAN - 1,
        envelope,
    )?;
    let tubing_change = find_first_change(&tubing_series, baseline_profit);

    if json {
        let report = AnalysisReport {
            baseline: plan,
            pumps: SweepReport {
                series: pump_series,
                breakpoint: pump_breakpoint,
            },
            labor: SweepReport {
                series: labor_series,
                breakpoint: labor_breakpoint,
            },
            tubing: TubingReport {
                series: tubing_series,
                baseline_profit,
                first_change: tubing_change,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_plan(envelope, &plan);

    println!("\nQ1: Additional pumps");
    println!("Baseline profit @ {pump_start} pumps: ${:.2}", plan.profit);
    print_sweep(Resource::Pumps, &pump_breakpoint);

    println!("\nQ2: Additional labor hours");
    println!(
        "Baseline profit @ {labor_start} labor hours: ${:.2}",
        plan.profit
    );
    print_sweep(Resource::LaborHours, &labor_breakpoint);

    println!("\nQ3: Additional tubing");
    match tubing_change {
        Some(change) => println!(
            "At {} feet, profit changes by ${:.2} (tubing becomes binding).",
            change.value, change.delta
        ),
        None => println!(
            "Profit does not change with additional tubing in this tested region (tubing is non-binding)."
        ),
    }

    Ok(())
}

fn print_plan(envelope: &ResourceEnvelope, plan: &ProductPlan) {
    println!("Optimal production plan");
    println!("  Aqua-Spa:  {:.2}", plan.aqua_spas);
    println!("  Hydro-Lux: {:.2}", plan.hydro_luxes);
    println!("  Profit:    ${:.2}", plan.profit);
    for resource in Resource::ALL {
        println!(
            "  {:<12} used {:>8.2} of {:>8.2}, slack {:>8.2}",
            resource,
            plan.used.amount(resource),
            envelope.amount(resource),
            plan.slack.amount(resource)
        );
    }
}

fn print_sweep(resource: Resource, result: &BreakpointResult) {
    match result.initial_marginal {
        Some(marginal) => println!(
            "Marginal profit per additional unit of {resource}: ${marginal:.2}"
        ),
        None => println!("Series too short to measure a marginal value."),
    }

    match result.outcome {
        BreakpointOutcome::ChangeAt(value) => println!(
            "Constant marginal value through {value} {resource}; the marginal value changes past that."
        ),
        BreakpointOutcome::RangeExhausted(value) => println!(
            "Constant marginal value across the whole tested range (through {value}); no breakpoint observed."
        ),
        BreakpointOutcome::FlatSeries => {}
    }

    if let Some(peak) = result.peak {
        println!(
            "Highest profit in tested range: ${:.2} at {} {resource}",
            peak.profit, peak.value
        );
    }
}
