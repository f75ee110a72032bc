//! Breakpoint detection over a swept profit series.

use serde::{Deserialize, Serialize};

use super::series::{SensitivitySeries, SweepPoint};

/// Absolute tolerance for comparing marginal profit values.
///
/// Profit magnitudes in this problem stay well below 1e5, so a fixed
/// absolute tolerance is enough; a problem with larger objectives would
/// want it scaled to `max(|first marginal|, 1)`.
pub const MARGINAL_TOLERANCE: f64 = 1e-6;

/// Where the constant-marginal region ended, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakpointOutcome {
    /// The marginal value deviated after this quantity: it is the last
    /// quantity of the constant region, and the step up from it is the
    /// first with a different per-unit profit.
    ChangeAt(u32),
    /// No deviation inside the tested range; holds the last tested
    /// quantity. Says nothing about quantities beyond the range.
    RangeExhausted(u32),
    /// One point or fewer, so there were no marginal values to compare.
    FlatSeries,
}

impl BreakpointOutcome {
    /// The quantity to mark on a chart, when there is one.
    #[must_use]
    pub fn marker(&self) -> Option<u32> {
        match *self {
            BreakpointOutcome::ChangeAt(value) | BreakpointOutcome::RangeExhausted(value) => {
                Some(value)
            }
            BreakpointOutcome::FlatSeries => None,
        }
    }

    /// Whether a genuine marginal-value change was observed.
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, BreakpointOutcome::ChangeAt(_))
    }
}

/// Result of scanning a series for the end of its constant-marginal region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointResult {
    /// Marginal profit per unit in the initial region: the series' first
    /// delta. Absent when the series has no deltas.
    pub initial_marginal: Option<f64>,
    /// Where the constant-marginal region ended.
    pub outcome: BreakpointOutcome,
    /// Highest profit in the series, first occurrence on ties.
    pub peak: Option<SweepPoint>,
}

/// Constant-marginal-region scan, used for the pump and labor dimensions.
///
/// Takes the first profit delta as the marginal value of the initial,
/// presumed-binding region, then scans the remaining deltas for the first
/// one that deviates from it by more than [`MARGINAL_TOLERANCE`]. A
/// deviation at delta index `i` is reported as `ChangeAt(points[i].value)`:
/// the quantity *before* the deviating step, which is the last quantity the
/// initial marginal value still covers.
#[must_use]
pub fn find_breakpoint(series: &SensitivitySeries) -> BreakpointResult {
    let deltas = series.deltas();
    let peak = series.peak();

    let Some(&first) = deltas.first() else {
        return BreakpointResult {
            initial_marginal: None,
            outcome: BreakpointOutcome::FlatSeries,
            peak,
        };
    };

    for (i, &delta) in deltas.iter().enumerate().skip(1) {
        if (delta - first).abs() > MARGINAL_TOLERANCE {
            return BreakpointResult {
                initial_marginal: Some(first),
                outcome: BreakpointOutcome::ChangeAt(series.points[i].value),
                peak,
            };
        }
    }

    let last = series.points.last().map_or(0, |point| point.value);
    BreakpointResult {
        initial_marginal: Some(first),
        outcome: BreakpointOutcome::RangeExhausted(last),
        peak,
    }
}

/// First quantity at which profit moved, found by [`find_first_change`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FirstChange {
    /// The quantity whose profit first differed from its predecessor's.
    pub value: u32,
    /// The observed profit change at that quantity.
    pub delta: f64,
}

/// First-change scan, used for the tubing dimension.
///
/// `reference_profit` is the optimal profit at the quantity just below the
/// series' first point (the baseline when the sweep starts one unit above
/// it). The scan walks the series in order and stops at the first quantity
/// whose profit differs from its predecessor's by more than
/// [`MARGINAL_TOLERANCE`]; `None` means profit never moved in the tested
/// range. Unlike [`find_breakpoint`] this establishes no initial marginal
/// region, so the two scans disagree on any series whose profit is already
/// changing at its start.
#[must_use]
pub fn find_first_change(
    series: &SensitivitySeries,
    reference_profit: f64,
) -> Option<FirstChange> {
    let mut last = reference_profit;
    for point in &series.points {
        let delta = point.profit - last;
        if delta.abs() > MARGINAL_TOLERANCE {
            return Some(FirstChange {
                value: point.value,
                delta,
            });
        }
        last = point.profit;
    }
    None
}
