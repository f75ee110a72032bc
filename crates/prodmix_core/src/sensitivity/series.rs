//! Swept profit series.

use serde::{Deserialize, Serialize};

use crate::model::Resource;

/// One solved point in a sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Quantity of the swept resource for this solve.
    pub value: u32,
    /// Optimal profit at that quantity.
    pub profit: f64,
}

/// Ordered `(quantity, profit)` pairs from sweeping one resource dimension
/// while the other two stay fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySeries {
    /// The resource dimension that was varied.
    pub resource: Resource,
    /// Points in ascending order of the swept quantity.
    pub points: Vec<SweepPoint>,
}

impl SensitivitySeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive profit deltas: `deltas()[i]` is the profit gained by
    /// raising the swept quantity from `points[i]` to `points[i + 1]`.
    #[must_use]
    pub fn deltas(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| pair[1].profit - pair[0].profit)
            .collect()
    }

    /// The point with the highest profit, first occurrence on ties.
    #[must_use]
    pub fn peak(&self) -> Option<SweepPoint> {
        let mut best: Option<SweepPoint> = None;
        for &point in &self.points {
            match best {
                Some(current) if point.profit <= current.profit => {}
                _ => best = Some(point),
            }
        }
        best
    }
}
