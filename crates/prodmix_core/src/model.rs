//! Value types for the product-mix planning problem.
//!
//! Two hot tub models compete for three limited resources:
//! - **Aqua-Spa**: 1 pump, 9 labor hours, 12 feet of tubing, $350 profit
//! - **Hydro-Lux**: 1 pump, 6 labor hours, 16 feet of tubing, $300 profit
//!
//! A [`ResourceEnvelope`] fixes the available quantity of each resource for
//! one solve; a [`ProductPlan`] is what the solver hands back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pumps available in the baseline scenario.
pub const BASELINE_PUMPS: f64 = 200.0;
/// Labor hours available in the baseline scenario.
pub const BASELINE_LABOR_HOURS: f64 = 1566.0;
/// Feet of tubing available in the baseline scenario.
pub const BASELINE_TUBING_FEET: f64 = 2880.0;

/// One of the three constrained resources.
///
/// Doubles as the dimension selector for sensitivity sweeps: it picks which
/// envelope quantity [`ResourceEnvelope::amount`] reads and
/// [`ResourceEnvelope::with_amount`] replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Pumps,
    LaborHours,
    TubingFeet,
}

impl Resource {
    /// All resources, in constraint order.
    pub const ALL: [Resource; 3] = [Resource::Pumps, Resource::LaborHours, Resource::TubingFeet];

    /// Short name used in reports and error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Resource::Pumps => "pumps",
            Resource::LaborHours => "labor hours",
            Resource::TubingFeet => "tubing feet",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Available quantities of each resource for one solve.
///
/// Immutable once built; [`Self::with_amount`] returns a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceEnvelope {
    pub pumps: f64,
    pub labor_hours: f64,
    pub tubing_feet: f64,
}

impl Default for ResourceEnvelope {
    /// The baseline scenario: 200 pumps, 1566 labor hours, 2880 feet of tubing.
    fn default() -> Self {
        Self {
            pumps: BASELINE_PUMPS,
            labor_hours: BASELINE_LABOR_HOURS,
            tubing_feet: BASELINE_TUBING_FEET,
        }
    }
}

impl ResourceEnvelope {
    #[must_use]
    pub fn new(pumps: f64, labor_hours: f64, tubing_feet: f64) -> Self {
        Self {
            pumps,
            labor_hours,
            tubing_feet,
        }
    }

    /// The available quantity of `resource`.
    #[must_use]
    pub fn amount(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Pumps => self.pumps,
            Resource::LaborHours => self.labor_hours,
            Resource::TubingFeet => self.tubing_feet,
        }
    }

    /// A copy of this envelope with `resource` set to `value` and the other
    /// two quantities unchanged.
    #[must_use]
    pub fn with_amount(&self, resource: Resource, value: f64) -> Self {
        let mut envelope = *self;
        match resource {
            Resource::Pumps => envelope.pumps = value,
            Resource::LaborHours => envelope.labor_hours = value,
            Resource::TubingFeet => envelope.tubing_feet = value,
        }
        envelope
    }
}

/// Per-resource amounts; used for both consumption and slack.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub pumps: f64,
    pub labor_hours: f64,
    pub tubing_feet: f64,
}

impl ResourceUsage {
    /// The amount recorded for `resource`.
    #[must_use]
    pub fn amount(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Pumps => self.pumps,
            Resource::LaborHours => self.labor_hours,
            Resource::TubingFeet => self.tubing_feet,
        }
    }
}

/// Optimal production plan for one resource envelope.
///
/// For every resource, `used + slack` equals the envelope quantity and
/// `used` never exceeds it (within solver tolerance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPlan {
    /// Aqua-Spa units to build.
    pub aqua_spas: f64,
    /// Hydro-Lux units to build.
    pub hydro_luxes: f64,
    /// Total profit of the plan.
    pub profit: f64,
    /// Resources consumed by the plan.
    pub used: ResourceUsage,
    /// Resources left over.
    pub slack: ResourceUsage,
}
