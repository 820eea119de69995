//! Production time estimation.
//!
//! Converts (production method, task selection, quantity) into estimated
//! minutes using per-method rate tables, a one-off setup time, and a
//! quantity-based efficiency scale factor.
//!
//! # Algorithm
//!
//! 1. Look up the method's rate record; a method absent from the table
//!    estimates to 0.
//! 2. Resolve the scale factor from the quantity tier list (larger
//!    batches earn a smaller multiplier).
//! 3. `Total`: `round(setup + total_per_unit × qty × factor)` — setup is
//!    charged once, never scaled by quantity.
//!    `Task(t)`: `round(rate × qty × factor)` — no setup. Setup time is
//!    only charged on the total path; single-task estimates are the raw
//!    scaled work.
//!
//! # Failure Semantics
//! Never panics, never errors: unknown method or task inputs produce a
//! zero estimate and a `tracing` warning so a bad input is visible in
//! logs but can never crash the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{ProductionMethod, TaskSelector, TaskType};

/// Per-unit minute rates for one production method.
///
/// `total_per_unit_minutes` is an independently configured constant,
/// not derived by summing the task rates — the two are allowed to
/// disagree (and do, for sublimation in the default table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRates {
    /// Minutes per unit for each task of the method.
    pub task_minutes: HashMap<TaskType, f64>,
    /// Fixed overhead minutes, charged once per total estimate.
    pub setup_minutes: f64,
    /// Minutes per unit across all tasks, for the total path.
    pub total_per_unit_minutes: f64,
}

impl MethodRates {
    /// Creates a rate record with the given setup and total-per-unit minutes.
    pub fn new(setup_minutes: f64, total_per_unit_minutes: f64) -> Self {
        Self {
            task_minutes: HashMap::new(),
            setup_minutes,
            total_per_unit_minutes,
        }
    }

    /// Sets the per-unit rate for a task.
    pub fn with_task(mut self, task: TaskType, minutes_per_unit: f64) -> Self {
        self.task_minutes.insert(task, minutes_per_unit);
        self
    }
}

/// Rate records keyed by production method.
///
/// Injected configuration: `Default` carries the shop's fixed rates,
/// and tests can build a table with any subset of methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    methods: HashMap<ProductionMethod, MethodRates>,
}

impl RateTable {
    /// Creates an empty rate table (every method estimates to 0).
    pub fn empty() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Adds or replaces the rate record for a method.
    pub fn with_method(mut self, method: ProductionMethod, rates: MethodRates) -> Self {
        self.methods.insert(method, rates);
        self
    }

    /// Rate record for a method, if configured.
    pub fn rates_for(&self, method: ProductionMethod) -> Option<&MethodRates> {
        self.methods.get(&method)
    }
}

impl Default for RateTable {
    /// The shop's production rates (minutes per unit).
    ///
    /// | Method | Tasks | Setup | Total/unit |
    /// |--------|-------|-------|------------|
    /// | Heat transfer vinyl | cut 5, weed 3, press 2 | 10 | 10 |
    /// | Sublimation | print 1, press 2 | 15 | 3 |
    /// | Embroidery | digitize 15, production 30 | 20 | 45 |
    fn default() -> Self {
        Self::empty()
            .with_method(
                ProductionMethod::HeatTransferVinyl,
                MethodRates::new(10.0, 10.0)
                    .with_task(TaskType::CutVinyl, 5.0)
                    .with_task(TaskType::WeedVinyl, 3.0)
                    .with_task(TaskType::PressShirts, 2.0),
            )
            .with_method(
                ProductionMethod::Sublimation,
                MethodRates::new(15.0, 3.0)
                    .with_task(TaskType::PrintDesign, 1.0)
                    .with_task(TaskType::Press, 2.0),
            )
            .with_method(
                ProductionMethod::Embroidery,
                MethodRates::new(20.0, 45.0)
                    .with_task(TaskType::Digitize, 15.0)
                    .with_task(TaskType::Production, 30.0),
            )
    }
}

/// An efficiency tier: orders up to `max_quantity` units get `factor`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuantityScaleTier {
    /// Inclusive upper bound of the tier. The last tier uses `u32::MAX`
    /// as the unbounded catch-all.
    pub max_quantity: u32,
    /// Multiplier applied to per-unit work (≤ 1.0).
    pub factor: f64,
}

impl QuantityScaleTier {
    /// Creates a tier.
    pub fn new(max_quantity: u32, factor: f64) -> Self {
        Self {
            max_quantity,
            factor,
        }
    }
}

/// Quantity-scaled production time estimator.
///
/// Holds the rate table and scale tiers as immutable configuration.
/// Every estimate is a pure function of the arguments and that
/// configuration, so results are reproducible and safe to recompute
/// on every edit.
///
/// # Example
///
/// ```
/// use shop_schedule::estimate::TimeEstimator;
/// use shop_schedule::models::{ProductionMethod, TaskSelector, TaskType};
///
/// let estimator = TimeEstimator::new();
/// let minutes = estimator.estimated_minutes(
///     ProductionMethod::HeatTransferVinyl,
///     TaskSelector::Task(TaskType::CutVinyl),
///     2,
/// );
/// assert_eq!(minutes, 10); // 5 min/unit × 2 units, no efficiency gain yet
/// ```
#[derive(Debug, Clone)]
pub struct TimeEstimator {
    rates: RateTable,
    scale_tiers: Vec<QuantityScaleTier>,
}

impl TimeEstimator {
    /// Creates an estimator with the default rates and scale tiers.
    pub fn new() -> Self {
        Self {
            rates: RateTable::default(),
            scale_tiers: default_scale_tiers(),
        }
    }

    /// Replaces the rate table.
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Replaces the scale tiers.
    ///
    /// Tiers must be ordered ascending by `max_quantity`, with factors
    /// non-increasing; the last tier is the unbounded fallback.
    pub fn with_scale_tiers(mut self, tiers: Vec<QuantityScaleTier>) -> Self {
        self.scale_tiers = tiers;
        self
    }

    /// Efficiency multiplier for a batch of the given size.
    ///
    /// Walks the tier list and returns the first factor whose bound
    /// covers the quantity; falls back to the last tier's factor, or
    /// 1.0 when no tiers are configured.
    pub fn scale_factor(&self, quantity: u32) -> f64 {
        for tier in &self.scale_tiers {
            if quantity <= tier.max_quantity {
                return tier.factor;
            }
        }
        self.scale_tiers.last().map_or(1.0, |t| t.factor)
    }

    /// Estimated minutes for a method, task selection, and quantity.
    ///
    /// `TaskSelector::Total` covers every task of the method plus one
    /// setup charge; `TaskSelector::Task` covers the single task with
    /// no setup. Unknown method or task inputs estimate to 0.
    pub fn estimated_minutes(
        &self,
        method: ProductionMethod,
        selector: TaskSelector,
        quantity: u32,
    ) -> u32 {
        let Some(rates) = self.rates.rates_for(method) else {
            warn!(?method, "no rate table entry for production method");
            return 0;
        };

        let factor = self.scale_factor(quantity);

        let minutes = match selector {
            TaskSelector::Total => {
                rates.setup_minutes + rates.total_per_unit_minutes * quantity as f64 * factor
            }
            TaskSelector::Task(task) => match rates.task_minutes.get(&task) {
                Some(rate) => rate * quantity as f64 * factor,
                None => {
                    warn!(?method, ?task, "no rate for task under production method");
                    return 0;
                }
            },
        };

        minutes.round().max(0.0) as u32
    }
}

impl Default for TimeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// The shop's efficiency tiers: 1-5 units full rate, then 10/20/30/40%
/// gains at 20, 50, 100, and unbounded.
pub fn default_scale_tiers() -> Vec<QuantityScaleTier> {
    vec![
        QuantityScaleTier::new(5, 1.0),
        QuantityScaleTier::new(20, 0.9),
        QuantityScaleTier::new(50, 0.8),
        QuantityScaleTier::new(100, 0.7),
        QuantityScaleTier::new(u32::MAX, 0.6),
    ]
}
