//! Due-date derivation.
//!
//! Maps an order's aggregate properties (total quantity, production
//! methods, priority flag) to a lead time in business days and a
//! concrete due date on the business calendar.
//!
//! # Algorithm
//!
//! 1. Base business days from quantity tiers (≤10 → 5, ≤50 → 10, else 15).
//! 2. One method surcharge, embroidery taking precedence: embroidery +5,
//!    else heat-transfer vinyl +2, else nothing. Never both.
//! 3. Priority expediting: subtract `max(ceil(days × 0.3), 1)`, floored
//!    so at least 1 business day always remains.
//! 4. Advance the order date by the resulting business days.
//!
//! The scheduler holds no state between calls: the due date is always
//! recomputed from the order's current aggregates, so the latest edit
//! wins and there is nothing to incrementally patch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::estimate::TimeEstimator;
use crate::models::{BusinessCalendar, Order, ProductionMethod, TaskSelector};

/// A lead-time tier: orders up to `max_quantity` units get `business_days`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeadTimeTier {
    /// Inclusive upper bound of the tier. The last tier uses `u32::MAX`
    /// as the unbounded catch-all.
    pub max_quantity: u32,
    /// Lead time for the tier, in business days.
    pub business_days: u32,
}

impl LeadTimeTier {
    /// Creates a tier.
    pub fn new(max_quantity: u32, business_days: u32) -> Self {
        Self {
            max_quantity,
            business_days,
        }
    }
}

/// Lead-time policy: quantity tiers, method surcharges, and the
/// priority expediting rate.
///
/// Injected configuration; `Default` carries the shop's rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadTimePolicy {
    /// Base lead time by total quantity, ascending by bound.
    pub quantity_tiers: Vec<LeadTimeTier>,
    /// Extra business days when any item is embroidered.
    pub embroidery_surcharge_days: u32,
    /// Extra business days when any item uses heat-transfer vinyl
    /// (and nothing is embroidered — embroidery wins).
    pub vinyl_surcharge_days: u32,
    /// Fraction of the lead time removed for priority orders (0.0..1.0).
    /// The reduction is at least 1 day; the result never drops below 1.
    pub priority_reduction: f64,
}

impl Default for LeadTimePolicy {
    fn default() -> Self {
        Self {
            quantity_tiers: vec![
                LeadTimeTier::new(10, 5),
                LeadTimeTier::new(50, 10),
                LeadTimeTier::new(u32::MAX, 15),
            ],
            embroidery_surcharge_days: 5,
            vinyl_surcharge_days: 2,
            priority_reduction: 0.3,
        }
    }
}

impl LeadTimePolicy {
    /// Base business days for a total quantity, before surcharges.
    pub fn base_days(&self, quantity: u32) -> u32 {
        for tier in &self.quantity_tiers {
            if quantity <= tier.max_quantity {
                return tier.business_days;
            }
        }
        self.quantity_tiers.last().map_or(0, |t| t.business_days)
    }

    /// Surcharge for the slowest production method present.
    ///
    /// Exactly one surcharge applies: embroidery beats heat-transfer
    /// vinyl, sublimation alone adds nothing, and an empty method set
    /// falls through to no surcharge.
    pub fn method_surcharge_days(&self, methods: &[ProductionMethod]) -> u32 {
        if methods.contains(&ProductionMethod::Embroidery) {
            self.embroidery_surcharge_days
        } else if methods.contains(&ProductionMethod::HeatTransferVinyl) {
            self.vinyl_surcharge_days
        } else {
            0
        }
    }

    /// Expedited lead time for a priority order.
    ///
    /// Removes `ceil(days × priority_reduction)` business days, at least
    /// one; the result is floored at 1 business day.
    pub fn expedite(&self, business_days: u32) -> u32 {
        let reduction = (business_days as f64 * self.priority_reduction).ceil() as u32;
        business_days.saturating_sub(reduction.max(1)).max(1)
    }
}

/// Business-day due-date scheduler.
///
/// Combines a [`BusinessCalendar`] with a [`LeadTimePolicy`]. All
/// methods are pure; calling them twice with the same inputs yields the
/// same dates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shop_schedule::models::ProductionMethod;
/// use shop_schedule::scheduler::DueDateScheduler;
///
/// let scheduler = DueDateScheduler::new();
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let due = scheduler.due_date(
///     monday,
///     8,
///     &[ProductionMethod::HeatTransferVinyl],
///     false,
/// );
/// // 5 base + 2 vinyl surcharge = 7 business days
/// assert_eq!(due, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DueDateScheduler {
    calendar: BusinessCalendar,
    policy: LeadTimePolicy,
}

impl DueDateScheduler {
    /// Creates a scheduler with the default calendar and policy.
    pub fn new() -> Self {
        Self {
            calendar: BusinessCalendar::default(),
            policy: LeadTimePolicy::default(),
        }
    }

    /// Replaces the business calendar.
    pub fn with_calendar(mut self, calendar: BusinessCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Replaces the lead-time policy.
    pub fn with_policy(mut self, policy: LeadTimePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The calendar this scheduler walks.
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Lead time in business days, before priority expediting.
    ///
    /// Base quantity tier plus the single applicable method surcharge.
    pub fn lead_time_days(&self, quantity: u32, methods: &[ProductionMethod]) -> u32 {
        self.policy.base_days(quantity) + self.policy.method_surcharge_days(methods)
    }

    /// Due date for the given order properties.
    ///
    /// Never fails: an empty method set simply earns no surcharge. The
    /// result is always on or after `order_date` (lead time is floored
    /// at 1 business day even under maximum expediting).
    pub fn due_date(
        &self,
        order_date: NaiveDate,
        quantity: u32,
        methods: &[ProductionMethod],
        is_priority: bool,
    ) -> NaiveDate {
        let mut business_days = self.lead_time_days(quantity, methods);
        if is_priority {
            business_days = self.policy.expedite(business_days);
        }
        self.calendar.add_business_days(order_date, business_days)
    }

    /// Due date from an order's own aggregates.
    pub fn schedule_order(&self, order: &Order) -> NaiveDate {
        self.due_date(
            order.order_date,
            order.total_quantity(),
            &order.production_methods(),
            order.is_priority,
        )
    }

    /// Recomputes every derived field on an order in place.
    ///
    /// Each item's `estimated_minutes` is refreshed from the estimator
    /// (total across tasks, setup included) and the order's `due_date`
    /// is rescheduled from its aggregates. Always a full recompute;
    /// previous values are discarded.
    pub fn apply_estimates(&self, order: &mut Order, estimator: &TimeEstimator) {
        for item in &mut order.items {
            item.estimated_minutes = estimator.estimated_minutes(
                item.production_method,
                TaskSelector::Total,
                item.quantity,
            );
        }
        let due = self.schedule_order(order);
        order.due_date = Some(due);
    }
}
