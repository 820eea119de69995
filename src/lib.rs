//! Production scheduling for small apparel and print shops.
//!
//! Provides deterministic time estimation and due-date derivation for
//! production orders: per-task minute estimates with quantity-based
//! efficiency scaling, and lead times expressed in business days over
//! a weekend/holiday-aware calendar.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Order`, `OrderItem`, `ProductionMethod`,
//!   `TaskType`, `BusinessCalendar`, `Holiday`
//! - **`estimate`**: Rate tables and the quantity-scaled `TimeEstimator`
//! - **`scheduler`**: Lead-time policy and the `DueDateScheduler`
//! - **`validation`**: Order integrity checks (quantities, item IDs, dates)
//!
//! # Design
//!
//! Every computation is a pure function of its inputs plus injected
//! configuration (rate tables, scale tiers, holiday calendar, lead-time
//! policy). Nothing here performs I/O or holds mutable state; derived
//! values are always recomputed from scratch, never patched in place.
//! Unknown method/task inputs degrade to a zero estimate rather than
//! failing, so a bad input can never take down the calling application.

pub mod estimate;
pub mod models;
pub mod scheduler;
pub mod validation;
