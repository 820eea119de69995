//! Scheduling domain models.
//!
//! Core data types for production orders and the business-day calendar
//! they are scheduled against. Models carry no behavior beyond simple
//! aggregation; estimation and due-date logic live in [`crate::estimate`]
//! and [`crate::scheduler`].

mod calendar;
mod method;
mod order;

pub use calendar::{BusinessCalendar, Holiday};
pub use method::{ProductionMethod, TaskSelector, TaskType};
pub use order::{Order, OrderItem, OrderStatus};
