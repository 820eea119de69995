//! Due-date scheduling.
//!
//! Derives order due dates from aggregate order properties: quantity
//! tiers set the base lead time, the slowest production method adds a
//! surcharge, and priority orders are expedited — all in business days
//! over the [`BusinessCalendar`](crate::models::BusinessCalendar).

mod due_date;

pub use due_date::{DueDateScheduler, LeadTimePolicy, LeadTimeTier};
