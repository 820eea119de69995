//! Production method and task type enumerations.
//!
//! A production method determines which rate table and lead-time
//! surcharge apply to an order item. Task types are scoped per method:
//! estimating `Digitize` under `HeatTransferVinyl` is a mismatch and
//! yields a zero estimate rather than an error.

use serde::{Deserialize, Serialize};

/// How an item is produced.
///
/// Serialized in the SCREAMING_SNAKE_CASE form the order store uses
/// (`"HEAT_TRANSFER_VINYL"`, `"SUBLIMATION"`, `"EMBROIDERY"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionMethod {
    HeatTransferVinyl,
    Sublimation,
    Embroidery,
}

impl ProductionMethod {
    /// All methods, in display order.
    pub const ALL: [ProductionMethod; 3] = [
        ProductionMethod::HeatTransferVinyl,
        ProductionMethod::Sublimation,
        ProductionMethod::Embroidery,
    ];

    /// The task types that belong to this method, in production order.
    pub fn tasks(&self) -> &'static [TaskType] {
        match self {
            ProductionMethod::HeatTransferVinyl => {
                &[TaskType::CutVinyl, TaskType::WeedVinyl, TaskType::PressShirts]
            }
            ProductionMethod::Sublimation => &[TaskType::PrintDesign, TaskType::Press],
            ProductionMethod::Embroidery => &[TaskType::Digitize, TaskType::Production],
        }
    }

    /// Whether the given task type belongs to this method.
    pub fn has_task(&self, task: TaskType) -> bool {
        self.tasks().contains(&task)
    }
}

/// A single production step within a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    CutVinyl,
    WeedVinyl,
    PressShirts,
    PrintDesign,
    Press,
    Digitize,
    Production,
}

/// What a time estimate covers.
///
/// Replaces the "null task type means total" convention at the API
/// boundary with an explicit variant, so callers cannot accidentally
/// conflate "no task selected" with "all tasks".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSelector {
    /// Total across every task of the method, including setup time.
    Total,
    /// A single task, excluding setup time.
    Task(TaskType),
}
