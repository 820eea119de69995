//! Order and order item models.
//!
//! The subset of the order record the scheduling core consumes:
//! quantities, production methods, the priority flag, and the derived
//! estimate/due-date fields the core writes back. Everything else on a
//! real order (client info, payment, status history) lives upstream.
//!
//! # Derived Fields
//! `OrderItem::estimated_minutes` and `Order::due_date` are outputs of
//! the estimator/scheduler, recomputed from scratch whenever items,
//! quantities, methods, or the priority flag change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ProductionMethod, TaskType};

/// Workflow state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Awaiting,
    OrderPlaced,
    ShirtsArrived,
    Delivered,
}

impl OrderStatus {
    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Awaiting => "Awaiting",
            OrderStatus::OrderPlaced => "Order Placed",
            OrderStatus::ShirtsArrived => "Shirts Arrived",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique item identifier within the order.
    pub id: String,
    /// What is being produced.
    pub description: String,
    /// Number of units. Must be ≥ 1 for estimation.
    pub quantity: u32,
    /// How the item is produced.
    pub production_method: ProductionMethod,
    /// Derived: estimated production minutes for this item (total
    /// across tasks, setup included). Written by the scheduler.
    pub estimated_minutes: u32,
}

impl OrderItem {
    /// Creates an item with the given ID, method, and quantity.
    pub fn new(id: impl Into<String>, method: ProductionMethod, quantity: u32) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            quantity,
            production_method: method,
            estimated_minutes: 0,
        }
    }

    /// Sets the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A production order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Whether the order is expedited.
    pub is_priority: bool,
    /// Line items, in entry order.
    pub items: Vec<OrderItem>,
    /// Workflow state.
    pub status: OrderStatus,
    /// Derived: promised completion date. Written by the scheduler;
    /// `None` until first scheduled. Always ≥ `order_date` once set.
    pub due_date: Option<NaiveDate>,
}

impl Order {
    /// Creates an order placed on the given date.
    pub fn new(id: impl Into<String>, order_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            order_date,
            is_priority: false,
            items: Vec::new(),
            status: OrderStatus::Awaiting,
            due_date: None,
        }
    }

    /// Marks the order as expedited.
    pub fn with_priority(mut self, is_priority: bool) -> Self {
        self.is_priority = is_priority;
        self
    }

    /// Adds a line item.
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sets the workflow state.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Total units across all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of per-item estimated minutes.
    pub fn total_estimated_minutes(&self) -> u32 {
        self.items.iter().map(|i| i.estimated_minutes).sum()
    }

    /// Distinct production methods in use, in order of first appearance.
    pub fn production_methods(&self) -> Vec<ProductionMethod> {
        let mut methods = Vec::new();
        for item in &self.items {
            if !methods.contains(&item.production_method) {
                methods.push(item.production_method);
            }
        }
        methods
    }

    /// All task types implied by the order's items, deduplicated.
    pub fn task_types(&self) -> Vec<TaskType> {
        let mut tasks = Vec::new();
        for method in self.production_methods() {
            for &task in method.tasks() {
                if !tasks.contains(&task) {
                    tasks.push(task);
                }
            }
        }
        tasks
    }

    /// Whether the order has any items.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_order_builder() {
        let order = Order::new("ORD-1", date(2025, 1, 6))
            .with_priority(true)
            .with_status(OrderStatus::OrderPlaced)
            .with_item(
                OrderItem::new("I1", ProductionMethod::HeatTransferVinyl, 4)
                    .with_description("Team shirts"),
            );

        assert_eq!(order.id, "ORD-1");
        assert!(order.is_priority);
        assert_eq!(order.status, OrderStatus::OrderPlaced);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].description, "Team shirts");
        assert_eq!(order.due_date, None);
    }

    #[test]
    fn test_order_aggregates() {
        let order = Order::new("ORD-2", date(2025, 1, 6))
            .with_item(OrderItem::new("I1", ProductionMethod::HeatTransferVinyl, 3))
            .with_item(OrderItem::new("I2", ProductionMethod::Embroidery, 5))
            .with_item(OrderItem::new("I3", ProductionMethod::HeatTransferVinyl, 2));

        assert_eq!(order.total_quantity(), 10);
        // Deduplicated, first-appearance order
        assert_eq!(
            order.production_methods(),
            vec![
                ProductionMethod::HeatTransferVinyl,
                ProductionMethod::Embroidery
            ]
        );
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new("empty", date(2025, 1, 6));
        assert!(!order.has_items());
        assert_eq!(order.total_quantity(), 0);
        assert_eq!(order.total_estimated_minutes(), 0);
        assert!(order.production_methods().is_empty());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Awaiting.label(), "Awaiting");
        assert_eq!(OrderStatus::OrderPlaced.label(), "Order Placed");
        assert_eq!(OrderStatus::ShirtsArrived.label(), "Shirts Arrived");
        assert_eq!(OrderStatus::Delivered.label(), "Delivered");
    }

    #[test]
    fn test_order_serde_round_trip() {
        let order = Order::new("ORD-3", date(2025, 3, 10))
            .with_item(OrderItem::new("I1", ProductionMethod::Sublimation, 12));

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "ORD-3");
        assert_eq!(back.order_date, date(2025, 3, 10));
        assert_eq!(back.items[0].production_method, ProductionMethod::Sublimation);
        assert_eq!(back.items[0].quantity, 12);
    }
}
