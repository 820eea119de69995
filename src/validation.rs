//! Input validation for orders.
//!
//! Checks structural integrity of an order before estimation and
//! scheduling. Detects:
//! - Zero-quantity items
//! - Duplicate item IDs
//! - Orders with no items
//! - A stored due date earlier than the order date
//!
//! The estimator and scheduler do not validate on their own — they
//! degrade gracefully instead — so this is an optional pre-flight for
//! callers that want loud feedback at the form boundary.

use std::collections::HashSet;

use crate::models::Order;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An item has quantity 0.
    ZeroQuantity,
    /// Two items share the same ID.
    DuplicateItemId,
    /// The order has no items.
    EmptyOrder,
    /// The stored due date precedes the order date.
    DueDateBeforeOrderDate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an order's structure.
///
/// Checks:
/// 1. The order has at least one item
/// 2. Every item quantity is ≥ 1
/// 3. No duplicate item IDs
/// 4. Any stored due date is on or after the order date
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_order(order: &Order) -> ValidationResult {
    let mut errors = Vec::new();

    if order.items.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyOrder,
            format!("Order '{}' has no items", order.id),
        ));
    }

    let mut item_ids = HashSet::new();
    for item in &order.items {
        if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateItemId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if item.quantity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroQuantity,
                format!("Item '{}' has quantity 0", item.id),
            ));
        }
    }

    if let Some(due) = order.due_date {
        if due < order.order_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::DueDateBeforeOrderDate,
                format!(
                    "Order '{}' due date {} precedes order date {}",
                    order.id, due, order.order_date
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, ProductionMethod};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_order() -> Order {
        Order::new("ORD-1", date(2025, 1, 6))
            .with_item(OrderItem::new("I1", ProductionMethod::Sublimation, 2))
            .with_item(OrderItem::new("I2", ProductionMethod::Embroidery, 1))
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(validate_order(&valid_order()).is_ok());
    }

    #[test]
    fn test_empty_order_rejected() {
        let order = Order::new("empty", date(2025, 1, 6));
        let errors = validate_order(&order).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyOrder);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut order = valid_order();
        order.items[0].quantity = 0;
        let errors = validate_order(&order).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroQuantity));
    }

    #[test]
    fn test_duplicate_item_ids_rejected() {
        let order = valid_order()
            .with_item(OrderItem::new("I1", ProductionMethod::HeatTransferVinyl, 3));
        let errors = validate_order(&order).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateItemId));
    }

    #[test]
    fn test_due_date_before_order_date_rejected() {
        let mut order = valid_order();
        order.due_date = Some(date(2025, 1, 3));
        let errors = validate_order(&order).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DueDateBeforeOrderDate));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut order = Order::new("bad", date(2025, 1, 6))
            .with_item(OrderItem::new("I1", ProductionMethod::Sublimation, 0))
            .with_item(OrderItem::new("I1", ProductionMethod::Sublimation, 0));
        order.due_date = Some(date(2025, 1, 1));
        let errors = validate_order(&order).unwrap_err();
        // Duplicate ID, two zero quantities, bad due date
        assert_eq!(errors.len(), 4);
    }
}
