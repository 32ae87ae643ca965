use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Status of an order. Stored lowercase in the database.
///
/// The only transition this service performs is `Pending` → `Cancelled`.
/// `Preparing` and `Delivered` are reachable states driven by external admin
/// tooling; nothing here sets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Only pending orders may be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

/// A cart line priced at placement time: quantity plus the catalog unit
/// price captured inside the placement transaction.
#[derive(Debug, Clone)]
pub struct LineSnapshot {
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

/// Exact order total over snapshotted lines.
///
/// Prices carry two decimal places and quantities are integral, so every
/// product and the running sum stay exact at scale 2. No floats anywhere.
pub fn order_total(lines: &[LineSnapshot]) -> BigDecimal {
    lines.iter().fold(BigDecimal::from(0), |acc, line| {
        acc + line.unit_price.clone() * BigDecimal::from(line.quantity)
    })
}

/// Result of a successful placement.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub id: Uuid,
    pub total_price: BigDecimal,
}

/// An order line as read back. `menu_item_id`/`food_name` are `None` when
/// the catalog item was deleted after placement; the snapshot price and
/// quantity survive regardless.
#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub id: Uuid,
    pub menu_item_id: Option<Uuid>,
    pub food_name: Option<String>,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: OrderStatus,
    pub total_price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLineView>,
}

/// A pending cart line with its catalog item joined in. The price shown is
/// the item's current catalog price, not a snapshot.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub food_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn snap(price: &str, quantity: i32) -> LineSnapshot {
        LineSnapshot {
            menu_item_id: Uuid::new_v4(),
            quantity,
            unit_price: BigDecimal::from_str(price).expect("valid decimal"),
        }
    }

    #[test]
    fn total_sums_line_products_exactly() {
        let total = order_total(&[snap("12.50", 2), snap("7.99", 1)]);
        assert_eq!(total, BigDecimal::from_str("32.99").unwrap());
    }

    #[test]
    fn total_of_no_lines_is_zero() {
        assert_eq!(order_total(&[]), BigDecimal::from(0));
    }

    #[test]
    fn total_has_no_float_drift() {
        // 0.10 × 3 is the classic binary-float trap; fixed point stays exact.
        let total = order_total(&[snap("0.10", 3)]);
        assert_eq!(total, BigDecimal::from_str("0.30").unwrap());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("shipped"), None);
    }

    #[test]
    fn only_pending_is_cancellable() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(!OrderStatus::Preparing.can_cancel());
        assert!(!OrderStatus::Delivered.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }
}
