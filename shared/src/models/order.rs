//! Order Model

use serde::{Deserialize, Serialize};

use crate::money;

/// Order lifecycle status
///
/// `Pending` covers both "accepted" and "in kitchen"; the kitchen sub-state
/// is signalled by `Order::kitchen_at` being set, not by a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
}

/// Consumption mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ConsumptionMode {
    /// Dine-in, bound to a table
    Local,
    /// Takeaway, bound to a customer name
    Takeaway,
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
    Debt,
}

/// Order entity
///
/// Totals are never stored; they are derived from line items on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub restaurant_id: i64,
    pub user_id: i64,
    pub consumption: ConsumptionMode,
    pub table_label: Option<String>,
    pub customer_name: Option<String>,
    pub customer_address: Option<String>,
    pub payment: PaymentMethod,
    pub ticket_number: Option<String>,
    pub cardholder: Option<String>,
    pub transfer_reference: Option<String>,
    pub debtor_name: Option<String>,
    pub status: OrderStatus,
    pub created_at: i64,
    /// Set once, when the order first reaches the kitchen
    pub kitchen_at: Option<i64>,
}

/// Line item entity
///
/// At most one row per (order, product); repeated selections increment
/// `quantity` instead of creating duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LineItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

/// Line item joined with its product, for display and receipts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LineItemView {
    pub product_id: i64,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i32,
}

impl LineItemView {
    pub fn line_total_cents(&self) -> i64 {
        money::line_total(self.unit_price_cents, self.quantity)
    }
}

/// An order with its line items and derived total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub order: Order,
    pub items: Vec<LineItemView>,
    pub total_cents: i64,
}

impl OrderView {
    pub fn new(order: Order, items: Vec<LineItemView>) -> Self {
        let total_cents = items.iter().map(LineItemView::line_total_cents).sum();
        Self {
            order,
            items,
            total_cents,
        }
    }
}

/// Mutable order fields, as submitted on create and edit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub consumption: ConsumptionMode,
    pub table_label: Option<String>,
    pub customer_name: Option<String>,
    pub customer_address: Option<String>,
    #[serde(default)]
    pub payment: PaymentMethod,
    pub ticket_number: Option<String>,
    pub cardholder: Option<String>,
    pub transfer_reference: Option<String>,
    pub debtor_name: Option<String>,
}

impl OrderDraft {
    /// Trimmed table label, `None` when blank
    pub fn table(&self) -> Option<&str> {
        self.table_label
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Drop payment detail fields that do not belong to the chosen method.
    pub fn normalized(mut self) -> Self {
        if self.payment != PaymentMethod::Card {
            self.ticket_number = None;
            self.cardholder = None;
        }
        if self.payment != PaymentMethod::Transfer {
            self.transfer_reference = None;
        }
        if self.payment != PaymentMethod::Debt {
            self.debtor_name = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_draft() -> OrderDraft {
        OrderDraft {
            consumption: ConsumptionMode::Local,
            table_label: Some(" 5 ".to_string()),
            customer_name: None,
            customer_address: None,
            payment: PaymentMethod::Card,
            ticket_number: Some("T-100".to_string()),
            cardholder: Some("Ana".to_string()),
            transfer_reference: Some("stale".to_string()),
            debtor_name: None,
        }
    }

    #[test]
    fn table_trims_and_rejects_blank() {
        let draft = card_draft();
        assert_eq!(draft.table(), Some("5"));

        let mut blank = card_draft();
        blank.table_label = Some("   ".to_string());
        assert_eq!(blank.table(), None);
    }

    #[test]
    fn normalized_keeps_only_matching_payment_details() {
        let draft = card_draft().normalized();
        assert_eq!(draft.ticket_number.as_deref(), Some("T-100"));
        assert_eq!(draft.transfer_reference, None);

        let mut cash = card_draft();
        cash.payment = PaymentMethod::Cash;
        let cash = cash.normalized();
        assert_eq!(cash.ticket_number, None);
        assert_eq!(cash.cardholder, None);
    }

    #[test]
    fn order_view_derives_total() {
        let order = sample_order();
        let view = OrderView::new(
            order,
            vec![
                LineItemView {
                    product_id: 1,
                    name: "Pizza".into(),
                    unit_price_cents: 2500,
                    quantity: 2,
                },
                LineItemView {
                    product_id: 2,
                    name: "Agua".into(),
                    unit_price_cents: 900,
                    quantity: 1,
                },
            ],
        );
        assert_eq!(view.total_cents, 5900);
    }

    fn sample_order() -> Order {
        Order {
            id: 1,
            restaurant_id: 1,
            user_id: 1,
            consumption: ConsumptionMode::Local,
            table_label: Some("5".into()),
            customer_name: None,
            customer_address: None,
            payment: PaymentMethod::Cash,
            ticket_number: None,
            cardholder: None,
            transfer_reference: None,
            debtor_name: None,
            status: OrderStatus::Pending,
            created_at: 0,
            kitchen_at: None,
        }
    }
}
