//! Delivered-order history
//!
//! Read-only reporting over delivered orders, with optional rolling
//! windows. Revenue is derived from line items at read time, so price
//! updates after delivery are reflected retroactively rather than frozen.

use serde::{Deserialize, Serialize};
use shared::models::{OrderView, Restaurant};
use shared::util::DAY_MS;
use sqlx::SqlitePool;

use crate::db;
use crate::error::ServiceResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryWindow {
    #[default]
    All,
    /// Rolling 7 days
    Week,
    /// Rolling 30 days
    Month,
}

impl HistoryWindow {
    /// Inclusive lower bound in UTC millis, `None` for the full history.
    pub fn cutoff(&self, now: i64) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Week => Some(now - 7 * DAY_MS),
            Self::Month => Some(now - 30 * DAY_MS),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryReport {
    pub window: HistoryWindow,
    pub count: usize,
    pub revenue_cents: i64,
    pub orders: Vec<OrderView>,
}

pub async fn report(
    pool: &SqlitePool,
    restaurant: &Restaurant,
    window: HistoryWindow,
    now: i64,
) -> ServiceResult<HistoryReport> {
    let orders = db::orders::list_delivered_since(pool, restaurant.id, window.cutoff(now)).await?;
    let mut views = Vec::with_capacity(orders.len());
    for order in orders {
        let items = db::orders::items_view(pool, order.id).await?;
        views.push(OrderView::new(order, items));
    }
    let revenue_cents = views.iter().map(|v| v.total_cents).sum();
    Ok(HistoryReport {
        window,
        count: views.len(),
        revenue_cents,
        orders: views,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{pool, seed_product, seed_tenant};
    use shared::models::{ConsumptionMode, OrderDraft, PaymentMethod};

    fn takeaway() -> OrderDraft {
        OrderDraft {
            consumption: ConsumptionMode::Takeaway,
            table_label: None,
            customer_name: Some("Ana".to_string()),
            customer_address: None,
            payment: PaymentMethod::Cash,
            ticket_number: None,
            cardholder: None,
            transfer_reference: None,
            debtor_name: None,
        }
    }

    async fn deliver_at(pool: &SqlitePool, restaurant_id: i64, user_id: i64, product_id: i64, at: i64) {
        let order = db::orders::insert(pool, restaurant_id, user_id, &takeaway(), None, at)
            .await
            .unwrap();
        db::orders::upsert_item(pool, order.id, product_id, 2).await.unwrap();
        db::orders::set_delivered(pool, restaurant_id, order.id).await.unwrap();
    }

    #[tokio::test]
    async fn windows_bound_by_created_at() {
        let pool = pool().await;
        let (restaurant, user) = seed_tenant(&pool, "Trattoria").await;
        let pizza = seed_product(&pool, restaurant.id, "Pizza", 2500).await;
        let now = 100 * DAY_MS;

        deliver_at(&pool, restaurant.id, user.id, pizza.id, now - 2 * DAY_MS).await;
        deliver_at(&pool, restaurant.id, user.id, pizza.id, now - 10 * DAY_MS).await;
        deliver_at(&pool, restaurant.id, user.id, pizza.id, now - 40 * DAY_MS).await;

        let week = report(&pool, &restaurant, HistoryWindow::Week, now).await.unwrap();
        assert_eq!(week.count, 1);
        assert_eq!(week.revenue_cents, 5000);

        let month = report(&pool, &restaurant, HistoryWindow::Month, now).await.unwrap();
        assert_eq!(month.count, 2);

        let all = report(&pool, &restaurant, HistoryWindow::All, now).await.unwrap();
        assert_eq!(all.count, 3);
        assert_eq!(all.revenue_cents, 15_000);
    }

    #[tokio::test]
    async fn pending_orders_never_show_in_history() {
        let pool = pool().await;
        let (restaurant, user) = seed_tenant(&pool, "Trattoria").await;
        let pizza = seed_product(&pool, restaurant.id, "Pizza", 2500).await;
        let now = 100 * DAY_MS;

        let order = db::orders::insert(&pool, restaurant.id, user.id, &takeaway(), None, now)
            .await
            .unwrap();
        db::orders::upsert_item(&pool, order.id, pizza.id, 1).await.unwrap();

        let all = report(&pool, &restaurant, HistoryWindow::All, now).await.unwrap();
        assert_eq!(all.count, 0);
        assert_eq!(all.revenue_cents, 0);
    }

    #[tokio::test]
    async fn history_is_tenant_scoped() {
        let pool = pool().await;
        let (a, user_a) = seed_tenant(&pool, "Trattoria").await;
        let (b, _) = seed_tenant(&pool, "Cantina").await;
        let pizza = seed_product(&pool, a.id, "Pizza", 2500).await;
        let now = 100 * DAY_MS;
        deliver_at(&pool, a.id, user_a.id, pizza.id, now - DAY_MS).await;

        let other = report(&pool, &b, HistoryWindow::All, now).await.unwrap();
        assert_eq!(other.count, 0);
    }
}
