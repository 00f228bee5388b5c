//! Kitchen board
//!
//! Pending orders with their time in preparation. An order's kitchen clock
//! starts the first time it is seen by the board and never restarts; later
//! edits to the order do not touch it.

use serde::{Deserialize, Serialize};
use shared::models::{OrderStatus, OrderView};
use sqlx::SqlitePool;

use super::ledger::OrderLedger;
use super::{local_time_label, tz_of};
use crate::db;
use crate::error::ServiceResult;
use shared::models::Restaurant;

/// Time an order has spent in preparation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum KitchenElapsed {
    /// Not yet seen by the kitchen
    Pending,
    Since { minutes: i64, seconds: i64 },
}

/// Elapsed preparation time, clamped at zero against clock skew.
pub fn elapsed(kitchen_at: Option<i64>, now: i64) -> KitchenElapsed {
    match kitchen_at {
        None => KitchenElapsed::Pending,
        Some(start) => {
            let total_seconds = ((now - start).max(0)) / 1000;
            KitchenElapsed::Since {
                minutes: total_seconds / 60,
                seconds: total_seconds % 60,
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KitchenEntry {
    #[serde(flatten)]
    pub view: OrderView,
    /// Arrival time formatted in the restaurant's timezone
    pub received_at_local: String,
    pub elapsed: KitchenElapsed,
}

/// The kitchen board: every pending order, newest first.
///
/// Orders appearing for the first time get their arrival stamped; the write
/// is first-wins, so a concurrent board request cannot move the clock.
pub async fn board(
    pool: &SqlitePool,
    ledger: &OrderLedger,
    restaurant: &Restaurant,
    now: i64,
) -> ServiceResult<Vec<KitchenEntry>> {
    let tz = tz_of(restaurant);
    let orders = db::orders::list_active(pool, restaurant.id).await?;
    let mut entries = Vec::with_capacity(orders.len());
    for mut order in orders {
        if order.status == OrderStatus::Pending && order.kitchen_at.is_none() {
            // First-wins: a concurrent stamp leaves the earlier timestamp.
            order = ledger
                .mark_kitchen_arrival(restaurant.id, order.id, now)
                .await?;
        }
        let items = db::orders::items_view(pool, order.id).await?;
        let received_at_local = local_time_label(tz, order.kitchen_at.unwrap_or(order.created_at));
        let elapsed = elapsed(order.kitchen_at, now);
        entries.push(KitchenEntry {
            view: OrderView::new(order, items),
            received_at_local,
            elapsed,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{pool, seed_product, seed_tenant};
    use crate::services::ledger::OrderLedger;
    use shared::models::{ConsumptionMode, OrderDraft, PaymentMethod};

    fn draft(table: &str) -> OrderDraft {
        OrderDraft {
            consumption: ConsumptionMode::Local,
            table_label: Some(table.to_string()),
            customer_name: None,
            customer_address: None,
            payment: PaymentMethod::Cash,
            ticket_number: None,
            cardholder: None,
            transfer_reference: None,
            debtor_name: None,
        }
    }

    #[test]
    fn elapsed_splits_minutes_and_seconds() {
        assert_eq!(elapsed(None, 1000), KitchenElapsed::Pending);
        assert_eq!(
            elapsed(Some(0), 125_000),
            KitchenElapsed::Since {
                minutes: 2,
                seconds: 5
            }
        );
        // Clock skew clamps at zero rather than going negative.
        assert_eq!(
            elapsed(Some(10_000), 5_000),
            KitchenElapsed::Since {
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[tokio::test]
    async fn first_board_sight_starts_the_clock_once() {
        let pool = pool().await;
        let (restaurant, user) = seed_tenant(&pool, "Trattoria").await;
        let pizza = seed_product(&pool, restaurant.id, "Pizza", 2500).await;
        let ledger = OrderLedger::new(pool.clone());
        let view = ledger
            .create_or_append(&restaurant, user.id, draft("5"), &[pizza.id], 1_000_000)
            .await
            .unwrap();

        let first = board(&pool, &ledger, &restaurant, 2_000_000).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].view.order.kitchen_at, Some(2_000_000));

        // A later board view computes elapsed from the original stamp.
        let second = board(&pool, &ledger, &restaurant, 2_090_000).await.unwrap();
        assert_eq!(second[0].view.order.kitchen_at, Some(2_000_000));
        assert_eq!(
            second[0].elapsed,
            KitchenElapsed::Since {
                minutes: 1,
                seconds: 30
            }
        );

        // Editing the order does not restart the clock.
        ledger
            .replace_items(&restaurant, view.order.id, draft("5"), &[pizza.id, pizza.id])
            .await
            .unwrap();
        let third = board(&pool, &ledger, &restaurant, 2_100_000).await.unwrap();
        assert_eq!(third[0].view.order.kitchen_at, Some(2_000_000));
    }

    #[tokio::test]
    async fn delivered_orders_leave_the_board() {
        let pool = pool().await;
        let (restaurant, user) = seed_tenant(&pool, "Trattoria").await;
        let pizza = seed_product(&pool, restaurant.id, "Pizza", 2500).await;
        let ledger = OrderLedger::new(pool.clone());
        let view = ledger
            .create_or_append(&restaurant, user.id, draft("5"), &[pizza.id], 1_000_000)
            .await
            .unwrap();

        assert_eq!(board(&pool, &ledger, &restaurant, 2_000_000).await.unwrap().len(), 1);
        ledger.mark_delivered(restaurant.id, view.order.id).await.unwrap();
        assert!(board(&pool, &ledger, &restaurant, 3_000_000).await.unwrap().is_empty());
    }
}
