//! Order ledger
//!
//! Owns the order lifecycle: intake (create-or-append with line-item
//! consolidation), edits, delivery, deletion and the active-order board.
//!
//! Intake for a dine-in table is serialized through an in-process lock per
//! (restaurant, table), so two waiters submitting for the same table cannot
//! both open an order. A partial unique index on open dine-in orders backs
//! the lock at the database level; losing that race is handled by retrying
//! once, which then appends to the winner's order.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use shared::error::{AppError, ErrorCode};
use shared::models::{ConsumptionMode, Order, OrderDraft, OrderView, Restaurant};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tokio::sync::Mutex;

use super::{local_midnight_ms, tz_of};
use crate::db;
use crate::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct OrderLedger {
    pool: SqlitePool,
    table_locks: Arc<DashMap<(i64, String), Arc<Mutex<()>>>>,
}

impl OrderLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            table_locks: Arc::new(DashMap::new()),
        }
    }

    /// Submit a selection of products.
    ///
    /// Dine-in submissions for a table that already has an open order append
    /// to it; everything else opens a new order. Quantities are consolidated
    /// per product, both within one submission and across appends.
    pub async fn create_or_append(
        &self,
        restaurant: &Restaurant,
        user_id: i64,
        draft: OrderDraft,
        product_ids: &[i64],
        now: i64,
    ) -> ServiceResult<OrderView> {
        let draft = draft.normalized();
        if product_ids.is_empty() {
            return Err(ErrorCode::EmptySelection.into());
        }
        let table = draft.table().map(str::to_string);
        if draft.consumption == ConsumptionMode::Local && table.is_none() {
            return Err(ErrorCode::TableRequired.into());
        }
        self.check_daily_quota(restaurant, now).await?;

        let lock_key = match &table {
            Some(t) if draft.consumption == ConsumptionMode::Local => {
                Some((restaurant.id, t.clone()))
            }
            _ => None,
        };
        let guard = match &lock_key {
            Some((restaurant_id, t)) => Some(self.table_lock(*restaurant_id, t).lock_owned().await),
            None => None,
        };

        let first = self
            .submit(restaurant.id, user_id, &draft, table.as_deref(), product_ids, now)
            .await;
        let result = match first {
            Err(ServiceError::Db(err)) if is_unique_violation(&err) => {
                // Another writer opened the table's order between our check
                // and insert; it exists now, so the retry appends to it.
                tracing::warn!(
                    restaurant_id = restaurant.id,
                    table = table.as_deref(),
                    "open-table conflict on intake, retrying as append"
                );
                self.submit(restaurant.id, user_id, &draft, table.as_deref(), product_ids, now)
                    .await
            }
            other => other,
        };

        drop(guard);
        if let Some(key) = lock_key {
            // Table labels are client-supplied, so the lock table is pruned
            // once nothing holds or awaits the entry. remove_if evaluates
            // under the shard lock, which excludes concurrent table_lock
            // clones of the same entry.
            self.table_locks
                .remove_if(&key, |_, lock| Arc::strong_count(lock) == 1);
        }
        result
    }

    async fn submit(
        &self,
        restaurant_id: i64,
        user_id: i64,
        draft: &OrderDraft,
        table: Option<&str>,
        product_ids: &[i64],
        now: i64,
    ) -> ServiceResult<OrderView> {
        let mut tx = self.pool.begin().await?;

        let existing = match table {
            Some(t) if draft.consumption == ConsumptionMode::Local => {
                db::orders::find_pending_for_table(&mut *tx, restaurant_id, t).await?
            }
            _ => None,
        };
        let order = match existing {
            Some(order) => order,
            None => db::orders::insert(&mut *tx, restaurant_id, user_id, draft, table, now).await?,
        };

        apply_selections(&mut tx, restaurant_id, order.id, product_ids).await?;
        let items = db::orders::items_view(&mut *tx, order.id).await?;
        tx.commit().await?;
        Ok(OrderView::new(order, items))
    }

    /// Edit an order: overwrite its fields and replace the whole selection.
    ///
    /// Unlike intake, the product list here is the full desired selection;
    /// previous line items are discarded. An empty list empties the order.
    pub async fn replace_items(
        &self,
        restaurant: &Restaurant,
        order_id: i64,
        draft: OrderDraft,
        product_ids: &[i64],
    ) -> ServiceResult<OrderView> {
        let draft = draft.normalized();
        let table = draft.table().map(str::to_string);
        if draft.consumption == ConsumptionMode::Local && table.is_none() {
            return Err(ErrorCode::TableRequired.into());
        }

        let mut tx = self.pool.begin().await?;
        let updated =
            db::orders::update_fields(&mut *tx, restaurant.id, order_id, &draft, table.as_deref())
                .await;
        let order = match updated {
            Ok(Some(order)) => order,
            Ok(None) => return Err(ErrorCode::OrderNotFound.into()),
            Err(err) if is_unique_violation(&err) => {
                return Err(AppError::with_message(
                    ErrorCode::AlreadyExists,
                    "Table already has an open order",
                )
                .into());
            }
            Err(err) => return Err(err.into()),
        };

        db::orders::clear_items(&mut *tx, order.id).await?;
        apply_selections(&mut tx, restaurant.id, order.id, product_ids).await?;
        let items = db::orders::items_view(&mut *tx, order.id).await?;
        tx.commit().await?;
        Ok(OrderView::new(order, items))
    }

    /// Stamp the order's kitchen arrival, first write wins.
    ///
    /// Calling again is a no-op that returns the order with its original
    /// stamp; an absent or cross-tenant order is `OrderNotFound`.
    pub async fn mark_kitchen_arrival(
        &self,
        restaurant_id: i64,
        order_id: i64,
        now: i64,
    ) -> ServiceResult<Order> {
        db::orders::set_kitchen_at_if_unset(&self.pool, restaurant_id, order_id, now).await?;
        db::orders::find(&self.pool, restaurant_id, order_id)
            .await?
            .ok_or_else(|| ErrorCode::OrderNotFound.into())
    }

    /// Idempotent terminal transition. The table is released as a side
    /// effect: delivered orders are never consolidation targets.
    pub async fn mark_delivered(&self, restaurant_id: i64, order_id: i64) -> ServiceResult<Order> {
        let affected = db::orders::set_delivered(&self.pool, restaurant_id, order_id).await?;
        if affected == 0 {
            return Err(ErrorCode::OrderNotFound.into());
        }
        db::orders::find(&self.pool, restaurant_id, order_id)
            .await?
            .ok_or_else(|| ErrorCode::OrderNotFound.into())
    }

    pub async fn delete(&self, restaurant_id: i64, order_id: i64) -> ServiceResult<()> {
        let affected = db::orders::delete(&self.pool, restaurant_id, order_id).await?;
        if affected == 0 {
            return Err(ErrorCode::OrderNotFound.into());
        }
        Ok(())
    }

    /// All non-delivered orders, newest first, with items and totals.
    pub async fn active_orders(&self, restaurant_id: i64) -> ServiceResult<Vec<OrderView>> {
        let orders = db::orders::list_active(&self.pool, restaurant_id).await?;
        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            let items = db::orders::items_view(&self.pool, order.id).await?;
            views.push(OrderView::new(order, items));
        }
        Ok(views)
    }

    pub async fn get(&self, restaurant_id: i64, order_id: i64) -> ServiceResult<OrderView> {
        let order = db::orders::find(&self.pool, restaurant_id, order_id)
            .await?
            .ok_or(ErrorCode::OrderNotFound)?;
        let items = db::orders::items_view(&self.pool, order.id).await?;
        Ok(OrderView::new(order, items))
    }

    fn table_lock(&self, restaurant_id: i64, table: &str) -> Arc<Mutex<()>> {
        self.table_locks
            .entry((restaurant_id, table.to_string()))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn check_daily_quota(&self, restaurant: &Restaurant, now: i64) -> ServiceResult<()> {
        let Some(max) = restaurant.plan.limits().max_daily_orders else {
            return Ok(());
        };
        let since = local_midnight_ms(tz_of(restaurant), now);
        let used = db::orders::count_created_since(&self.pool, restaurant.id, since).await?;
        if used >= i64::from(max) {
            return Err(AppError::from(ErrorCode::PlanLimitReached)
                .with_detail("resource", "daily_orders")
                .with_detail("limit", max)
                .into());
        }
        Ok(())
    }
}

/// Count repeated selections per product, then upsert each pair.
///
/// Product ids that do not resolve within the restaurant (absent or owned by
/// another tenant) are dropped silently; they can neither leak data nor
/// abort a waiter's submission.
async fn apply_selections(
    tx: &mut Transaction<'_, Sqlite>,
    restaurant_id: i64,
    order_id: i64,
    product_ids: &[i64],
) -> ServiceResult<()> {
    for (product_id, quantity) in consolidate(product_ids) {
        if db::products::resolve(&mut **tx, restaurant_id, product_id)
            .await?
            .is_none()
        {
            tracing::debug!(restaurant_id, product_id, "ignoring unresolvable product id");
            continue;
        }
        db::orders::upsert_item(&mut **tx, order_id, product_id, quantity).await?;
    }
    Ok(())
}

fn consolidate(product_ids: &[i64]) -> BTreeMap<i64, i64> {
    let mut counts = BTreeMap::new();
    for id in product_ids {
        *counts.entry(*id).or_insert(0) += 1;
    }
    counts
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
