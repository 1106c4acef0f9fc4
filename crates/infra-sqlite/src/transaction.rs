// SQLite Transaction Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction as SqlxTransaction};
use tally_core::domain::{Millis, NewOrder, NewSale, RowId, Sale, UserId};
use tally_core::error::Result;
use tally_core::port::{LedgerTransaction, Transaction};

/// Ledger transaction; dropping it without commit rolls back
pub struct SqliteLedgerTransaction<'a> {
    tx: SqlxTransaction<'a, Sqlite>,
}

impl<'a> SqliteLedgerTransaction<'a> {
    pub fn new(tx: SqlxTransaction<'a, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Transaction for SqliteLedgerTransaction<'_> {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    quantity: i64,
    description: String,
    occurred_at: i64,
}

#[async_trait]
impl LedgerTransaction for SqliteLedgerTransaction<'_> {
    async fn owns_product(&mut self, user_id: UserId, product_id: RowId) -> Result<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT id FROM products WHERE id = ? AND user_id = ?")
                .bind(product_id)
                .bind(user_id)
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(map_sqlx_error)?;

        Ok(found.is_some())
    }

    async fn insert_sale(&mut self, user_id: UserId, sale: &NewSale) -> Result<Sale> {
        let row = sqlx::query_as::<_, SaleRow>(
            r#"
            INSERT INTO sales (user_id, product_id, quantity, description, occurred_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(sale.product_id)
        .bind(sale.quantity)
        .bind(&sale.description)
        .bind(sale.occurred_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Sale {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            quantity: row.quantity,
            description: row.description,
            occurred_at: row.occurred_at,
        })
    }

    async fn insert_order(&mut self, user_id: UserId, order: &NewOrder) -> Result<RowId> {
        let order_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (user_id, description, order_date, order_time, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&order.description)
        .bind(order.order_date)
        .bind(&order.order_time)
        .bind(order.created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        for line in &order.lines {
            sqlx::query("INSERT INTO order_items (order_id, product_id, quantity) VALUES (?, ?, ?)")
                .bind(order_id)
                .bind(line.product_id)
                .bind(line.quantity)
                .execute(&mut *self.tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        Ok(order_id)
    }

    async fn insert_notification(
        &mut self,
        user_id: UserId,
        message: &str,
        created_at: Millis,
    ) -> Result<RowId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO notifications (user_id, message, is_new, created_at)
            VALUES (?, ?, 1, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(message)
        .bind(created_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(id)
    }
}
