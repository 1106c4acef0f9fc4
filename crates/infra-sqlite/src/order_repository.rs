// SQLite OrderRepository Implementation

use crate::error::map_sqlx_error;
use crate::store::SqliteStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tally_core::domain::{Order, OrderItem, Product, RowId, UserId};
use tally_core::error::Result;
use tally_core::port::OrderRepository;

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    description: String,
    order_date: NaiveDate,
    order_time: String,
    created_at: i64,
}

/// Order item joined with its product
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i64,
    product_user_id: i64,
    product_category_id: i64,
    product_name: String,
    product_price: f64,
}

impl OrderItemRow {
    fn into_item(self) -> OrderItem {
        OrderItem {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            product: Product {
                id: self.product_id,
                user_id: self.product_user_id,
                category_id: self.product_category_id,
                name: self.product_name,
                price: self.product_price,
            },
        }
    }
}

const ORDER_FILTER: &str = "o.user_id = ? AND (? IS NULL OR o.order_date = ?)";

impl SqliteStore {
    /// Orders matching `filter` (bound with user id and an optional date),
    /// with their items attached
    async fn load_orders(
        &self,
        filter: &str,
        user_id: UserId,
        key: OrderKey,
    ) -> Result<Vec<Order>> {
        let order_sql = format!(
            "SELECT o.* FROM orders o WHERE {} ORDER BY o.order_date, o.order_time, o.id",
            filter
        );
        let item_sql = format!(
            r#"
            SELECT oi.id, oi.order_id, oi.product_id, oi.quantity,
                   p.user_id AS product_user_id,
                   p.category_id AS product_category_id,
                   p.name AS product_name,
                   p.price AS product_price
            FROM order_items oi
            JOIN orders o ON o.id = oi.order_id
            JOIN products p ON p.id = oi.product_id
            WHERE {}
            ORDER BY oi.id
            "#,
            filter
        );

        let orders: Vec<OrderRow> = key
            .bind_to(sqlx::query_as(&order_sql), user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let items: Vec<OrderItemRow> = key
            .bind_to(sqlx::query_as(&item_sql), user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut items_by_order: HashMap<RowId, Vec<OrderItem>> = HashMap::new();
        for item in items {
            items_by_order
                .entry(item.order_id)
                .or_default()
                .push(item.into_item());
        }

        Ok(orders
            .into_iter()
            .map(|row| Order {
                items: items_by_order.remove(&row.id).unwrap_or_default(),
                id: row.id,
                user_id: row.user_id,
                description: row.description,
                order_date: row.order_date,
                order_time: row.order_time,
                created_at: row.created_at,
            })
            .collect())
    }
}

/// Second half of an order filter: by id or by optional date
#[derive(Clone, Copy)]
enum OrderKey {
    Id(RowId),
    Date(Option<NaiveDate>),
}

impl OrderKey {
    fn bind_to<'q, O>(
        self,
        query: sqlx::query::QueryAs<'q, sqlx::Sqlite, O, sqlx::sqlite::SqliteArguments<'q>>,
        user_id: UserId,
    ) -> sqlx::query::QueryAs<'q, sqlx::Sqlite, O, sqlx::sqlite::SqliteArguments<'q>> {
        let query = query.bind(user_id);
        match self {
            OrderKey::Id(id) => query.bind(id),
            OrderKey::Date(date) => query.bind(date).bind(date),
        }
    }
}

#[async_trait]
impl OrderRepository for SqliteStore {
    async fn find_order(&self, user_id: UserId, id: RowId) -> Result<Option<Order>> {
        let orders = self
            .load_orders("o.user_id = ? AND o.id = ?", user_id, OrderKey::Id(id))
            .await?;
        Ok(orders.into_iter().next())
    }

    async fn list_orders(&self, user_id: UserId, date: Option<NaiveDate>) -> Result<Vec<Order>> {
        self.load_orders(ORDER_FILTER, user_id, OrderKey::Date(date))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_user, setup_store};
    use tally_core::domain::{NewOrder, NewOrderLine, NewProduct};
    use tally_core::port::{CatalogRepository, LedgerTransaction, Transaction, TransactionalLedger};

    #[tokio::test]
    async fn test_orders_filtered_by_date_and_owner() {
        let store = setup_store().await;
        let owner = seed_user(&store, "owner").await;
        let other = seed_user(&store, "other").await;

        let cakes = store.insert_category(owner.id, "Cakes").await.unwrap();
        let cake = store
            .insert_product(owner.id, &NewProduct::new(cakes.id, "Cake", 20.0).unwrap())
            .await
            .unwrap();

        let mut tx = store.begin_transaction().await.unwrap();
        let slots = [
            ("2025-01-12", "15:00"),
            ("2025-01-12", "09:30"),
            ("2025-01-13", "10:00"),
        ];
        for (date, time) in slots {
            let order = NewOrder::new(
                "",
                date,
                time,
                vec![NewOrderLine {
                    product_id: cake.id,
                    quantity: 2,
                }],
                0,
            )
            .unwrap();
            tx.insert_order(owner.id, &order).await.unwrap();
        }
        tx.commit().await.unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        let orders = store.list_orders(owner.id, Some(day)).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_time, "09:30");
        assert_eq!(orders[0].items.len(), 1);
        assert_eq!(orders[0].items[0].product.name, "Cake");
        assert_eq!(orders[0].items[0].quantity, 2);
        assert_eq!(orders[0].items[0].product.price, 20.0);

        assert_eq!(store.list_orders(owner.id, None).await.unwrap().len(), 3);
        assert!(store.list_orders(other.id, None).await.unwrap().is_empty());

        let first = store.find_order(owner.id, orders[0].id).await.unwrap();
        assert!(first.is_some());
        assert!(store.find_order(other.id, orders[0].id).await.unwrap().is_none());
    }
}
