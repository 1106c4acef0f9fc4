// Order Use Cases

use crate::domain::order::parse_date;
use crate::domain::{NewOrder, NewOrderLine, Order, RowId, UserId};
use crate::error::{AppError, Result};
use crate::port::{OrderRepository, TimeProvider, TransactionalLedger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Order creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub products: Vec<OrderProductLine>,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`
    pub order_date: String,
    /// `HH:MM`
    pub order_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProductLine {
    pub id: RowId,
    pub quantity: i64,
}

pub struct OrderService {
    ledger: Arc<dyn TransactionalLedger>,
    orders: Arc<dyn OrderRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl OrderService {
    pub fn new(
        ledger: Arc<dyn TransactionalLedger>,
        orders: Arc<dyn OrderRepository>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            ledger,
            orders,
            time_provider,
        }
    }

    /// Create the order, its items and a "new order" notification in one transaction
    pub async fn create_order(&self, user_id: UserId, req: CreateOrderRequest) -> Result<Order> {
        let lines = req
            .products
            .iter()
            .map(|p| NewOrderLine {
                product_id: p.id,
                quantity: p.quantity,
            })
            .collect();
        let order = NewOrder::new(
            &req.description,
            &req.order_date,
            &req.order_time,
            lines,
            self.time_provider.now_millis(),
        )?;

        let mut tx = self.ledger.begin_transaction().await?;

        for line in &order.lines {
            if !tx.owns_product(user_id, line.product_id).await? {
                return Err(AppError::not_found("Product", line.product_id));
            }
        }

        let order_id = tx.insert_order(user_id, &order).await?;
        let message = format!(
            "New order #{} for {} at {}",
            order_id, order.order_date, order.order_time
        );
        tx.insert_notification(user_id, &message, order.created_at)
            .await?;

        tx.commit().await?;

        info!(user_id, order_id, "Order created");

        self.orders
            .find_order(user_id, order_id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Order {} vanished after commit", order_id)))
    }

    /// All orders, or the orders of one calendar day (`YYYY-MM-DD`)
    pub async fn list_orders(&self, user_id: UserId, date: Option<&str>) -> Result<Vec<Order>> {
        let date = date.map(parse_date).transpose()?;
        self.orders.list_orders(user_id, date).await
    }
}
