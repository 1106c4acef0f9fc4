// Order Repository Port

use crate::domain::{Order, RowId, UserId};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Order with its items and product details
    async fn find_order(&self, user_id: UserId, id: RowId) -> Result<Option<Order>>;

    /// Orders ordered by date then time; restricted to one day when `date` is set
    async fn list_orders(&self, user_id: UserId, date: Option<NaiveDate>) -> Result<Vec<Order>>;
}
