// Transaction port for atomic operations

use crate::domain::{Millis, NewOrder, NewSale, RowId, Sale, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Ledger writes that must land together
#[async_trait]
pub trait TransactionalLedger: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn LedgerTransaction>>;
}

/// Ledger operations within a transaction
#[async_trait]
pub trait LedgerTransaction: Transaction {
    /// Whether the product exists and belongs to the user (within transaction)
    async fn owns_product(&mut self, user_id: UserId, product_id: RowId) -> Result<bool>;

    /// Insert sale (within transaction)
    async fn insert_sale(&mut self, user_id: UserId, sale: &NewSale) -> Result<Sale>;

    /// Insert order and its items (within transaction), returns the order id
    async fn insert_order(&mut self, user_id: UserId, order: &NewOrder) -> Result<RowId>;

    /// Insert notification (within transaction)
    async fn insert_notification(
        &mut self,
        user_id: UserId,
        message: &str,
        created_at: Millis,
    ) -> Result<RowId>;
}
