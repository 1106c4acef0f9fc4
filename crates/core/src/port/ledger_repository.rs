// Expense & Sale Repository Ports

use crate::domain::{Expense, ExpenseCategory, Millis, NewExpense, RowId, SaleWithProduct, UserId};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn insert_expense_category(&self, user_id: UserId, name: &str)
        -> Result<ExpenseCategory>;

    /// Ordered by name
    async fn list_expense_categories(&self, user_id: UserId) -> Result<Vec<ExpenseCategory>>;

    async fn find_expense_category(
        &self,
        user_id: UserId,
        id: RowId,
    ) -> Result<Option<ExpenseCategory>>;

    async fn insert_expense(&self, user_id: UserId, expense: &NewExpense) -> Result<Expense>;

    /// Expenses with `start <= occurred_at < end`, newest first
    async fn list_expenses(&self, user_id: UserId, start: Millis, end: Millis)
        -> Result<Vec<Expense>>;
}

#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Sales with `start <= occurred_at < end` joined with their product, oldest first
    async fn list_sales(
        &self,
        user_id: UserId,
        start: Millis,
        end: Millis,
    ) -> Result<Vec<SaleWithProduct>>;
}
