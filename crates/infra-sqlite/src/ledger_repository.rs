// SQLite ExpenseRepository & SaleRepository Implementation

use crate::error::map_sqlx_error;
use crate::store::SqliteStore;
use async_trait::async_trait;
use tally_core::domain::{
    Expense, ExpenseCategory, Millis, NewExpense, Product, RowId, Sale, SaleWithProduct, UserId,
};
use tally_core::error::Result;
use tally_core::port::{ExpenseRepository, SaleRepository};

#[derive(Debug, sqlx::FromRow)]
struct ExpenseCategoryRow {
    id: i64,
    user_id: i64,
    name: String,
}

impl From<ExpenseCategoryRow> for ExpenseCategory {
    fn from(row: ExpenseCategoryRow) -> Self {
        ExpenseCategory {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ExpenseRow {
    id: i64,
    user_id: i64,
    category_id: Option<i64>,
    amount: f64,
    description: String,
    occurred_at: i64,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id,
            user_id: row.user_id,
            category_id: row.category_id,
            amount: row.amount,
            description: row.description,
            occurred_at: row.occurred_at,
        }
    }
}

/// Sale joined with its product
#[derive(Debug, sqlx::FromRow)]
struct SaleProductRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    quantity: i64,
    description: String,
    occurred_at: i64,
    product_user_id: i64,
    product_category_id: i64,
    product_name: String,
    product_price: f64,
}

impl SaleProductRow {
    fn into_sale(self) -> SaleWithProduct {
        SaleWithProduct {
            sale: Sale {
                id: self.id,
                user_id: self.user_id,
                product_id: self.product_id,
                quantity: self.quantity,
                description: self.description,
                occurred_at: self.occurred_at,
            },
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

#[async_trait]
impl ExpenseRepository for SqliteStore {
    async fn insert_expense_category(
        &self,
        user_id: UserId,
        name: &str,
    ) -> Result<ExpenseCategory> {
        let row = sqlx::query_as::<_, ExpenseCategoryRow>(
            "INSERT INTO expense_categories (user_id, name) VALUES (?, ?) RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn list_expense_categories(&self, user_id: UserId) -> Result<Vec<ExpenseCategory>> {
        let rows: Vec<ExpenseCategoryRow> = sqlx::query_as(
            "SELECT * FROM expense_categories WHERE user_id = ? ORDER BY name, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ExpenseCategory::from).collect())
    }

    async fn find_expense_category(
        &self,
        user_id: UserId,
        id: RowId,
    ) -> Result<Option<ExpenseCategory>> {
        let row: Option<ExpenseCategoryRow> =
            sqlx::query_as("SELECT * FROM expense_categories WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(ExpenseCategory::from))
    }

    async fn insert_expense(&self, user_id: UserId, expense: &NewExpense) -> Result<Expense> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            INSERT INTO expenses (user_id, category_id, amount, description, occurred_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(expense.category_id)
        .bind(expense.amount)
        .bind(&expense.description)
        .bind(expense.occurred_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn list_expenses(
        &self,
        user_id: UserId,
        start: Millis,
        end: Millis,
    ) -> Result<Vec<Expense>> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(
            r#"
            SELECT * FROM expenses
            WHERE user_id = ? AND occurred_at >= ? AND occurred_at < ?
            ORDER BY occurred_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }
}

#[async_trait]
impl SaleRepository for SqliteStore {
    async fn list_sales(
        &self,
        user_id: UserId,
        start: Millis,
        end: Millis,
    ) -> Result<Vec<SaleWithProduct>> {
        let rows: Vec<SaleProductRow> = sqlx::query_as(
            r#"
            SELECT s.id, s.user_id, s.product_id, s.quantity, s.description, s.occurred_at,
                   p.user_id AS product_user_id,
                   p.category_id AS product_category_id,
                   p.name AS product_name,
                   p.price AS product_price
            FROM sales s
            JOIN products p ON p.id = s.product_id
            WHERE s.user_id = ? AND s.occurred_at >= ? AND s.occurred_at < ?
            ORDER BY s.occurred_at ASC, s.id ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(SaleProductRow::into_sale).collect())
    }
}
