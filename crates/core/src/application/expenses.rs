// Expense Use Cases

use crate::domain::expense::validate_expense_category_name;
use crate::domain::{Expense, ExpenseCategory, MonthPeriod, NewExpense, RowId, UserId};
use crate::error::{AppError, Result};
use crate::port::{ExpenseRepository, TimeProvider};
use std::sync::Arc;

pub struct ExpenseService {
    repo: Arc<dyn ExpenseRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ExpenseService {
    pub fn new(repo: Arc<dyn ExpenseRepository>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            repo,
            time_provider,
        }
    }

    pub async fn add_category(&self, user_id: UserId, name: &str) -> Result<ExpenseCategory> {
        let name = validate_expense_category_name(name)?;
        self.repo.insert_expense_category(user_id, &name).await
    }

    pub async fn list_categories(&self, user_id: UserId) -> Result<Vec<ExpenseCategory>> {
        self.repo.list_expense_categories(user_id).await
    }

    /// Record an expense dated now
    pub async fn add_expense(
        &self,
        user_id: UserId,
        amount: f64,
        description: &str,
        category_id: Option<RowId>,
    ) -> Result<Expense> {
        let expense = NewExpense::new(
            amount,
            description,
            category_id,
            self.time_provider.now_millis(),
        )?;

        if let Some(category_id) = category_id {
            self.repo
                .find_expense_category(user_id, category_id)
                .await?
                .ok_or_else(|| AppError::not_found("Expense category", category_id))?;
        }

        self.repo.insert_expense(user_id, &expense).await
    }

    pub async fn list_expenses(
        &self,
        user_id: UserId,
        period: MonthPeriod,
    ) -> Result<Vec<Expense>> {
        let (start, end) = period.bounds_millis();
        self.repo.list_expenses(user_id, start, end).await
    }
}
