// Expense Domain Model

use super::error::Result;
use super::user::UserId;
use super::validate::{self, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use super::{Millis, RowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: RowId,
    pub user_id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RowId,
    pub user_id: UserId,
    pub category_id: Option<RowId>,
    pub amount: f64,
    pub description: String,
    pub occurred_at: Millis,
}

pub fn validate_expense_category_name(value: &str) -> Result<String> {
    validate::required_text("expense category name", value, MAX_NAME_LEN)
}

/// Validated expense ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category_id: Option<RowId>,
    pub amount: f64,
    pub description: String,
    pub occurred_at: Millis,
}

impl NewExpense {
    pub fn new(
        amount: f64,
        description: &str,
        category_id: Option<RowId>,
        occurred_at: Millis,
    ) -> Result<Self> {
        Ok(Self {
            category_id,
            amount: validate::positive_amount("expense amount", amount)?,
            description: validate::required_text(
                "expense description",
                description,
                MAX_DESCRIPTION_LEN,
            )?,
            occurred_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_new_expense_rejects_non_positive_amount() {
        let err = NewExpense::new(0.0, "Rent", None, 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount { .. }));
    }

    #[test]
    fn test_new_expense_rejects_blank_description() {
        let err = NewExpense::new(10.0, "  ", None, 0).unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyField {
                field: "expense description"
            }
        );
    }
}
