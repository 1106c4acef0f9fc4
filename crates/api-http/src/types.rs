//! API Request/Response Types
//!
//! Bodies not listed here are domain types serialized as-is.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use tally_core::domain::{MonthPeriod, RowId, UserProfile};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Same value as the session cookie, for non-browser clients
    pub token: String,
    pub user: UserProfile,
    pub expires_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UserNameRequest {
    pub user_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub category_id: RowId,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    pub amount: f64,
    pub description: String,
    #[serde(default)]
    pub category_id: Option<RowId>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerRequest {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub date: Option<String>,
}

/// `?month=&year=`; kept as strings so a missing or malformed value gets
/// the API's own message
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

impl MonthQuery {
    /// Missing, malformed and out-of-range values all get the same message
    pub fn period(&self) -> Result<MonthPeriod, ApiError> {
        let month = self.month.as_deref().and_then(|m| m.trim().parse::<u32>().ok());
        let year = self.year.as_deref().and_then(|y| y.trim().parse::<i32>().ok());
        month
            .zip(year)
            .and_then(|(month, year)| MonthPeriod::new(year, month).ok())
            .ok_or_else(|| ApiError::validation("missing month or year"))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(month: Option<&str>, year: Option<&str>) -> MonthQuery {
        MonthQuery {
            month: month.map(String::from),
            year: year.map(String::from),
        }
    }

    #[test]
    fn test_month_query() {
        let period = query(Some("3"), Some("2025")).period().unwrap();
        assert_eq!((period.year, period.month), (2025, 3));

        let err = query(None, Some("2025")).period().unwrap_err();
        assert_eq!(err.message, "missing month or year");
        for (month, year) in [("march", "2025"), ("0", "2025"), ("13", "2025"), ("3", "1800")] {
            let err = query(Some(month), Some(year)).period().unwrap_err();
            assert_eq!(err.message, "missing month or year", "{}/{}", month, year);
        }
    }
}
