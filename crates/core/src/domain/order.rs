// Order Domain Model

use super::catalog::Product;
use super::error::{DomainError, Result};
use super::user::UserId;
use super::validate::{self, MAX_DESCRIPTION_LEN};
use super::{Millis, RowId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RowId,
    pub user_id: UserId,
    pub description: String,
    pub order_date: NaiveDate,
    /// Normalized `HH:MM`
    pub order_time: String,
    pub created_at: Millis,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: RowId,
    pub order_id: RowId,
    pub product_id: RowId,
    pub quantity: i64,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub product_id: RowId,
    pub quantity: i64,
}

/// Validated order ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub description: String,
    pub order_date: NaiveDate,
    pub order_time: String,
    pub created_at: Millis,
    pub lines: Vec<NewOrderLine>,
}

impl NewOrder {
    pub fn new(
        description: &str,
        order_date: &str,
        order_time: &str,
        lines: Vec<NewOrderLine>,
        created_at: Millis,
    ) -> Result<Self> {
        if lines.is_empty() {
            return Err(DomainError::EmptyField { field: "products" });
        }
        for line in &lines {
            validate::positive_quantity(line.quantity)?;
        }

        let description = description.trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DomainError::FieldTooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }

        Ok(Self {
            description: description.to_string(),
            order_date: parse_date(order_date)?,
            order_time: parse_time(order_time)?.format(TIME_FORMAT).to_string(),
            created_at,
            lines,
        })
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| DomainError::InvalidTime(value.to_string()))
}
