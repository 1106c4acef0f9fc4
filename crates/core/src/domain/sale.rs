// Sale Domain Model

use super::catalog::Product;
use super::error::Result;
use super::user::UserId;
use super::validate;
use super::{Millis, RowId};
use serde::{Deserialize, Serialize};

/// One sold line. `quantity` is the number of units sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: RowId,
    pub user_id: UserId,
    pub product_id: RowId,
    pub quantity: i64,
    pub description: String,
    pub occurred_at: Millis,
}

/// Sale joined with its product (for revenue computation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleWithProduct {
    #[serde(flatten)]
    pub sale: Sale,
    pub product: Product,
}

impl SaleWithProduct {
    pub fn revenue(&self) -> f64 {
        self.sale.quantity as f64 * self.product.price
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub product_id: RowId,
    pub quantity: i64,
    pub description: String,
    pub occurred_at: Millis,
}

impl NewSale {
    /// `line_id` is the client-side line reference used in the description
    pub fn new(
        line_id: i64,
        product_id: RowId,
        quantity: i64,
        occurred_at: Millis,
    ) -> Result<Self> {
        Ok(Self {
            product_id,
            quantity: validate::positive_quantity(quantity)?,
            description: format!("Sale of item {}", line_id),
            occurred_at,
        })
    }
}
