// Sales Use Cases

use crate::domain::{NewSale, RowId, Sale, UserId};
use crate::error::{AppError, Result};
use crate::port::{TimeProvider, TransactionalLedger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Maximum number of lines accepted in one batch
pub const MAX_SALE_LINES: usize = 500;

/// One line of a sales batch as sent by the point-of-sale page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    /// Client-side line reference, echoed in the sale description
    pub line_id: i64,
    pub product_id: RowId,
    pub quantity: i64,
}

pub struct SalesService {
    ledger: Arc<dyn TransactionalLedger>,
    time_provider: Arc<dyn TimeProvider>,
}

impl SalesService {
    pub fn new(ledger: Arc<dyn TransactionalLedger>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            ledger,
            time_provider,
        }
    }

    /// Record a batch of sales atomically: one bad line rejects the batch
    pub async fn record_sales(&self, user_id: UserId, lines: Vec<SaleLine>) -> Result<Vec<Sale>> {
        if lines.is_empty() {
            return Err(AppError::Validation("No sales to record".to_string()));
        }
        if lines.len() > MAX_SALE_LINES {
            return Err(AppError::Validation(format!(
                "Too many sale lines (max {})",
                MAX_SALE_LINES
            )));
        }

        let now = self.time_provider.now_millis();
        let new_sales = lines
            .iter()
            .map(|line| NewSale::new(line.line_id, line.product_id, line.quantity, now))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // Dropping the transaction on an early return rolls it back
        let mut tx = self.ledger.begin_transaction().await?;

        let mut sales = Vec::with_capacity(new_sales.len());
        for sale in &new_sales {
            if !tx.owns_product(user_id, sale.product_id).await? {
                return Err(AppError::not_found("Product", sale.product_id));
            }
            sales.push(tx.insert_sale(user_id, sale).await?);
        }

        tx.commit().await?;

        info!(user_id, count = sales.len(), "Sales recorded");
        Ok(sales)
    }
}
