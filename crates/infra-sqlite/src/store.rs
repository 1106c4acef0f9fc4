// SQLite Store - one pool-backed adapter for all repository ports

use crate::error::map_sqlx_error;
use crate::transaction::SqliteLedgerTransaction;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tally_core::error::Result;
use tally_core::port::{LedgerTransaction, TransactionalLedger};

/// Repository adapter. Each port lives in its own module as an `impl` on this type.
#[derive(Clone)]
pub struct SqliteStore {
    pub(crate) pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TransactionalLedger for SqliteStore {
    async fn begin_transaction(&self) -> Result<Box<dyn LedgerTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteLedgerTransaction::new(tx)))
    }
}
