use super::types::Database;
use crate::error::{EthApiError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

impl Database {
    /// Opens the ledger database read-only with a bounded connection pool.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        query_timeout: Duration,
    ) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(query_timeout)
            .connect_with(options)
            .await?;
        Ok(Self::from_pool(pool, query_timeout))
    }

    /// Wraps an existing pool, e.g. one shared with the ledger writer.
    pub fn from_pool(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Runs one store query under the configured timeout.
    ///
    /// Failures are logged with the query context and returned unchanged.
    pub(crate) async fn timed<T, F>(&self, context: &str, query: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!("Store query failed ({}): {}", context, e);
                Err(EthApiError::Store(e))
            }
            Err(_) => {
                tracing::error!(
                    "Store query timed out after {:?} ({})",
                    self.query_timeout,
                    context
                );
                Err(EthApiError::Timeout(self.query_timeout))
            }
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Test helper method to access the underlying pool
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
