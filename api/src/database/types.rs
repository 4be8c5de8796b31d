use sqlx::SqlitePool;
use std::time::Duration;

/// One row of the `blockchain` table.
///
/// `epoch_seconds` is the stored textual timestamp converted by the store;
/// it is `None` when the text is not a timestamp SQLite understands.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlockRow {
    pub id: i64,
    pub timestamp: Option<String>,
    pub epoch_seconds: Option<i64>,
    pub block_hash: String,
    pub prev_hash: String,
    pub records_json: Option<String>,
}

/// Read-only handle on the ledger store.
#[derive(Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
    pub(crate) query_timeout: Duration,
}
