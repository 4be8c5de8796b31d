/// Shared test helpers for database and facade tests
use super::Database;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

pub const TEST_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Ledger schema as written by the ledger writer
pub const LEDGER_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS blockchain (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    block_hash TEXT NOT NULL UNIQUE,
    prev_hash TEXT NOT NULL,
    records_json TEXT NOT NULL DEFAULT '[]'
);
CREATE TABLE IF NOT EXISTS account_balances (
    account TEXT NOT NULL,
    amount INTEGER NOT NULL,
    block_id INTEGER NOT NULL,
    currency_type INTEGER NOT NULL
);
"#;

/// Creates the ledger schema on an existing pool
pub async fn create_schema(pool: &SqlitePool) {
    sqlx::raw_sql(LEDGER_SCHEMA)
        .execute(pool)
        .await
        .expect("Failed to create ledger schema");
}

/// Set up an in-memory test database with the ledger schema
///
/// NOTE: A single connection that never expires, because every new
/// connection to `sqlite::memory:` opens a fresh, empty database.
pub async fn setup_test_db() -> Database {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    create_schema(&pool).await;
    Database::from_pool(pool, TEST_QUERY_TIMEOUT)
}

/// Appends a block; `epoch_seconds` is stored as SQLite datetime text
pub async fn insert_block(db: &Database, epoch_seconds: i64, block_hash: &str, prev_hash: &str) -> i64 {
    sqlx::query(
        "INSERT INTO blockchain (timestamp, block_hash, prev_hash, records_json) VALUES (datetime(?, 'unixepoch'), ?, ?, '[]')",
    )
    .bind(epoch_seconds)
    .bind(block_hash)
    .bind(prev_hash)
    .execute(&db.pool)
    .await
    .expect("Failed to insert block")
    .last_insert_rowid()
}

/// Appends a block with a raw textual timestamp
pub async fn insert_block_raw_timestamp(
    db: &Database,
    timestamp: &str,
    block_hash: &str,
    prev_hash: &str,
) -> i64 {
    sqlx::query("INSERT INTO blockchain (timestamp, block_hash, prev_hash) VALUES (?, ?, ?)")
        .bind(timestamp)
        .bind(block_hash)
        .bind(prev_hash)
        .execute(&db.pool)
        .await
        .expect("Failed to insert block")
        .last_insert_rowid()
}

pub async fn insert_balance(db: &Database, account: &str, amount: i64, block_id: i64, currency_type: i64) {
    sqlx::query(
        "INSERT INTO account_balances (account, amount, block_id, currency_type) VALUES (?, ?, ?, ?)",
    )
    .bind(account)
    .bind(amount)
    .bind(block_id)
    .bind(currency_type)
    .execute(&db.pool)
    .await
    .expect("Failed to insert balance entry");
}

/// Genesis `aa` at epoch 1000 followed by `bb` at epoch 1010
pub async fn seed_two_block_chain(db: &Database) {
    insert_block(db, 1000, "aa", "genesis").await;
    insert_block(db, 1010, "bb", "aa").await;
}
