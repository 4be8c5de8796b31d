use super::types::{BlockRow, Database};
use crate::error::{EthApiError, Result};
use ethapi_common::{
    block_number_to_storage_key, sanitize_block_hash, storage_key_to_block_number,
    BlockNumberOrTag, BlockParam,
};

const SELECT_HEAD_ID: &str = "SELECT id FROM blockchain ORDER BY id DESC LIMIT 1";
const SELECT_HEAD_HASH: &str = "SELECT block_hash FROM blockchain ORDER BY id DESC LIMIT 1";
const SELECT_HASH_BY_ID: &str = "SELECT block_hash FROM blockchain WHERE id = ?";
const SELECT_BLOCK_BY_HASH: &str = r#"SELECT id,
       CAST(timestamp AS TEXT) AS timestamp,
       CAST(strftime('%s', timestamp) AS INTEGER) AS epoch_seconds,
       block_hash,
       prev_hash,
       CAST(records_json AS TEXT) AS records_json
FROM blockchain
WHERE block_hash = ?"#;

impl Database {
    /// External number of the most recent block; 0 when the ledger is empty.
    pub async fn current_block_number(&self) -> Result<u64> {
        let head = self
            .timed(
                "latest block id",
                sqlx::query_scalar::<_, i64>(SELECT_HEAD_ID).fetch_optional(&self.pool),
            )
            .await?;

        let Some(storage_key) = head else {
            return Ok(0);
        };
        storage_key_to_block_number(storage_key).ok_or_else(|| {
            tracing::error!("blockchain head has invalid id {}", storage_key);
            EthApiError::malformed_row("blockchain", Some(storage_key), "id must be at least 1")
        })
    }

    /// Resolves any accepted block identifier to an external block number.
    ///
    /// `latest` (and its aliases) resolve to the current head, which is 0 on
    /// an empty ledger.
    pub async fn resolve_block_number(&self, block: &BlockParam) -> Result<u64> {
        let selector = block
            .to_number_or_tag()
            .map_err(EthApiError::MalformedInput)?;
        match selector.as_number() {
            Some(number) => Ok(number),
            None => self.current_block_number().await,
        }
    }

    /// Hash of the block at `block`, or `None` when the ledger has no such block.
    pub async fn block_hash_for_number(&self, block: BlockNumberOrTag) -> Result<Option<String>> {
        tracing::debug!("block_hash_for_number({:?})", block);

        let Some(number) = block.as_number() else {
            return self
                .timed(
                    "latest block hash",
                    sqlx::query_scalar::<_, String>(SELECT_HEAD_HASH).fetch_optional(&self.pool),
                )
                .await;
        };

        let Some(storage_key) = block_number_to_storage_key(number) else {
            return Ok(None);
        };
        self.timed(
            "block hash by id",
            sqlx::query_scalar::<_, String>(SELECT_HASH_BY_ID)
                .bind(storage_key)
                .fetch_optional(&self.pool),
        )
        .await
    }

    /// Ledger row whose hash matches `block_hash`, with or without `0x`.
    ///
    /// Empty input returns `None` without touching the store.
    pub async fn block_record_for_hash(&self, block_hash: Option<&str>) -> Result<Option<BlockRow>> {
        let Some(block_hash) = sanitize_block_hash(block_hash) else {
            return Ok(None);
        };
        self.timed(
            "block by hash",
            sqlx::query_as::<_, BlockRow>(SELECT_BLOCK_BY_HASH)
                .bind(block_hash)
                .fetch_optional(&self.pool),
        )
        .await
    }
}
