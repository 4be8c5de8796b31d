use super::EthApi;
use crate::database::BlockRow;
use crate::error::{EthApiError, Result};
use ethapi_common::{storage_key_to_block_number, BlockData, BlockParam, HexBytes, ParentLink, Quantity};

impl EthApi {
    /// `eth_getBlockByHash`
    ///
    /// The hash may carry a `0x` prefix. Empty or unknown hashes yield `None`.
    /// `full_tx` is accepted for compatibility; blocks never expand transactions.
    pub async fn get_block_by_hash(
        &self,
        block_hash: Option<&str>,
        full_tx: bool,
    ) -> Result<Option<BlockData>> {
        tracing::debug!("eth_getBlockByHash({:?}, {})", block_hash, full_tx);

        let Some(row) = self.database.block_record_for_hash(block_hash).await? else {
            return Ok(None);
        };
        tracing::debug!(
            "found blockchain record {} ({} bytes of records)",
            row.id,
            row.records_json.as_ref().map_or(0, String::len)
        );
        block_from_row(&row).map(Some)
    }

    /// `eth_getBlockByNumber`
    ///
    /// Accepts `earliest`, `latest`, hex and decimal numbers. A block that does
    /// not exist yields `None`; a malformed identifier is an error.
    pub async fn get_block_by_number(
        &self,
        block: &BlockParam,
        full_tx: bool,
    ) -> Result<Option<BlockData>> {
        tracing::debug!("eth_getBlockByNumber({}, {})", block, full_tx);

        let selector = block
            .to_number_or_tag()
            .map_err(EthApiError::MalformedInput)?;
        let block_hash = self.database.block_hash_for_number(selector).await?;
        self.get_block_by_hash(block_hash.as_deref(), full_tx).await
    }
}

/// Maps a ledger row to its protocol shape.
fn block_from_row(row: &BlockRow) -> Result<BlockData> {
    let malformed = |reason: String| {
        tracing::error!("failed to read block data: {} (row: {:?})", reason, row);
        EthApiError::malformed_row("blockchain", Some(row.id), reason)
    };

    let number = storage_key_to_block_number(row.id)
        .ok_or_else(|| malformed("id must be at least 1".to_string()))?;
    let timestamp = row
        .epoch_seconds
        .and_then(|secs| u64::try_from(secs).ok())
        .ok_or_else(|| malformed(format!("unusable timestamp {:?}", row.timestamp)))?;
    let hash = HexBytes::from_hex(&row.block_hash)
        .map_err(|e| malformed(format!("block_hash is not hex: {}", e)))?;
    let parent_hash = ParentLink::from_stored(&row.prev_hash)
        .parent_hash()
        .map_err(|e| malformed(format!("prev_hash is not hex: {}", e)))?;

    Ok(BlockData {
        number: Quantity(number),
        hash,
        parent_hash,
        timestamp: Quantity(timestamp),
    })
}
