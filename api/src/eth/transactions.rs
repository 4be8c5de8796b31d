use super::EthApi;
use ethapi_common::{BlockParam, Lookup, TransactionData, TransactionReceipt};

// The ledger stores transactions as an opaque `records_json` payload per
// block. Until that payload is indexed, every transaction lookup reports
// `Lookup::Unimplemented`, which reaches RPC callers as `null` (or 0 for
// counts).

impl EthApi {
    /// `eth_getTransactionByHash`
    pub fn get_transaction_by_hash(&self, tx_hash: Option<&str>) -> Lookup<TransactionData> {
        tracing::debug!("eth_getTransactionByHash({:?})", tx_hash);
        if tx_hash.map_or(true, str::is_empty) {
            return Lookup::Absent;
        }
        Lookup::Unimplemented
    }

    /// `eth_getTransactionReceipt`
    pub fn get_transaction_receipt(&self, tx_hash: Option<&str>) -> Lookup<TransactionReceipt> {
        tracing::debug!("eth_getTransactionReceipt({:?})", tx_hash);
        if tx_hash.map_or(true, str::is_empty) {
            return Lookup::Absent;
        }
        Lookup::Unimplemented
    }

    /// `eth_getTransactionCount`; callers answer `0` via `Lookup::unwrap_or`
    pub fn get_transaction_count(&self, address: &str, block: &BlockParam) -> Lookup<u64> {
        tracing::debug!("eth_getTransactionCount({}, {})", address, block);
        Lookup::Unimplemented
    }

    /// `eth_getTransactionByBlockNumberAndIndex`
    pub fn get_transaction_by_block_number_and_index(
        &self,
        block: &BlockParam,
        index: u64,
    ) -> Lookup<TransactionData> {
        tracing::debug!("eth_getTransactionByBlockNumberAndIndex({}, {})", block, index);
        self.transaction_hash_by_block_number_and_index(block, index)
            .and_then(|tx_hash| self.get_transaction_by_hash(Some(tx_hash.as_str())))
    }

    /// `eth_getTransactionByBlockHashAndIndex`
    pub fn get_transaction_by_block_hash_and_index(
        &self,
        block_hash: Option<&str>,
        index: u64,
    ) -> Lookup<TransactionData> {
        tracing::debug!("eth_getTransactionByBlockHashAndIndex({:?}, {})", block_hash, index);
        self.transaction_hash_by_block_hash_and_index(block_hash, index)
            .and_then(|tx_hash| self.get_transaction_by_hash(Some(tx_hash.as_str())))
    }

    fn transaction_hash_by_block_number_and_index(
        &self,
        _block: &BlockParam,
        _index: u64,
    ) -> Lookup<String> {
        Lookup::Unimplemented
    }

    fn transaction_hash_by_block_hash_and_index(
        &self,
        _block_hash: Option<&str>,
        _index: u64,
    ) -> Lookup<String> {
        Lookup::Unimplemented
    }
}
