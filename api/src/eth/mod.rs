//! Ethereum JSON-RPC method surface over the ledger store.
//!
//! Every operation is stateless given the store contents; the facade only
//! holds the store handle and the chain id it was built with.

mod balances;
mod blocks;
mod transactions;


use crate::database::Database;
use crate::error::Result;
use ethapi_common::{BlockParam, Quantity};

#[derive(Clone)]
pub struct EthApi {
    database: Database,
    chain_id: u64,
}

impl EthApi {
    pub fn new(database: Database, chain_id: u64) -> Self {
        Self { database, chain_id }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// `eth_blockNumber`: external number of the latest block, 0 on an empty ledger
    pub async fn block_number(&self) -> Result<u64> {
        tracing::debug!("eth_blockNumber()");
        self.database.current_block_number().await
    }

    /// Resolves a block identifier (tag, hex or decimal) to an external block number
    pub async fn resolve_block_number(&self, block: &BlockParam) -> Result<u64> {
        tracing::debug!("resolve_block_number({})", block);
        self.database.resolve_block_number(block).await
    }

    /// `eth_syncing`: the ledger is read as-is, there is no sync state to report
    pub fn syncing(&self) -> bool {
        tracing::debug!("eth_syncing()");
        false
    }

    /// `eth_chainId`
    pub fn chain_id(&self) -> Quantity {
        tracing::debug!("eth_chainId()");
        Quantity(self.chain_id)
    }

    /// `eth_gasPrice`: transactions are not priced by this ledger
    pub fn gas_price(&self) -> Quantity {
        tracing::debug!("eth_gasPrice()");
        Quantity::ZERO
    }
}
