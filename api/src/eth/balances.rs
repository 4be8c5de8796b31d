use super::EthApi;
use crate::error::{EthApiError, Result};
use ethapi_common::{BlockParam, Quantity};

impl EthApi {
    /// `eth_getBalance`: native currency balance of `address` as of a block.
    ///
    /// Only `earliest` and `0x` hex numbers select a historical block; any
    /// other identifier reads the balance at the current head. Accounts
    /// without movements have a zero balance.
    pub async fn get_balance(&self, address: &str, block: &BlockParam) -> Result<Quantity> {
        tracing::debug!("eth_getBalance({}, {})", address, block);

        let selector = block
            .to_balance_selector()
            .map_err(EthApiError::MalformedInput)?;
        let block_number = match selector.as_number() {
            Some(number) => number,
            None => self.database.current_block_number().await?,
        };

        match self.database.native_balance_at(address, block_number).await? {
            None => Ok(Quantity::ZERO),
            Some(total) => u64::try_from(total).map(Quantity).map_err(|_| {
                tracing::error!(
                    "negative balance {} for {} at block {}",
                    total,
                    address,
                    block_number
                );
                EthApiError::malformed_row(
                    "account_balances",
                    None,
                    format!("negative balance {} for {}", total, address),
                )
            }),
        }
    }
}
