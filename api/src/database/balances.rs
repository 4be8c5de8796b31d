use super::types::Database;
use crate::error::Result;
use ethapi_common::block_number_to_storage_key;

/// `currency_type` of the chain's native currency
pub const NATIVE_CURRENCY_TYPE: i64 = 1;

/// Stored amounts are in units ten times coarser than the external ones.
// TODO: confirm the unit conversion with the ledger writer; it reads as a placeholder
pub const BALANCE_UNIT_MULTIPLIER: i64 = 10;

const SELECT_NATIVE_BALANCE: &str = r#"SELECT SUM(amount * ?)
FROM account_balances
WHERE account = ?
    AND block_id <= ?
    AND currency_type = ?"#;

impl Database {
    /// Native currency balance of `account` as of external block `block_number`.
    ///
    /// Returns `None` when the account has no movements up to that block.
    pub async fn native_balance_at(&self, account: &str, block_number: u64) -> Result<Option<i64>> {
        let max_block_id = block_number_to_storage_key(block_number).unwrap_or(i64::MAX);
        self.timed(
            "native balance",
            sqlx::query_scalar::<_, Option<i64>>(SELECT_NATIVE_BALANCE)
                .bind(BALANCE_UNIT_MULTIPLIER)
                .bind(account)
                .bind(max_block_id)
                .bind(NATIVE_CURRENCY_TYPE)
                .fetch_one(&self.pool),
        )
        .await
    }
}
