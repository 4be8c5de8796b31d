use serde::{Serialize, Serializer};

/// Stored `prev_hash` value of the first block in the ledger.
pub const GENESIS_SENTINEL: &str = "genesis";

/// Unsigned integer encoded as an Ethereum quantity (`0x`-prefixed, no leading zeros).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(pub u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity(value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raw bytes rendered as `0x`-prefixed lowercase hex.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    /// Decodes an unprefixed hex digest as stored in the ledger.
    pub fn from_hex(digest: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(digest).map(HexBytes)
    }
}

impl std::fmt::Display for HexBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Serialize for HexBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parent linkage of a ledger block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParentLink {
    Genesis,
    Parent(String),
}

impl ParentLink {
    pub fn from_stored(prev_hash: &str) -> Self {
        if prev_hash == GENESIS_SENTINEL {
            ParentLink::Genesis
        } else {
            ParentLink::Parent(prev_hash.to_string())
        }
    }

    /// Decoded parent hash, `None` for the genesis block.
    pub fn parent_hash(&self) -> Result<Option<HexBytes>, hex::FromHexError> {
        match self {
            ParentLink::Genesis => Ok(None),
            ParentLink::Parent(digest) => HexBytes::from_hex(digest).map(Some),
        }
    }
}

/// Block as returned by `eth_getBlockByHash` / `eth_getBlockByNumber`.
///
/// `parent_hash` is left out of the JSON entirely for the genesis block, so
/// "no parent" stays distinguishable from an all-zero parent hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    pub number: Quantity,
    pub hash: HexBytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<HexBytes>,
    pub timestamp: Quantity,
}

/// Transaction as returned by the `eth_getTransactionBy*` family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    pub hash: HexBytes,
    pub block_hash: HexBytes,
    pub block_number: Quantity,
    pub transaction_index: Quantity,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: HexBytes,
    pub block_hash: HexBytes,
    pub block_number: Quantity,
    pub transaction_index: Quantity,
    pub status: Quantity,
}
