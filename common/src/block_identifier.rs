use serde::{Deserialize, Serialize};

pub const TAG_EARLIEST: &str = "earliest";
pub const TAG_LATEST: &str = "latest";

/// Tags that name the chain head. The ledger only holds confirmed blocks,
/// so "pending", "safe" and "finalized" all mean the most recent block.
const HEAD_ALIASES: [&str; 4] = [TAG_LATEST, "pending", "safe", "finalized"];

/// Block identifier exactly as a caller supplied it.
///
/// JSON-RPC clients send either a string (a tag such as `"latest"`, a
/// `0x`-prefixed hex quantity or decimal digits) or a bare JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockParam {
    Number(u64),
    Text(String),
}

impl From<u64> for BlockParam {
    fn from(number: u64) -> Self {
        BlockParam::Number(number)
    }
}

impl From<&str> for BlockParam {
    fn from(text: &str) -> Self {
        BlockParam::Text(text.to_string())
    }
}

impl From<String> for BlockParam {
    fn from(text: String) -> Self {
        BlockParam::Text(text)
    }
}

impl std::fmt::Display for BlockParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockParam::Number(number) => write!(f, "{}", number),
            BlockParam::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Normalized block identifier, expressed in external (zero-based) numbering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockNumberOrTag {
    Earliest,
    Latest,
    Number(u64),
}

impl BlockNumberOrTag {
    /// External number for the identifier, if it does not depend on the chain head.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            BlockNumberOrTag::Earliest => Some(0),
            BlockNumberOrTag::Latest => None,
            BlockNumberOrTag::Number(number) => Some(*number),
        }
    }
}

impl std::str::FromStr for BlockNumberOrTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        if lowered == TAG_EARLIEST {
            return Ok(BlockNumberOrTag::Earliest);
        }
        if HEAD_ALIASES.contains(&lowered.as_str()) {
            return Ok(BlockNumberOrTag::Latest);
        }
        if let Some(parsed) = parse_hex_quantity(s) {
            return parsed.map(BlockNumberOrTag::Number);
        }
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u64>()
                .map(BlockNumberOrTag::Number)
                .map_err(|e| format!("Invalid block number '{}': {}", s, e));
        }
        Err(format!(
            "Invalid block identifier '{}'. Expected earliest, latest, a 0x-prefixed hex number or a decimal number",
            s
        ))
    }
}

impl BlockParam {
    /// Full normalization used by block lookups: tags, hex and decimal forms.
    pub fn to_number_or_tag(&self) -> Result<BlockNumberOrTag, String> {
        match self {
            BlockParam::Number(number) => Ok(BlockNumberOrTag::Number(*number)),
            BlockParam::Text(text) => text.parse(),
        }
    }

    /// Narrow normalization used by balance queries.
    ///
    /// Only `"earliest"` and explicit hex numbers select a historical block.
    /// Everything else, decimal strings and bare numbers included, selects
    /// the chain head.
    pub fn to_balance_selector(&self) -> Result<BlockNumberOrTag, String> {
        let BlockParam::Text(text) = self else {
            return Ok(BlockNumberOrTag::Latest);
        };
        if text.eq_ignore_ascii_case(TAG_EARLIEST) {
            return Ok(BlockNumberOrTag::Earliest);
        }
        match parse_hex_quantity(text) {
            Some(parsed) => parsed.map(BlockNumberOrTag::Number),
            None => Ok(BlockNumberOrTag::Latest),
        }
    }
}

/// Parses a `0x`-prefixed hex quantity.
///
/// Returns `None` when the input carries no hex prefix, so callers can fall
/// back to other interpretations.
pub fn parse_hex_quantity(s: &str) -> Option<Result<u64, String>> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    if digits.is_empty() {
        return Some(Err(format!("Hex quantity '{}' has no digits", s)));
    }
    Some(u64::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex quantity '{}': {}", s, e)))
}

/// Strips a leading `0x` and lowercases a caller supplied block hash.
///
/// Stored hashes are lowercase hex without prefix. Empty input, including a
/// bare `0x`, yields `None` so no lookup is attempted.
pub fn sanitize_block_hash(block_hash: Option<&str>) -> Option<String> {
    let raw = block_hash?;
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    if digits.is_empty() {
        return None;
    }
    Some(digits.to_ascii_lowercase())
}

/// Converts a ledger storage key (one-based) into the external block number.
///
/// Returns `None` for keys below 1, which the ledger never assigns.
pub fn storage_key_to_block_number(storage_key: i64) -> Option<u64> {
    storage_key.checked_sub(1).and_then(|n| u64::try_from(n).ok())
}

/// Converts an external block number into the ledger storage key.
///
/// Returns `None` when the number is beyond what the store can key.
pub fn block_number_to_storage_key(block_number: u64) -> Option<i64> {
    i64::try_from(block_number).ok()?.checked_add(1)
}
