use std::time::Duration;

/// Failures surfaced by the query facade.
///
/// A missing block, hash or account is never an error; those are `None` or
/// `Lookup::Absent`.
#[derive(Debug)]
pub enum EthApiError {
    /// Caller supplied an identifier that is neither a tag nor a number.
    MalformedInput(String),
    /// A stored row could not be mapped to its protocol shape.
    MalformedRow {
        table: &'static str,
        id: Option<i64>,
        reason: String,
    },
    Store(sqlx::Error),
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, EthApiError>;

impl EthApiError {
    pub fn malformed_row(table: &'static str, id: Option<i64>, reason: impl Into<String>) -> Self {
        EthApiError::MalformedRow {
            table,
            id,
            reason: reason.into(),
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, EthApiError::MalformedInput(_))
    }
}

impl From<sqlx::Error> for EthApiError {
    fn from(error: sqlx::Error) -> Self {
        EthApiError::Store(error)
    }
}

impl std::fmt::Display for EthApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EthApiError::MalformedInput(err) => write!(f, "Malformed input: {}", err),
            EthApiError::MalformedRow { table, id, reason } => match id {
                Some(id) => write!(f, "Malformed {} row {}: {}", table, id, reason),
                None => write!(f, "Malformed {} row: {}", table, reason),
            },
            EthApiError::Store(err) => write!(f, "Store error: {}", err),
            EthApiError::Timeout(limit) => write!(f, "Query timed out after {:?}", limit),
        }
    }
}

impl std::error::Error for EthApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EthApiError::Store(err) => Some(err),
            _ => None,
        }
    }
}
