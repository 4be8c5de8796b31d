use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./ledger.db";
pub const DEFAULT_CHAIN_ID: u64 = 1337;
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite URL of the ledger database, opened read-only
    pub database_url: String,
    pub chain_id: u64,
    /// Upper bound for any single store query
    pub query_timeout: Duration,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL`, `CHAIN_ID`, `QUERY_TIMEOUT_SECS` and `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        let chain_id = parse_var(&lookup, "CHAIN_ID")?.unwrap_or(defaults.chain_id);
        let query_timeout = parse_var::<u64>(&lookup, "QUERY_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.query_timeout);
        let max_connections =
            parse_var(&lookup, "DB_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections);

        if query_timeout.is_zero() {
            anyhow::bail!("QUERY_TIMEOUT_SECS must be greater than zero");
        }
        if max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be greater than zero");
        }

        Ok(Self {
            database_url,
            chain_id,
            query_timeout,
            max_connections,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid {} value '{}'", key, raw))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite:/var/lib/ledger/chain.db"),
            ("CHAIN_ID", "42"),
            ("QUERY_TIMEOUT_SECS", "2"),
            ("DB_MAX_CONNECTIONS", "8"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite:/var/lib/ledger/chain.db");
        assert_eq!(config.chain_id, 42);
        assert_eq!(config.query_timeout, Duration::from_secs(2));
        assert_eq!(config.max_connections, 8);
    }

    #[test]
    fn test_invalid_number_names_variable() {
        let err = config_from(&[("CHAIN_ID", "mainnet")]).unwrap_err();
        assert!(err.to_string().contains("CHAIN_ID"), "got: {}", err);
    }

    #[test]
    fn test_zero_limits_rejected() {
        assert!(config_from(&[("QUERY_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_from(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
    }
}
