use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ethapi::{Config, Database, EthApi};
use ethapi_common::{BlockParam, Quantity};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};


#[derive(Parser)]
#[command(name = "ethapi-cli")]
#[command(about = "Ethereum JSON-RPC queries against a ledger database")]
struct Cli {
    /// Ledger database URL
    #[arg(long, global = true, env = "DATABASE_URL")]
    database_url: Option<String>,
    /// Chain id reported by chain-id
    #[arg(long, global = true, env = "CHAIN_ID")]
    chain_id: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// eth_blockNumber
    BlockNumber,
    /// eth_getBlockByNumber
    BlockByNumber {
        /// earliest, latest, 0x-prefixed hex or decimal
        block: String,
        #[arg(long)]
        full: bool,
    },
    /// eth_getBlockByHash
    BlockByHash {
        hash: String,
        #[arg(long)]
        full: bool,
    },
    /// eth_getBalance
    Balance {
        address: String,
        #[arg(default_value = "latest")]
        block: String,
    },
    /// eth_chainId
    ChainId,
    /// eth_syncing
    Syncing,
    /// eth_gasPrice
    GasPrice,
    /// eth_getTransactionByHash
    TxByHash { hash: String },
    /// eth_getTransactionReceipt
    TxReceipt { hash: String },
    /// eth_getTransactionCount
    TxCount {
        address: String,
        #[arg(default_value = "latest")]
        block: String,
    },
    /// eth_getTransactionByBlockNumberAndIndex
    TxByBlockNumberAndIndex { block: String, index: u64 },
    /// eth_getTransactionByBlockHashAndIndex
    TxByBlockHashAndIndex { hash: String, index: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }
    if let Some(chain_id) = cli.chain_id {
        config.chain_id = chain_id;
    }

    let database = Database::new(
        &config.database_url,
        config.max_connections,
        config.query_timeout,
    )
    .await
    .with_context(|| format!("Failed to open ledger database at {}", config.database_url))?;
    tracing::debug!("Ledger database opened at {}", config.database_url);

    let api = EthApi::new(database, config.chain_id);
    let result = run_command(&api, cli.command).await;
    api.database().close().await;
    print_json(&result?)
}

async fn run_command(api: &EthApi, command: Commands) -> Result<Value> {
    let value = match command {
        Commands::BlockNumber => to_json(&Quantity(api.block_number().await?))?,
        Commands::BlockByNumber { block, full } => {
            to_json(&api.get_block_by_number(&BlockParam::from(block), full).await?)?
        }
        Commands::BlockByHash { hash, full } => {
            to_json(&api.get_block_by_hash(Some(hash.as_str()), full).await?)?
        }
        Commands::Balance { address, block } => {
            to_json(&api.get_balance(&address, &BlockParam::from(block)).await?)?
        }
        Commands::ChainId => to_json(&api.chain_id())?,
        Commands::Syncing => to_json(&api.syncing())?,
        Commands::GasPrice => to_json(&api.gas_price())?,
        Commands::TxByHash { hash } => {
            to_json(&api.get_transaction_by_hash(Some(hash.as_str())).into_option())?
        }
        Commands::TxReceipt { hash } => {
            to_json(&api.get_transaction_receipt(Some(hash.as_str())).into_option())?
        }
        Commands::TxCount { address, block } => {
            let count = api.get_transaction_count(&address, &BlockParam::from(block));
            to_json(&Quantity(count.unwrap_or(0)))?
        }
        Commands::TxByBlockNumberAndIndex { block, index } => to_json(
            &api.get_transaction_by_block_number_and_index(&BlockParam::from(block), index)
                .into_option(),
        )?,
        Commands::TxByBlockHashAndIndex { hash, index } => to_json(
            &api.get_transaction_by_block_hash_and_index(Some(hash.as_str()), index)
                .into_option(),
        )?,
    };
    Ok(value)
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("Failed to render result")
}

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render result")?;
    println!("{}", rendered);
    Ok(())
}
