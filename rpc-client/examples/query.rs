use anyhow::{Context, Result};
use clap::Parser;
use ethrpc_client::{prelude::*, ClientConfig, Filter, DEFAULT_URL};
use ethrpc_types::{parse_address, to_checksum, Checksum};
use std::time::Duration;

#[derive(Parser)]
pub struct Opts {
    /// JSON-RPC endpoint
    #[clap(long, env = "ETH_RPC_URL", default_value = DEFAULT_URL)]
    pub url: String,
    /// Request timeout in seconds, 0 disables it
    #[clap(long, default_value_t = 30)]
    pub timeout: u64,
    /// Account whose balance and nonce are printed, must be EIP-55 checksummed when mixed case
    #[clap(long)]
    pub account: Option<String>,
    /// Also print the logs emitted by this contract in the latest block
    #[clap(long)]
    pub logs_of: Option<String>,
}

/// Single case addresses carry no checksum.
fn checksum_of(address: &str) -> Checksum {
    let digits = address.trim_start_matches("0x");
    let lowercase = digits.chars().any(|c| c.is_ascii_lowercase());
    let uppercase = digits.chars().any(|c| c.is_ascii_uppercase());
    if lowercase && uppercase {
        Checksum::Validate
    } else {
        Checksum::Ignore
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let timeout = (opts.timeout > 0).then(|| Duration::from_secs(opts.timeout));
    let config = opts.url.parse::<ClientConfig>()?.with_timeout(timeout);
    let client = ethrpc_client::http(&config)?;

    println!("client: {}", client.client_version().await?);
    println!("chain id: {}", client.chain_id().await?);
    let block_number = client.block_number().await?;
    println!("block number: {block_number}");
    println!("gas price: {} wei", client.gas_price().await?);

    if let Some(account) = opts.account {
        let address = parse_address(&account, checksum_of(&account)).context("invalid account")?;
        let balance = client.get_balance(address, AtBlock::Latest).await?;
        let nonce = client.get_transaction_count(address, AtBlock::Latest).await?;
        println!("{}: balance {balance} wei, nonce {nonce}", to_checksum(&address));
    }

    if let Some(contract) = opts.logs_of {
        let address = parse_address(&contract, Checksum::Ignore).context("invalid contract")?;
        let filter = Filter::new().select(block_number, block_number).address(address);
        for log in client.get_logs(&filter).await? {
            let topic = log.topics.first().copied().unwrap_or_default();
            println!("log {:?} topic0 {topic:?} data {}", log.transaction_hash, log.data);
        }
    }
    Ok(())
}
