//! Staking pool summary tool.
//!
//! This binary derives the view of a staking pool from its record, the
//! current block and USD prices, and prints the pool card. With `--watch`
//! it follows the chain and reprints on every new block until rewards end.

mod card;
mod clock;
mod config;
mod error;

use std::process::exit;

use clap::Parser;
use pool_view::{
    Network,
    pool::{ChainState, StakingViewModel},
    price::PriceQuotes,
};
use tracing::{debug, error, info, warn};

use card::CardOptions;
use clock::RpcClock;
use config::{CliConfig, ConfigError, EnvConfig, PoolInputs};
use error::Result;

#[tokio::main]
async fn main() {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Failed to load .env file: {}", e);
    }

    // Parse environment configuration
    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse environment configuration: {}", e);
            exit(1);
        }
    };

    // Parse CLI arguments
    let cli_config = CliConfig::parse();

    // Set up logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(env_config, cli_config).await {
        error!(%e, "Pool card failed");
        exit(1);
    }
}

async fn run(env_config: EnvConfig, cli_config: CliConfig) -> Result<()> {
    let network = env_config.network()?;
    let inputs = cli_config.to_inputs(&network)?;
    let options = CardOptions {
        significant_digits: cli_config.significant_digits,
        is_archived: cli_config.archived,
    };
    let clock = env_config
        .node_rpc_url()?
        .map(|url| RpcClock::new(url, network.clone()));

    info!(
        blockchain = ?network.blockchain(),
        chain_id = network.chain_id(),
        blocks_per_year = network.blocks_per_year(),
        start_block = inputs.snapshot.start_block(),
        end_block = inputs.snapshot.end_block(),
        "Deriving pool view"
    );

    if cli_config.watch {
        let clock = clock.ok_or(ConfigError::WatchWithoutNode)?;
        return watch(&network, &inputs, &clock, &options).await;
    }

    let chain = match (cli_config.current_block, &clock) {
        (Some(block), _) => ChainState::at_block(&network, block),
        (None, Some(clock)) => clock.chain_state().await?,
        (None, None) => return Err(ConfigError::MissingBlockSource.into()),
    };
    show(&network, &inputs, &chain, &options);
    Ok(())
}

/// Reprints the card on every new block until the pool ends.
async fn watch(
    network: &Network,
    inputs: &PoolInputs,
    clock: &RpcClock,
    options: &CardOptions,
) -> Result<()> {
    let mut interval = tokio::time::interval(network.polling_interval());
    let mut last_block = None;
    loop {
        interval.tick().await;

        let chain = match clock.chain_state().await {
            Ok(chain) => chain,
            Err(e) => {
                warn!(%e, "Failed to fetch current block, retrying");
                continue;
            }
        };

        let block = chain.current_block();
        match last_block {
            Some(last) if block < last => {
                warn!(last, block, "Block height went backwards, skipping");
                continue;
            }
            Some(last) if block == last => continue,
            _ => last_block = Some(block),
        }

        let view = show(network, inputs, &chain, options);
        if view.phase().is_ended() {
            info!(block, "Rewards have ended, stopping");
            return Ok(());
        }
    }
}

fn show(
    network: &Network,
    inputs: &PoolInputs,
    chain: &ChainState,
    options: &CardOptions,
) -> StakingViewModel {
    let prices = PriceQuotes::lookup(&inputs.prices, &inputs.snapshot);
    let view = StakingViewModel::derive(network, &inputs.snapshot, chain, &prices);

    if let Some(gap) = view.apr_unavailable() {
        debug!(%gap, "APR unavailable");
    }
    if let Some(gap) = view.total_staked_value_unavailable() {
        debug!(%gap, "Total deposited value unavailable");
    }

    println!("Block {}", chain.current_block());
    for line in card::render(&view, &inputs.snapshot, options) {
        println!("  {line}");
    }
    view
}
