//! Configuration for the pool card tool.
//!
//! Configuration comes from two sources:
//! - Environment variables (via .env file or shell): network and node connection
//! - CLI arguments: pool record, account amounts and prices

use std::collections::HashMap;

use clap::Parser;
use fastnum::{UD64, decimal::Context};
use pool_view::{
    Blockchain, Network,
    error::SnapshotError,
    num::Amount,
    pool::PoolSnapshot,
    price::PricedAsset,
    types::{Token, TokenId, TokenPair},
};
use url::Url;

/// Environment configuration (network selection and overrides).
#[derive(Debug, serde::Deserialize)]
pub struct EnvConfig {
    /// Network to use (e.g., "findora", "anvil-testnet", "harmony")
    pub network: Blockchain,

    /// Optional RPC URL of the node to read the current block from
    pub node_rpc_url: Option<String>,

    /// Optional override of the yearly block count used for APR
    pub blocks_per_year: Option<u64>,

    /// Optional override of the average block time, in seconds
    pub avg_block_time: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Network preset with the configured overrides applied.
    pub fn network(&self) -> Result<Network, ConfigError> {
        let mut network = Network::for_blockchain(self.network);
        if let Some(blocks_per_year) = self.blocks_per_year {
            if blocks_per_year == 0 {
                return Err(ConfigError::ZeroBlocksPerYear);
            }
            network = network.with_blocks_per_year(blocks_per_year);
        }
        if let Some(avg_block_time) = &self.avg_block_time {
            let avg_block_time = UD64::from_str(avg_block_time, Context::default())
                .map_err(|_| ConfigError::InvalidBlockTime)?;
            if avg_block_time == UD64::ZERO {
                return Err(ConfigError::InvalidBlockTime);
            }
            network = network.with_avg_block_time(avg_block_time);
        }
        Ok(network)
    }

    /// Parse the node RPC URL, if configured.
    pub fn node_rpc_url(&self) -> Result<Option<Url>, url::ParseError> {
        self.node_rpc_url.as_deref().map(Url::parse).transpose()
    }
}

/// CLI arguments describing the pool to show.
#[derive(Debug, Parser)]
#[command(name = "pool-card")]
#[command(about = "Staking pool summary: countdown, APR, deposits and rewards")]
pub struct CliConfig {
    /// Block the rewards start at
    #[arg(long)]
    pub start_block: u64,

    /// Block the rewards end at
    #[arg(long)]
    pub end_block: u64,

    /// Reward paid per block, in reward tokens (e.g., 0.5)
    #[arg(long)]
    pub reward_per_block: String,

    /// Reward token address
    #[arg(long)]
    pub reward_token: String,

    /// Reward token symbol
    #[arg(long, default_value = "REWARD")]
    pub reward_symbol: String,

    /// Staked token pair addresses (comma-separated, e.g., "0xA..,0xB..")
    /// If not specified, the pool has no known pair and is not valued
    #[arg(long, value_delimiter = ',')]
    pub staked_tokens: Vec<String>,

    /// Staked token pair symbols, in the order of addresses
    #[arg(long, value_delimiter = ',')]
    pub staked_symbols: Vec<String>,

    /// Total amount staked in the pool
    #[arg(long, default_value = "0")]
    pub total_staked: String,

    /// Amount staked by the account
    #[arg(long)]
    pub user_staked: Option<String>,

    /// Reward earned by the account
    #[arg(long)]
    pub user_earned: Option<String>,

    /// USD price of the reward token
    #[arg(long)]
    pub reward_price: Option<String>,

    /// USD price of a unit of the staked pair
    #[arg(long)]
    pub staked_price: Option<String>,

    /// Current block; read from the node when not specified
    #[arg(long)]
    pub current_block: Option<u64>,

    /// Significant digits of reward amounts
    #[arg(long, default_value = "4")]
    pub significant_digits: usize,

    /// Pool is flagged as not visible by its data source
    #[arg(long)]
    pub hidden: bool,

    /// Pool is archived
    #[arg(long)]
    pub archived: bool,

    /// Keep following new blocks until the pool ends
    #[arg(long)]
    pub watch: bool,
}

/// Pool inputs assembled from the CLI.
#[derive(Debug)]
pub struct PoolInputs {
    pub snapshot: PoolSnapshot,
    pub prices: HashMap<PricedAsset, Amount>,
}

impl CliConfig {
    /// Convert CLI arguments to the snapshot and prices of the pool.
    pub fn to_inputs(&self, network: &Network) -> Result<PoolInputs, ConfigError> {
        let reward_token = Token::new(
            TokenId::new(network.chain_id(), self.reward_token.clone()),
            self.reward_symbol.clone(),
            18,
        );

        let staked_tokens = match self.staked_tokens.as_slice() {
            [] => None,
            [token0, token1] => {
                let symbol = |idx: usize| {
                    self.staked_symbols
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| format!("TOKEN{idx}"))
                };
                Some(TokenPair::new(
                    Token::new(TokenId::new(network.chain_id(), token0.clone()), symbol(0), 18),
                    Token::new(TokenId::new(network.chain_id(), token1.clone()), symbol(1), 18),
                ))
            }
            other => return Err(ConfigError::InvalidTokenPair(other.len())),
        };

        let mut snapshot = PoolSnapshot::new(
            self.start_block,
            self.end_block,
            reward_token.clone(),
            parse_amount("reward_per_block", &self.reward_per_block)?,
            parse_amount("total_staked", &self.total_staked)?,
        )?
        .with_visible(!self.hidden);

        if self.user_staked.is_some() || self.user_earned.is_some() {
            let staked = parse_optional_amount("user_staked", self.user_staked.as_deref())?;
            let earned = parse_optional_amount("user_earned", self.user_earned.as_deref())?;
            snapshot = snapshot.with_user(staked, earned);
        }

        let mut prices = HashMap::new();
        if let Some(price) = &self.reward_price {
            prices.insert(
                PricedAsset::Token(reward_token.id().clone()),
                parse_amount("reward_price", price)?,
            );
        }
        if let Some(pair) = &staked_tokens {
            if let Some(price) = &self.staked_price {
                prices.insert(PricedAsset::from(pair), parse_amount("staked_price", price)?);
            }
            snapshot = snapshot.with_staked_tokens(pair.clone());
        }

        Ok(PoolInputs { snapshot, prices })
    }
}

fn parse_amount(name: &str, value: &str) -> Result<Amount, ConfigError> {
    Amount::from_str(value, Context::default())
        .map_err(|_| ConfigError::InvalidAmount(name.to_string()))
}

fn parse_optional_amount(name: &str, value: Option<&str>) -> Result<Amount, ConfigError> {
    value.map_or(Ok(Amount::ZERO), |value| parse_amount(name, value))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid amount value for {0}")]
    InvalidAmount(String),

    #[error("Staked token pair needs exactly 2 addresses, got {0}")]
    InvalidTokenPair(usize),

    #[error("Average block time must be a positive number of seconds")]
    InvalidBlockTime,

    #[error("blocks_per_year cannot be zero")]
    ZeroBlocksPerYear,

    #[error("Either --current-block or NODE_RPC_URL is required")]
    MissingBlockSource,

    #[error("--watch requires NODE_RPC_URL")]
    WatchWithoutNode,

    #[error("Invalid pool: {0}")]
    Snapshot(#[from] SnapshotError),
}

#[cfg(test)]
mod tests {
    use fastnum::udec256;

    use super::*;

    fn cli() -> CliConfig {
        CliConfig {
            start_block: 100,
            end_block: 200,
            reward_per_block: "2".to_string(),
            reward_token: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
            reward_symbol: "OVR".to_string(),
            staked_tokens: vec![
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".to_string(),
                "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".to_string(),
            ],
            staked_symbols: vec!["WFRA".to_string(), "USDC".to_string()],
            total_staked: "1000".to_string(),
            user_staked: None,
            user_earned: Some("1.5".to_string()),
            reward_price: Some("1.5".to_string()),
            staked_price: Some("1.5".to_string()),
            current_block: Some(150),
            significant_digits: 4,
            hidden: false,
            archived: false,
            watch: false,
        }
    }

    #[test]
    fn test_cli_config_to_inputs() {
        let inputs = cli().to_inputs(&Network::findora()).unwrap();

        assert_eq!(inputs.snapshot.reward_per_block(), udec256!(2));
        assert_eq!(inputs.snapshot.total_staked(), udec256!(1000));
        assert_eq!(inputs.snapshot.user_staked(), Some(Amount::ZERO));
        assert_eq!(inputs.snapshot.user_earned(), Some(udec256!(1.5)));
        assert_eq!(
            inputs.snapshot.staked_tokens().map(|pair| pair.symbol()),
            Some("WFRA-USDC".to_string())
        );
        assert_eq!(inputs.prices.len(), 2);
    }

    #[test]
    fn test_cli_config_without_pair_drops_pair_price() {
        let mut cli = cli();
        cli.staked_tokens = vec![];
        let inputs = cli.to_inputs(&Network::findora()).unwrap();

        assert!(inputs.snapshot.staked_tokens().is_none());
        assert_eq!(inputs.prices.len(), 1);
    }

    #[test]
    fn test_invalid_token_pair() {
        let mut cli = cli();
        cli.staked_tokens.pop();

        assert!(matches!(
            cli.to_inputs(&Network::findora()),
            Err(ConfigError::InvalidTokenPair(1))
        ));
    }

    #[test]
    fn test_invalid_amount() {
        let mut cli = cli();
        cli.total_staked = "lots".to_string();

        assert!(matches!(
            cli.to_inputs(&Network::findora()),
            Err(ConfigError::InvalidAmount(name)) if name == "total_staked"
        ));
    }

    #[test]
    fn test_invalid_block_range() {
        let mut cli = cli();
        cli.start_block = 300;

        assert!(matches!(
            cli.to_inputs(&Network::findora()),
            Err(ConfigError::Snapshot(SnapshotError::InvalidBlockRange {
                start: 300,
                end: 200
            }))
        ));
    }

    #[test]
    fn test_env_config_overrides() {
        let env = EnvConfig {
            network: Blockchain::Harmony,
            node_rpc_url: None,
            blocks_per_year: Some(10_512_000),
            avg_block_time: Some("3".to_string()),
        };

        let network = env.network().unwrap();
        assert_eq!(network.blocks_per_year(), 10_512_000);
        assert_eq!(network.avg_block_time(), UD64::from(3u64));
        assert!(env.node_rpc_url().unwrap().is_none());
    }

    #[test]
    fn test_env_config_zero_block_time() {
        let env = EnvConfig {
            network: Blockchain::Findora,
            node_rpc_url: Some("http://localhost:8545".to_string()),
            blocks_per_year: None,
            avg_block_time: Some("0".to_string()),
        };

        assert!(matches!(env.network(), Err(ConfigError::InvalidBlockTime)));
        assert!(env.node_rpc_url().unwrap().is_some());
    }
}
