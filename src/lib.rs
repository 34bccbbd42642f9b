//! Staking pool view model for a DEX front end.
//!
//! # Overview
//!
//! Derives a presentation-ready view of a staking pool from three inputs: a
//! [`pool::PoolSnapshot`] of the on-chain pool record, a [`pool::ChainState`]
//! with the current block height, and a [`price::PriceQuotes`] snapshot of USD
//! prices. The derivation is pure, see [`pool::StakingViewModel::derive`].
//!
//! [`logo::resolve`] turns a [`types::Currency`] into an ordered list of
//! candidate logo sources, [`logo::resolve_token`] classifies a token list
//! entry first.
//!
//! The selected [`Network`] is passed explicitly to the derivation and to
//! currency classification, there is no global network state.
//!
//! # Limitations/follow-ups
//!
//! * Which pools are flagged invisible is decided by the pool data source,
//!   the view model only honours the flag.
//!
//! * Block regressions (reorgs, lagging RPC nodes) are not handled by the
//!   derivation, callers are expected to feed monotonic block heights.
//!
//! # Testing
//!
//! [`testing`] module provides builders for snapshots with controlled values.

pub mod display;
pub mod error;
pub mod logo;
pub mod num;
pub mod pool;
pub mod price;
pub mod testing;
pub mod types;

use std::time::Duration;

use alloy::primitives::{Address, address};
use fastnum::UD64;

/// Average seconds per year used to derive blocks-per-year presets.
const SECONDS_PER_YEAR: u64 = 31_536_000;

const WFRA_FINDORA: Address = address!("0x0000000000000000000000000000000000001000");
const WFRA_ANVIL: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_secs(15);
const FAST_POLLING_INTERVAL: Duration = Duration::from_millis(500);

/// Blockchain family the front end can be connected to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Blockchain {
    Ethereum,
    Goerli,
    Findora,
    AnvilTestnet,
    Harmony,
}

impl Blockchain {
    /// Maps EIP-155 chain ID to the known blockchain.
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::Ethereum),
            5 => Some(Self::Goerli),
            2152 => Some(Self::Findora),
            31337 => Some(Self::AnvilTestnet),
            1666600000 => Some(Self::Harmony),
            _ => None,
        }
    }

    /// Symbol of the native asset.
    pub fn native_symbol(&self) -> &'static str {
        match self {
            Self::Ethereum | Self::Goerli => "ETH",
            Self::Findora | Self::AnvilTestnet => "FRA",
            Self::Harmony => "ONE",
        }
    }
}

#[derive(Clone, Debug)]
/// Network the front end is connected to.
pub struct Network {
    blockchain: Blockchain,
    chain_id: u64,
    wrapped_native: Option<Address>,
    blocks_per_year: u64,
    avg_block_time: UD64,
    polling_interval: Duration,
}

impl Network {
    pub fn ethereum() -> Self {
        Self::preset(Blockchain::Ethereum, 1, 12)
    }

    pub fn goerli() -> Self {
        Self::preset(Blockchain::Goerli, 5, 12)
    }

    /// Findora mainnet, WFRA is the wrapped native token.
    pub fn findora() -> Self {
        Self::preset(Blockchain::Findora, 2152, 16).with_wrapped_native(WFRA_FINDORA)
    }

    /// Local Anvil node with WFRA deployed first by the default account.
    pub fn anvil_testnet() -> Self {
        Self::preset(Blockchain::AnvilTestnet, 31337, 1).with_wrapped_native(WFRA_ANVIL)
    }

    pub fn harmony() -> Self {
        Self::preset(Blockchain::Harmony, 1666600000, 2)
    }

    /// Preset network for the given blockchain.
    pub fn for_blockchain(blockchain: Blockchain) -> Self {
        match blockchain {
            Blockchain::Ethereum => Self::ethereum(),
            Blockchain::Goerli => Self::goerli(),
            Blockchain::Findora => Self::findora(),
            Blockchain::AnvilTestnet => Self::anvil_testnet(),
            Blockchain::Harmony => Self::harmony(),
        }
    }

    pub fn custom(
        blockchain: Blockchain,
        chain_id: u64,
        wrapped_native: Option<Address>,
        blocks_per_year: u64,
        avg_block_time: UD64,
    ) -> Self {
        Self {
            blockchain,
            chain_id,
            wrapped_native,
            blocks_per_year,
            avg_block_time,
            polling_interval: polling_interval(blockchain),
        }
    }

    fn preset(blockchain: Blockchain, chain_id: u64, block_time_sec: u64) -> Self {
        Self::custom(
            blockchain,
            chain_id,
            None,
            SECONDS_PER_YEAR / block_time_sec,
            UD64::from(block_time_sec),
        )
    }

    /// Sets the address of the wrapped native token.
    pub fn with_wrapped_native(mut self, address: Address) -> Self {
        self.wrapped_native = Some(address);
        self
    }

    /// Overrides the number of blocks per year used for APR annualization.
    pub fn with_blocks_per_year(mut self, blocks_per_year: u64) -> Self {
        self.blocks_per_year = blocks_per_year;
        self
    }

    /// Overrides the average block time, in seconds. Must be positive.
    pub fn with_avg_block_time(mut self, avg_block_time: UD64) -> Self {
        self.avg_block_time = avg_block_time;
        self
    }

    pub fn blockchain(&self) -> Blockchain {
        self.blockchain
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn wrapped_native(&self) -> Option<Address> {
        self.wrapped_native
    }

    /// Estimated number of blocks produced per year.
    /// Varies by chain because block time varies.
    pub fn blocks_per_year(&self) -> u64 {
        self.blocks_per_year
    }

    /// Average block time in seconds, used only for countdown estimates.
    pub fn avg_block_time(&self) -> UD64 {
        self.avg_block_time
    }

    /// Interval to poll the node for new blocks at.
    pub fn polling_interval(&self) -> Duration {
        self.polling_interval
    }
}

fn polling_interval(blockchain: Blockchain) -> Duration {
    match blockchain {
        Blockchain::Harmony => FAST_POLLING_INTERVAL,
        _ => DEFAULT_POLLING_INTERVAL,
    }
}
