use alloy::primitives::U256;
use fastnum::UD64;

use super::*;

/// Single consistent read of a staking pool record.
#[derive(Clone, derive_more::Debug)]
pub struct PoolSnapshot {
    start_block: u64,
    end_block: u64,
    #[debug("{reward_per_block}")]
    reward_per_block: Amount,
    staked_tokens: Option<TokenPair>,
    reward_token: Token,
    #[debug("{total_staked}")]
    total_staked: Amount,
    user_staked: Option<Amount>,
    user_earned: Option<Amount>,
    visible: bool,
}

/// Pool record as read from the staking contract, amounts in base units.
#[derive(Clone, Debug, Default)]
pub struct RawPool {
    pub start_block: u64,
    pub end_block: u64,
    pub reward_per_block: U256,
    pub total_staked: U256,
    pub user_staked: Option<U256>,
    pub user_earned: Option<U256>,
    /// Decimals of the staked (liquidity) token.
    pub staked_decimals: u8,
}

impl PoolSnapshot {
    /// Creates a snapshot of a pool without a connected account.
    ///
    /// Fails if the pool starts after it ends.
    pub fn new(
        start_block: u64,
        end_block: u64,
        reward_token: Token,
        reward_per_block: Amount,
        total_staked: Amount,
    ) -> Result<Self, SnapshotError> {
        if start_block > end_block {
            return Err(SnapshotError::InvalidBlockRange {
                start: start_block,
                end: end_block,
            });
        }
        Ok(Self {
            start_block,
            end_block,
            reward_per_block,
            staked_tokens: None,
            reward_token,
            total_staked,
            user_staked: None,
            user_earned: None,
            visible: true,
        })
    }

    /// Creates a snapshot from the raw contract record, scaling amounts by
    /// token decimals.
    pub fn from_raw(
        raw: &RawPool,
        reward_token: Token,
        staked_tokens: Option<TokenPair>,
    ) -> Result<Self, SnapshotError> {
        let reward_converter = num::Converter::new(reward_token.decimals());
        let staked_converter = num::Converter::new(raw.staked_decimals);
        let mut snapshot = Self::new(
            raw.start_block,
            raw.end_block,
            reward_token,
            reward_converter.from_unsigned(raw.reward_per_block),
            staked_converter.from_unsigned(raw.total_staked),
        )?;
        snapshot.staked_tokens = staked_tokens;
        snapshot.user_staked = raw.user_staked.map(|v| staked_converter.from_unsigned(v));
        snapshot.user_earned = raw.user_earned.map(|v| reward_converter.from_unsigned(v));
        Ok(snapshot)
    }

    /// Sets the staked token pair.
    pub fn with_staked_tokens(mut self, staked_tokens: TokenPair) -> Self {
        self.staked_tokens = Some(staked_tokens);
        self
    }

    /// Sets amounts of the connected account.
    pub fn with_user(mut self, staked: Amount, earned: Amount) -> Self {
        self.user_staked = Some(staked);
        self.user_earned = Some(earned);
        self
    }

    /// Sets the visibility flag provided by the pool data source.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn start_block(&self) -> u64 {
        self.start_block
    }

    pub fn end_block(&self) -> u64 {
        self.end_block
    }

    /// Reward paid per block, in reward token units.
    pub fn reward_per_block(&self) -> Amount {
        self.reward_per_block
    }

    /// Staked token pair, absent when pool metadata is incomplete.
    pub fn staked_tokens(&self) -> Option<&TokenPair> {
        self.staked_tokens.as_ref()
    }

    pub fn reward_token(&self) -> &Token {
        &self.reward_token
    }

    /// Total amount staked by all accounts.
    pub fn total_staked(&self) -> Amount {
        self.total_staked
    }

    /// Amount staked by the connected account, absent without one.
    pub fn user_staked(&self) -> Option<Amount> {
        self.user_staked
    }

    /// Reward earned by the connected account, absent without one.
    pub fn user_earned(&self) -> Option<Amount> {
        self.user_earned
    }

    /// Whether the pool is valid for showing earned rewards.
    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Chain state at the moment of derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainState {
    current_block: u64,
    avg_block_time: UD64,
}

impl ChainState {
    /// `avg_block_time` is in seconds and must be positive.
    pub fn new(current_block: u64, avg_block_time: UD64) -> Self {
        Self {
            current_block,
            avg_block_time,
        }
    }

    /// Chain state at the given block with the block time of the network.
    pub fn at_block(network: &Network, current_block: u64) -> Self {
        Self::new(current_block, network.avg_block_time())
    }

    pub fn current_block(&self) -> u64 {
        self.current_block
    }

    pub fn avg_block_time(&self) -> UD64 {
        self.avg_block_time
    }
}
