//! Test utilities.
//!
//! [`PoolBuilder`] provides a convenient way to create [`PoolSnapshot`] instances
//! with controlled values for unit testing the view model derivation.
//!
//! [`test_reward_token`] and [`test_pair`] are fixed tokens on the Findora chain
//! with valid checksummed addresses.

use fastnum::udec256;

use crate::{
    num::Amount,
    pool::PoolSnapshot,
    types::{Token, TokenId, TokenPair},
};

const CHAIN_ID: u64 = 2152;

/// Reward token used by [`PoolBuilder`] by default.
pub fn test_reward_token() -> Token {
    Token::new(
        TokenId::new(CHAIN_ID, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
        "OVR",
        18,
    )
}

/// Staked token pair used by [`PoolBuilder`] by default.
pub fn test_pair() -> TokenPair {
    TokenPair::new(
        Token::new(
            TokenId::new(CHAIN_ID, "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
            "WFRA",
            18,
        ),
        Token::new(
            TokenId::new(CHAIN_ID, "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"),
            "USDC",
            6,
        ),
    )
}

/// Builder for creating test pool snapshots with controlled values.
///
/// Defaults to a pool active in blocks `[100, 200)` paying 2 reward tokens
/// per block, with 1000 staked and no connected account.
///
/// # Example
///
/// ```
/// use pool_view::testing::PoolBuilder;
/// use fastnum::udec256;
///
/// let snapshot = PoolBuilder::new()
///     .blocks(1_000, 2_000)
///     .reward_per_block(udec256!(0.5))
///     .user(udec256!(10), udec256!(1.25))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct PoolBuilder {
    start_block: u64,
    end_block: u64,
    reward_per_block: Amount,
    total_staked: Amount,
    reward_token: Token,
    staked_tokens: Option<TokenPair>,
    user: Option<(Amount, Amount)>,
    visible: bool,
}

impl Default for PoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolBuilder {
    /// Create a new pool builder with default values.
    pub fn new() -> Self {
        Self {
            start_block: 100,
            end_block: 200,
            reward_per_block: udec256!(2),
            total_staked: udec256!(1000),
            reward_token: test_reward_token(),
            staked_tokens: Some(test_pair()),
            user: None,
            visible: true,
        }
    }

    pub fn blocks(mut self, start_block: u64, end_block: u64) -> Self {
        self.start_block = start_block;
        self.end_block = end_block;
        self
    }

    pub fn reward_per_block(mut self, reward_per_block: Amount) -> Self {
        self.reward_per_block = reward_per_block;
        self
    }

    pub fn total_staked(mut self, total_staked: Amount) -> Self {
        self.total_staked = total_staked;
        self
    }

    pub fn reward_token(mut self, reward_token: Token) -> Self {
        self.reward_token = reward_token;
        self
    }

    pub fn without_staked_tokens(mut self) -> Self {
        self.staked_tokens = None;
        self
    }

    /// Connected account with the given staked and earned amounts.
    pub fn user(mut self, staked: Amount, earned: Amount) -> Self {
        self.user = Some((staked, earned));
        self
    }

    /// Flags the pool as not visible.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Build the snapshot.
    ///
    /// # Panics
    ///
    /// If the start block is after the end block.
    pub fn build(self) -> PoolSnapshot {
        let mut snapshot = PoolSnapshot::new(
            self.start_block,
            self.end_block,
            self.reward_token,
            self.reward_per_block,
            self.total_staked,
        )
        .expect("PoolBuilder: valid block range")
        .with_visible(self.visible);
        if let Some(pair) = self.staked_tokens {
            snapshot = snapshot.with_staked_tokens(pair);
        }
        if let Some((staked, earned)) = self.user {
            snapshot = snapshot.with_user(staked, earned);
        }
        snapshot
    }
}
