//! USD price inputs.

use std::collections::HashMap;

use crate::{
    num::Amount,
    pool::PoolSnapshot,
    types::{TokenId, TokenPair},
};

/// Asset a USD price can be quoted for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PricedAsset {
    Token(TokenId),
    /// Liquidity token of the pair, priced per unit staked.
    Pair(TokenId, TokenId),
}

impl From<&TokenPair> for PricedAsset {
    fn from(pair: &TokenPair) -> Self {
        Self::Pair(pair.token0().id().clone(), pair.token1().id().clone())
    }
}

/// Source of USD prices.
pub trait PriceOracle {
    /// Price of one unit of the asset, or `None` if there is no quote.
    fn usd_price(&self, asset: &PricedAsset) -> Option<Amount>;
}

impl PriceOracle for HashMap<PricedAsset, Amount> {
    fn usd_price(&self, asset: &PricedAsset) -> Option<Amount> {
        self.get(asset).copied()
    }
}

/// Prices captured for a single derivation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceQuotes {
    /// Price of the reward token.
    pub reward_token: Option<Amount>,
    /// Price of a unit of the staked token pair.
    pub staked_token: Option<Amount>,
}

impl PriceQuotes {
    pub fn new(reward_token: Option<Amount>, staked_token: Option<Amount>) -> Self {
        Self {
            reward_token,
            staked_token,
        }
    }

    /// Quotes the oracle for the assets of the pool.
    pub fn lookup(oracle: &impl PriceOracle, snapshot: &PoolSnapshot) -> Self {
        Self {
            reward_token: oracle.usd_price(&PricedAsset::Token(snapshot.reward_token().id().clone())),
            staked_token: snapshot
                .staked_tokens()
                .and_then(|pair| oracle.usd_price(&PricedAsset::from(pair))),
        }
    }
}
