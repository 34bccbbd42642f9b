//! Staking pool state derivation.
//!
//! A [`PoolSnapshot`] read from the staking contract and a [`ChainState`]
//! from the node are combined with [`PriceQuotes`] into a
//! [`StakingViewModel`] by [`StakingViewModel::derive`].
//!
//! The block height is the pool's time axis. Wall-clock countdowns are
//! estimated from the average block time and are approximations only.
//!
//! Pools are independent of each other and can be derived in parallel.

mod phase;
mod snapshot;
mod view;

use crate::{
    Network, display,
    error::{SnapshotError, ValuationGap},
    num::{self, Amount},
    price::PriceQuotes,
    types::{Token, TokenPair},
};

// Public re-exports
pub use phase::*;
pub use snapshot::*;
pub use view::*;

#[cfg(test)]
mod tests;
