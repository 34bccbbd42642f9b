use std::time::Duration;

use fastnum::UD64;

use super::*;

/// Reward phase of a pool.
///
/// Moves strictly forward `NotStarted -> Active -> Ended` as the chain
/// advances, the active window being `[start_block, end_block)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    NotStarted,
    Active,
    Ended,
}

impl Phase {
    /// Phase of the pool at the given block.
    /// A pool with `start_block == end_block` goes straight to `Ended`.
    pub fn at(current_block: u64, start_block: u64, end_block: u64) -> Self {
        if current_block >= end_block {
            Phase::Ended
        } else if current_block < start_block {
            Phase::NotStarted
        } else {
            Phase::Active
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self, Phase::NotStarted)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended)
    }
}

/// Best-effort wall-clock estimate of the given number of blocks.
///
/// Block times drift, the result is an approximation only.
pub fn estimate_duration(blocks: u64, avg_block_time: UD64) -> Duration {
    let block_time: Amount = avg_block_time.resize();
    let secs = Amount::from(blocks) * block_time;
    let millis = num::Converter::new(3).to_unsigned(secs);
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}
