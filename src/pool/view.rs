use std::time::Duration;

use super::*;

/// Call to action offered for a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolAction {
    Deposit,
    Manage,
}

/// Presentation-ready view of a staking pool.
///
/// Holds no state of its own: it is recomputed from scratch whenever the
/// snapshot, the chain state or the prices change.
#[derive(Clone, derive_more::Debug, PartialEq)]
pub struct StakingViewModel {
    phase: Phase,
    blocks_until_start: Option<u64>,
    blocks_until_end: Option<u64>,
    time_until_start: Option<Duration>,
    time_until_end: Option<Duration>,
    #[debug("{reward_per_block}")]
    reward_per_block: Amount,
    reward_symbol: String,
    apr: Result<Amount, ValuationGap>,
    total_staked_value_usd: Result<Amount, ValuationGap>,
    is_user_staking: bool,
    #[debug("{earned_display}")]
    earned_display: Amount,
    earned_value_usd: Option<Amount>,
    has_staked_tokens: bool,
}

impl StakingViewModel {
    /// Derives the view of the pool.
    ///
    /// Pure function of its inputs, which are expected to be captured
    /// together. Valuation fields degrade to undefined instead of failing.
    pub fn derive(
        network: &Network,
        snapshot: &PoolSnapshot,
        chain: &ChainState,
        prices: &PriceQuotes,
    ) -> Self {
        let current_block = chain.current_block();
        let phase = Phase::at(current_block, snapshot.start_block(), snapshot.end_block());

        let blocks_until_start = match phase {
            Phase::NotStarted => Some(snapshot.start_block().saturating_sub(current_block)),
            _ => None,
        };
        let blocks_until_end = match phase {
            Phase::Active => Some(snapshot.end_block().saturating_sub(current_block)),
            _ => None,
        };

        let earned_display = match snapshot.user_earned() {
            Some(earned) if snapshot.visible() && earned > Amount::ZERO => earned,
            _ => Amount::ZERO,
        };

        Self {
            phase,
            blocks_until_start,
            blocks_until_end,
            time_until_start: blocks_until_start
                .map(|blocks| estimate_duration(blocks, chain.avg_block_time())),
            time_until_end: blocks_until_end
                .map(|blocks| estimate_duration(blocks, chain.avg_block_time())),
            reward_per_block: snapshot.reward_per_block(),
            reward_symbol: snapshot.reward_token().symbol().to_string(),
            apr: apr(network.blocks_per_year(), snapshot, prices),
            total_staked_value_usd: total_staked_value(snapshot, prices),
            is_user_staking: snapshot
                .user_staked()
                .is_some_and(|staked| staked > Amount::ZERO),
            earned_display,
            earned_value_usd: prices.reward_token.map(|price| earned_display * price),
            has_staked_tokens: snapshot.staked_tokens().is_some(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Blocks left until rewards start, only before the pool has started.
    pub fn blocks_until_start(&self) -> Option<u64> {
        self.blocks_until_start
    }

    /// Blocks left until rewards end, only while the pool is active.
    pub fn blocks_until_end(&self) -> Option<u64> {
        self.blocks_until_end
    }

    /// Best-effort estimate of [`Self::blocks_until_start`] in wall-clock time.
    pub fn time_until_start(&self) -> Option<Duration> {
        self.time_until_start
    }

    /// Best-effort estimate of [`Self::blocks_until_end`] in wall-clock time.
    pub fn time_until_end(&self) -> Option<Duration> {
        self.time_until_end
    }

    /// Reward per block worth showing, absent once the pool has ended.
    pub fn reward_rate_display(&self) -> Option<Amount> {
        (!self.phase.is_ended()).then_some(self.reward_per_block)
    }

    pub fn reward_symbol(&self) -> &str {
        &self.reward_symbol
    }

    /// Annual percentage rate as a ratio, multiply by 100 for percents.
    pub fn apr(&self) -> Option<Amount> {
        self.apr.ok()
    }

    /// Why [`Self::apr`] is undefined.
    pub fn apr_unavailable(&self) -> Option<ValuationGap> {
        self.apr.err()
    }

    /// USD value of everything staked in the pool.
    pub fn total_staked_value_usd(&self) -> Option<Amount> {
        self.total_staked_value_usd.ok()
    }

    /// Why [`Self::total_staked_value_usd`] is undefined.
    pub fn total_staked_value_unavailable(&self) -> Option<ValuationGap> {
        self.total_staked_value_usd.err()
    }

    pub fn is_user_staking(&self) -> bool {
        self.is_user_staking
    }

    /// Earned reward to show: the earned amount for a visible pool, zero otherwise.
    pub fn earned_display(&self) -> Amount {
        self.earned_display
    }

    /// USD value of [`Self::earned_display`].
    pub fn earned_value_usd(&self) -> Option<Amount> {
        self.earned_value_usd
    }

    /// Earned reward formatted with the reward symbol, e.g. `12.35 OVR`.
    pub fn earned_text(&self, significant_digits: usize) -> String {
        format!(
            "{} {}",
            display::to_significant(
                self.earned_display,
                significant_digits,
                display::GROUP_SEPARATOR
            ),
            self.reward_symbol
        )
    }

    /// Action offered for the pool, none when the staked pair is unknown.
    pub fn action(&self, is_archived: bool) -> Option<PoolAction> {
        if !self.has_staked_tokens {
            None
        } else if self.is_user_staking || is_archived {
            Some(PoolAction::Manage)
        } else {
            Some(PoolAction::Deposit)
        }
    }
}

/// USD value of the staked amount.
fn total_staked_value(
    snapshot: &PoolSnapshot,
    prices: &PriceQuotes,
) -> Result<Amount, ValuationGap> {
    if snapshot.staked_tokens().is_none() {
        return Err(ValuationGap::IncompletePoolMetadata);
    }
    let price = prices.staked_token.ok_or(ValuationGap::MissingPriceData)?;
    Ok(snapshot.total_staked() * price)
}

/// Yearly reward value over staked value.
fn apr(
    blocks_per_year: u64,
    snapshot: &PoolSnapshot,
    prices: &PriceQuotes,
) -> Result<Amount, ValuationGap> {
    if snapshot.staked_tokens().is_none() {
        return Err(ValuationGap::IncompletePoolMetadata);
    }
    if snapshot.total_staked() == Amount::ZERO {
        return Err(ValuationGap::ZeroStake);
    }
    let (Some(reward_price), Some(staked_price)) = (prices.reward_token, prices.staked_token)
    else {
        return Err(ValuationGap::MissingPriceData);
    };

    // Zero quote can not value the stake
    let staked_value = snapshot.total_staked() * staked_price;
    if staked_value == Amount::ZERO {
        return Err(ValuationGap::MissingPriceData);
    }

    let yearly_reward_value =
        snapshot.reward_per_block() * Amount::from(blocks_per_year) * reward_price;
    Ok(yearly_reward_value / staked_value)
}
