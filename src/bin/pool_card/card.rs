//! Text rendering of the pool summary.

use pool_view::{
    display::{self, GROUP_SEPARATOR},
    num::Amount,
    pool::{Phase, PoolAction, PoolSnapshot, StakingViewModel},
};

/// Rendering options.
#[derive(Clone, Copy, Debug)]
pub struct CardOptions {
    /// Significant digits of reward amounts.
    pub significant_digits: usize,
    pub is_archived: bool,
}

/// Summary lines of the pool, in display order.
pub fn render(
    view: &StakingViewModel,
    snapshot: &PoolSnapshot,
    options: &CardOptions,
) -> Vec<String> {
    let mut lines = vec![];

    let pair = snapshot
        .staked_tokens()
        .map(|pair| pair.symbol())
        .unwrap_or_else(|| "?-?".to_string());
    let header = format!("{pair} - Earn: {}", view.reward_symbol());
    lines.push(match view.action(options.is_archived) {
        Some(PoolAction::Manage) => format!("{header} [Manage]"),
        Some(PoolAction::Deposit) => format!("{header} [Deposit]"),
        None => header,
    });

    match view.phase() {
        Phase::NotStarted => {
            if let (Some(blocks), Some(time)) = (view.blocks_until_start(), view.time_until_start())
            {
                lines.push(format!(
                    "Rewards start in: ~{} ({blocks} blocks)",
                    display::duration(time)
                ));
            }
        }
        Phase::Active => {
            if let (Some(blocks), Some(time)) = (view.blocks_until_end(), view.time_until_end()) {
                lines.push(format!(
                    "Rewards end in: ~{} ({blocks} blocks)",
                    display::duration(time)
                ));
            }
        }
        Phase::Ended => lines.push("Rewards have ended".to_string()),
    }

    if let Some(rate) = view.reward_rate_display() {
        lines.push(format!(
            "Reward per block: {} {}",
            display::to_significant(rate, 4, GROUP_SEPARATOR),
            view.reward_symbol()
        ));
    }

    if let Some(apr) = view.apr().filter(|_| !view.phase().is_ended()) {
        let apr = if apr > Amount::ZERO {
            display::percent(apr)
        } else {
            "To be determined".to_string()
        };
        lines.push(format!("APR: {apr}"));
    }

    if let Some(value) = view.total_staked_value_usd() {
        lines.push(format!(
            "Total deposited: ${}",
            display::to_fixed(value, 0, GROUP_SEPARATOR)
        ));
    }

    if view.is_user_staking() {
        let earned = view.earned_text(options.significant_digits);
        let earned = if snapshot.visible() {
            let value = view
                .earned_value_usd()
                .map_or("0".to_string(), |value| {
                    display::to_significant(value, 2, GROUP_SEPARATOR)
                });
            format!("{earned} / ${value}")
        } else {
            earned
        };
        lines.push(format!("Your total rewards: {earned}"));
    }

    lines
}
