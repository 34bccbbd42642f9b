//! Tests for the staking view model derivation.

use std::time::Duration;

use fastnum::{udec64, udec256};

use super::*;
use crate::testing::PoolBuilder;

/// Network with the yearly block count of a 3 second chain.
fn network() -> Network {
    Network::findora()
        .with_blocks_per_year(10_512_000)
        .with_avg_block_time(udec64!(3))
}

fn derive_at(snapshot: &PoolSnapshot, block: u64, prices: PriceQuotes) -> StakingViewModel {
    let network = network();
    StakingViewModel::derive(
        &network,
        snapshot,
        &ChainState::at_block(&network, block),
        &prices,
    )
}

fn priced(price: Amount) -> PriceQuotes {
    PriceQuotes::new(Some(price), Some(price))
}

// ============================================================================
// PHASE AND COUNTDOWN
// ============================================================================

#[test]
fn test_not_started_counts_down_to_start() {
    let snapshot = PoolBuilder::new().blocks(100, 200).build();
    let view = derive_at(&snapshot, 50, PriceQuotes::default());

    assert_eq!(view.phase(), Phase::NotStarted);
    assert_eq!(view.blocks_until_start(), Some(50));
    assert_eq!(view.blocks_until_end(), None);
    assert_eq!(view.time_until_start(), Some(Duration::from_secs(150)));
    assert_eq!(view.time_until_end(), None);
}

#[test]
fn test_active_counts_down_to_end() {
    let snapshot = PoolBuilder::new().blocks(100, 200).build();
    for block in 100..200 {
        let view = derive_at(&snapshot, block, PriceQuotes::default());
        assert_eq!(view.phase(), Phase::Active, "block {block}");
        assert_eq!(view.blocks_until_start(), None, "block {block}");
        assert_eq!(view.blocks_until_end(), Some(200 - block), "block {block}");
    }
}

#[test]
fn test_ended_has_no_countdown() {
    let snapshot = PoolBuilder::new().blocks(100, 200).build();
    for block in [200, 201, 1_000_000] {
        let view = derive_at(&snapshot, block, PriceQuotes::default());
        assert_eq!(view.phase(), Phase::Ended);
        assert_eq!(view.blocks_until_start(), None);
        assert_eq!(view.blocks_until_end(), None);
        assert_eq!(view.time_until_start(), None);
        assert_eq!(view.time_until_end(), None);
    }
}

#[test]
fn test_zero_length_pool_ends_when_reached() {
    let snapshot = PoolBuilder::new().blocks(100, 100).build();
    assert_eq!(
        derive_at(&snapshot, 99, PriceQuotes::default()).phase(),
        Phase::NotStarted
    );
    assert_eq!(
        derive_at(&snapshot, 100, PriceQuotes::default()).phase(),
        Phase::Ended
    );
}

#[test]
fn test_reward_rate_hidden_once_ended() {
    let snapshot = PoolBuilder::new().reward_per_block(udec256!(0.75)).build();
    assert_eq!(
        derive_at(&snapshot, 150, PriceQuotes::default()).reward_rate_display(),
        Some(udec256!(0.75))
    );
    assert_eq!(
        derive_at(&snapshot, 200, PriceQuotes::default()).reward_rate_display(),
        None
    );
}

#[test]
fn test_invalid_block_range_rejected() {
    let result = PoolSnapshot::new(
        200,
        100,
        crate::testing::test_reward_token(),
        udec256!(1),
        udec256!(1),
    );
    assert_eq!(
        result.unwrap_err(),
        SnapshotError::InvalidBlockRange {
            start: 200,
            end: 100
        }
    );
}

// ============================================================================
// APR AND VALUATION
// ============================================================================

#[test]
fn test_apr_scenario() {
    let snapshot = PoolBuilder::new()
        .blocks(100, 200)
        .reward_per_block(udec256!(2))
        .total_staked(udec256!(1000))
        .build();
    let view = derive_at(&snapshot, 150, priced(udec256!(1.5)));

    assert_eq!(view.phase(), Phase::Active);
    assert_eq!(view.blocks_until_end(), Some(50));
    assert_eq!(view.apr(), Some(udec256!(21024)));
    assert_eq!(view.total_staked_value_usd(), Some(udec256!(1500)));
}

#[test]
fn test_apr_with_distinct_prices() {
    let snapshot = PoolBuilder::new()
        .reward_per_block(udec256!(0.1))
        .total_staked(udec256!(500))
        .build();
    let view = derive_at(
        &snapshot,
        150,
        PriceQuotes::new(Some(udec256!(0.02)), Some(udec256!(84.096))),
    );

    // 0.1 * 10512000 * 0.02 / (500 * 84.096)
    assert_eq!(view.apr(), Some(udec256!(0.5)));
    assert_eq!(view.total_staked_value_usd(), Some(udec256!(42048)));
}

#[test]
fn test_apr_undefined_for_zero_stake() {
    let snapshot = PoolBuilder::new().total_staked(Amount::ZERO).build();
    for prices in [
        PriceQuotes::default(),
        priced(udec256!(1)),
        PriceQuotes::new(Some(udec256!(3)), None),
    ] {
        let view = derive_at(&snapshot, 150, prices);
        assert_eq!(view.apr(), None);
        assert_eq!(view.apr_unavailable(), Some(ValuationGap::ZeroStake));
    }
}

#[test]
fn test_missing_reward_price() {
    let snapshot = PoolBuilder::new().user(udec256!(5), udec256!(7)).build();
    let view = derive_at(&snapshot, 150, PriceQuotes::new(None, Some(udec256!(2))));

    assert_eq!(view.apr(), None);
    assert_eq!(view.apr_unavailable(), Some(ValuationGap::MissingPriceData));
    assert_eq!(view.earned_value_usd(), None);
    // Unaffected by the reward price
    assert_eq!(view.total_staked_value_usd(), Some(udec256!(2000)));
    assert_eq!(view.phase(), Phase::Active);
    assert_eq!(view.earned_display(), udec256!(7));
}

#[test]
fn test_missing_staked_price() {
    let snapshot = PoolBuilder::new().build();
    let view = derive_at(&snapshot, 150, PriceQuotes::new(Some(udec256!(2)), None));

    assert_eq!(view.apr_unavailable(), Some(ValuationGap::MissingPriceData));
    assert_eq!(
        view.total_staked_value_unavailable(),
        Some(ValuationGap::MissingPriceData)
    );
}

#[test]
fn test_zero_staked_price_does_not_divide() {
    let snapshot = PoolBuilder::new().build();
    let view = derive_at(&snapshot, 150, PriceQuotes::new(Some(udec256!(2)), Some(Amount::ZERO)));

    assert_eq!(view.apr_unavailable(), Some(ValuationGap::MissingPriceData));
    assert_eq!(view.total_staked_value_usd(), Some(Amount::ZERO));
}

#[test]
fn test_missing_pair_degrades_valuation_only() {
    let snapshot = PoolBuilder::new().without_staked_tokens().build();
    let view = derive_at(&snapshot, 50, priced(udec256!(1)));

    assert_eq!(
        view.apr_unavailable(),
        Some(ValuationGap::IncompletePoolMetadata)
    );
    assert_eq!(
        view.total_staked_value_unavailable(),
        Some(ValuationGap::IncompletePoolMetadata)
    );
    assert_eq!(view.phase(), Phase::NotStarted);
    assert_eq!(view.blocks_until_start(), Some(50));
    assert_eq!(view.action(false), None);
}

// ============================================================================
// EARNED REWARDS AND ACCOUNT
// ============================================================================

#[test]
fn test_earned_shown_for_visible_pool() {
    let snapshot = PoolBuilder::new()
        .user(udec256!(10), udec256!(1234.5678))
        .build();
    let view = derive_at(&snapshot, 150, priced(udec256!(2)));

    assert!(view.is_user_staking());
    assert_eq!(view.earned_display(), udec256!(1234.5678));
    assert_eq!(view.earned_text(4), "1,235 OVR");
    assert_eq!(view.earned_value_usd(), Some(udec256!(2469.1356)));
}

#[test]
fn test_earned_zero_for_hidden_pool() {
    let snapshot = PoolBuilder::new()
        .user(udec256!(10), udec256!(99))
        .hidden()
        .build();
    let view = derive_at(&snapshot, 150, priced(udec256!(2)));

    assert_eq!(view.earned_display(), Amount::ZERO);
    assert_eq!(view.earned_text(4), "0 OVR");
    assert_eq!(view.earned_value_usd(), Some(Amount::ZERO));
}

#[test]
fn test_earned_zero_without_rewards() {
    let snapshot = PoolBuilder::new()
        .user(udec256!(10), Amount::ZERO)
        .hidden()
        .build();
    let view = derive_at(&snapshot, 150, PriceQuotes::default());

    assert_eq!(view.earned_display(), Amount::ZERO);
    assert_eq!(view.earned_text(2), "0 OVR");
}

#[test]
fn test_no_account() {
    let view = derive_at(&PoolBuilder::new().build(), 150, PriceQuotes::default());

    assert!(!view.is_user_staking());
    assert_eq!(view.earned_display(), Amount::ZERO);
    assert_eq!(view.action(false), Some(PoolAction::Deposit));
    assert_eq!(view.action(true), Some(PoolAction::Manage));
}

#[test]
fn test_user_with_zero_stake_is_not_staking() {
    let snapshot = PoolBuilder::new().user(Amount::ZERO, udec256!(3)).build();
    let view = derive_at(&snapshot, 150, PriceQuotes::default());

    assert!(!view.is_user_staking());
    assert_eq!(view.earned_display(), udec256!(3));
}

#[test]
fn test_staking_user_manages() {
    let snapshot = PoolBuilder::new().user(udec256!(1), Amount::ZERO).build();
    let view = derive_at(&snapshot, 150, PriceQuotes::default());

    assert_eq!(view.action(false), Some(PoolAction::Manage));
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn test_derivation_is_idempotent() {
    let snapshot = PoolBuilder::new().user(udec256!(4), udec256!(0.3)).build();
    let prices = PriceQuotes::new(Some(udec256!(0.7)), Some(udec256!(12.5)));

    assert_eq!(
        derive_at(&snapshot, 120, prices),
        derive_at(&snapshot, 120, prices)
    );
}
