use alloy::primitives::hex::FromHexError;

/// Token logo could not be resolved.
/// Affects only the single token being resolved.
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("invalid address {0}: {1}")]
    InvalidAddress(String, AddressError),

    #[error("invalid logo URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Reason an address fails checksum normalization.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("malformed hex: {0}")]
    Hex(#[from] FromHexError),

    #[error("bad EIP-55 checksum, expected {0}")]
    Checksum(String),
}

/// Pool snapshot violates its own invariants.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("start block {start} is after end block {end}")]
    InvalidBlockRange { start: u64, end: u64 },
}

/// Reason a valuation field of the view model is undefined.
///
/// Never fatal: the rest of the view model stays valid and renderable.
#[derive(Clone, Copy, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValuationGap {
    #[error("staked token pair is unknown")]
    IncompletePoolMetadata,

    #[error("nothing is staked")]
    ZeroStake,

    #[error("price data is unavailable")]
    MissingPriceData,
}
