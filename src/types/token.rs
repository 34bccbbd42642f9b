use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use alloy::primitives::Address;

use crate::error::AddressError;

/// Token identity: chain ID plus contract address as listed in token
/// metadata, not yet checksum-validated.
///
/// Identities compare case-insensitively on the address.
#[derive(Clone, Debug)]
pub struct TokenId {
    chain_id: u64,
    address: String,
}

impl TokenId {
    pub fn new(chain_id: u64, address: impl Into<String>) -> Self {
        Self {
            chain_id,
            address: address.into(),
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Address exactly as listed.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Validates the listed address and returns it in canonical form.
    pub fn checksummed(&self) -> Result<Address, AddressError> {
        checksum_address(&self.address)
    }

    /// Whether the listed address denotes the given one, ignoring checksum.
    pub fn is(&self, address: Address) -> bool {
        Address::from_str(&self.address).is_ok_and(|listed| listed == address)
    }
}

impl PartialEq for TokenId {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

impl Eq for TokenId {}

impl Hash for TokenId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.to_ascii_lowercase().hash(state);
    }
}

/// ERC-20 token as described by token list metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    id: TokenId,
    symbol: String,
    decimals: u8,
    logo_uris: Vec<String>,
}

impl Token {
    pub fn new(id: TokenId, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            decimals,
            logo_uris: vec![],
        }
    }

    /// Sets logo URIs supplied by the token list, in preference order.
    pub fn with_logo_uris(mut self, logo_uris: Vec<String>) -> Self {
        self.logo_uris = logo_uris;
        self
    }

    pub fn id(&self) -> &TokenId {
        &self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn logo_uris(&self) -> &[String] {
        &self.logo_uris
    }
}

/// Ordered pair of tokens staked into a pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    token0: Token,
    token1: Token,
}

impl TokenPair {
    pub fn new(token0: Token, token1: Token) -> Self {
        Self { token0, token1 }
    }

    pub fn token0(&self) -> &Token {
        &self.token0
    }

    pub fn token1(&self) -> &Token {
        &self.token1
    }

    /// Pair label, e.g. `FRA-USDC`.
    pub fn symbol(&self) -> String {
        format!("{}-{}", self.token0.symbol(), self.token1.symbol())
    }
}

/// Parses an address and verifies its EIP-55 checksum.
///
/// Single-case hex carries no checksum and is accepted as is, mixed-case hex
/// must be the `0x` prefixed checksummed encoding.
pub fn checksum_address(raw: &str) -> Result<Address, AddressError> {
    let address = Address::from_str(raw)?;
    let hex = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    let is_mixed_case = hex.bytes().any(|b| b.is_ascii_lowercase())
        && hex.bytes().any(|b| b.is_ascii_uppercase());
    if is_mixed_case {
        return Address::parse_checksummed(raw, None)
            .map_err(|_| AddressError::Checksum(address.to_checksum(None)));
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use alloy::primitives::address;

    use super::*;

    #[test]
    fn test_checksum_address_accepts_valid_checksum() {
        assert_eq!(
            checksum_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap(),
            address!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
        );
        assert_eq!(
            checksum_address("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359").unwrap(),
            address!("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359")
        );
    }

    #[test]
    fn test_checksum_address_accepts_single_case() {
        let lower = checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let upper = checksum_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(
            lower.to_checksum(None),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_checksum_address_rejects_bad_checksum() {
        assert!(matches!(
            checksum_address("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            Err(AddressError::Checksum(expected)) if expected == "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        ));
        assert!(matches!(
            checksum_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            Err(AddressError::Checksum(_))
        ));
    }

    #[test]
    fn test_checksum_address_rejects_malformed() {
        assert!(matches!(
            checksum_address("0xabc"),
            Err(AddressError::Hex(_))
        ));
        assert!(matches!(
            checksum_address("0xzzzeb6053f3e94c9b9a09f33669435e7ef1beaed"),
            Err(AddressError::Hex(_))
        ));
    }

    #[test]
    fn test_token_id_ignores_address_case() {
        let a = TokenId::new(1, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        let b = TokenId::new(1, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
        let c = TokenId::new(5, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(HashSet::from([a, b, c]).len(), 2);
    }
}
