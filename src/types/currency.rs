use super::*;
use crate::{Blockchain, Network};

/// Currency shown by the front end, classified once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Currency {
    /// Native asset of the blockchain.
    Native(Blockchain),
    /// Token wrapping the native asset of the blockchain.
    WrappedNative { blockchain: Blockchain, token: Token },
    /// Any other ERC-20 token.
    Generic(Token),
}

impl Currency {
    /// Classifies the token against the wrapped native token of the network.
    pub fn classify(token: Token, network: &Network) -> Self {
        let is_wrapped_native = token.id().chain_id() == network.chain_id()
            && network
                .wrapped_native()
                .is_some_and(|wrapped| token.id().is(wrapped));
        if is_wrapped_native {
            Self::WrappedNative {
                blockchain: network.blockchain(),
                token,
            }
        } else {
            Self::Generic(token)
        }
    }

    pub fn native(network: &Network) -> Self {
        Self::Native(network.blockchain())
    }

    /// Currency the user thinks in: wrapped native is shown as native.
    pub fn unwrapped(self) -> Self {
        match self {
            Self::WrappedNative { blockchain, .. } => Self::Native(blockchain),
            other => other,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Native(blockchain) => blockchain.native_symbol(),
            Self::WrappedNative { token, .. } | Self::Generic(token) => token.symbol(),
        }
    }

    /// Underlying token, absent for the native asset.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::Native(_) => None,
            Self::WrappedNative { token, .. } | Self::Generic(token) => Some(token),
        }
    }
}
