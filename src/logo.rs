//! Token logo resolution.
//!
//! [`resolve`] returns candidate logo sources ordered by preference. The
//! consumer tries them in order and falls back to a generic placeholder when
//! none loads.

use tracing::debug;
use url::Url;

use crate::{
    Blockchain, Network,
    error::LogoError,
    types::{Currency, Token},
};

const TRUST_WALLET_ASSETS: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/assets";

const IPFS_GATEWAYS: [&str; 2] = ["https://cloudflare-ipfs.com", "https://ipfs.io"];

/// Logo image shipped with the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BundledLogo {
    Ethereum,
    Findora,
}

impl BundledLogo {
    /// Logo of the native asset of the blockchain, if one is shipped.
    pub fn native(blockchain: Blockchain) -> Option<Self> {
        match blockchain {
            Blockchain::Ethereum | Blockchain::Goerli => Some(Self::Ethereum),
            Blockchain::Findora | Blockchain::AnvilTestnet => Some(Self::Findora),
            Blockchain::Harmony => None,
        }
    }

    pub fn asset_path(&self) -> &'static str {
        match self {
            Self::Ethereum => "images/ethereum-logo.png",
            Self::Findora => "images/FINDORA.png",
        }
    }
}

/// Location of a candidate logo image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoSource {
    Bundled(BundledLogo),
    Remote(Url),
}

/// Candidate logo sources of the currency, most preferred first.
///
/// Native and wrapped native currencies have at most one fixed logo, any
/// token list URIs of a wrapped native token are ignored. Other tokens get
/// their token list URIs followed by a fallback derived from the
/// checksummed address, which must be valid. No candidates means the
/// placeholder is shown.
pub fn resolve(currency: &Currency) -> Result<Vec<LogoSource>, LogoError> {
    match currency {
        Currency::Native(blockchain) | Currency::WrappedNative { blockchain, .. } => {
            Ok(BundledLogo::native(*blockchain)
                .map(LogoSource::Bundled)
                .into_iter()
                .collect())
        }
        Currency::Generic(token) => resolve_generic(token),
    }
}

/// Classifies the token against the network and resolves its logo sources.
pub fn resolve_token(token: Token, network: &Network) -> Result<Vec<LogoSource>, LogoError> {
    resolve(&Currency::classify(token, network))
}

fn resolve_generic(token: &Token) -> Result<Vec<LogoSource>, LogoError> {
    let address = token
        .id()
        .checksummed()
        .map_err(|err| LogoError::InvalidAddress(token.id().address().to_string(), err))?;

    let mut sources: Vec<LogoSource> = token
        .logo_uris()
        .iter()
        .flat_map(|uri| http_locations(uri))
        .map(LogoSource::Remote)
        .collect();

    let fallback = match Blockchain::from_chain_id(token.id().chain_id()) {
        Some(Blockchain::Findora | Blockchain::AnvilTestnet) => {
            LogoSource::Bundled(BundledLogo::Findora)
        }
        Some(Blockchain::Goerli) => LogoSource::Bundled(BundledLogo::Ethereum),
        _ => LogoSource::Remote(Url::parse(&format!(
            "{TRUST_WALLET_ASSETS}/{}/logo.png",
            address.to_checksum(None)
        ))?),
    };
    sources.push(fallback);
    Ok(sources)
}

/// HTTP locations a token list URI can be fetched from.
///
/// IPFS and IPNS URIs are mapped onto public gateways, plain HTTP is tried
/// upgraded to HTTPS first. Other schemes yield nothing.
pub fn http_locations(uri: &str) -> Vec<Url> {
    let Some((scheme, rest)) = uri.split_once(':') else {
        debug!(uri, "logo URI without scheme ignored");
        return vec![];
    };
    let candidates = match scheme.to_ascii_lowercase().as_str() {
        "https" => vec![uri.to_string()],
        "http" => vec![format!("https:{rest}"), uri.to_string()],
        kind @ ("ipfs" | "ipns") => {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            IPFS_GATEWAYS
                .iter()
                .map(|gateway| format!("{gateway}/{kind}/{path}/"))
                .collect()
        }
        _ => {
            debug!(uri, "logo URI with unsupported scheme ignored");
            vec![]
        }
    };
    candidates
        .into_iter()
        .filter_map(|candidate| match Url::parse(&candidate) {
            Ok(url) => Some(url),
            Err(err) => {
                debug!(%candidate, %err, "malformed logo URL ignored");
                None
            }
        })
        .collect()
}
