mod currency;
mod token;

pub use currency::Currency;
pub use token::{Token, TokenId, TokenPair, checksum_address};
