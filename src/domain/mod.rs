//! Fundamental domain value types: chains, currencies, tokens, amounts, and
//! prices.
//!
//! All types are constructed once from validated inputs and never mutated;
//! composite operations return new instances.

mod amount;
mod chain;
mod currency;
mod price;
mod token;

pub use amount::{CurrencyAmount, TokenAmount};
pub use chain::ChainId;
pub use currency::{Currency, NativeCurrency};
pub use price::Price;
pub use token::Token;
