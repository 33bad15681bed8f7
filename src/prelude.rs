//! Convenience re-exports for common types.
//!
//! A single import brings the whole working set into scope:
//!
//! ```rust
//! use cascade_sdk::prelude::*;
//! ```

pub use crate::cache::{AddressCache, DecimalsCache};
pub use crate::constants::{MINIMUM_LIQUIDITY, SWAP_FEE_DENOMINATOR, SWAP_FEE_NUMERATOR};
pub use crate::domain::{
    ChainId, Currency, CurrencyAmount, NativeCurrency, Price, Token, TokenAmount,
};
pub use crate::error::{DexError, Result};
pub use crate::math::{Format, Fraction, Rounding};
pub use crate::pair::Pair;
pub use crate::route::Route;
