//! Unified error types for the Cascade SDK core.
//!
//! All fallible operations across the crate return [`DexError`], with one
//! variant per distinct precondition or business failure so that callers can
//! tell "bad input" apart from "insufficient liquidity" programmatically.
//! Every error is terminal for the operation that raised it: the core
//! performs no I/O, so there is nothing to retry or recover asynchronously.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, DexError>;

/// Errors raised by the pricing and pool math core.
///
/// The first two variants are expected business outcomes of quoting against
/// a pool ("no liquidity", "trade too small"); everything else is a
/// precondition violation surfaced synchronously to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DexError {
    /// A pool reserve is zero, or a requested output meets or exceeds the
    /// available reserve.
    #[error("insufficient reserves to satisfy the requested amount")]
    InsufficientReserves,

    /// A computed swap output or minted liquidity amount is not strictly
    /// positive.
    #[error("computed amount is not strictly positive")]
    InsufficientInputAmount,

    /// Arithmetic between amounts of two different currencies.
    #[error("currency mismatch: {0}")]
    CurrencyMismatch(&'static str),

    /// A token-denominated operation received a foreign token.
    #[error("token mismatch: {0}")]
    TokenMismatch(&'static str),

    /// Entities from different chains were combined.
    #[error("chain id mismatch: {0}")]
    ChainMismatch(&'static str),

    /// A route's pair list is empty, its endpoints are not members of the
    /// terminal pairs, or the pair chain is disconnected.
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),

    /// Canonical token ordering was requested for two identical addresses.
    #[error("identical token addresses: {0}")]
    EqualAddresses(&'static str),

    /// A fraction was constructed with a zero denominator.
    #[error("zero denominator in rational arithmetic")]
    ZeroDenominator,

    /// Inversion of (or division by) a zero-valued fraction.
    #[error("cannot invert a zero-valued fraction")]
    ZeroNumerator,

    /// A rendering request for zero significant digits.
    #[error("significant digits must be greater than zero")]
    ZeroSignificantDigits,

    /// A fixed-point rendering request for more decimal places than the
    /// currency carries.
    #[error("requested decimal places exceed the currency precision")]
    ExcessiveDecimalPlaces,

    /// A raw amount outside the unsigned 256-bit range.
    #[error("raw amount outside the unsigned 256-bit range")]
    AmountOverflow,

    /// A liquidity-token guard failed: wrong denomination, or liquidity in
    /// excess of the total supply.
    #[error("liquidity mismatch: {0}")]
    LiquidityMismatch(&'static str),

    /// The protocol fee switch is on but no `k_last` value was supplied.
    #[error("k_last is required while the fee switch is on")]
    MissingKLast,
}
