//! Currency-aware quantities in raw smallest-unit integers.
//!
//! Amounts compose a currency with a raw integer and delegate all value
//! arithmetic to [`Fraction`], running an identity guard first: adding two
//! amounts of different currencies is a programming error, not a silent
//! coercion.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::{ChainId, Currency, Token};
use crate::error::{DexError, Result};
use crate::math::{trim_fractional_zeros, Format, Fraction, Rounding};

/// Validates the unsigned 256-bit range on externally supplied raw amounts.
fn ensure_uint256(raw: &BigInt) -> Result<()> {
    if raw.is_negative() || raw.bits() > 256 {
        return Err(DexError::AmountOverflow);
    }
    Ok(())
}

/// An exact quantity of some [`Currency`], held as a raw integer in the
/// currency's smallest unit.
///
/// The rational value is `raw / 10^decimals`, materialized on demand via
/// [`CurrencyAmount::as_fraction`]. Construction validates that the raw
/// amount fits an unsigned 256-bit word; arithmetic results skip that
/// re-check, so a subtraction can yield a negative value: representable,
/// but a caller-level misuse in this domain (reserves stay non-negative,
/// callers must check).
///
/// # Examples
///
/// ```
/// use cascade_sdk::domain::{ChainId, CurrencyAmount};
///
/// let one_avax = CurrencyAmount::native(ChainId::Fuji, 1_000_000_000_000_000_000u128)
///     .expect("within range");
/// assert_eq!(one_avax.to_exact(&Default::default()), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    raw: BigInt,
}

impl CurrencyAmount {
    /// Creates an amount of `currency` from a raw smallest-unit integer.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AmountOverflow`] if `raw` is negative or does not
    /// fit an unsigned 256-bit word.
    pub fn new(currency: Currency, raw: impl Into<BigInt>) -> Result<Self> {
        let raw = raw.into();
        ensure_uint256(&raw)?;
        Ok(Self { currency, raw })
    }

    /// An amount of a chain's native currency.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AmountOverflow`] on an out-of-range raw amount.
    pub fn native(chain_id: ChainId, raw: impl Into<BigInt>) -> Result<Self> {
        Self::new(Currency::native(chain_id), raw)
    }

    /// Arithmetic-result constructor: keeps the currency, skips the range
    /// re-check.
    fn with_raw(&self, raw: BigInt) -> Self {
        Self {
            currency: self.currency.clone(),
            raw,
        }
    }

    /// Returns the currency this amount is denominated in.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the raw smallest-unit integer.
    #[must_use]
    pub const fn raw(&self) -> &BigInt {
        &self.raw
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// The exact rational value: `raw / 10^decimals`.
    #[must_use]
    pub fn as_fraction(&self) -> Fraction {
        Fraction::from_scale(self.raw.clone(), self.currency.decimals() as usize)
    }

    /// Adds two amounts of the identical currency.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if the currencies differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.currency != other.currency {
            return Err(DexError::CurrencyMismatch(
                "add requires identical currencies",
            ));
        }
        Ok(self.with_raw(&self.raw + &other.raw))
    }

    /// Subtracts an amount of the identical currency. The difference is not
    /// clamped at zero.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if the currencies differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        if self.currency != other.currency {
            return Err(DexError::CurrencyMismatch(
                "subtract requires identical currencies",
            ));
        }
        Ok(self.with_raw(&self.raw - &other.raw))
    }

    /// Renders the value to `digits` significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroSignificantDigits`] if `digits` is zero.
    pub fn to_significant(
        &self,
        digits: usize,
        format: &Format,
        rounding: Rounding,
    ) -> Result<String> {
        self.as_fraction().to_significant(digits, format, rounding)
    }

    /// Renders the value with `places` digits after the decimal point.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ExcessiveDecimalPlaces`] if more precision is
    /// requested than the currency carries.
    pub fn to_fixed(&self, places: usize, format: &Format, rounding: Rounding) -> Result<String> {
        if places > self.currency.decimals() as usize {
            return Err(DexError::ExcessiveDecimalPlaces);
        }
        Ok(self.as_fraction().to_fixed(places, format, rounding))
    }

    /// Renders the exact decimal value with no rounding loss: the raw
    /// amount divided by `10^decimals` always terminates within `decimals`
    /// places, and trailing zeros are trimmed.
    #[must_use]
    pub fn to_exact(&self, format: &Format) -> String {
        let rendered = self.as_fraction().to_fixed(
            self.currency.decimals() as usize,
            format,
            Rounding::Down,
        );
        trim_fractional_zeros(rendered, format)
    }
}

/// A [`CurrencyAmount`] restricted to a specific token.
///
/// Arithmetic requires identical token identity; matching decimals or
/// symbol are not enough. This is the denomination the pool engine works in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    token: Token,
    raw: BigInt,
}

impl TokenAmount {
    /// Creates an amount of `token` from a raw smallest-unit integer.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AmountOverflow`] if `raw` is negative or does not
    /// fit an unsigned 256-bit word.
    pub fn new(token: Token, raw: impl Into<BigInt>) -> Result<Self> {
        let raw = raw.into();
        ensure_uint256(&raw)?;
        Ok(Self { token, raw })
    }

    /// Returns the token this amount is denominated in.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the raw smallest-unit integer.
    #[must_use]
    pub const fn raw(&self) -> &BigInt {
        &self.raw
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// The exact rational value: `raw / 10^decimals`.
    #[must_use]
    pub fn as_fraction(&self) -> Fraction {
        Fraction::from_scale(self.raw.clone(), self.token.decimals() as usize)
    }

    /// Widens to a [`CurrencyAmount`] of the token currency.
    #[must_use]
    pub fn to_currency_amount(&self) -> CurrencyAmount {
        CurrencyAmount {
            currency: Currency::Token(self.token.clone()),
            raw: self.raw.clone(),
        }
    }

    /// Adds two amounts of the identical token.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::TokenMismatch`] if the token identities differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.token != other.token {
            return Err(DexError::TokenMismatch("add requires the identical token"));
        }
        Ok(Self {
            token: self.token.clone(),
            raw: &self.raw + &other.raw,
        })
    }

    /// Subtracts an amount of the identical token. The difference is not
    /// clamped at zero.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::TokenMismatch`] if the token identities differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        if self.token != other.token {
            return Err(DexError::TokenMismatch(
                "subtract requires the identical token",
            ));
        }
        Ok(Self {
            token: self.token.clone(),
            raw: &self.raw - &other.raw,
        })
    }

    /// Renders the value to `digits` significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroSignificantDigits`] if `digits` is zero.
    pub fn to_significant(
        &self,
        digits: usize,
        format: &Format,
        rounding: Rounding,
    ) -> Result<String> {
        self.as_fraction().to_significant(digits, format, rounding)
    }

    /// Renders the value with `places` digits after the decimal point.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ExcessiveDecimalPlaces`] if more precision is
    /// requested than the token carries.
    pub fn to_fixed(&self, places: usize, format: &Format, rounding: Rounding) -> Result<String> {
        if places > self.token.decimals() as usize {
            return Err(DexError::ExcessiveDecimalPlaces);
        }
        Ok(self.as_fraction().to_fixed(places, format, rounding))
    }

    /// Renders the exact decimal value with no rounding loss.
    #[must_use]
    pub fn to_exact(&self, format: &Format) -> String {
        let rendered =
            self.as_fraction()
                .to_fixed(self.token.decimals() as usize, format, Rounding::Down);
        trim_fractional_zeros(rendered, format)
    }
}
