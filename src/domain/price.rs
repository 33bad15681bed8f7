//! Exchange rates between two currencies.

use num_bigint::BigInt;
use num_traits::Zero;

use super::{Currency, CurrencyAmount, Token};
use crate::error::{DexError, Result};
use crate::math::{pow10, Format, Fraction, Rounding};
use crate::pair::Pair;
use crate::route::Route;

/// An exchange rate: how much quote currency one unit of base currency buys.
///
/// The stored numerator/denominator are raw reserve-unit integers, not
/// decimal-adjusted values; the decimal correction
/// (`10^base_decimals / 10^quote_decimals`) is held as a scalar and applied
/// lazily when rendering or combining with decimal-aware amounts.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use cascade_sdk::domain::{ChainId, Currency, Price, Token};
///
/// let t0 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000001"), 18, None, None);
/// let t1 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000002"), 18, None, None);
///
/// // 2 units of t1 per unit of t0, from raw reserves (100, 200).
/// let price = Price::new(Currency::Token(t0), Currency::Token(t1), 100, 200)
///     .expect("nonzero denominator");
/// assert_eq!(price.adjusted().quotient(), 2.into());
/// ```
#[derive(Debug, Clone)]
pub struct Price {
    base: Currency,
    quote: Currency,
    numerator: BigInt,
    denominator: BigInt,
    scalar: Fraction,
}

impl Price {
    /// Creates a price from raw reserve values: `denominator` base units
    /// trade against `numerator` quote units.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(
        base: Currency,
        quote: Currency,
        denominator: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
    ) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(DexError::ZeroDenominator);
        }
        let scalar = Fraction::from_parts(
            pow10(base.decimals() as usize),
            pow10(quote.decimals() as usize),
        );
        Ok(Self {
            base,
            quote,
            numerator: numerator.into(),
            denominator,
            scalar,
        })
    }

    /// The aggregate price along a route: each hop's pair priced with the
    /// hop's current path token as base, folded left-to-right with
    /// [`Price::multiply`].
    ///
    /// # Errors
    ///
    /// Propagates [`DexError::ZeroDenominator`] from a hop with an empty
    /// base reserve; route-shape violations are ruled out by [`Route`]'s
    /// constructor.
    pub fn from_route(route: &Route) -> Result<Self> {
        Self::fold_hops(route.pairs(), route.path())
    }

    /// Shared hop-folding over a validated `(pairs, path)` chain.
    pub(crate) fn fold_hops(pairs: &[Pair], path: &[Token]) -> Result<Self> {
        let mut folded: Option<Self> = None;
        for (i, pair) in pairs.iter().enumerate() {
            let hop = if &path[i] == pair.token0() {
                pair.token0_price()?
            } else {
                pair.token1_price()?
            };
            folded = Some(match folded {
                None => hop,
                Some(acc) => acc.multiply(&hop)?,
            });
        }
        folded.ok_or(DexError::InvalidRoute("route requires at least one pair"))
    }

    /// Returns the base currency (the "one unit of" side).
    #[must_use]
    pub const fn base_currency(&self) -> &Currency {
        &self.base
    }

    /// Returns the quote currency (the "buys this much" side).
    #[must_use]
    pub const fn quote_currency(&self) -> &Currency {
        &self.quote
    }

    /// The raw reserve-unit ratio, without decimal adjustment.
    #[must_use]
    pub fn raw(&self) -> Fraction {
        Fraction::from_parts(self.numerator.clone(), self.denominator.clone())
    }

    /// The decimal-normalized human rate: `raw × scalar`.
    #[must_use]
    pub fn adjusted(&self) -> Fraction {
        self.raw().multiply(&self.scalar)
    }

    /// The reciprocal rate, quoting the base in units of the quote.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if this rate is zero, since its
    /// numerator would become the reciprocal's denominator.
    pub fn invert(&self) -> Result<Self> {
        Self::new(
            self.quote.clone(),
            self.base.clone(),
            self.numerator.clone(),
            self.denominator.clone(),
        )
    }

    /// Chains two rates: `base→quote` times `quote→next` gives `base→next`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] unless `self`'s quote currency
    /// is `other`'s base currency.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.quote != other.base {
            return Err(DexError::CurrencyMismatch(
                "price chaining requires this quote to be the other base",
            ));
        }
        let combined = self.raw().multiply(&other.raw());
        Self::new(
            self.base.clone(),
            other.quote.clone(),
            combined.denominator().clone(),
            combined.numerator().clone(),
        )
    }

    /// Converts an amount of the base currency into the quote currency,
    /// flooring the raw result; an over-credit is never quoted.
    ///
    /// # Errors
    ///
    /// - [`DexError::CurrencyMismatch`] if `amount` is not denominated in
    ///   the base currency.
    /// - [`DexError::AmountOverflow`] if the converted raw amount leaves the
    ///   unsigned 256-bit range.
    pub fn quote(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount> {
        if amount.currency() != &self.base {
            return Err(DexError::CurrencyMismatch(
                "quote requires an amount of the base currency",
            ));
        }
        let converted = self
            .raw()
            .multiply(&Fraction::from_integer(amount.raw().clone()))
            .quotient();
        match &self.quote {
            Currency::Token(token) => {
                // Token quotes stay in the token denomination.
                CurrencyAmount::new(Currency::Token(token.clone()), converted)
            }
            Currency::Native(native) => CurrencyAmount::native(native.chain_id(), converted),
        }
    }

    /// Renders the adjusted rate to `digits` significant digits.
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
        self.adjusted().to_significant(digits, format, rounding)
    }

    /// Renders the adjusted rate with `places` digits after the decimal
    /// point.
    #[must_use]
    pub fn to_fixed(&self, places: usize, format: &Format, rounding: Rounding) -> String {
        self.adjusted().to_fixed(places, format, rounding)
    }
}
