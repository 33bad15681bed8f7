//! Arbitrary-precision rational arithmetic and exact decimal rendering.
//!
//! [`Fraction`] is the numeric foundation of the crate: every amount, price,
//! and pool formula reduces to operations on integer ratios. No floating
//! point is involved anywhere; precision is preserved exactly and only
//! discarded at an explicit [`Rounding`] boundary.

use core::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::Rounding;
use crate::error::{DexError, Result};

/// Returns `10^exp` as a [`BigInt`].
pub(crate) fn pow10(exp: usize) -> BigInt {
    num_traits::pow(BigInt::from(10), exp)
}

/// Presentation options for decimal rendering.
///
/// `Format` never affects the numeric value, only how it is printed: an
/// optional thousands separator for the integer part and the character used
/// as the decimal point.
///
/// # Examples
///
/// ```
/// use cascade_sdk::math::Format;
///
/// let plain = Format::default();
/// assert_eq!(plain.group_separator, None);
/// assert_eq!(plain.decimal_separator, '.');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Separator inserted every three digits of the integer part, if any.
    pub group_separator: Option<char>,
    /// Character separating the integer and fractional parts.
    pub decimal_separator: char,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            group_separator: None,
            decimal_separator: '.',
        }
    }
}

impl Format {
    /// Grouped formatting: `,` thousands separator, `.` decimal point.
    #[must_use]
    pub const fn grouped() -> Self {
        Self {
            group_separator: Some(','),
            decimal_separator: '.',
        }
    }
}

/// An immutable arbitrary-precision rational number.
///
/// The denominator is always strictly positive: the sign, if any, lives on
/// the numerator. Fractions are not reduced to lowest terms: reduction is
/// unnecessary for exactness and the raw numerator/denominator of a price
/// are meaningful quantities in their own right (reserve units).
///
/// Value equality goes through [`Fraction::equal_to`]; `PartialEq` is
/// deliberately not derived because field-wise comparison would distinguish
/// `1/2` from `2/4`.
///
/// # Examples
///
/// ```
/// use cascade_sdk::math::Fraction;
///
/// let a = Fraction::new(1, 2).expect("nonzero denominator");
/// let b = Fraction::new(2, 4).expect("nonzero denominator");
/// assert!(a.equal_to(&b));
/// ```
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Creates a fraction from a numerator and a non-zero denominator.
    ///
    /// A negative denominator is normalized by moving the sign onto the
    /// numerator.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(DexError::ZeroDenominator);
        }
        Ok(Self::from_parts(numerator, denominator))
    }

    /// Creates a whole-number fraction with denominator 1.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::from(1),
        }
    }

    /// A raw amount over a power-of-ten scale: `numerator / 10^places`.
    pub(crate) fn from_scale(numerator: BigInt, places: usize) -> Self {
        Self {
            numerator,
            denominator: pow10(places),
        }
    }

    /// Internal constructor: normalizes the denominator sign. The caller
    /// guarantees `denominator != 0`.
    pub(crate) fn from_parts(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the denominator (always strictly positive).
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Integer part of the ratio: truncating division of numerator by
    /// denominator.
    #[must_use]
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Remainder after [`Fraction::quotient`], kept over the same
    /// denominator.
    #[must_use]
    pub fn remainder(&self) -> Self {
        Self {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroNumerator`] if the value is zero, since the
    /// reciprocal would have a zero denominator.
    pub fn invert(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(DexError::ZeroNumerator);
        }
        Ok(Self::from_parts(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Adds two fractions exactly.
    ///
    /// Equal denominators take the fast path; otherwise the operands are
    /// cross-multiplied. No reduction is performed.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Subtracts `other` from `self` exactly.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Multiplies two fractions exactly.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Divides `self` by `other` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroNumerator`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        if other.numerator.is_zero() {
            return Err(DexError::ZeroNumerator);
        }
        Ok(Self::from_parts(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Returns `true` if `self < other`, by cross-multiplication.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator < &other.numerator * &self.denominator
    }

    /// Returns `true` if the two fractions have the same value.
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }

    /// Returns `true` if `self > other`, by cross-multiplication.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator > &other.numerator * &self.denominator
    }

    /// The value scaled by `10^places` and rounded to an integer under the
    /// given policy. Rounding is symmetric about zero: `Down` truncates
    /// towards zero, `Up` moves away from it, `HalfUp` breaks ties away
    /// from it.
    fn rounded_shift(&self, places: usize, rounding: Rounding) -> BigInt {
        let negative = self.numerator.is_negative();
        let scaled = self.numerator.abs() * pow10(places);
        let quotient = &scaled / &self.denominator;
        let remainder = &scaled % &self.denominator;
        let bump = match rounding {
            Rounding::Down => false,
            Rounding::HalfUp => &remainder + &remainder >= self.denominator,
            Rounding::Up => !remainder.is_zero(),
        };
        let magnitude = if bump { quotient + 1 } else { quotient };
        if negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Renders the value with exactly `places` digits after the decimal
    /// point.
    ///
    /// The numerator is scaled by `10^places`, divided exactly, and rounded
    /// once at the shift boundary under `rounding`. Trailing zeros are kept
    /// (fixed-width output).
    #[must_use]
    pub fn to_fixed(&self, places: usize, format: &Format, rounding: Rounding) -> String {
        let scaled = self.rounded_shift(places, rounding);
        render_scaled(&scaled, places, format)
    }

    /// Renders the value to `digits` significant decimal digits.
    ///
    /// Trailing fractional zeros are trimmed; when the requested precision
    /// ends left of the decimal point, the remaining integer positions are
    /// zero-filled.
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
        if digits == 0 {
            return Err(DexError::ZeroSignificantDigits);
        }
        if self.numerator.is_zero() {
            return Ok("0".to_string());
        }

        // Decimal exponent of the leading significant digit.
        let exponent = self.leading_exponent();
        let wanted = digits as i64 - 1 - exponent;

        if wanted >= 0 {
            let rendered = self.to_fixed(wanted as usize, format, rounding);
            Ok(trim_fractional_zeros(rendered, format))
        } else {
            // Precision ends left of the decimal point: round at that
            // position and zero-fill back up to an integer.
            let dropped = (-wanted) as usize;
            let negative = self.numerator.is_negative();
            let divisor = &self.denominator * pow10(dropped);
            let abs = self.numerator.abs();
            let quotient = &abs / &divisor;
            let remainder = &abs % &divisor;
            let bump = match rounding {
                Rounding::Down => false,
                Rounding::HalfUp => &remainder + &remainder >= divisor,
                Rounding::Up => !remainder.is_zero(),
            };
            let magnitude = if bump { quotient + 1 } else { quotient };
            let scaled = magnitude * pow10(dropped);
            let signed = if negative { -scaled } else { scaled };
            Ok(render_scaled(&signed, 0, format))
        }
    }

    /// Exponent `e` such that `10^e <= |value| < 10^(e+1)`. The value must
    /// be non-zero.
    fn leading_exponent(&self) -> i64 {
        let abs = self.numerator.abs();
        if abs >= self.denominator {
            // Digit count of the truncated integer part, minus one.
            self.quotient().abs().to_string().len() as i64 - 1
        } else {
            // 0 < |value| < 1: smallest k with |n| * 10^k >= d gives e = -k.
            let len_n = abs.to_string().len() as i64;
            let len_d = self.denominator.to_string().len() as i64;
            let mut k = len_d - len_n;
            if &abs * pow10(k as usize) < self.denominator {
                k += 1;
            }
            -k
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Renders a pre-scaled integer (`value * 10^places`) as a decimal string,
/// applying the group and decimal separators.
fn render_scaled(scaled: &BigInt, places: usize, format: &Format) -> String {
    let negative = scaled.is_negative();
    let mut digits = scaled.abs().to_string();
    if digits.len() <= places {
        // Left-pad so there is at least one integer digit.
        digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
    }
    let split = digits.len() - places;
    let (int_part, frac_part) = digits.split_at(split);

    let int_rendered = match format.group_separator {
        Some(sep) => group_digits(int_part, sep),
        None => int_part.to_string(),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int_rendered);
    if places > 0 {
        out.push(format.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Inserts `sep` every three digits, counting from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(*b as char);
    }
    out
}

/// Strips trailing zeros from the fractional part of a rendered decimal,
/// removing the separator as well when nothing remains after it.
pub(crate) fn trim_fractional_zeros(rendered: String, format: &Format) -> String {
    if !rendered.contains(format.decimal_separator) {
        return rendered;
    }
    let trimmed = rendered.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix(format.decimal_separator).unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        let Ok(f) = Fraction::new(n, d) else {
            panic!("nonzero denominator in test: {n}/{d}");
        };
        f
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn zero_denominator_rejected() {
        let result = Fraction::new(1, 0);
        assert_eq!(result.map(|_| ()), Err(DexError::ZeroDenominator));
    }

    #[test]
    fn negative_denominator_normalized() {
        let f = frac(1, -2);
        assert_eq!(f.numerator(), &BigInt::from(-1));
        assert_eq!(f.denominator(), &BigInt::from(2));
        assert!(f.is_negative());
    }

    #[test]
    fn from_integer_has_unit_denominator() {
        let f = Fraction::from_integer(42);
        assert_eq!(f.quotient(), BigInt::from(42));
        assert_eq!(f.denominator(), &BigInt::from(1));
    }

    // -- arithmetic -----------------------------------------------------------

    #[test]
    fn add_same_denominator() {
        let sum = frac(1, 10).add(&frac(3, 10));
        assert_eq!(sum.numerator(), &BigInt::from(4));
        assert_eq!(sum.denominator(), &BigInt::from(10));
    }

    #[test]
    fn add_cross_multiplies() {
        // 1/2 + 1/3 = 5/6
        let sum = frac(1, 2).add(&frac(1, 3));
        assert!(sum.equal_to(&frac(5, 6)));
    }

    #[test]
    fn subtract_can_go_negative() {
        let diff = frac(1, 3).subtract(&frac(1, 2));
        assert!(diff.is_negative());
        assert!(diff.equal_to(&frac(-1, 6)));
    }

    #[test]
    fn multiply_is_exact() {
        let product = frac(2, 3).multiply(&frac(3, 4));
        assert!(product.equal_to(&frac(1, 2)));
        // No reduction: raw parts are preserved as computed.
        assert_eq!(product.numerator(), &BigInt::from(6));
        assert_eq!(product.denominator(), &BigInt::from(12));
    }

    #[test]
    fn divide_by_nonzero() {
        let Ok(q) = frac(1, 2).divide(&frac(3, 4)) else {
            panic!("expected Ok");
        };
        assert!(q.equal_to(&frac(2, 3)));
    }

    #[test]
    fn divide_by_zero_fraction_rejected() {
        let result = frac(1, 2).divide(&frac(0, 5));
        assert_eq!(result.map(|_| ()), Err(DexError::ZeroNumerator));
    }

    #[test]
    fn invert_swaps_parts() {
        let Ok(inv) = frac(3, 7).invert() else {
            panic!("expected Ok");
        };
        assert!(inv.equal_to(&frac(7, 3)));
    }

    #[test]
    fn invert_keeps_denominator_positive() {
        let Ok(inv) = frac(-3, 7).invert() else {
            panic!("expected Ok");
        };
        assert!(inv.is_negative());
        assert!(inv.denominator() > &BigInt::from(0));
    }

    #[test]
    fn invert_zero_rejected() {
        let result = frac(0, 7).invert();
        assert_eq!(result.map(|_| ()), Err(DexError::ZeroNumerator));
    }

    #[test]
    fn quotient_truncates() {
        assert_eq!(frac(8, 3).quotient(), BigInt::from(2));
        assert_eq!(frac(-8, 3).quotient(), BigInt::from(-2));
    }

    #[test]
    fn remainder_keeps_denominator() {
        let r = frac(8, 3).remainder();
        assert_eq!(r.numerator(), &BigInt::from(2));
        assert_eq!(r.denominator(), &BigInt::from(3));
    }

    // -- comparisons ----------------------------------------------------------

    #[test]
    fn unreduced_fractions_compare_by_value() {
        assert!(frac(1, 2).equal_to(&frac(2, 4)));
        assert!(frac(1, 3).less_than(&frac(2, 4)));
        assert!(frac(3, 4).greater_than(&frac(2, 4)));
    }

    #[test]
    fn negative_comparisons() {
        assert!(frac(-1, 2).less_than(&frac(1, 2)));
        assert!(frac(-1, 2).equal_to(&frac(1, -2)));
    }

    // -- to_fixed -------------------------------------------------------------

    #[test]
    fn to_fixed_round_down_truncates() {
        let f = frac(8, 3); // 2.666...
        assert_eq!(f.to_fixed(2, &Format::default(), Rounding::Down), "2.66");
    }

    #[test]
    fn to_fixed_half_up() {
        let f = frac(8, 3);
        assert_eq!(f.to_fixed(2, &Format::default(), Rounding::HalfUp), "2.67");
        // Exact tie rounds away from zero: 2.5 -> 3.
        assert_eq!(frac(5, 2).to_fixed(0, &Format::default(), Rounding::HalfUp), "3");
    }

    #[test]
    fn to_fixed_round_up() {
        let f = frac(801, 100); // 8.01
        assert_eq!(f.to_fixed(1, &Format::default(), Rounding::Up), "8.1");
        // An exact value is not bumped.
        assert_eq!(frac(8, 1).to_fixed(1, &Format::default(), Rounding::Up), "8.0");
    }

    #[test]
    fn to_fixed_negative_is_symmetric() {
        let f = frac(-8, 3); // -2.666...
        assert_eq!(f.to_fixed(2, &Format::default(), Rounding::Down), "-2.66");
        assert_eq!(f.to_fixed(2, &Format::default(), Rounding::Up), "-2.67");
        assert_eq!(f.to_fixed(2, &Format::default(), Rounding::HalfUp), "-2.67");
    }

    #[test]
    fn to_fixed_pads_small_values() {
        let f = frac(5, 1000); // 0.005
        assert_eq!(f.to_fixed(3, &Format::default(), Rounding::Down), "0.005");
        assert_eq!(f.to_fixed(2, &Format::default(), Rounding::Down), "0.00");
    }

    #[test]
    fn to_fixed_zero_places() {
        assert_eq!(frac(1234, 10).to_fixed(0, &Format::default(), Rounding::Down), "123");
    }

    #[test]
    fn to_fixed_group_separator() {
        let f = frac(123456789, 100); // 1234567.89
        assert_eq!(
            f.to_fixed(2, &Format::grouped(), Rounding::Down),
            "1,234,567.89"
        );
    }

    #[test]
    fn to_fixed_custom_decimal_separator() {
        let format = Format {
            group_separator: Some('.'),
            decimal_separator: ',',
        };
        let f = frac(123456789, 100);
        assert_eq!(f.to_fixed(2, &format, Rounding::Down), "1.234.567,89");
    }

    // -- to_significant -------------------------------------------------------

    #[test]
    fn to_significant_zero_digits_rejected() {
        let result = frac(1, 2).to_significant(0, &Format::default(), Rounding::Down);
        assert_eq!(result, Err(DexError::ZeroSignificantDigits));
    }

    #[test]
    fn to_significant_of_zero() {
        let Ok(s) = frac(0, 2).to_significant(5, &Format::default(), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0");
    }

    #[test]
    fn to_significant_trims_trailing_zeros() {
        // 1/2 at 5 significant digits is 0.5, not 0.50000.
        let Ok(s) = frac(1, 2).to_significant(5, &Format::default(), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.5");
    }

    #[test]
    fn to_significant_fractional_value() {
        // 0.00123456 to 3 significant digits.
        let Ok(s) =
            frac(123_456, 100_000_000).to_significant(3, &Format::default(), Rounding::HalfUp)
        else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.00123");
    }

    #[test]
    fn to_significant_mixed_value() {
        // 123.4567 to 5 significant digits, half-up.
        let Ok(s) =
            frac(1_234_567, 10_000).to_significant(5, &Format::default(), Rounding::HalfUp)
        else {
            panic!("expected Ok");
        };
        assert_eq!(s, "123.46");
    }

    #[test]
    fn to_significant_rounds_left_of_decimal_point() {
        // 123456 to 4 significant digits: rounding happens in integer
        // positions and the tail is zero-filled.
        let Ok(s) = frac(123_456, 1).to_significant(4, &Format::default(), Rounding::HalfUp)
        else {
            panic!("expected Ok");
        };
        assert_eq!(s, "123500");
    }

    #[test]
    fn to_significant_carry_gains_a_digit() {
        // 999 to 1 significant digit, half-up: carries to 1000.
        let Ok(s) = frac(999, 1).to_significant(1, &Format::default(), Rounding::HalfUp) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "1000");
    }

    #[test]
    fn to_significant_carry_across_decimal_point() {
        // 0.999 to 2 significant digits, half-up: 1.
        let Ok(s) = frac(999, 1000).to_significant(2, &Format::default(), Rounding::HalfUp)
        else {
            panic!("expected Ok");
        };
        assert_eq!(s, "1");
    }

    #[test]
    fn to_significant_with_grouping() {
        let Ok(s) = frac(123_456, 1).to_significant(4, &Format::grouped(), Rounding::HalfUp)
        else {
            panic!("expected Ok");
        };
        assert_eq!(s, "123,500");
    }

    // -- display --------------------------------------------------------------

    #[test]
    fn display_shows_raw_ratio() {
        assert_eq!(frac(6, 12).to_string(), "6/12");
    }
}
