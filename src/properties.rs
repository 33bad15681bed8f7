//! Property-based tests for the crate's cross-cutting invariants.
//!
//! 1. **Invariant preservation** — `reserve0 × reserve1` never decreases
//!    across a fee-bearing swap.
//! 2. **Ceiling round-trip** — replaying a swap's output through
//!    `input_amount` on the post-swap pair never quotes less than the
//!    original input.
//! 3. **Quoted input sufficiency** — executing a quoted input always covers
//!    the requested output.
//! 4. **Address determinism** — pool addresses are order-independent and
//!    stable.
//! 5. **Rendering consistency** — `to_fixed` re-parses to the exact rounded
//!    value under each rounding policy.

use alloy_primitives::Address;
use num_bigint::BigInt;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::domain::{ChainId, Token, TokenAmount};
use crate::error::DexError;
use crate::math::{pow10, Format, Fraction, Rounding};
use crate::pair::Pair;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok(last_byte: u8) -> Token {
    let mut bytes = [0u8; 20];
    bytes[19] = last_byte;
    Token::new(ChainId::Fuji, Address::from(bytes), 18, None, None)
}

fn amount(token: &Token, raw: u128) -> TokenAmount {
    let Ok(a) = TokenAmount::new(token.clone(), raw) else {
        panic!("raw amount within range: {raw}");
    };
    a
}

fn make_pair(reserve0: u128, reserve1: u128) -> Pair {
    let Ok(p) = Pair::new(amount(&tok(1), reserve0), amount(&tok(2), reserve1)) else {
        panic!("valid pair");
    };
    p
}

/// Parses a plain-format decimal rendering back into `value × 10^places`.
fn reparse_scaled(rendered: &str, places: usize) -> BigInt {
    let negative = rendered.starts_with('-');
    let body = rendered.trim_start_matches('-');
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    assert!(frac_part.len() <= places, "renderer overflowed the requested places");
    let mut combined = String::with_capacity(int_part.len() + places);
    combined.push_str(int_part);
    combined.push_str(frac_part);
    for _ in frac_part.len()..places {
        combined.push('0');
    }
    let magnitude: BigInt = combined.parse().unwrap_or_default();
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

proptest! {
    // -- constant-product invariant -----------------------------------------

    #[test]
    fn k_never_decreases_across_a_swap(
        reserve0 in 1u128..1_000_000_000_000,
        reserve1 in 1u128..1_000_000_000_000,
        input in 1u128..1_000_000_000,
    ) {
        let pair = make_pair(reserve0, reserve1);
        match pair.output_amount(&amount(&tok(1), input)) {
            Ok((_, next)) => {
                let k_before = pair.reserve0().raw() * pair.reserve1().raw();
                let k_after = next.reserve0().raw() * next.reserve1().raw();
                prop_assert!(k_after >= k_before);
            }
            // Dust inputs floor to a zero output; nothing to check.
            Err(DexError::InsufficientInputAmount) => {}
            Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
        }
    }

    // -- ceiling round-trip --------------------------------------------------

    #[test]
    fn replayed_input_never_under_quotes(
        reserve0 in 1_000u128..1_000_000_000_000,
        reserve1 in 1_000u128..1_000_000_000_000,
        input in 1u128..1_000_000_000,
    ) {
        // Bounding the input keeps the replayed output below half the
        // remaining reserve, where input_amount is defined.
        let input = input.min(reserve0 / 4).max(1);
        let pair = make_pair(reserve0, reserve1);
        match pair.output_amount(&amount(&tok(1), input)) {
            Ok((output, next)) => {
                let (replayed, _) = next
                    .input_amount(&output)
                    .map_err(|e| TestCaseError::fail(format!("replay failed: {e}")))?;
                prop_assert!(replayed.raw() >= &BigInt::from(input));
            }
            Err(DexError::InsufficientInputAmount) => {}
            Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
        }
    }

    #[test]
    fn quoted_input_covers_requested_output(
        reserve0 in 1_000u128..1_000_000_000_000,
        reserve1 in 1_000u128..1_000_000_000_000,
        output in 1u128..1_000_000_000,
    ) {
        let output = output.min(reserve1 / 2).max(1);
        let pair = make_pair(reserve0, reserve1);
        let (quoted, _) = pair
            .input_amount(&amount(&tok(2), output))
            .map_err(|e| TestCaseError::fail(format!("quote failed: {e}")))?;
        let (executed, _) = pair
            .output_amount(&quoted)
            .map_err(|e| TestCaseError::fail(format!("execution failed: {e}")))?;
        prop_assert!(executed.raw() >= &BigInt::from(output));
    }

    // -- address determinism -------------------------------------------------

    #[test]
    fn pair_address_is_order_independent(a in 1u8..128, b in 129u8..=255) {
        let (ta, tb) = (tok(a), tok(b));
        let ab = Pair::address(&ta, &tb)
            .map_err(|e| TestCaseError::fail(format!("derivation failed: {e}")))?;
        let ba = Pair::address(&tb, &ta)
            .map_err(|e| TestCaseError::fail(format!("derivation failed: {e}")))?;
        let again = Pair::address(&ta, &tb)
            .map_err(|e| TestCaseError::fail(format!("derivation failed: {e}")))?;
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(ab, again);
    }

    // -- rendering consistency -----------------------------------------------

    #[test]
    fn to_fixed_round_down_reparses_to_the_floor(
        numerator in 0i64..1_000_000_000,
        denominator in 1i64..1_000_000,
        places in 0usize..6,
    ) {
        let fraction = Fraction::new(numerator, denominator)
            .map_err(|e| TestCaseError::fail(format!("bad fraction: {e}")))?;
        let rendered = fraction.to_fixed(places, &Format::default(), Rounding::Down);
        let reparsed = reparse_scaled(&rendered, places);
        // reparsed = ⌊numerator × 10^places / denominator⌋, exactly.
        let scaled = BigInt::from(numerator) * pow10(places);
        let denominator = BigInt::from(denominator);
        prop_assert!(&reparsed * &denominator <= scaled);
        prop_assert!((reparsed + 1) * &denominator > scaled);
    }

    #[test]
    fn to_fixed_round_up_reparses_to_the_ceiling(
        numerator in 0i64..1_000_000_000,
        denominator in 1i64..1_000_000,
        places in 0usize..6,
    ) {
        let fraction = Fraction::new(numerator, denominator)
            .map_err(|e| TestCaseError::fail(format!("bad fraction: {e}")))?;
        let rendered = fraction.to_fixed(places, &Format::default(), Rounding::Up);
        let reparsed = reparse_scaled(&rendered, places);
        let scaled = BigInt::from(numerator) * pow10(places);
        let denominator = BigInt::from(denominator);
        prop_assert!(&reparsed * &denominator >= scaled);
        prop_assert!((reparsed - 1) * &denominator < scaled);
    }

    #[test]
    fn to_fixed_half_up_is_within_half_a_unit(
        numerator in 0i64..1_000_000_000,
        denominator in 1i64..1_000_000,
        places in 0usize..6,
    ) {
        let fraction = Fraction::new(numerator, denominator)
            .map_err(|e| TestCaseError::fail(format!("bad fraction: {e}")))?;
        let rendered = fraction.to_fixed(places, &Format::default(), Rounding::HalfUp);
        let reparsed = reparse_scaled(&rendered, places);
        let scaled = BigInt::from(numerator) * pow10(places);
        let denominator = BigInt::from(denominator);
        // |reparsed × d − n × 10^p| ≤ d / 2, i.e. within half a unit of the
        // last rendered place.
        let difference = &reparsed * &denominator - scaled;
        let doubled = if difference >= BigInt::from(0) {
            &difference + &difference
        } else {
            -(&difference + &difference)
        };
        prop_assert!(doubled <= denominator);
    }
}
