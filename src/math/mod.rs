//! Exact arithmetic primitives underlying every amount, price, and pool
//! formula.
//!
//! This module provides [`Fraction`] (arbitrary-precision rationals),
//! [`Rounding`] (explicit rounding policy at every lossy boundary), and
//! [`Format`] (decimal presentation options).

mod fraction;
mod rounding;

pub(crate) use fraction::{pow10, trim_fractional_zeros};

pub use fraction::{Format, Fraction};
pub use rounding::Rounding;
