//! # Cascade SDK — pricing and market-maker math core
//!
//! The exact-arithmetic heart of the Cascade exchange SDK: fungible on-chain
//! assets, raw smallest-unit quantities, exchange-rate fractions, two-token
//! constant-product pools, and multi-hop swap routes composed from them.
//!
//! Everything here is integer math over arbitrary-precision rationals, with
//! no floating point anywhere. Every rounding direction is explicit, because in
//! this domain a rounding direction is a financial-correctness decision:
//! swap outputs floor, quoted inputs ceil, and the constant-product
//! invariant `reserve0 × reserve1` never decreases across a fee-bearing
//! swap. Pool addresses are derived bit-exactly with CREATE2 against each
//! chain's deployed factory.
//!
//! Fetching reserves and decimals from a ledger, encoding swap calls, and
//! searching for the best route live in higher layers; this crate is the
//! math they call into.
//!
//! # Quick start
//!
//! ```rust
//! use alloy_primitives::address;
//! use cascade_sdk::prelude::*;
//!
//! // Two tokens on the Fuji test network.
//! let usdc = Token::new(
//!     ChainId::Fuji,
//!     address!("0000000000000000000000000000000000000001"),
//!     6,
//!     Some("USDC".to_string()),
//!     None,
//! );
//! let wavax = ChainId::Fuji.wrapped_native();
//!
//! // A pool holding both, reserves in raw smallest units.
//! let pair = Pair::new(
//!     TokenAmount::new(usdc.clone(), 30_000_000_000u64).expect("in range"),
//!     TokenAmount::new(wavax, 1_000_000_000_000_000_000_000u128).expect("in range"),
//! )
//! .expect("distinct tokens on one chain");
//!
//! // Quote a swap of 100 USDC; the pair itself is never mutated.
//! let input = TokenAmount::new(usdc.clone(), 100_000_000u64).expect("in range");
//! let (output, _next_pair) = pair.output_amount(&input).expect("liquid pool");
//!
//! // Route from the native currency through the pool.
//! let route = Route::new(vec![pair], Currency::native(ChainId::Fuji), None)
//!     .expect("connected route");
//! assert_eq!(route.path().len(), 2);
//! assert_eq!(route.output(), &Currency::Token(usdc));
//! let _ = output;
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Route      │  connected pair chains, aggregate mid price
//! └──────┬───────┘
//!        │ folds per-hop prices
//!        ▼
//! ┌──────────────┐
//! │     Pair      │  constant-product quoting, liquidity math, CREATE2 address
//! └──────┬───────┘
//!        │ composes
//!        ▼
//! ┌──────────────┐
//! │    domain     │  ChainId, Currency, Token, CurrencyAmount, TokenAmount, Price
//! └──────┬───────┘
//!        │ delegates arithmetic
//!        ▼
//! ┌──────────────┐
//! │     math      │  Fraction, Rounding, Format
//! └──────────────┘
//! ```
//!
//! All entities are immutable once constructed; composite operations return
//! new instances. The only shared mutable state is the caller-owned
//! memoization caches in [`cache`], which hold pure-derivation results and
//! are never invalidated.

pub mod cache;
pub mod constants;
pub mod domain;
pub mod error;
pub mod math;
pub mod pair;
pub mod prelude;
pub mod route;

#[cfg(test)]
mod properties;

pub use error::{DexError, Result};
