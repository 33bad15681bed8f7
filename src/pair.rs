//! Constant-product liquidity pools.
//!
//! A [`Pair`] holds the reserves of a two-token pool and answers quoting and
//! liquidity questions with exact integer arithmetic. The swap invariant is
//! `reserve0 × reserve1 = k`; a 0.3% fee is taken from the input side, so
//! `k` never decreases across a swap.
//!
//! # Swap formulas
//!
//! Exact output for a given input (fee applied to the input first):
//!
//! 1. `input_with_fee = input × 997`
//! 2. `output = ⌊input_with_fee × reserve_out / (reserve_in × 1000 + input_with_fee)⌋`
//!
//! Exact input for a desired output (the `+1` makes the quote a ceiling:
//! truncation must never leave the trader one unit short):
//!
//! 1. `input = ⌊reserve_in × output × 1000 / ((reserve_out − output) × 997)⌋ + 1`
//!
//! Quoting never mutates a pair; both quote operations return the
//! hypothetical post-swap [`Pair`] alongside the quoted amount.

use alloy_primitives::{keccak256, Address};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tracing::trace;

use crate::constants::{
    LIQUIDITY_TOKEN_DECIMALS, LIQUIDITY_TOKEN_NAME, LIQUIDITY_TOKEN_SYMBOL, MINIMUM_LIQUIDITY,
    PAIR_INIT_CODE_HASH, SWAP_FEE_DENOMINATOR, SWAP_FEE_NUMERATOR,
};
use crate::domain::{ChainId, Currency, Price, Token, TokenAmount};
use crate::error::{DexError, Result};

/// A two-token constant-product pool.
///
/// Reserves are stored in canonical order (token addresses ascending), so a
/// pair built from `(B, A)` equals one built from `(A, B)`. The liquidity
/// token is a synthetic 18-decimals token representing pool shares, whose
/// address is the pool's deterministically derived on-chain address.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use cascade_sdk::domain::{ChainId, Token, TokenAmount};
/// use cascade_sdk::pair::Pair;
///
/// let t0 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000001"), 18, None, None);
/// let t1 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000002"), 18, None, None);
///
/// let pair = Pair::new(
///     TokenAmount::new(t0.clone(), 1_000u64).expect("in range"),
///     TokenAmount::new(t1, 1_000u64).expect("in range"),
/// )
/// .expect("distinct tokens on one chain");
///
/// let input = TokenAmount::new(t0, 100u64).expect("in range");
/// let (output, _next) = pair.output_amount(&input).expect("liquid pool");
/// assert_eq!(output.raw(), &num_bigint::BigInt::from(90));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    token_amounts: [TokenAmount; 2],
    liquidity_token: Token,
}

impl Pair {
    /// Creates a pair from its two reserves, sorting them into canonical
    /// order and deriving the liquidity token.
    ///
    /// # Errors
    ///
    /// - [`DexError::ChainMismatch`] if the tokens live on different chains.
    /// - [`DexError::EqualAddresses`] if both amounts name the same token.
    pub fn new(amount_a: TokenAmount, amount_b: TokenAmount) -> Result<Self> {
        let token_amounts = if amount_a.token().sorts_before(amount_b.token())? {
            [amount_a, amount_b]
        } else {
            [amount_b, amount_a]
        };
        let chain_id = token_amounts[0].token().chain_id();
        let address = Self::address(token_amounts[0].token(), token_amounts[1].token())?;
        let liquidity_token = Token::new(
            chain_id,
            address,
            LIQUIDITY_TOKEN_DECIMALS,
            Some(LIQUIDITY_TOKEN_SYMBOL.to_string()),
            Some(LIQUIDITY_TOKEN_NAME.to_string()),
        );
        Ok(Self {
            token_amounts,
            liquidity_token,
        })
    }

    /// Derives the pool's on-chain address for two tokens.
    ///
    /// The derivation is the CREATE2 contract of the chain's factory:
    /// `CREATE2(factory, keccak256(token0 ‖ token1), init_code_hash)` over
    /// the canonically sorted token addresses. A pure function of its
    /// inputs: same tokens, same address, in either argument order. Callers
    /// deriving many addresses can memoize through
    /// [`AddressCache`](crate::cache::AddressCache).
    ///
    /// # Errors
    ///
    /// - [`DexError::ChainMismatch`] if the tokens live on different chains.
    /// - [`DexError::EqualAddresses`] if both tokens share one address.
    pub fn address(token_a: &Token, token_b: &Token) -> Result<Address> {
        let (token0, token1) = if token_a.sorts_before(token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        let mut packed = [0u8; 40];
        packed[..20].copy_from_slice(token0.address().as_slice());
        packed[20..].copy_from_slice(token1.address().as_slice());
        let salt = keccak256(packed);
        let address = token0
            .chain_id()
            .factory()
            .create2(salt, PAIR_INIT_CODE_HASH);
        trace!(?address, token0 = ?token0.address(), token1 = ?token1.address(), "derived pair address");
        Ok(address)
    }

    /// Returns the synthetic pool-share token.
    #[must_use]
    pub const fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    /// Returns the chain both tokens live on.
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.token_amounts[0].token().chain_id()
    }

    /// Returns the canonically first token.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        self.token_amounts[0].token()
    }

    /// Returns the canonically second token.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        self.token_amounts[1].token()
    }

    /// Returns the reserve of [`Pair::token0`].
    #[must_use]
    pub const fn reserve0(&self) -> &TokenAmount {
        &self.token_amounts[0]
    }

    /// Returns the reserve of [`Pair::token1`].
    #[must_use]
    pub const fn reserve1(&self) -> &TokenAmount {
        &self.token_amounts[1]
    }

    /// Returns `true` if `token` is one of the pair's two tokens.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    /// Returns the reserve denominated in `token`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::TokenMismatch`] if `token` is not in the pair.
    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount> {
        if token == self.token0() {
            Ok(self.reserve0())
        } else if token == self.token1() {
            Ok(self.reserve1())
        } else {
            Err(DexError::TokenMismatch("token is not part of this pair"))
        }
    }

    /// The counterpart of `token` within the pair.
    fn other_token(&self, token: &Token) -> Result<&Token> {
        if token == self.token0() {
            Ok(self.token1())
        } else if token == self.token1() {
            Ok(self.token0())
        } else {
            Err(DexError::TokenMismatch("token is not part of this pair"))
        }
    }

    /// The mid price of token0 in terms of token1: `reserve1 / reserve0`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if the token0 reserve is empty.
    pub fn token0_price(&self) -> Result<Price> {
        Price::new(
            Currency::Token(self.token0().clone()),
            Currency::Token(self.token1().clone()),
            self.reserve0().raw().clone(),
            self.reserve1().raw().clone(),
        )
    }

    /// The mid price of token1 in terms of token0: `reserve0 / reserve1`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if the token1 reserve is empty.
    pub fn token1_price(&self) -> Result<Price> {
        Price::new(
            Currency::Token(self.token1().clone()),
            Currency::Token(self.token0().clone()),
            self.reserve1().raw().clone(),
            self.reserve0().raw().clone(),
        )
    }

    /// The mid price of `token` in terms of the pair's other token.
    ///
    /// # Errors
    ///
    /// - [`DexError::TokenMismatch`] if `token` is not in the pair.
    /// - [`DexError::ZeroDenominator`] if `token`'s reserve is empty.
    pub fn price_of(&self, token: &Token) -> Result<Price> {
        if !self.involves_token(token) {
            return Err(DexError::TokenMismatch("token is not part of this pair"));
        }
        if token == self.token0() {
            self.token0_price()
        } else {
            self.token1_price()
        }
    }

    /// Quotes the output for an exact input, fee taken from the input side.
    ///
    /// Returns the floored output amount and the hypothetical post-swap
    /// pair; `self` is never mutated.
    ///
    /// # Errors
    ///
    /// - [`DexError::TokenMismatch`] if the input token is not in the pair.
    /// - [`DexError::InsufficientReserves`] if either reserve is zero.
    /// - [`DexError::InsufficientInputAmount`] if the floored output is
    ///   zero.
    pub fn output_amount(&self, input: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        if !self.involves_token(input.token()) {
            return Err(DexError::TokenMismatch("input token is not in this pair"));
        }
        if self.reserve0().is_zero() || self.reserve1().is_zero() {
            return Err(DexError::InsufficientReserves);
        }
        let input_reserve = self.reserve_of(input.token())?;
        let output_token = self.other_token(input.token())?;
        let output_reserve = self.reserve_of(output_token)?;

        let input_with_fee = input.raw() * BigInt::from(SWAP_FEE_NUMERATOR);
        let numerator = &input_with_fee * output_reserve.raw();
        let denominator = input_reserve.raw() * BigInt::from(SWAP_FEE_DENOMINATOR) + &input_with_fee;
        let output_raw = numerator / denominator;
        if output_raw.is_zero() {
            return Err(DexError::InsufficientInputAmount);
        }
        let output = TokenAmount::new(output_token.clone(), output_raw)?;

        let next = Pair::new(input_reserve.add(input)?, output_reserve.subtract(&output)?)?;
        Ok((output, next))
    }

    /// Quotes the input needed for an exact output. The trailing `+1` makes
    /// this a ceiling: the quoted input is always sufficient, never one
    /// unit short from truncation.
    ///
    /// Returns the input amount and the hypothetical post-swap pair.
    ///
    /// # Errors
    ///
    /// - [`DexError::TokenMismatch`] if the output token is not in the pair.
    /// - [`DexError::InsufficientReserves`] if either reserve is zero or the
    ///   requested output meets or exceeds its reserve.
    pub fn input_amount(&self, output: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        if !self.involves_token(output.token()) {
            return Err(DexError::TokenMismatch("output token is not in this pair"));
        }
        if self.reserve0().is_zero()
            || self.reserve1().is_zero()
            || output.raw() >= self.reserve_of(output.token())?.raw()
        {
            return Err(DexError::InsufficientReserves);
        }
        let output_reserve = self.reserve_of(output.token())?;
        let input_token = self.other_token(output.token())?;
        let input_reserve = self.reserve_of(input_token)?;

        let numerator =
            input_reserve.raw() * output.raw() * BigInt::from(SWAP_FEE_DENOMINATOR);
        let denominator =
            (output_reserve.raw() - output.raw()) * BigInt::from(SWAP_FEE_NUMERATOR);
        let input_raw = numerator / denominator + 1;
        let input = TokenAmount::new(input_token.clone(), input_raw)?;

        let next = Pair::new(input_reserve.add(&input)?, output_reserve.subtract(output)?)?;
        Ok((input, next))
    }

    /// Values a liquidity deposit in pool shares.
    ///
    /// On the first mint (zero total supply) the minted liquidity is
    /// `⌊√(amount0 × amount1)⌋ − MINIMUM_LIQUIDITY`; the minimum is burned
    /// forever so the share price cannot be manipulated by a dust deposit.
    /// On subsequent mints it is the smaller of the two proportional
    /// contributions: `min(⌊a0 × supply / r0⌋, ⌊a1 × supply / r1⌋)`.
    ///
    /// # Errors
    ///
    /// - [`DexError::LiquidityMismatch`] if `total_supply` is not
    ///   denominated in this pair's liquidity token.
    /// - [`DexError::TokenMismatch`] if the two amounts are not this pair's
    ///   tokens.
    /// - [`DexError::InsufficientInputAmount`] if the minted amount is not
    ///   strictly positive.
    pub fn liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount> {
        if total_supply.token() != &self.liquidity_token {
            return Err(DexError::LiquidityMismatch(
                "total supply must be denominated in the pair's liquidity token",
            ));
        }
        let (amount0, amount1) = if amount_a.token().sorts_before(amount_b.token())? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        if amount0.token() != self.token0() || amount1.token() != self.token1() {
            return Err(DexError::TokenMismatch(
                "deposit amounts must match the pair's tokens",
            ));
        }

        let liquidity = if total_supply.raw().is_zero() {
            (amount0.raw() * amount1.raw()).sqrt() - BigInt::from(MINIMUM_LIQUIDITY)
        } else {
            if self.reserve0().is_zero() || self.reserve1().is_zero() {
                return Err(DexError::InsufficientReserves);
            }
            let share0 = amount0.raw() * total_supply.raw() / self.reserve0().raw();
            let share1 = amount1.raw() * total_supply.raw() / self.reserve1().raw();
            core::cmp::min(share0, share1)
        };
        if !liquidity.is_positive() {
            return Err(DexError::InsufficientInputAmount);
        }
        TokenAmount::new(self.liquidity_token.clone(), liquidity)
    }

    /// Values a liquidity position in one of the pair's tokens.
    ///
    /// With the protocol fee switch on and a non-zero `k_last`, the
    /// effective total supply first grows by the fee liquidity accrued since
    /// `k_last`: with `root_k = √(r0 × r1)` and `root_k_last = √k_last`,
    /// when `root_k > root_k_last` the supply gains
    /// `supply × (root_k − root_k_last) / (5 × root_k + root_k_last)`.
    /// The redeemable value is then
    /// `⌊liquidity × reserve_of(token) / adjusted_supply⌋`.
    ///
    /// # Errors
    ///
    /// - [`DexError::TokenMismatch`] if `token` is not in the pair.
    /// - [`DexError::LiquidityMismatch`] if either supply amount is not
    ///   denominated in the liquidity token, or `liquidity > total_supply`.
    /// - [`DexError::MissingKLast`] if `fee_on` without a `k_last` value.
    /// - [`DexError::AmountOverflow`] if `k_last` is negative.
    pub fn liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<&BigInt>,
    ) -> Result<TokenAmount> {
        if !self.involves_token(token) {
            return Err(DexError::TokenMismatch("token is not part of this pair"));
        }
        if total_supply.token() != &self.liquidity_token {
            return Err(DexError::LiquidityMismatch(
                "total supply must be denominated in the pair's liquidity token",
            ));
        }
        if liquidity.token() != &self.liquidity_token {
            return Err(DexError::LiquidityMismatch(
                "liquidity must be denominated in the pair's liquidity token",
            ));
        }
        if liquidity.raw() > total_supply.raw() {
            return Err(DexError::LiquidityMismatch(
                "liquidity exceeds the total supply",
            ));
        }

        let adjusted_supply = if fee_on {
            let k_last = k_last.ok_or(DexError::MissingKLast)?;
            if k_last.is_negative() {
                return Err(DexError::AmountOverflow);
            }
            if k_last.is_zero() {
                total_supply.raw().clone()
            } else {
                let root_k = (self.reserve0().raw() * self.reserve1().raw()).sqrt();
                let root_k_last = k_last.sqrt();
                if root_k > root_k_last {
                    let numerator = total_supply.raw() * (&root_k - &root_k_last);
                    let denominator = &root_k * BigInt::from(5) + &root_k_last;
                    let fee_liquidity = numerator / denominator;
                    total_supply.raw() + fee_liquidity
                } else {
                    total_supply.raw().clone()
                }
            }
        } else {
            total_supply.raw().clone()
        };

        if adjusted_supply.is_zero() {
            return Err(DexError::LiquidityMismatch("total supply is zero"));
        }
        let value = liquidity.raw() * self.reserve_of(token)?.raw() / adjusted_supply;
        TokenAmount::new(token.clone(), value)
    }
}
