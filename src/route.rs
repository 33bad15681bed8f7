//! Multi-hop swap routes.

use tracing::debug;

use crate::domain::{ChainId, Currency, Price, Token};
use crate::error::{DexError, Result};
use crate::pair::Pair;

/// An ordered chain of pairs connecting an input currency to an output
/// currency through shared tokens.
///
/// Construction validates the whole chain: every pair on one chain, the
/// endpoints members of the terminal pairs, and each consecutive pair
/// sharing exactly the hop token with its predecessor. A native currency at
/// either end stands in for the chain's wrapped-native token inside the
/// pools. The route's aggregate mid price is folded once at construction.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use cascade_sdk::domain::{ChainId, Currency, Token, TokenAmount};
/// use cascade_sdk::pair::Pair;
/// use cascade_sdk::route::Route;
///
/// let t0 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000001"), 18, None, None);
/// let t1 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000002"), 18, None, None);
///
/// let pair = Pair::new(
///     TokenAmount::new(t0.clone(), 1_000u64).expect("in range"),
///     TokenAmount::new(t1.clone(), 2_000u64).expect("in range"),
/// )
/// .expect("valid pair");
///
/// let route = Route::new(vec![pair], Currency::Token(t0), None).expect("connected route");
/// assert_eq!(route.path().len(), 2);
/// assert_eq!(route.output(), &Currency::Token(t1));
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    pairs: Vec<Pair>,
    path: Vec<Token>,
    input: Currency,
    output: Currency,
    mid_price: Price,
}

impl Route {
    /// Builds and validates a route from `input` through `pairs`.
    ///
    /// When `output` is omitted it defaults to the last token of the walked
    /// path.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidRoute`] for an empty pair list, an endpoint that
    ///   is not a member of its terminal pair, or a disconnected chain.
    /// - [`DexError::ChainMismatch`] if the pairs span multiple chains or an
    ///   endpoint currency belongs to another chain.
    /// - [`DexError::ZeroDenominator`] if a hop pair has an empty base
    ///   reserve, making the mid price undefined.
    pub fn new(pairs: Vec<Pair>, input: Currency, output: Option<Currency>) -> Result<Self> {
        let Some(first) = pairs.first() else {
            return Err(DexError::InvalidRoute("route requires at least one pair"));
        };
        let chain_id = first.chain_id();
        if pairs.iter().any(|pair| pair.chain_id() != chain_id) {
            return Err(DexError::ChainMismatch("route pairs span multiple chains"));
        }
        if !Self::is_member(&input, first, chain_id) {
            return Err(DexError::InvalidRoute(
                "input currency is not a member of the first pair",
            ));
        }
        if let Some(output) = &output {
            let last = &pairs[pairs.len() - 1];
            if !Self::is_member(output, last, chain_id) {
                return Err(DexError::InvalidRoute(
                    "output currency is not a member of the last pair",
                ));
            }
        }

        let mut current = input.wrapped();
        let mut path = Vec::with_capacity(pairs.len() + 1);
        path.push(current.clone());
        for pair in &pairs {
            let next = if &current == pair.token0() {
                pair.token1().clone()
            } else if &current == pair.token1() {
                pair.token0().clone()
            } else {
                return Err(DexError::InvalidRoute(
                    "path is disconnected: a pair does not involve the previous hop token",
                ));
            };
            path.push(next.clone());
            current = next;
        }

        let mid_price = Price::fold_hops(&pairs, &path)?;
        let output = match output {
            Some(output) => output,
            None => Currency::Token(path[path.len() - 1].clone()),
        };
        debug!(hops = pairs.len(), chain = chain_id.id(), "constructed route");

        Ok(Self {
            pairs,
            path,
            input,
            output,
            mid_price,
        })
    }

    /// A currency is a member of a pair directly, or as the chain's native
    /// currency standing in for the wrapped-native token.
    fn is_member(currency: &Currency, pair: &Pair, chain_id: ChainId) -> bool {
        match currency {
            Currency::Token(token) => pair.involves_token(token),
            Currency::Native(native) => {
                *native == chain_id.native_currency()
                    && pair.involves_token(&chain_id.wrapped_native())
            }
        }
    }

    /// Returns the pairs, in hop order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Returns the token path; always one longer than the pair list.
    #[must_use]
    pub fn path(&self) -> &[Token] {
        &self.path
    }

    /// Returns the route's input currency.
    #[must_use]
    pub const fn input(&self) -> &Currency {
        &self.input
    }

    /// Returns the route's output currency.
    #[must_use]
    pub const fn output(&self) -> &Currency {
        &self.output
    }

    /// The aggregate mid price from input to output, computed at
    /// construction.
    #[must_use]
    pub const fn mid_price(&self) -> &Price {
        &self.mid_price
    }

    /// Returns the chain every pair of this route lives on.
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.pairs[0].chain_id()
    }
}
