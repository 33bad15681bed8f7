//! Native-versus-token currency model.

use super::{ChainId, Token};

/// A chain's native currency (gas coin).
///
/// One well-known instance exists per chain, obtained from
/// [`ChainId::native_currency`]. Pools never hold the native currency
/// directly; routes alias it to the chain's wrapped-native token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeCurrency {
    chain_id: ChainId,
    decimals: u8,
    symbol: &'static str,
    name: &'static str,
}

impl NativeCurrency {
    /// Constructed only through the per-chain table in [`ChainId`].
    pub(crate) const fn new(
        chain_id: ChainId,
        decimals: u8,
        symbol: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            chain_id,
            decimals,
            symbol,
            name,
        }
    }

    /// Returns the chain this currency is native to.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the decimal places of the smallest unit.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the currency symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Returns the currency name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Any fungible financial instrument on a supported chain: the native
/// currency, or an ERC-20 token.
///
/// A closed tagged variant, exhaustively matched wherever the two kinds
/// behave differently (equality, route aliasing, quote output selection).
///
/// # Examples
///
/// ```
/// use cascade_sdk::domain::{ChainId, Currency};
///
/// let avax = Currency::native(ChainId::Fuji);
/// assert!(avax.is_native());
/// // The wrapped view is what pools actually hold.
/// assert_eq!(avax.wrapped(), ChainId::Fuji.wrapped_native());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// A chain's native currency.
    Native(NativeCurrency),
    /// An ERC-20 token.
    Token(Token),
}

impl Currency {
    /// The native currency of `chain_id`.
    #[must_use]
    pub fn native(chain_id: ChainId) -> Self {
        Self::Native(chain_id.native_currency())
    }

    /// Returns the chain this currency lives on.
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        match self {
            Self::Native(native) => native.chain_id(),
            Self::Token(token) => token.chain_id(),
        }
    }

    /// Returns the decimal places of the smallest unit.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        match self {
            Self::Native(native) => native.decimals(),
            Self::Token(token) => token.decimals(),
        }
    }

    /// Returns the symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Native(native) => Some(native.symbol()),
            Self::Token(token) => token.symbol(),
        }
    }

    /// Returns the name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Native(native) => Some(native.name()),
            Self::Token(token) => token.name(),
        }
    }

    /// Returns `true` for a native currency.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Returns `true` for a token.
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Returns the token, if this currency is one.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Native(_) => None,
            Self::Token(token) => Some(token),
        }
    }

    /// The token form pools trade: a native currency maps to its chain's
    /// wrapped-native token, a token maps to itself.
    #[must_use]
    pub fn wrapped(&self) -> Token {
        match self {
            Self::Native(native) => native.chain_id().wrapped_native(),
            Self::Token(token) => token.clone(),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}
