//! Chain-scoped token identity.

use core::hash::{Hash, Hasher};

use alloy_primitives::Address;

use super::ChainId;
use crate::error::{DexError, Result};

/// An ERC-20 token: a chain id, a contract address, and display metadata.
///
/// Identity is `(chain_id, address)`: two tokens are equal iff they live on
/// the same chain at the same address, regardless of decimals or symbol.
/// Address comparison is byte-level; hex-case normalization is owned by the
/// [`Address`] type at parse time, so there is no string normalization here.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use cascade_sdk::domain::{ChainId, Token};
///
/// let a = Token::new(
///     ChainId::Fuji,
///     address!("0000000000000000000000000000000000000001"),
///     18,
///     Some("T0".to_string()),
///     None,
/// );
/// let b = Token::new(
///     ChainId::Fuji,
///     address!("0000000000000000000000000000000000000002"),
///     18,
///     Some("T1".to_string()),
///     None,
/// );
/// assert!(a.sorts_before(&b).expect("same chain, distinct addresses"));
/// ```
#[derive(Debug, Clone)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    /// Creates a new token. The `u8` decimals parameter carries the
    /// unsigned-8-bit range constraint by type.
    #[must_use]
    pub fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol,
            name,
        }
    }

    /// Returns the chain this token lives on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the token's contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the decimal places of the smallest unit.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the token symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the token name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Canonical ordering used to fix pair orientation: `true` if this
    /// token's address sorts before `other`'s.
    ///
    /// # Errors
    ///
    /// - [`DexError::ChainMismatch`] if the tokens live on different chains.
    /// - [`DexError::EqualAddresses`] if both share one address; ordering
    ///   two handles to the same token is an invariant violation.
    pub fn sorts_before(&self, other: &Self) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(DexError::ChainMismatch(
                "tokens on different chains have no ordering",
            ));
        }
        if self.address == other.address {
            return Err(DexError::EqualAddresses(
                "canonical ordering requires distinct tokens",
            ));
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn tok(chain: ChainId, last_byte: u8, decimals: u8) -> Token {
        let mut bytes = [0u8; 20];
        bytes[19] = last_byte;
        Token::new(chain, Address::from(bytes), decimals, None, None)
    }

    #[test]
    fn equality_ignores_metadata() {
        let plain = tok(ChainId::Fuji, 1, 18);
        let labelled = Token::new(
            ChainId::Fuji,
            plain.address(),
            6,
            Some("TKN".to_string()),
            Some("Token".to_string()),
        );
        assert_eq!(plain, labelled);
    }

    #[test]
    fn equality_requires_same_chain() {
        assert_ne!(tok(ChainId::Fuji, 1, 18), tok(ChainId::Polygon, 1, 18));
    }

    #[test]
    fn equality_requires_same_address() {
        assert_ne!(tok(ChainId::Fuji, 1, 18), tok(ChainId::Fuji, 2, 18));
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(tok(ChainId::Fuji, 1, 18));
        // Same identity, different metadata: no second entry.
        assert!(!set.insert(tok(ChainId::Fuji, 1, 6)));
        assert!(set.insert(tok(ChainId::Fuji, 2, 18)));
    }

    #[test]
    fn sorts_before_is_byte_order() {
        let lo = tok(ChainId::Fuji, 1, 18);
        let hi = tok(ChainId::Fuji, 2, 18);
        assert_eq!(lo.sorts_before(&hi), Ok(true));
        assert_eq!(hi.sorts_before(&lo), Ok(false));
    }

    #[test]
    fn sorts_before_rejects_cross_chain() {
        let a = tok(ChainId::Fuji, 1, 18);
        let b = tok(ChainId::Polygon, 2, 18);
        assert!(matches!(
            a.sorts_before(&b),
            Err(DexError::ChainMismatch(_))
        ));
    }

    #[test]
    fn sorts_before_rejects_equal_addresses() {
        let a = tok(ChainId::Fuji, 1, 18);
        let b = tok(ChainId::Fuji, 1, 6);
        assert!(matches!(
            a.sorts_before(&b),
            Err(DexError::EqualAddresses(_))
        ));
    }

    #[test]
    fn address_parse_normalizes_case() {
        // Mixed-case and lowercase spellings of one address are one token.
        let checksummed = Token::new(
            ChainId::Fuji,
            address!("d00ae08403b9bbb9124bb305c09058e32c39a48c"),
            18,
            None,
            None,
        );
        let wrapped = ChainId::Fuji.wrapped_native();
        assert_eq!(checksummed, wrapped);
    }
}
