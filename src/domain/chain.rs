//! Supported chains and their deployment constants.

use alloy_primitives::{address, Address};

use super::{NativeCurrency, Token};

/// A chain the exchange is deployed on.
///
/// Each chain carries its deployment constants: the factory that created
/// every pool, the wrapped form of the native currency, and the native
/// currency's metadata. The numeric discriminants are the chains' canonical
/// network ids.
///
/// # Examples
///
/// ```
/// use cascade_sdk::domain::ChainId;
///
/// assert_eq!(ChainId::Fuji.id(), 43_113);
/// assert_eq!(ChainId::Fuji.native_currency().symbol(), "AVAX");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum ChainId {
    /// Polygon mainnet.
    Polygon = 137,
    /// Wagmi test network.
    Wagmi = 11_111,
    /// Avalanche Fuji test network.
    Fuji = 43_113,
}

impl ChainId {
    /// Returns the canonical numeric network id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self as u64
    }

    /// Returns the factory contract that deploys this chain's pools.
    #[must_use]
    pub const fn factory(self) -> Address {
        match self {
            Self::Polygon => address!("c35dadb65012ec5796536bd9864ed8773abc74c4"),
            Self::Wagmi => address!("b9ce09eaa3a1b0a2b8505dcc575d4a96c2a9ab9e"),
            Self::Fuji => address!("e4a575550c2b460d2307b82dcd7afe84ad1484dd"),
        }
    }

    /// Returns this chain's native currency.
    #[must_use]
    pub const fn native_currency(self) -> NativeCurrency {
        match self {
            Self::Polygon => NativeCurrency::new(self, 18, "MATIC", "Polygon"),
            Self::Wagmi => NativeCurrency::new(self, 18, "WGM", "Wagmi"),
            Self::Fuji => NativeCurrency::new(self, 18, "AVAX", "Avalanche"),
        }
    }

    /// Returns the wrapped-native token pools hold in place of the native
    /// currency.
    #[must_use]
    pub fn wrapped_native(self) -> Token {
        match self {
            Self::Polygon => Token::new(
                self,
                address!("0d500b1d8e8ef31e21c99d1db9a6444d3adf1270"),
                18,
                Some("WMATIC".to_string()),
                Some("Wrapped Matic".to_string()),
            ),
            Self::Wagmi => Token::new(
                self,
                address!("3ee7094dadda15810f191dd6acf7e4ffa37571e4"),
                18,
                Some("WWGM".to_string()),
                Some("Wrapped Wagmi".to_string()),
            ),
            Self::Fuji => Token::new(
                self,
                address!("d00ae08403b9bbb9124bb305c09058e32c39a48c"),
                18,
                Some("WAVAX".to_string()),
                Some("Wrapped AVAX".to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids() {
        assert_eq!(ChainId::Polygon.id(), 137);
        assert_eq!(ChainId::Wagmi.id(), 11_111);
        assert_eq!(ChainId::Fuji.id(), 43_113);
    }

    #[test]
    fn factories_are_distinct() {
        assert_ne!(ChainId::Polygon.factory(), ChainId::Fuji.factory());
        assert_ne!(ChainId::Wagmi.factory(), ChainId::Fuji.factory());
    }

    #[test]
    fn native_currency_is_chain_scoped() {
        let fuji = ChainId::Fuji.native_currency();
        assert_eq!(fuji.chain_id(), ChainId::Fuji);
        assert_eq!(fuji.decimals(), 18);
        assert_eq!(fuji.name(), "Avalanche");
        assert_ne!(fuji, ChainId::Polygon.native_currency());
    }

    #[test]
    fn wrapped_native_lives_on_its_chain() {
        let wavax = ChainId::Fuji.wrapped_native();
        assert_eq!(wavax.chain_id(), ChainId::Fuji);
        assert_eq!(wavax.decimals(), 18);
        assert_eq!(wavax.symbol(), Some("WAVAX"));
    }
}
