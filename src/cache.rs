//! Explicit memoization caches for pure per-key derivations.
//!
//! The two lookup tables here are owned by the caller and passed to (or held
//! next to) whatever component needs them; there is no process-global
//! state. Entries are never invalidated: both derivations are pure functions
//! of their keys, so a racing or duplicate computation produces the same
//! value and is harmless.

use std::collections::HashMap;

use alloy_primitives::Address;
use parking_lot::RwLock;
use tracing::trace;

use crate::domain::{ChainId, Token};
use crate::error::Result;
use crate::pair::Pair;

/// Memoizes pool addresses by canonical token pair.
///
/// Derivation hashes twice per call; callers constructing many [`Pair`]s
/// over the same token sets (a fetch layer, a route searcher) keep one of
/// these next to the component and go through [`AddressCache::pair_address`]
/// instead of [`Pair::address`]. Reads take a shared lock; a miss upgrades
/// to a short exclusive lock around the insert.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use cascade_sdk::cache::AddressCache;
/// use cascade_sdk::domain::{ChainId, Token};
///
/// let t0 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000001"), 18, None, None);
/// let t1 = Token::new(ChainId::Fuji, address!("0000000000000000000000000000000000000002"), 18, None, None);
///
/// let cache = AddressCache::new();
/// let first = cache.pair_address(&t0, &t1).expect("valid tokens");
/// let second = cache.pair_address(&t1, &t0).expect("valid tokens");
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Default)]
pub struct AddressCache {
    entries: RwLock<HashMap<(Address, Address), Address>>,
}

impl AddressCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool address for two tokens, deriving and memoizing it on
    /// first use. Order-independent: the key is the canonically sorted
    /// address pair.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Pair::address`]:
    /// [`DexError::ChainMismatch`](crate::DexError::ChainMismatch) and
    /// [`DexError::EqualAddresses`](crate::DexError::EqualAddresses).
    pub fn pair_address(&self, token_a: &Token, token_b: &Token) -> Result<Address> {
        let key = if token_a.sorts_before(token_b)? {
            (token_a.address(), token_b.address())
        } else {
            (token_b.address(), token_a.address())
        };
        if let Some(cached) = self.entries.read().get(&key) {
            return Ok(*cached);
        }
        let derived = Pair::address(token_a, token_b)?;
        trace!(token0 = ?key.0, token1 = ?key.1, "pair address cache miss");
        self.entries.write().insert(key, derived);
        Ok(derived)
    }

    /// Returns the number of memoized addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Memoizes token decimals by chain and address.
///
/// The core never performs I/O: the excluded ledger-fetch collaborator
/// resolves `(chain_id, token_address) → decimals` remotely and records the
/// answer here, so repeat lookups stay local.
#[derive(Debug, Default)]
pub struct DecimalsCache {
    entries: RwLock<HashMap<(ChainId, Address), u8>>,
}

impl DecimalsCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized decimals for a token, if known.
    #[must_use]
    pub fn get(&self, chain_id: ChainId, address: Address) -> Option<u8> {
        self.entries.read().get(&(chain_id, address)).copied()
    }

    /// Records the decimals for a token.
    pub fn insert(&self, chain_id: ChainId, address: Address, decimals: u8) {
        self.entries.write().insert((chain_id, address), decimals);
    }

    /// Returns the memoized decimals, computing and recording them through
    /// `resolve` on a miss.
    pub fn get_or_insert_with(
        &self,
        chain_id: ChainId,
        address: Address,
        resolve: impl FnOnce() -> u8,
    ) -> u8 {
        if let Some(decimals) = self.get(chain_id, address) {
            return decimals;
        }
        let decimals = resolve();
        trace!(chain = chain_id.id(), ?address, decimals, "decimals cache miss");
        self.entries.write().insert((chain_id, address), decimals);
        decimals
    }

    /// Returns the number of memoized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
