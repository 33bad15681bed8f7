//! Protocol-level constants shared by the pool engine.
//!
//! The swap fee and minimum-liquidity values mirror the deployed pair
//! contracts; changing them here without redeploying the factory would make
//! every quote and every derived address wrong.

use alloy_primitives::{b256, B256};

/// Numerator of the input-side swap fee: the pool keeps 3 per 1000.
pub const SWAP_FEE_NUMERATOR: u32 = 997;

/// Denominator of the input-side swap fee.
pub const SWAP_FEE_DENOMINATOR: u32 = 1_000;

/// Liquidity permanently burned on the first mint of a pool, guarding the
/// share price against manipulation.
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

/// keccak256 of the pair contract creation bytecode. A single constant: the
/// same bytecode is deployed behind every supported factory.
pub const PAIR_INIT_CODE_HASH: B256 =
    b256!("40231f6b438bce0797c9ada29b718a87ea0a5cea3fe9a771abdd76bd41a3e545");

/// Decimals of the synthetic pool-share token.
pub const LIQUIDITY_TOKEN_DECIMALS: u8 = 18;

/// Symbol of the synthetic pool-share token.
pub const LIQUIDITY_TOKEN_SYMBOL: &str = "CSL";

/// Name of the synthetic pool-share token.
pub const LIQUIDITY_TOKEN_NAME: &str = "Cascade Liquidity";
