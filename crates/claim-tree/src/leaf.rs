//! Leaf encoding for distribution allocations.
//!
//! One allocation is `(index, account, amount)` where `amount` is the
//! account's cumulative entitlement ceiling, not an increment. The encoding
//! is the fixed-width concatenation
//!
//! `index.to_be_bytes() || account || amount.to_be_bytes()`
//!
//! (8 + 32 + 8 = 48 bytes, no separators; widths are fixed so the
//! concatenation is unambiguous). The leaf node entering the tree is
//! `SHA256(encoding)`.
//!
//! This formula MUST match `hash_leaf()` in the on-chain program, which
//! feeds the same three byte slices to `solana_program::hash::hashv`. Both
//! are standard SHA-256 over identical input bytes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Byte length of one encoded leaf.
pub const LEAF_ENCODING_LEN: usize = 8 + 32 + 8;

/// One allocation record: the leaf of a claim tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Position of this allocation in the sequence the tree was built over.
    pub index: u64,
    /// 32-byte account identifier (a Solana pubkey on-chain).
    pub account: [u8; 32],
    /// Cumulative entitlement ceiling for `account` under this root.
    pub amount: u64,
}

impl Allocation {
    /// Fixed-width byte encoding of this allocation.
    pub fn encode(&self) -> [u8; LEAF_ENCODING_LEN] {
        let mut out = [0u8; LEAF_ENCODING_LEN];
        out[..8].copy_from_slice(&self.index.to_be_bytes());
        out[8..40].copy_from_slice(&self.account);
        out[40..].copy_from_slice(&self.amount.to_be_bytes());
        out
    }

    /// The leaf node for this allocation: `SHA256(encode())`.
    pub fn leaf_hash(&self) -> [u8; 32] {
        hash_leaf(self.index, &self.account, self.amount)
    }
}

/// Compute the leaf node for an `(index, account, amount)` triple.
pub fn hash_leaf(index: u64, account: &[u8; 32], amount: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(index.to_be_bytes());
    hasher.update(account);
    hasher.update(amount.to_be_bytes());
    hasher.finalize().into()
}
