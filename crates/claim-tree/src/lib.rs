//! Claim tree builder for accumulating token distributions.
//!
//! Builds the positional SHA-256 Merkle tree whose root gets registered
//! with the on-chain distributor, and produces the per-allocation proofs
//! claimants submit. Leaf and pair hashing here must stay bit-for-bit
//! identical to the program's verifier, which recomputes the same tree
//! path with the SHA-256 syscall.
//!
//! Amounts are cumulative: a later tree may raise an account's amount and
//! the program pays out only the difference over what was already claimed.

pub mod error;
pub mod leaf;
pub mod manifest;
pub mod tree;

pub use error::TreeError;
pub use leaf::{hash_leaf, Allocation, LEAF_ENCODING_LEN};
pub use manifest::{DistributionManifest, ManifestClaim};
pub use tree::{hash_pair, verify_proof, ClaimTree};
