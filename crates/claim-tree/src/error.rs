//! Error types for claim tree construction and proof generation.

use thiserror::Error;

/// Errors raised while building a tree or extracting proofs.
///
/// Proof *verification* never errors; it only returns `false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot build a claim tree over an empty allocation set")]
    Empty,

    #[error("leaf index {index} out of bounds for tree with {leaf_count} leaves")]
    IndexOutOfBounds { index: u64, leaf_count: usize },
}
