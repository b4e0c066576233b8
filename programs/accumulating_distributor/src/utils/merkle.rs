use anchor_lang::solana_program::hash::hashv;

/// Compute the leaf hash for one allocation.
///
/// `SHA256(index_be_bytes || account || amount_be_bytes)` over the SHA-256
/// syscall. Must produce the same bytes as the off-chain tree builder, which
/// hashes the identical 48-byte encoding with sha2.
pub fn hash_leaf(index: u64, account: &[u8; 32], amount: u64) -> [u8; 32] {
    hashv(&[&index.to_be_bytes(), account, &amount.to_be_bytes()]).to_bytes()
}

/// Verify a positional merkle proof for the leaf at `index`.
///
/// Folds the proof bottom-up: at each level the index parity decides whether
/// the running node is the left or right child, then the index shifts to the
/// parent position. Siblings are never reordered by value. An empty proof
/// verifies exactly when the leaf hash is the root (single-leaf tree).
pub fn verify(index: u64, leaf: [u8; 32], proof: &[[u8; 32]], root: [u8; 32]) -> bool {
    let mut node = leaf;
    let mut pos = index;
    for sibling in proof {
        node = if pos & 1 == 0 {
            hashv(&[&node, sibling]).to_bytes()
        } else {
            hashv(&[sibling, &node]).to_bytes()
        };
        pos >>= 1;
    }
    node == root
}
