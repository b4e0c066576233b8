//! Positional binary Merkle tree over distribution allocations.
//!
//! Construction rules (the on-chain verifier assumes exactly these):
//! - level 0 holds the leaf hashes in allocation order;
//! - `parent = SHA256(left || right)` where left is the even position and
//!   right the odd position of the level below;
//! - a level with an odd node count duplicates its last node to pair with
//!   itself;
//! - the last remaining node is the root.
//!
//! Pairing is purely positional. Siblings are never reordered by value, so a
//! proof must be folded with the leaf index's parity at each level, not with
//! a sorted-pair rule.

use crate::error::TreeError;
use crate::leaf::{hash_leaf, Allocation};
use sha2::{Digest, Sha256};

/// Hash two child nodes to produce a parent.
pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// A claim tree: root commitment plus per-leaf membership proofs.
#[derive(Debug, Clone)]
pub struct ClaimTree {
    /// All nodes level by level, bottom-up. `layers[0]` = leaf hashes.
    layers: Vec<Vec<[u8; 32]>>,
    allocations: Vec<Allocation>,
}

impl ClaimTree {
    /// Build a tree over `(account, amount)` entries.
    ///
    /// Each entry's `index` is its position in `entries`; the same account
    /// may appear at any number of positions. Fails on an empty slice.
    pub fn new(entries: &[([u8; 32], u64)]) -> Result<Self, TreeError> {
        if entries.is_empty() {
            return Err(TreeError::Empty);
        }

        let allocations: Vec<Allocation> = entries
            .iter()
            .enumerate()
            .map(|(index, (account, amount))| Allocation {
                index: index as u64,
                account: *account,
                amount: *amount,
            })
            .collect();

        let leaves: Vec<[u8; 32]> = allocations.iter().map(Allocation::leaf_hash).collect();

        let mut layers = vec![leaves];
        while layers.last().unwrap().len() > 1 {
            let prev = layers.last().unwrap();
            let mut next = Vec::with_capacity((prev.len() + 1) / 2);
            for pair in prev.chunks(2) {
                let left = &pair[0];
                // Odd level: the last node pairs with itself.
                let right = pair.get(1).unwrap_or(left);
                next.push(hash_pair(left, right));
            }
            layers.push(next);
        }

        Ok(Self {
            layers,
            allocations,
        })
    }

    /// The Merkle root committing to every allocation.
    pub fn root(&self) -> [u8; 32] {
        self.layers[self.layers.len() - 1][0]
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// All allocations in leaf order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// The allocation at `index`.
    pub fn allocation(&self, index: u64) -> Result<&Allocation, TreeError> {
        self.allocations
            .get(index as usize)
            .ok_or(TreeError::IndexOutOfBounds {
                index,
                leaf_count: self.leaf_count(),
            })
    }

    /// Sibling path for the leaf at `index`, leaf-adjacent sibling first.
    ///
    /// The proof length is `ceil(log2(leaf_count))`; a single-leaf tree has
    /// an empty proof (the root is the leaf hash itself).
    pub fn proof(&self, index: u64) -> Result<Vec<[u8; 32]>, TreeError> {
        let leaf_count = self.leaf_count();
        if index as usize >= leaf_count {
            return Err(TreeError::IndexOutOfBounds { index, leaf_count });
        }

        let mut proof = Vec::with_capacity(self.layers.len() - 1);
        let mut pos = index as usize;
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = pos ^ 1;
            // A lone node at the end of an odd level is its own sibling.
            let sibling = if sibling < layer.len() { sibling } else { pos };
            proof.push(layer[sibling]);
            pos /= 2;
        }
        Ok(proof)
    }
}

/// Recompute a root from one allocation and its proof; true iff it matches.
///
/// Pure and total: malformed input can only produce a mismatch, never an
/// error. An empty proof verifies exactly when the leaf hash is the root.
pub fn verify_proof(
    index: u64,
    account: &[u8; 32],
    amount: u64,
    proof: &[[u8; 32]],
    root: &[u8; 32],
) -> bool {
    let mut node = hash_leaf(index, account, amount);
    let mut pos = index;
    for sibling in proof {
        node = if pos & 1 == 0 {
            hash_pair(&node, sibling)
        } else {
            hash_pair(sibling, &node)
        };
        pos >>= 1;
    }
    node == *root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<([u8; 32], u64)> {
        (0..n)
            .map(|i| ([(i % 251) as u8; 32], (i as u64 + 1) * 100))
            .collect()
    }

    #[test]
    fn four_leaf_root_matches_pinned_vector() {
        // Accounts 0x11/0x22/0x33/0x44 repeated 32 times, amounts 1000..4000,
        // indices 0..3. Root cross-checked against an independent SHA-256
        // implementation of the same construction.
        let tree = ClaimTree::new(&[
            ([0x11; 32], 1000),
            ([0x22; 32], 2000),
            ([0x33; 32], 3000),
            ([0x44; 32], 4000),
        ])
        .unwrap();
        assert_eq!(
            hex::encode(tree.root()),
            "123eaf81afdb1ea98a40dfd4079239a0f33a7b7dd5936eafef42884b9d814c2c"
        );
    }

    #[test]
    fn three_leaf_root_matches_pinned_vector() {
        let tree = ClaimTree::new(&[([1; 32], 100), ([2; 32], 200), ([3; 32], 300)]).unwrap();
        assert_eq!(
            hex::encode(tree.root()),
            "135707ced78f1a48726359f9fef5717e82e7c7cfd2d18b80d3cec49353837fa7"
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(ClaimTree::new(&[]).unwrap_err(), TreeError::Empty);
    }

    #[test]
    fn single_leaf_has_empty_proof_and_root_equals_leaf() {
        let tree = ClaimTree::new(&[([0xAA; 32], 42)]).unwrap();
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.proof(0).unwrap().len(), 0);
        assert_eq!(tree.root(), hash_leaf(0, &[0xAA; 32], 42));
        assert!(verify_proof(0, &[0xAA; 32], 42, &[], &tree.root()));
        assert!(!verify_proof(0, &[0xAA; 32], 43, &[], &tree.root()));
    }

    #[test]
    fn odd_leaf_count_duplicates_last_node() {
        let tree = ClaimTree::new(&[([1; 32], 100), ([2; 32], 200), ([3; 32], 300)]).unwrap();

        let l0 = hash_leaf(0, &[1; 32], 100);
        let l1 = hash_leaf(1, &[2; 32], 200);
        let l2 = hash_leaf(2, &[3; 32], 300);
        let h01 = hash_pair(&l0, &l1);
        let h22 = hash_pair(&l2, &l2);
        assert_eq!(tree.root(), hash_pair(&h01, &h22));

        // The duplicated node proves itself with itself as first sibling.
        assert_eq!(tree.proof(2).unwrap(), vec![l2, h01]);
    }

    #[test]
    fn round_trip_every_leaf_across_sizes() {
        for n in [1usize, 2, 3, 5, 7, 8, 15, 16, 33, 100] {
            let entries = entries(n);
            let tree = ClaimTree::new(&entries).unwrap();
            let root = tree.root();
            for alloc in tree.allocations() {
                let proof = tree.proof(alloc.index).unwrap();
                assert!(
                    verify_proof(alloc.index, &alloc.account, alloc.amount, &proof, &root),
                    "round trip failed for leaf {} of {}",
                    alloc.index,
                    n
                );
            }
        }
    }

    #[test]
    fn proof_length_is_ceil_log2() {
        for (n, expected) in [
            (1usize, 0usize),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (8, 3),
            (9, 4),
            (100, 7),
        ] {
            let tree = ClaimTree::new(&entries(n)).unwrap();
            assert_eq!(tree.proof(0).unwrap().len(), expected, "n = {}", n);
        }
    }

    #[test]
    fn flipped_proof_byte_fails_verification() {
        let entries = entries(12);
        let tree = ClaimTree::new(&entries).unwrap();
        let root = tree.root();
        let alloc = tree.allocation(5).unwrap();
        let proof = tree.proof(5).unwrap();

        for level in 0..proof.len() {
            let mut tampered = proof.clone();
            tampered[level][0] ^= 0x01;
            assert!(
                !verify_proof(alloc.index, &alloc.account, alloc.amount, &tampered, &root),
                "flipping level {} byte should invalidate the proof",
                level
            );
        }
    }

    #[test]
    fn substituted_proof_fails_verification() {
        let entries = entries(16);
        let tree = ClaimTree::new(&entries).unwrap();
        let root = tree.root();
        let a = tree.allocation(3).unwrap();
        let other_proof = tree.proof(10).unwrap();
        assert!(!verify_proof(a.index, &a.account, a.amount, &other_proof, &root));
    }

    #[test]
    fn cross_tree_proof_fails_verification() {
        let tree_a = ClaimTree::new(&entries(9)).unwrap();
        let tree_b = ClaimTree::new(&entries(20)).unwrap();
        let alloc = tree_a.allocation(4).unwrap();
        let proof_a = tree_a.proof(4).unwrap();
        assert!(verify_proof(alloc.index, &alloc.account, alloc.amount, &proof_a, &tree_a.root()));
        assert!(!verify_proof(alloc.index, &alloc.account, alloc.amount, &proof_a, &tree_b.root()));
    }

    #[test]
    fn construction_is_deterministic() {
        let entries = entries(31);
        let a = ClaimTree::new(&entries).unwrap();
        let b = ClaimTree::new(&entries).unwrap();
        assert_eq!(a.root(), b.root());
    }

    #[test]
    fn proof_out_of_bounds_is_rejected() {
        let tree = ClaimTree::new(&entries(4)).unwrap();
        assert_eq!(
            tree.proof(4).unwrap_err(),
            TreeError::IndexOutOfBounds {
                index: 4,
                leaf_count: 4
            }
        );
        assert!(tree.allocation(99).is_err());
    }

    #[test]
    fn one_account_at_many_indices_is_legal() {
        // Allocations are positional; the same account may hold several.
        let account = [0x77; 32];
        let entries: Vec<_> = (0..10).map(|_| (account, 100u64)).collect();
        let tree = ClaimTree::new(&entries).unwrap();
        let root = tree.root();
        for i in 0..10u64 {
            let proof = tree.proof(i).unwrap();
            assert!(verify_proof(i, &account, 100, &proof, &root));
        }
        // Leaf hashes still differ because the index is encoded.
        assert_ne!(tree.allocations()[0].leaf_hash(), tree.allocations()[1].leaf_hash());
    }

    #[test]
    fn hundred_thousand_leaf_distribution() {
        const NUM_LEAVES: usize = 100_000;
        const SAMPLE_STEP: u64 = 4_000;

        let account = [0x5A; 32];
        let entries: Vec<_> = (0..NUM_LEAVES).map(|_| (account, 100u64)).collect();
        let tree = ClaimTree::new(&entries).unwrap();
        let root = tree.root();

        assert_eq!(tree.leaf_count(), NUM_LEAVES);
        let mut index = 0u64;
        while (index as usize) < NUM_LEAVES {
            let proof = tree.proof(index).unwrap();
            assert_eq!(proof.len(), 17); // ceil(log2(100_000))
            assert!(verify_proof(index, &account, 100, &proof, &root));
            index += SAMPLE_STEP;
        }
    }
}
