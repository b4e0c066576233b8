//! Cross-implementation checks for the on-chain merkle verifier.
//!
//! Trees are built with the off-chain `claim-tree` crate and verified with
//! `utils::merkle`; both must agree bit-for-bit on the leaf encoding, the
//! positional pairing rule and the duplicate-last-node padding. The pinned
//! vectors were computed with an independent SHA-256 implementation of the
//! same construction.

#[cfg(test)]
mod tests {
    use crate::utils::{hash_leaf, verify};
    use claim_tree::ClaimTree;

    /// Root of the 4-leaf tree over accounts 0x11../0x44.. with amounts
    /// 1000/2000/3000/4000 at indices 0..=3.
    const FOUR_LEAF_ROOT: [u8; 32] = [
        0x12, 0x3e, 0xaf, 0x81, 0xaf, 0xdb, 0x1e, 0xa9, 0x8a, 0x40, 0xdf, 0xd4, 0x07, 0x92, 0x39,
        0xa0, 0xf3, 0x3a, 0x7b, 0x7d, 0xd5, 0x93, 0x6e, 0xaf, 0xef, 0x42, 0x88, 0x4b, 0x9d, 0x81,
        0x4c, 0x2c,
    ];

    /// Root of the 3-leaf tree over accounts [1;32]/[2;32]/[3;32] with
    /// amounts 100/200/300 (odd level, last node duplicated).
    const THREE_LEAF_ROOT: [u8; 32] = [
        0x13, 0x57, 0x07, 0xce, 0xd7, 0x8f, 0x1a, 0x48, 0x72, 0x63, 0x59, 0xf9, 0xfe, 0xf5, 0x71,
        0x7e, 0x82, 0xe7, 0xc7, 0xcf, 0xd2, 0xd1, 0x8b, 0x80, 0xd3, 0xce, 0xc4, 0x93, 0x53, 0x83,
        0x7f, 0xa7,
    ];

    /// Single leaf (index 0, account [0xAA; 32], amount 42): the root is the
    /// leaf hash itself.
    const SINGLE_LEAF_ROOT: [u8; 32] = [
        0xbb, 0x7f, 0xeb, 0x47, 0x05, 0x77, 0x76, 0x25, 0xcd, 0xf1, 0xbb, 0x3e, 0x45, 0x75, 0x65,
        0x01, 0x9f, 0x9e, 0x03, 0xdb, 0x9d, 0xa1, 0xbd, 0x33, 0x49, 0x24, 0x1f, 0x2f, 0x24, 0xd1,
        0x0b, 0xcc,
    ];

    fn four_leaf_entries() -> Vec<([u8; 32], u64)> {
        vec![
            ([0x11; 32], 1000),
            ([0x22; 32], 2000),
            ([0x33; 32], 3000),
            ([0x44; 32], 4000),
        ]
    }

    #[test]
    fn leaf_hash_matches_off_chain_builder() {
        for (index, account, amount) in [
            (0u64, [0u8; 32], 0u64),
            (1, [0xAA; 32], 42),
            (u64::MAX, [0x7F; 32], u64::MAX),
        ] {
            assert_eq!(
                hash_leaf(index, &account, amount),
                claim_tree::hash_leaf(index, &account, amount)
            );
        }
        // Single-leaf pinned vector: root == leaf hash
        assert_eq!(hash_leaf(0, &[0xAA; 32], 42), SINGLE_LEAF_ROOT);
    }

    #[test]
    fn pinned_four_leaf_vector_verifies() {
        let tree = ClaimTree::new(&four_leaf_entries()).unwrap();
        assert_eq!(tree.root(), FOUR_LEAF_ROOT);

        for alloc in tree.allocations() {
            let proof = tree.proof(alloc.index).unwrap();
            assert_eq!(proof.len(), 2);
            let leaf = hash_leaf(alloc.index, &alloc.account, alloc.amount);
            assert!(
                verify(alloc.index, leaf, &proof, FOUR_LEAF_ROOT),
                "leaf {} must verify against the pinned root",
                alloc.index
            );
        }
    }

    #[test]
    fn pinned_odd_count_vector_verifies() {
        let tree = ClaimTree::new(&[([1; 32], 100), ([2; 32], 200), ([3; 32], 300)]).unwrap();
        assert_eq!(tree.root(), THREE_LEAF_ROOT);

        // Leaf 2 pairs with itself at the bottom level
        let proof = tree.proof(2).unwrap();
        let leaf = hash_leaf(2, &[3; 32], 300);
        assert_eq!(proof[0], leaf);
        assert!(verify(2, leaf, &proof, THREE_LEAF_ROOT));
    }

    #[test]
    fn single_leaf_tree_verifies_with_empty_proof() {
        let leaf = hash_leaf(0, &[0xAA; 32], 42);
        assert!(verify(0, leaf, &[], SINGLE_LEAF_ROOT));
        // Any other leaf content must miss
        let other = hash_leaf(0, &[0xAA; 32], 43);
        assert!(!verify(0, other, &[], SINGLE_LEAF_ROOT));
    }

    #[test]
    fn cross_implementation_round_trip() {
        for n in [1usize, 2, 3, 5, 8, 33] {
            let entries: Vec<_> = (0..n)
                .map(|i| ([i as u8 + 1; 32], (i as u64 + 1) * 10))
                .collect();
            let tree = ClaimTree::new(&entries).unwrap();
            let root = tree.root();
            for alloc in tree.allocations() {
                let proof = tree.proof(alloc.index).unwrap();
                let leaf = hash_leaf(alloc.index, &alloc.account, alloc.amount);
                assert!(
                    verify(alloc.index, leaf, &proof, root),
                    "leaf {} of {} must verify",
                    alloc.index,
                    n
                );
            }
        }
    }

    #[test]
    fn tampered_inputs_fail_verification() {
        let tree = ClaimTree::new(&four_leaf_entries()).unwrap();
        let root = tree.root();
        let proof = tree.proof(1).unwrap();

        // Correct claim verifies
        let leaf = hash_leaf(1, &[0x22; 32], 2000);
        assert!(verify(1, leaf, &proof, root));

        // Wrong amount
        assert!(!verify(1, hash_leaf(1, &[0x22; 32], 2001), &proof, root));
        // Wrong account
        assert!(!verify(1, hash_leaf(1, &[0x23; 32], 2000), &proof, root));
        // Wrong index (parity walk diverges)
        assert!(!verify(2, hash_leaf(2, &[0x22; 32], 2000), &proof, root));

        // Tampered proof byte
        let mut tampered = proof.clone();
        tampered[0][0] = tampered[0][0].wrapping_add(1);
        assert!(!verify(1, leaf, &tampered, root));
    }

    #[test]
    fn proof_from_another_tree_fails() {
        let tree_a = ClaimTree::new(&four_leaf_entries()).unwrap();
        let tree_b = ClaimTree::new(&[([0x55; 32], 500), ([0x66; 32], 600)]).unwrap();

        // Valid allocation of tree A, proof taken from tree B
        let foreign_proof = tree_b.proof(0).unwrap();
        let leaf = hash_leaf(0, &[0x11; 32], 1000);
        assert!(!verify(0, leaf, &foreign_proof, tree_a.root()));

        // Valid proof of tree A against tree B's root
        let proof_a = tree_a.proof(0).unwrap();
        assert!(!verify(0, leaf, &proof_a, tree_b.root()));
    }
}
