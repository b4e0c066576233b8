//! JSON export of a distribution: root plus one proof per allocation.
//!
//! A manifest is what gets published alongside a funded distribution so
//! claimants can look up their index, cumulative amount, and proof without
//! rebuilding the tree. All hashes are lowercase hex.

use serde::{Deserialize, Serialize};

use crate::tree::ClaimTree;

/// One claimable allocation with its membership proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestClaim {
    /// Leaf position in the tree.
    pub index: u64,
    /// Recipient account, 32 bytes hex.
    pub account: String,
    /// Cumulative entitlement in base units.
    pub amount: u64,
    /// Sibling hashes, leaf-adjacent first.
    pub proof: Vec<String>,
}

/// A full distribution: the committed root and every claim under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionManifest {
    /// Merkle root, 32 bytes hex.
    pub merkle_root: String,
    pub leaf_count: usize,
    pub claims: Vec<ManifestClaim>,
}

impl DistributionManifest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl ClaimTree {
    /// Export the whole distribution as a manifest.
    ///
    /// Proof generation cannot fail here since every index is in range.
    pub fn manifest(&self) -> DistributionManifest {
        let claims = self
            .allocations()
            .iter()
            .map(|alloc| {
                let proof = self.proof(alloc.index).unwrap();
                ManifestClaim {
                    index: alloc.index,
                    account: hex::encode(alloc.account),
                    amount: alloc.amount,
                    proof: proof.iter().map(hex::encode).collect(),
                }
            })
            .collect();

        DistributionManifest {
            merkle_root: hex::encode(self.root()),
            leaf_count: self.leaf_count(),
            claims,
        }
    }
}
