use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Unix timestamp after which the owner may recover the vault balance
    pub timeout: i64,
}

/// Event emitted when a merkle root is added to the allowed set
#[event]
pub struct RootAdded {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// The merkle root hash that was added
    pub merkle_root: [u8; 32],
}

/// Event emitted when tokens are claimed
#[event]
pub struct Claimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Leaf index of the claimed allocation
    pub index: u64,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Cumulative entitlement claimed up to (the transfer covers the
    /// difference over what was claimed before)
    pub amount: u64,
    /// The allowed merkle root the proof was verified against
    pub merkle_root: [u8; 32],
}

/// Event emitted when the owner sweeps the vault after timeout
#[event]
pub struct FundsRecovered {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Token account the balance was sent to
    pub to: Pubkey,
    /// Amount of tokens recovered
    pub amount: u64,
    /// Caller-supplied audit payload, recorded verbatim
    pub data: Vec<u8>,
}
