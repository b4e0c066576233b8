use anchor_lang::prelude::*;

use crate::constants::MAX_ALLOWED_ROOTS;
use crate::error::DistributorError;

/**
 * Main distributor state account
 *
 * This struct is the persistent ledger of one accumulating distribution:
 * the immutable parameters fixed at creation, the append-only set of merkle
 * roots claims may be verified against, and the running claim total.
 *
 * Derivation: ["distributor", token_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_distributor; owner, token_mint and timeout are
 *    never written again after that
 * 2. Grows by one root per update_root, up to MAX_ALLOWED_ROOTS
 * 3. total_claimed increments with each successful claim
 * 4. Never closed; recover leaves the account (and all roots) intact
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple distribution campaigns for the same token/owner pair
    pub nonce: u32,

    /// Owner of the distributor
    /// - The only account allowed to call update_root and recover
    pub owner: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the tokens to be distributed
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Unix timestamp at or after which recover becomes available
    /// - Fixed at creation, never modified
    pub timeout: i64,

    /// Total amount of tokens claimed by all users
    /// - Incremented with the transferred delta of each successful claim
    pub total_claimed: u64,

    /// Merkle roots claims may be verified against
    /// - Append-only: roots are added by update_root and never removed
    /// - Every listed root stays claimable for the distributor's lifetime
    pub allowed_merkle_roots: Vec<[u8; 32]>,
}

impl Distributor {
    /// Calculate the space required for this account
    /// - 8-byte discriminator + fixed fields + root vec at full capacity
    pub const LEN: usize = 8   // discriminator
        + 1                    // bump
        + 4                    // nonce
        + 32                   // owner
        + 32                   // token_mint
        + 32                   // token_vault
        + 8                    // timeout
        + 8                    // total_claimed
        + 4 + 32 * MAX_ALLOWED_ROOTS; // allowed_merkle_roots (len prefix + entries)

    /// Whether claims may be verified against `root`.
    pub fn is_root_allowed(&self, root: &[u8; 32]) -> bool {
        self.allowed_merkle_roots.contains(root)
    }

    /// Append `root` to the allowed set.
    ///
    /// Re-adding an existing root is rejected rather than ignored, and the
    /// set is bounded by the space allocated at creation.
    pub fn allow_root(&mut self, root: [u8; 32]) -> Result<()> {
        require!(
            !self.is_root_allowed(&root),
            DistributorError::RootAlreadyAllowed
        );
        require!(
            self.allowed_merkle_roots.len() < MAX_ALLOWED_ROOTS,
            DistributorError::TooManyRoots
        );
        self.allowed_merkle_roots.push(root);
        Ok(())
    }

    /// Whether the recovery window is open at `now` (at or after timeout).
    pub fn is_timed_out(&self, now: i64) -> bool {
        now >= self.timeout
    }
}
