use anchor_lang::prelude::*;

declare_id!("CHqpvqZ9D9seiGKZjz5YevvCCC8idob6d7d4cKCzh9cz");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Accumulating Distributor Program
 *
 * A Solana program for distributing tokens against merkle-committed allocation
 * snapshots, where each leaf amount is a cumulative entitlement ceiling rather
 * than a one-shot grant.
 *
 * Key Features:
 * - Merkle tree-based claim verification (positional SHA-256 proofs)
 * - Accumulating semantics: publishing a new root raises entitlements and
 *   claimants receive only the difference over what they already claimed
 * - Append-only root registry: every published root stays claimable forever
 * - Owner recovery of the remaining vault balance after a fixed timeout
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each owner (automatic nonce management)
 * - Distributor PDA: Stores the immutable parameters and the allowed root set
 * - Token Vault PDA: Holds tokens to be distributed (funded by plain transfers)
 * - Claim Status PDAs: Track each claimant's cumulative claimed amount
 *
 * Workflow:
 * 1. Owner creates a distributor with a recovery timeout
 * 2. Anyone funds the vault; owner publishes one or more merkle roots
 * 3. Claimants redeem allocations with proofs against any allowed root
 * 4. Owner sweeps whatever remains once the timeout has passed; claim
 *    records and roots survive the sweep
 */
#[program]
pub mod accumulating_distributor {
    use super::*;

    /**
     * Creates a new distributor
     *
     * Initializes a distributor with automatic nonce management. The signer
     * becomes the immutable owner; token mint and timeout are likewise fixed
     * for the distributor's lifetime. The vault starts empty and is funded
     * by ordinary token transfers.
     *
     * @param ctx - Account context containing distributor, vault, counter, and owner accounts
     * @param timeout - Unix timestamp at or after which recover becomes available
     */
    pub fn create_distributor(ctx: Context<CreateDistributor>, timeout: i64) -> Result<()> {
        handle_create_distributor(ctx, timeout)
    }

    /**
     * Adds a merkle root to the allowed set
     *
     * Appends a root committing to a snapshot of (index, claimant, amount)
     * allocations. Roots accumulate: earlier roots remain claimable, and
     * re-adding an existing root is rejected.
     *
     * @param ctx - Account context containing distributor and owner accounts
     * @param merkle_root - 32-byte hash representing the merkle tree root
     *
     * Access Control: Owner only
     */
    pub fn update_root(ctx: Context<UpdateRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_update_root(ctx, merkle_root)
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * Redeems the allocation (index, claimant, amount) under one of the
     * allowed roots. amount is the claimant's cumulative ceiling; the vault
     * pays out the difference over the claimant's recorded total.
     *
     * @param ctx - Account context containing distributor, claim status, and token accounts
     * @param index - Leaf index of the allocation
     * @param amount - Cumulative entitlement ceiling from the leaf
     * @param merkle_root - The allowed root the proof verifies against
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any claimant with a valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        index: u64,
        amount: u64,
        merkle_root: [u8; 32],
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, index, amount, merkle_root, proof)
    }

    /**
     * Recovers the remaining vault balance after timeout
     *
     * Sweeps the vault to a destination token account of the owner's
     * choosing. Nothing else changes: roots stay allowed and claim records
     * stay in place.
     *
     * @param ctx - Account context containing distributor, vault, and owner accounts
     * @param data - Opaque audit payload recorded in the FundsRecovered event
     *
     * Access Control: Owner only
     */
    pub fn recover(ctx: Context<Recover>, data: Vec<u8>) -> Result<()> {
        handle_recover(ctx, data)
    }
}
