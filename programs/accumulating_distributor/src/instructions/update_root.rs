use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for adding a merkle root
 *
 * This instruction appends a merkle root to the distributor's allowed set.
 * Each root commits to a full snapshot of (index, claimant, amount) leaves;
 * once added, a root stays claimable for the distributor's lifetime and can
 * never be removed or replaced.
 *
 * Access Control: Only the owner can add merkle roots
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateRoot<'info> {
    /// The distributor account to update
    /// - Must be a valid existing distributor PDA
    /// - Its allowed_merkle_roots list grows by one entry
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The owner who can add merkle roots
    /// - Must match the owner stored in the distributor state
    #[account(constraint = owner.key() == distributor.owner @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

/**
 * Adds a merkle root to the allowed set
 *
 * @param ctx - The account context containing distributor and owner accounts
 * @param merkle_root - 32-byte hash representing the root of the merkle tree
 *
 * Validation Rules:
 * - Merkle root cannot be all zeros (no real tree hashes to that value)
 * - A root already in the set is rejected with RootAlreadyAllowed, not ignored
 * - The set is bounded by MAX_ALLOWED_ROOTS (space allocated at creation)
 *
 * Usage Notes:
 * - Amounts under a new root are cumulative ceilings: publishing a root that
 *   raises a claimant's amount entitles them to the difference only
 * - Earlier roots remain claimable alongside the new one
 */
pub fn handle_update_root(ctx: Context<UpdateRoot>, merkle_root: [u8; 32]) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    // Validate that the merkle root is not empty
    require!(
        merkle_root != [0; 32],
        DistributorError::InvalidMerkleRoot
    );

    // Append to the allowed set (rejects duplicates and enforces capacity)
    distributor.allow_root(merkle_root)?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(RootAdded {
        distributor: distributor.key(),
        merkle_root,
    });

    Ok(())
}
