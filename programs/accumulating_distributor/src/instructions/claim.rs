use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{hash_leaf, transfer_token, verify};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for claiming tokens
 *
 * This instruction allows a claimant to redeem an allocation committed to by
 * one of the distributor's allowed merkle roots. The instruction verifies the
 * proof against the named root, raises the claimant's cumulative record, and
 * transfers the difference from the vault.
 *
 * Access Control: Any claimant with a valid merkle proof for one of the
 * allowed roots; the claimant signs and pays rent for its claim record
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor account containing the allowed roots
    /// - Must be a valid existing distributor PDA
    /// - Will be modified to update total_claimed amount
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Individual claim status for this claimant
    /// - Tracks the cumulative amount this claimant has already received
    /// - Created on first claim; absent account reads as claimed_amount 0
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the distributor's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ DistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant attempting to claim tokens
    /// - Must sign the transaction
    /// - Its key is the account field of the leaf being proven
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim against one of the allowed merkle roots
 *
 * @param ctx - The account context containing all required accounts
 * @param index - Leaf index of the allocation in its tree
 * @param amount - Cumulative entitlement ceiling committed in the leaf
 * @param merkle_root - The allowed root the proof folds up to
 * @param proof - Array of 32-byte sibling hashes, leaf-adjacent first
 *
 * Validation Process (ordered, each failure distinct):
 * 1. merkle_root is in the allowed set, else UnknownRoot
 * 2. proof verifies for leaf (index, claimant, amount), else InvalidProof
 * 3. amount strictly exceeds the recorded claimed amount, else AlreadyClaimed
 *
 * The transfer covers only the difference over the previous record. State is
 * updated before the token CPI (checks-effects-interactions order).
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    index: u64,
    amount: u64,
    merkle_root: [u8; 32],
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let claim_status = &mut ctx.accounts.claim_status;

    // ===== VALIDATION PHASE =====

    // The named root must have been published by the owner
    require!(
        distributor.is_root_allowed(&merkle_root),
        DistributorError::UnknownRoot
    );

    // ===== MERKLE PROOF VERIFICATION =====

    let claimant_account = &ctx.accounts.claimant;

    // Recompute the leaf node for (index, claimant, amount)
    // The claimant's own key is the account committed in the leaf
    let leaf = hash_leaf(index, &claimant_account.key().to_bytes(), amount);

    // Fold the proof positionally up to the named root
    require!(
        verify(index, leaf, &proof, merkle_root),
        DistributorError::InvalidProof
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Raise the cumulative record and obtain the payable difference
    // Fails with AlreadyClaimed when amount does not exceed the record
    let delta = claim_status.settle(amount)?;

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.token_vault.amount >= delta,
        DistributorError::InsufficientVaultBalance
    );

    // Prepare other immutable references
    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    // Accumulate the distributor-wide total with overflow protection
    distributor.total_claimed = distributor
        .total_claimed
        .checked_add(delta)
        .ok_or(DistributorError::ArithmeticOverflow)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for token transfer
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer the difference from vault to claimant using PDA authority
    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        delta,
        ctx.accounts.token_mint.decimals,
        Some(signer), // PDA signing for secure transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    // amount is the cumulative ceiling; subtract the previous event's value
    // to recover the transferred difference
    emit_cpi!(Claimed {
        distributor: distributor_key,
        index,
        claimant: ctx.accounts.claimant.key(),
        amount,
        merkle_root,
    });

    Ok(())
}
