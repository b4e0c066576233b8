use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

/**
 * Account context for recovering the vault balance
 *
 * This instruction lets the owner sweep whatever remains in the vault once
 * the distributor's timeout has been reached. It is a terminal sweep of the
 * balance only: the distributor, its allowed roots, and every claim record
 * stay intact, so claims remain possible against any balance that arrives
 * in the vault later.
 *
 * Access Control: Only the owner can recover the vault balance
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Recover<'info> {
    /// The distributor account to recover from
    /// - Must be a valid existing distributor PDA
    /// - Not closed or modified; it signs the vault transfer
    pub distributor: Account<'info, Distributor>,

    /// Token vault containing the remaining tokens
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    /// - Emptied but left open
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Token account to receive the recovered balance
    /// - Chosen freely by the owner
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
    )]
    pub recover_destination: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the distributor's token mint
    /// - Used for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ DistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The owner of the distributor
    /// - Must match the owner stored in the distributor state
    #[account(constraint = owner.key() == distributor.owner @ DistributorError::Unauthorized)]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Recovers the remaining vault balance after timeout
 *
 * @param ctx - The account context containing all required accounts
 * @param data - Opaque audit payload, carried verbatim into the event
 *
 * Validation Rules:
 * - Current time must be at or past the distributor's timeout
 * - Only the owner can call this function
 *
 * The timeout is read from the clock at call time, never cached. Claim
 * records and allowed roots are untouched by recovery.
 */
pub fn handle_recover(ctx: Context<Recover>, data: Vec<u8>) -> Result<()> {
    let distributor = &ctx.accounts.distributor;

    // ===== VALIDATION PHASE =====

    // Recovery opens at the timeout instant, not before
    let current_time = Clock::get()?.unix_timestamp;
    require!(
        distributor.is_timed_out(current_time),
        DistributorError::NotYetTimedOut
    );

    // Remaining balance to sweep (may be zero)
    let remaining_balance = ctx.accounts.token_vault.amount;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Prepare PDA signing seeds for the vault transfer
    let nonce_bytes = distributor.nonce.to_le_bytes();
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        distributor.token_mint.as_ref(),
        distributor.owner.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor.bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer remaining tokens only if there are any
    if remaining_balance > 0 {
        // Compatibility with both SPL Token and Token 2022
        transfer_token(
            ctx.accounts.distributor.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.recover_destination.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining_balance,
            ctx.accounts.token_mint.decimals,
            Some(signer), // PDA signing for secure transfer
        )?;
    }

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(FundsRecovered {
        distributor: distributor.key(),
        to: ctx.accounts.recover_destination.key(),
        amount: remaining_balance,
        data,
    });

    Ok(())
}
