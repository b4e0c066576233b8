use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new distributor
 *
 * This instruction initializes a new accumulating distributor with automatic
 * nonce management:
 * - Creates or updates a nonce state PDA to track nonce numbers
 * - Creates a distributor PDA with auto-incremented nonce number
 * - Creates a token vault PDA to hold the tokens to be distributed
 *
 * Funding is external: any transfer into the vault token account funds the
 * distribution, before or after roots are published.
 *
 * Access Control: Anyone may create a distributor; the signer becomes its owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Stores the current nonce counter for automatic nonce assignment
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main distributor account (PDA)
    /// - Stores the immutable parameters and the ledger state
    /// - Derived from: ["distributor", token_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    /// - Space covers the root list at full MAX_ALLOWED_ROOTS capacity
    #[account(
        init,
        payer = owner,
        space = Distributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the distributor
    /// - The only account allowed to publish roots and recover the vault
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new distributor with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 * @param timeout - Unix timestamp at or after which the owner may recover
 *                  the vault balance; must be in the future and is immutable
 */
pub fn handle_create_distributor(ctx: Context<CreateDistributor>, timeout: i64) -> Result<()> {
    // Timeout must lie in the future; it can never be changed afterwards
    let current_time = Clock::get()?.unix_timestamp;
    require!(timeout > current_time, DistributorError::InvalidTimeout);

    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let distributor = &mut ctx.accounts.distributor;

    // Calculate nonce number with overflow protection
    let current_nonce = owner_nonce
        .nonce
        .checked_add(1)
        .ok_or(DistributorError::ArithmeticOverflow)?;

    // Update nonce state with current nonce
    owner_nonce.nonce = current_nonce;

    // Initialize distributor state with auto-assigned nonce
    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = current_nonce;
    distributor.owner = ctx.accounts.owner.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.timeout = timeout;
    // Note: total_claimed starts at 0 and allowed_merkle_roots starts empty

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        timeout,
    });

    Ok(())
}
