use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the accumulating
 * distributor program: PDA derivation seeds and ledger capacity bounds.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Creates unique nonce tracking accounts for each owner
/// - Enables automatic nonce assignment for distributors
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner, nonce]
/// - Creates unique distributor accounts for each (token, owner, nonce) combination
/// - Ensures deterministic and collision-free PDA generation
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - Creates a unique vault for each distributor
/// - Ensures the vault is controlled by the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - Creates unique claim tracking for each (distributor, claimant) pair
/// - The tracked amount is cumulative across every root the owner publishes
pub const CLAIM_SEED: &str = "claim";

/// ===== CAPACITY CONSTANTS =====

/// Maximum number of merkle roots one distributor can accumulate
/// - Account space for the root list is allocated up front at creation
/// - update_root fails with TooManyRoots once this bound is reached
/// - Roots are never removed, so this caps the distributor's lifetime root count
pub const MAX_ALLOWED_ROOTS: usize = 64;
