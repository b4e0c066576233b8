use anchor_lang::prelude::*;

use crate::error::DistributorError;

/**
 * Individual claim status account
 *
 * This struct tracks the cumulative amount one claimant has received from a
 * distributor. Leaf amounts are entitlement ceilings, so a later root may
 * raise a claimant's amount and only the difference is paid out.
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed); absent account reads as 0
 * 2. Updated with each subsequent claim
 * 3. Never closed: the recorded amount must outlive every root
 *
 * Design Notes:
 * - One ClaimStatus account per (distributor, claimant) pair
 * - claimed_amount is monotonically non-decreasing across the distributor's
 *   whole lifetime, including across root updates and recovery
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Total amount claimed by this user (cumulative)
    pub claimed_amount: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Settle a claim for a cumulative entitlement of `amount`.
    ///
    /// `amount` must strictly exceed the recorded claimed amount; equal or
    /// smaller amounts fail with AlreadyClaimed even when proven. On success
    /// the record is raised to `amount` and the payable difference returned.
    pub fn settle(&mut self, amount: u64) -> Result<u64> {
        require!(
            amount > self.claimed_amount,
            DistributorError::AlreadyClaimed
        );
        let delta = amount - self.claimed_amount;
        self.claimed_amount = amount;
        Ok(delta)
    }
}
