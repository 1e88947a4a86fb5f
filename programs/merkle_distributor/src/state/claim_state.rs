use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * One-way flag recording that a claimant has received their entitlement.
 * The PDA seeds key the record by claimant, so the set of ClaimStatus
 * accounts of a distributor is its claim ledger.
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (using init_if_needed)
 * 2. Flag set exactly once when a claim passes every check
 * 3. Never reset and never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Whether the claimant has claimed
    pub is_claimed: bool,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Reads the flag from a claim status PDA that may not exist yet
    /// - Uninitialized or foreign-owned accounts count as not claimed
    pub fn read_flag(owner: &Pubkey, data: &[u8]) -> Result<bool> {
        if *owner != crate::ID || data.is_empty() {
            return Ok(false);
        }
        let status = ClaimStatus::try_deserialize(&mut &data[..])?;
        Ok(status.is_claimed)
    }
}

/// At-most-once bookkeeping consulted by the claim pipeline
pub trait ClaimLedger {
    fn has_claimed(&self, account: &Pubkey) -> bool;

    /// Only called after every check passed and before the transfer
    fn mark_claimed(&mut self, account: &Pubkey);
}

/// ClaimStatus PDA bound to the claimant whose seeds derived it
pub struct ClaimStatusRecord<'a> {
    pub claimant: Pubkey,
    pub status: &'a mut ClaimStatus,
}

impl ClaimLedger for ClaimStatusRecord<'_> {
    fn has_claimed(&self, account: &Pubkey) -> bool {
        // A record only answers for the claimant it was derived from
        *account != self.claimant || self.status.is_claimed
    }

    fn mark_claimed(&mut self, account: &Pubkey) {
        if *account == self.claimant {
            self.status.is_claimed = true;
        }
    }
}
