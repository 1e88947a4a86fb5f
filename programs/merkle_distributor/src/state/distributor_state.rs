use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::utils::message_digest;

/**
 * Main distributor state account
 *
 * Immutable configuration of one distribution campaign plus its running
 * claimed total.
 *
 * Derivation: ["distributor", token_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_distributor; root, mint and domain are fixed here
 * 2. total_claimed increments with each successful claim
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenDistributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this distributor
    pub nonce: u32,

    /// Creator of the distributor, funded the vault
    pub owner: Pubkey,

    /// Token mint address
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,

    /// Total amount of tokens claimed by all users
    pub total_claimed: u64,

    /// Cluster identifier mixed into the domain separator
    pub cluster_id: u64,

    /// Committed merkle root over all (claimant, amount) leaves
    /// - Never changes after creation
    pub merkle_root: [u8; 32],

    /// Domain separator every claim signature is bound to
    /// - Derived once from name, version, cluster, program and distributor address
    pub domain_separator: [u8; 32],
}

impl TokenDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<TokenDistributor>();

    pub fn merkle_root(&self) -> [u8; 32] {
        self.merkle_root
    }

    pub fn token_mint(&self) -> Pubkey {
        self.token_mint
    }

    /// Digest `account` must sign to claim `amount` from this distributor
    pub fn message_digest(&self, account: &Pubkey, amount: u64) -> [u8; 32] {
        message_digest(&self.domain_separator, account, amount)
    }
}

/// Checks the creation arguments a distributor is fixed to
///
/// Domain name and version are hashed into every signature, so both must be present.
pub fn validate_config(
    initial_total_amount: u64,
    merkle_root: &[u8; 32],
    domain_name: &str,
    domain_version: &str,
) -> Result<()> {
    require!(initial_total_amount > 0, MerkleDistributorError::InvalidAmount);
    require!(*merkle_root != [0; 32], MerkleDistributorError::InvalidMerkleRoot);
    for field in [domain_name, domain_version] {
        require!(
            !field.is_empty() && field.len() <= MAX_DOMAIN_FIELD_LEN,
            MerkleDistributorError::InvalidDomain
        );
    }
    Ok(())
}
