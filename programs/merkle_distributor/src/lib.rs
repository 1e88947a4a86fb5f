use anchor_lang::prelude::*;

declare_id!("9U72nnfFi1TpNL9X6UNsuS1uBA1YDBzeBXG84HUXuo7K");

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
 * Merkle Distributor Program
 *
 * Distributes a fixed set of (claimant, amount) entitlements committed as a
 * single merkle root. Each claim carries the claimant's ed25519 signature over
 * a domain-separated digest, so a relayer can submit on the claimant's behalf.
 *
 * Key Features:
 * - Merkle tree-based eligibility with double-hashed leaves
 * - Structured-data claim signatures bound to program, distributor and cluster
 * - At-most-once claims tracked by per-claimant PDAs
 * - Root, mint and domain fixed at creation
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each owner
 * - Distributor PDA: Stores root, domain separator and claimed total
 * - Token Vault PDA: Holds tokens to be distributed
 * - Claim Status PDAs: One-way claimed flag per claimant
 *
 * Workflow:
 * 1. Owner creates the distributor, commits the root and funds the vault
 * 2. Claimants sign the digest returned by message_digest
 * 3. Claimant or relayer submits an Ed25519 program instruction over the
 *    signature followed by claim with proof and signature
 */
#[program]
pub mod merkle_distributor {
    use super::*;

    /**
     * Creates a new merkle distributor
     *
     * @param ctx - Account context containing distributor, vault, counter, and owner accounts
     * @param initial_total_amount - Total amount of tokens deposited into the vault
     * @param merkle_root - Root over all (claimant, amount) leaves
     * @param domain_name - Name of the signing domain
     * @param domain_version - Version of the signing domain
     * @param cluster_id - Cluster identifier mixed into the signing domain
     *
     * Access Control: Owner only
     */
    pub fn create_distributor(
        ctx: Context<CreateDistributor>,
        initial_total_amount: u64,
        merkle_root: [u8; 32],
        domain_name: String,
        domain_version: String,
        cluster_id: u64,
    ) -> Result<()> {
        handle_create_distributor(
            ctx,
            initial_total_amount,
            merkle_root,
            domain_name,
            domain_version,
            cluster_id,
        )
    }

    /**
     * Claims tokens with merkle proof and claimant signature
     *
     * @param ctx - Account context containing distributor, claim status, and token accounts
     * @param amount - Amount committed for the claimant in the merkle tree
     * @param proof - Array of 32-byte hashes forming the merkle proof
     * @param signature - Claimant's signature over message_digest(claimant, amount)
     *
     * Access Control: Anyone holding a valid signature and proof; the
     * preceding instruction must be the Ed25519 program check of that signature
     */
    pub fn claim(
        ctx: Context<Claim>,
        amount: u64,
        proof: Vec<[u8; 32]>,
        signature: [u8; 64],
    ) -> Result<()> {
        handle_claim(ctx, amount, proof, signature)
    }

    /**
     * Returns the digest a claimant signs for (claimant, amount)
     *
     * Access Control: Read-only, anyone
     */
    pub fn message_digest(ctx: Context<ClaimDigestView>, amount: u64) -> Result<[u8; 32]> {
        handle_message_digest(ctx, amount)
    }

    /**
     * Returns whether the claimant has already claimed
     *
     * Access Control: Read-only, anyone
     */
    pub fn has_claimed(ctx: Context<ClaimStatusView>) -> Result<bool> {
        handle_has_claimed(ctx)
    }
}
