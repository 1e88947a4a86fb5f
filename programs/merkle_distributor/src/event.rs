use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Committed merkle root over all entitlements
    pub merkle_root: [u8; 32],
    /// Domain separator every claim signature is bound to
    pub domain_separator: [u8; 32],
    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,
}

/// Event emitted exactly once per successful claim
#[event]
pub struct TokensClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Account the entitlement belongs to
    pub claimant: Pubkey,
    /// Amount of tokens transferred to the claimant
    pub amount: u64,
    /// Signer who submitted the claim (the claimant or a relayer)
    pub submitter: Pubkey,
    /// Total amount claimed from the distributor by all users
    pub total_claimed: u64,
}
