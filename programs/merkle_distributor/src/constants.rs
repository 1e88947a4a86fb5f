use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds, structured-signing type strings and input bounds used by the
 * merkle distributor program.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Lets one owner create several distributors for the same mint
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner, nonce]
/// - The resulting address is mixed into the domain separator
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - One record per (distributor, claimant) pair, never closed
pub const CLAIM_SEED: &str = "claim";

/// ===== STRUCTURED SIGNING CONSTANTS =====

/// Type string of the domain struct hashed into the domain separator
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,bytes32 verifyingProgram,bytes32 distributor)";

/// Type string of the claim struct a claimant signs
pub const CLAIM_TYPE: &str = "Claim(bytes32 account,uint256 amount)";

/// Two-byte prefix of a structured-data digest
pub const STRUCTURED_DATA_PREFIX: [u8; 2] = [0x19, 0x01];

/// ===== INPUT BOUNDS =====

/// Maximum byte length of the domain name and version strings
pub const MAX_DOMAIN_FIELD_LEN: usize = 64;

/// Maximum number of siblings accepted in a proof path
/// - 32 levels cover more than four billion entitlements
pub const MAX_PROOF_LEN: usize = 32;
