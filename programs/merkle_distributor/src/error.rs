use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleDistributorError {
    // Claim rejections
    #[msg("Account has already claimed")]
    AlreadyClaimed,
    #[msg("Invalid claim signature")]
    InvalidSignature,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Token transfer failed")]
    TransferFailed,

    // Construction errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Domain name and version must be non-empty and at most 64 bytes")]
    InvalidDomain,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
    #[msg("Token account is not owned by the claimant")]
    ClaimantMismatch,
}
