use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::{ClaimLedger, TokenDistributor};
use crate::utils::{encode_leaf, verify, ClaimAuthenticator, TokenLedger};

/// A claim as submitted, by the claimant or a relayer
#[derive(Clone, Debug)]
pub struct ClaimRequest<'a> {
    pub account: Pubkey,
    pub amount: u64,
    pub proof: &'a [[u8; 32]],
    pub signature: &'a [u8; 64],
}

/// Outcome of a completed claim, reported in the TokensClaimed event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub account: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
}

/**
 * Runs one claim through the fixed verification pipeline
 *
 * Order (must not be reordered):
 * 1. Reject if the account already claimed
 * 2. Reject if the signature over (account, amount, domain) is invalid
 * 3. Reject if (account, amount) is not a leaf under the committed root
 * 4. Commit the claim flag and claimed total
 * 5. Transfer; nothing is mutated after this call
 *
 * Any error aborts the enclosing transaction, so a failed transfer also
 * discards the commit of step 4.
 */
pub fn process_claim<A, L, T>(
    distributor: &mut TokenDistributor,
    authenticator: &A,
    ledger: &mut L,
    token: &mut T,
    request: &ClaimRequest,
) -> Result<ClaimReceipt>
where
    A: ClaimAuthenticator,
    L: ClaimLedger,
    T: TokenLedger,
{
    let account = request.account;

    // ===== ANTI-REPLAY =====
    if ledger.has_claimed(&account) {
        msg!("Claim rejected: {} already claimed", account);
        return err!(MerkleDistributorError::AlreadyClaimed);
    }

    // ===== AUTHENTICATION =====
    let digest = distributor.message_digest(&account, request.amount);
    if !authenticator.authenticate(&account, &digest, request.signature) {
        msg!("Claim rejected: bad signature for {}", account);
        return err!(MerkleDistributorError::InvalidSignature);
    }

    // ===== MEMBERSHIP =====
    let leaf = encode_leaf(&account, request.amount);
    let is_member = request.proof.len() <= MAX_PROOF_LEN
        && verify(request.proof, distributor.merkle_root, leaf);
    if !is_member {
        msg!("Claim rejected: invalid proof for {}", account);
        return err!(MerkleDistributorError::InvalidProof);
    }

    // ===== EFFECTS PHASE (commit point) =====
    let total_claimed = distributor
        .total_claimed
        .checked_add(request.amount)
        .ok_or(MerkleDistributorError::ArithmeticOverflow)?;

    ledger.mark_claimed(&account);
    distributor.total_claimed = total_claimed;

    // ===== INTERACTIONS PHASE (Token Transfer) =====
    if let Err(error) = token.transfer(&account, request.amount) {
        msg!("Transfer of {} to {} failed: {}", request.amount, account, error);
        return err!(MerkleDistributorError::TransferFailed);
    }

    Ok(ClaimReceipt {
        account,
        amount: request.amount,
        total_claimed,
    })
}
