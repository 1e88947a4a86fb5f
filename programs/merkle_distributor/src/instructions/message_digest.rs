use anchor_lang::prelude::*;
use crate::state::*;

/**
 * Account context for reading the digest a claimant must sign
 *
 * Read-only: lets a client confirm on-chain what it is about to sign.
 */
#[derive(Accounts)]
pub struct ClaimDigestView<'info> {
    pub distributor: Account<'info, TokenDistributor>,

    /// CHECK: Only its key is hashed into the digest
    pub claimant: UncheckedAccount<'info>,
}

/// Returns the claim digest for (claimant, amount) as return data
pub fn handle_message_digest(ctx: Context<ClaimDigestView>, amount: u64) -> Result<[u8; 32]> {
    Ok(ctx
        .accounts
        .distributor
        .message_digest(&ctx.accounts.claimant.key(), amount))
}
