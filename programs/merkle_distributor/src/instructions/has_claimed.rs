use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for reading a claimant's claim status
 *
 * The claim status PDA is passed unchecked because it does not exist until
 * the claimant's first claim attempt.
 */
#[derive(Accounts)]
pub struct ClaimStatusView<'info> {
    pub distributor: Account<'info, TokenDistributor>,

    /// CHECK: Only its key is used to derive the claim status address
    pub claimant: UncheckedAccount<'info>,

    /// CHECK: Address is checked by seeds, contents are deserialized only if initialized
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

/// Returns whether the claimant has claimed from this distributor
pub fn handle_has_claimed(ctx: Context<ClaimStatusView>) -> Result<bool> {
    let info = ctx.accounts.claim_status.to_account_info();
    let data = info.try_borrow_data()?;
    ClaimStatus::read_flag(info.owner, &data)
}
