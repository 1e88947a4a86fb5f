use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use anchor_lang::solana_program::sysvar::instructions::ID as INSTRUCTIONS_SYSVAR_ID;
use crate::utils::{process_claim, ClaimRequest, Ed25519Introspection, VaultTransfer};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * The claimant does not have to sign the transaction: their authorization is
 * the ed25519 signature over the claim digest. The transaction must carry an
 * Ed25519 program instruction over (claimant, signature, digest) directly
 * before this one. Any signer may submit the claim and pay for the claim
 * status account, tokens always go to a token account owned by the claimant.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor account containing the committed root and domain
    /// - Modified to update total_claimed
    #[account(mut)]
    pub distributor: Account<'info, TokenDistributor>,

    /// Claim record for this claimant
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = submitter,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
        constraint = claimant_token_account.owner == claimant.key() @ MerkleDistributorError::ClaimantMismatch,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MerkleDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The account the entitlement belongs to
    /// CHECK: Only its key is used; authorization comes from the claim signature
    pub claimant: UncheckedAccount<'info>,

    /// Signer submitting the claim (the claimant or a relayer)
    #[account(mut)]
    pub submitter: Signer<'info>,

    /// Instructions sysvar, read to find the Ed25519 program instruction
    /// CHECK: Address is pinned to the instructions sysvar
    #[account(address = INSTRUCTIONS_SYSVAR_ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a signed claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Entitled amount committed in the merkle tree
 * @param proof - Sibling hashes from the claimant's leaf up to the root
 * @param signature - Claimant's ed25519 signature over the claim digest
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    amount: u64,
    proof: Vec<[u8; 32]>,
    signature: [u8; 64],
) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let distributor_key = ctx.accounts.distributor.key();

    // Prepare PDA signing seeds for the vault transfer
    let nonce_bytes = ctx.accounts.distributor.nonce.to_le_bytes();
    let token_mint_key = ctx.accounts.distributor.token_mint;
    let owner_key = ctx.accounts.distributor.owner;
    let distributor_bump = [ctx.accounts.distributor.bump];
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &distributor_bump,
    ];
    let signer = &[&seeds[..]];

    let mut vault = VaultTransfer {
        distributor: ctx.accounts.distributor.to_account_info(),
        vault: ctx.accounts.token_vault.to_account_info(),
        vault_balance: ctx.accounts.token_vault.amount,
        claimant,
        claimant_token_account: ctx.accounts.claimant_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let authenticator = Ed25519Introspection {
        instructions_sysvar: ctx.accounts.instructions_sysvar.to_account_info(),
    };

    let mut ledger = ClaimStatusRecord {
        claimant,
        status: &mut *ctx.accounts.claim_status,
    };

    let request = ClaimRequest {
        account: claimant,
        amount,
        proof: &proof,
        signature: &signature,
    };

    let receipt = process_claim(
        &mut ctx.accounts.distributor,
        &authenticator,
        &mut ledger,
        &mut vault,
        &request,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(TokensClaimed {
        distributor: distributor_key,
        claimant,
        amount: receipt.amount,
        submitter: ctx.accounts.submitter.key(),
        total_claimed: receipt.total_claimed,
    });

    Ok(())
}
