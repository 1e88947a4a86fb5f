use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_token, ClaimDomain};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new merkle distributor
 *
 * This instruction fixes everything a claim is checked against:
 * - Reserves the owner's next nonce and derives the distributor PDA from it
 * - Creates the vault PDA and funds it from the owner's token account
 * - Commits the merkle root and derives the domain separator
 *
 * None of these values can be changed afterwards.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The distributor account (PDA)
    /// - Derived from: ["distributor", token_mint, owner, owner_nonce + 1]
    #[account(
        init,
        payer = owner,
        space = TokenDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            owner_nonce.nonce.wrapping_add(1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, TokenDistributor>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being distributed
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account the vault is funded from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Creator and funder of the distributor
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates and funds a new merkle distributor
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_total_amount - Tokens moved from the owner into the vault
 * @param merkle_root - Root over keccak(keccak(claimant || amount_le)) leaves
 * @param domain_name - Name field of the signing domain
 * @param domain_version - Version field of the signing domain
 * @param cluster_id - Identifier of the cluster this program runs on
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    initial_total_amount: u64,
    merkle_root: [u8; 32],
    domain_name: String,
    domain_version: String,
    cluster_id: u64,
) -> Result<()> {
    // ===== VALIDATION PHASE =====
    validate_config(initial_total_amount, &merkle_root, &domain_name, &domain_version)?;

    let nonce = ctx
        .accounts
        .owner_nonce
        .next()
        .ok_or(MerkleDistributorError::ArithmeticOverflow)?;

    // ===== EFFECTS PHASE =====
    let distributor_key = ctx.accounts.distributor.key();
    let domain = ClaimDomain {
        name: &domain_name,
        version: &domain_version,
        cluster_id,
        program_id: crate::ID,
        distributor: distributor_key,
    };

    let distributor = &mut ctx.accounts.distributor;
    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = nonce;
    distributor.owner = ctx.accounts.owner.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.initial_total_amount = initial_total_amount;
    distributor.cluster_id = cluster_id;
    distributor.merkle_root = merkle_root;
    distributor.domain_separator = domain.separator();

    let domain_separator = distributor.domain_separator;

    // ===== INTERACTIONS PHASE =====
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_total_amount,
        ctx.accounts.token_mint.decimals,
        None, // Owner signs the deposit directly
    )?;

    msg!("Distributor {} created with nonce {}", distributor_key, nonce);

    emit_cpi!(DistributorCreated {
        distributor: distributor_key,
        nonce,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        merkle_root,
        domain_separator,
        initial_total_amount,
    });

    Ok(())
}
