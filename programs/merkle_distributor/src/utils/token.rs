use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::*;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Payout side of a claim: moves `amount` to the token account of `to`
///
/// Implementations must not re-enter the claim pipeline.
pub trait TokenLedger {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Vault-to-claimant transfer signed by the distributor PDA
pub struct VaultTransfer<'a, 'b> {
    pub distributor: AccountInfo<'a>,
    pub vault: AccountInfo<'a>,
    pub vault_balance: u64,
    pub claimant: Pubkey,
    pub claimant_token_account: AccountInfo<'a>,
    pub mint: AccountInfo<'a>,
    pub decimals: u8,
    pub token_program: AccountInfo<'a>,
    pub signer_seeds: &'b [&'b [&'b [u8]]],
}

/// Guards a vault payout before any CPI is made
pub fn check_payout(claimant: &Pubkey, to: &Pubkey, vault_balance: u64, amount: u64) -> Result<()> {
    // The destination token account was validated against this claimant only
    require_keys_eq!(*to, *claimant, MerkleDistributorError::ClaimantMismatch);
    require!(
        vault_balance >= amount,
        MerkleDistributorError::InsufficientVaultBalance
    );
    Ok(())
}

impl TokenLedger for VaultTransfer<'_, '_> {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        check_payout(&self.claimant, to, self.vault_balance, amount)?;

        transfer_token(
            self.distributor.clone(),
            self.vault.clone(),
            self.claimant_token_account.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(self.signer_seeds),
        )?;

        self.vault_balance -= amount;
        Ok(())
    }
}
