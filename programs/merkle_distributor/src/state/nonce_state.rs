use anchor_lang::prelude::*;

/**
 * Owner nonce account
 *
 * Counter of distributors created by one owner. Each new distributor takes
 * the next nonce, which yields a fresh distributor address and therefore a
 * fresh domain separator: signatures collected for one campaign never
 * validate against another campaign of the same owner and mint.
 *
 * Derivation: ["owner_nonce", owner]
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Nonce of the most recently created distributor
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();

    /// Reserves the next nonce
    pub fn next(&mut self) -> Option<u32> {
        let next = self.nonce.checked_add(1)?;
        self.nonce = next;
        Some(next)
    }
}
