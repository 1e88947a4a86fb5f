use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak::hashv;
use anchor_lang::solana_program::ed25519_program;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::constants::*;

/**
 * Structured claim signing
 *
 * A claimant signs digest = keccak256(0x1901 || domain_separator || struct_hash)
 * where struct_hash commits to (account, amount) and the domain separator
 * commits to this program, this distributor and the cluster. Clients can
 * rebuild the digest from public data before signing.
 */

/// Identity of one distributor instance, mixed into every signed claim
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimDomain<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub cluster_id: u64,
    pub program_id: Pubkey,
    pub distributor: Pubkey,
}

impl ClaimDomain<'_> {
    /// Derives the 32-byte domain separator
    pub fn separator(&self) -> [u8; 32] {
        let type_hash = hashv(&[DOMAIN_TYPE.as_bytes()]);
        let name_hash = hashv(&[self.name.as_bytes()]);
        let version_hash = hashv(&[self.version.as_bytes()]);
        hashv(&[
            type_hash.as_ref(),
            name_hash.as_ref(),
            version_hash.as_ref(),
            &u64_word(self.cluster_id),
            self.program_id.as_ref(),
            self.distributor.as_ref(),
        ])
        .to_bytes()
    }
}

/// Left-pads a u64 into a big-endian 32-byte word
fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Hash of the typed claim struct for (account, amount)
pub fn claim_struct_hash(account: &Pubkey, amount: u64) -> [u8; 32] {
    let type_hash = hashv(&[CLAIM_TYPE.as_bytes()]);
    hashv(&[type_hash.as_ref(), account.as_ref(), &u64_word(amount)]).to_bytes()
}

/// The digest a claimant signs for (account, amount) under `domain_separator`
pub fn message_digest(domain_separator: &[u8; 32], account: &Pubkey, amount: u64) -> [u8; 32] {
    let struct_hash = claim_struct_hash(account, amount);
    hashv(&[&STRUCTURED_DATA_PREFIX, domain_separator, &struct_hash]).to_bytes()
}

/**
 * Claim signature checks
 *
 * Ed25519 verification is too expensive to run inside the program. The
 * submitter instead places an Ed25519 program instruction over
 * (claimant pubkey, signature, digest) directly before the claim
 * instruction. The runtime fails the whole transaction if that signature is
 * invalid, so the claim only has to confirm the instruction is there and
 * covers exactly the values it is checking.
 */

/// Decides whether `signature` authorizes `digest` on behalf of `account`
pub trait ClaimAuthenticator {
    fn authenticate(&self, account: &Pubkey, digest: &[u8; 32], signature: &[u8; 64]) -> bool;
}

/// Ed25519 program instruction layout
pub const ED25519_HEADER_LEN: usize = 2;
pub const ED25519_OFFSETS_LEN: usize = 14;
pub const ED25519_PUBKEY_LEN: usize = 32;
pub const ED25519_SIGNATURE_LEN: usize = 64;
/// Offset index meaning "data of this same instruction"
pub const ED25519_CURRENT_INSTRUCTION: u16 = u16::MAX;

/// Looks up the Ed25519 program instruction preceding the claim through the instructions sysvar
pub struct Ed25519Introspection<'a> {
    pub instructions_sysvar: AccountInfo<'a>,
}

impl ClaimAuthenticator for Ed25519Introspection<'_> {
    fn authenticate(&self, account: &Pubkey, digest: &[u8; 32], signature: &[u8; 64]) -> bool {
        let Ok(current) = load_current_index_checked(&self.instructions_sysvar) else {
            return false;
        };
        let Some(previous) = current.checked_sub(1) else {
            return false;
        };
        let Ok(instruction) = load_instruction_at_checked(previous as usize, &self.instructions_sysvar) else {
            return false;
        };
        ed25519_instruction_matches(&instruction, account, digest, signature)
    }
}

fn read_u16(data: &[u8], at: usize) -> Option<u16> {
    let bytes = data.get(at..at + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_slice(data: &[u8], offset: u16, len: usize) -> Option<&[u8]> {
    let start = offset as usize;
    data.get(start..start.checked_add(len)?)
}

/// Checks that `instruction` is an Ed25519 program instruction verifying exactly
/// `signature` by `account` over `digest`, with every field read from its own data
///
/// Anything else, including extra signatures or data pulled from other
/// instructions, is a rejection.
pub fn ed25519_instruction_matches(
    instruction: &Instruction,
    account: &Pubkey,
    digest: &[u8; 32],
    signature: &[u8; 64],
) -> bool {
    if instruction.program_id != ed25519_program::ID || !instruction.accounts.is_empty() {
        return false;
    }

    let data = &instruction.data;
    if data.len() < ED25519_HEADER_LEN + ED25519_OFFSETS_LEN || data[0] != 1 {
        return false;
    }

    let offsets = ED25519_HEADER_LEN;
    let field = |slot: usize| read_u16(data, offsets + 2 * slot);
    let (
        Some(signature_offset),
        Some(signature_index),
        Some(pubkey_offset),
        Some(pubkey_index),
        Some(message_offset),
        Some(message_size),
        Some(message_index),
    ) = (field(0), field(1), field(2), field(3), field(4), field(5), field(6))
    else {
        return false;
    };

    if signature_index != ED25519_CURRENT_INSTRUCTION
        || pubkey_index != ED25519_CURRENT_INSTRUCTION
        || message_index != ED25519_CURRENT_INSTRUCTION
        || message_size as usize != digest.len()
    {
        return false;
    }

    read_slice(data, pubkey_offset, ED25519_PUBKEY_LEN) == Some(&account.to_bytes()[..])
        && read_slice(data, message_offset, digest.len()) == Some(&digest[..])
        && read_slice(data, signature_offset, ED25519_SIGNATURE_LEN) == Some(&signature[..])
}
