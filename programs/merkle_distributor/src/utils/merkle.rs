use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak::hashv;

/**
 * Merkle tree hashing shared by the claim pipeline and off-chain tree builders
 *
 * Tree Structure:
 * - Leaf: keccak256(keccak256(account_pubkey || amount_le))
 * - Intermediate node: keccak256(min(a, b) || max(a, b)) with lexicographic ordering
 *
 * Leaves are hashed twice so that a 64-byte internal node preimage can never
 * be presented as a leaf.
 */

/// Encodes an (account, amount) entitlement into a tree leaf
pub fn encode_leaf(account: &Pubkey, amount: u64) -> [u8; 32] {
    let inner = hashv(&[account.as_ref(), &amount.to_le_bytes()]);
    hashv(&[inner.as_ref()]).to_bytes()
}

/// Hashes two sibling nodes in canonical (sorted) order
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Rebuilds the root from `leaf` and its proof path and compares it to `root`
///
/// An empty path verifies only when the leaf is the root itself.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
