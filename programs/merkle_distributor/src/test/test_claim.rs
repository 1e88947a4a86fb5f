#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::error::MerkleDistributorError;
    use crate::test::fixtures::*;
    use crate::utils::{message_digest, ClaimRequest};

    const VAULT_BALANCE: u64 = 1_000;

    /// Alice: 100, Bob: 50, plus two filler entitlements
    struct Campaign {
        alice: Claimer,
        bob: Claimer,
        tree: SimpleMerkleTree,
        bank: ClaimBank,
    }

    impl Campaign {
        fn new() -> Self {
            Self::at(Pubkey::new_from_array([9u8; 32]))
        }

        fn at(distributor: Pubkey) -> Self {
            let alice = Claimer::from_seed(1);
            let bob = Claimer::from_seed(2);
            let entries = vec![
                (alice.account(), 100),
                (bob.account(), 50),
                (Claimer::from_seed(3).account(), 25),
                (Claimer::from_seed(4).account(), 10),
            ];
            let tree = SimpleMerkleTree::new(&entries);
            let state = distributor_state(tree.root(), &domain_for(distributor));
            Campaign {
                alice,
                bob,
                tree,
                bank: ClaimBank::new(state, VAULT_BALANCE),
            }
        }

        fn sign(&self, claimer: &Claimer, amount: u64) -> [u8; 64] {
            let digest = self.bank.distributor.message_digest(&claimer.account(), amount);
            claimer.sign(&digest)
        }
    }

    #[test]
    fn test_valid_claim_transfers_and_marks_claimed() {
        let mut campaign = Campaign::new();
        let alice = campaign.alice.account();
        let proof = campaign.tree.proof(0);
        let signature = campaign.sign(&campaign.alice, 100);

        let receipt = campaign
            .bank
            .submit(&ClaimRequest {
                account: alice,
                amount: 100,
                proof: &proof,
                signature: &signature,
            })
            .unwrap();

        assert_eq!(receipt.account, alice);
        assert_eq!(receipt.amount, 100);
        assert_eq!(receipt.total_claimed, 100);
        assert_eq!(campaign.bank.token.transfers, vec![(alice, 100)]);
        assert_eq!(campaign.bank.token.balance, VAULT_BALANCE - 100);
        assert_eq!(campaign.bank.distributor.total_claimed, 100);
        assert!(campaign.bank.has_claimed(&alice));
        assert!(!campaign.bank.has_claimed(&campaign.bob.account()));
    }

    #[test]
    fn test_resubmitted_claim_is_rejected() {
        let mut campaign = Campaign::new();
        let proof = campaign.tree.proof(0);
        let signature = campaign.sign(&campaign.alice, 100);
        let request = ClaimRequest {
            account: campaign.alice.account(),
            amount: 100,
            proof: &proof,
            signature: &signature,
        };

        campaign.bank.submit(&request).unwrap();
        assert_rejected(campaign.bank.submit(&request), MerkleDistributorError::AlreadyClaimed);

        assert_eq!(campaign.bank.token.transfers.len(), 1);
        assert_eq!(campaign.bank.distributor.total_claimed, 100);
    }

    #[test]
    fn test_already_claimed_is_checked_before_signature() {
        let mut campaign = Campaign::new();
        let proof = campaign.tree.proof(0);
        let signature = campaign.sign(&campaign.alice, 100);
        campaign
            .bank
            .submit(&ClaimRequest {
                account: campaign.alice.account(),
                amount: 100,
                proof: &proof,
                signature: &signature,
            })
            .unwrap();

        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.alice.account(),
            amount: 100,
            proof: &[],
            signature: &[0u8; 64],
        });
        assert_rejected(result, MerkleDistributorError::AlreadyClaimed);
    }

    #[test]
    fn test_stolen_signature_and_proof_rejected_as_signature() {
        let mut campaign = Campaign::new();
        let proof = campaign.tree.proof(0);
        let signature = campaign.sign(&campaign.alice, 100);

        // Bob replays Alice's proof and signature as himself
        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.bob.account(),
            amount: 100,
            proof: &proof,
            signature: &signature,
        });

        assert_rejected(result, MerkleDistributorError::InvalidSignature);
        assert!(!campaign.bank.has_claimed(&campaign.bob.account()));
        assert!(campaign.bank.token.transfers.is_empty());
    }

    #[test]
    fn test_altered_amount_rejected_as_signature() {
        let mut campaign = Campaign::new();
        let proof = campaign.tree.proof(0);
        let signature = campaign.sign(&campaign.alice, 100);

        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.alice.account(),
            amount: 200,
            proof: &proof,
            signature: &signature,
        });

        assert_rejected(result, MerkleDistributorError::InvalidSignature);
        assert!(!campaign.bank.has_claimed(&campaign.alice.account()));
    }

    #[test]
    fn test_signed_but_unlisted_amount_rejected_as_proof() {
        let mut campaign = Campaign::new();
        let proof = campaign.tree.proof(0);
        // Alice validly signs an amount she is not entitled to
        let signature = campaign.sign(&campaign.alice, 200);

        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.alice.account(),
            amount: 200,
            proof: &proof,
            signature: &signature,
        });

        assert_rejected(result, MerkleDistributorError::InvalidProof);
        assert!(!campaign.bank.has_claimed(&campaign.alice.account()));
    }

    #[test]
    fn test_tampered_proof_rejected() {
        let mut campaign = Campaign::new();
        let signature = campaign.sign(&campaign.bob, 50);
        let proof = campaign.tree.proof(1);

        for position in 0..proof.len() {
            let mut tampered = proof.clone();
            tampered[position][31] ^= 0x80;
            let result = campaign.bank.submit(&ClaimRequest {
                account: campaign.bob.account(),
                amount: 50,
                proof: &tampered,
                signature: &signature,
            });
            assert_rejected(result, MerkleDistributorError::InvalidProof);
        }

        let mut swapped = proof.clone();
        swapped.swap(0, 1);
        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.bob.account(),
            amount: 50,
            proof: &swapped,
            signature: &signature,
        });
        assert_rejected(result, MerkleDistributorError::InvalidProof);
    }

    #[test]
    fn test_oversized_proof_rejected() {
        let mut campaign = Campaign::new();
        let signature = campaign.sign(&campaign.bob, 50);
        let proof = vec![[1u8; 32]; crate::constants::MAX_PROOF_LEN + 1];

        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.bob.account(),
            amount: 50,
            proof: &proof,
            signature: &signature,
        });
        assert_rejected(result, MerkleDistributorError::InvalidProof);
    }

    #[test]
    fn test_signature_from_other_distributor_rejected() {
        let first = Campaign::at(Pubkey::new_from_array([9u8; 32]));
        let mut second = Campaign::at(Pubkey::new_from_array([10u8; 32]));

        // Same root and claimant, different instance identity
        assert_eq!(first.bank.distributor.merkle_root, second.bank.distributor.merkle_root);
        let signature = first.sign(&first.alice, 100);
        let proof = second.tree.proof(0);

        let result = second.bank.submit(&ClaimRequest {
            account: second.alice.account(),
            amount: 100,
            proof: &proof,
            signature: &signature,
        });
        assert_rejected(result, MerkleDistributorError::InvalidSignature);
    }

    #[test]
    fn test_signature_from_other_cluster_rejected() {
        let mut campaign = Campaign::new();
        let mut other_cluster = domain_for(Pubkey::new_from_array([9u8; 32]));
        other_cluster.cluster_id += 1;

        let digest = message_digest(&other_cluster.separator(), &campaign.alice.account(), 100);
        let signature = campaign.alice.sign(&digest);
        let proof = campaign.tree.proof(0);

        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.alice.account(),
            amount: 100,
            proof: &proof,
            signature: &signature,
        });
        assert_rejected(result, MerkleDistributorError::InvalidSignature);
    }

    #[test]
    fn test_relayer_submission_pays_claimant() {
        // The request carries no submitter: whoever submits, the transfer goes to the claimant
        let mut campaign = Campaign::new();
        let bob = campaign.bob.account();
        let proof = campaign.tree.proof(1);
        let signature = campaign.sign(&campaign.bob, 50);

        campaign
            .bank
            .submit(&ClaimRequest {
                account: bob,
                amount: 50,
                proof: &proof,
                signature: &signature,
            })
            .unwrap();

        assert_eq!(campaign.bank.token.transfers, vec![(bob, 50)]);
    }

    #[test]
    fn test_failed_transfer_leaves_no_claim() {
        let mut campaign = Campaign::new();
        let alice = campaign.alice.account();
        let proof = campaign.tree.proof(0);
        let signature = campaign.sign(&campaign.alice, 100);
        let request = ClaimRequest {
            account: alice,
            amount: 100,
            proof: &proof,
            signature: &signature,
        };

        campaign.bank.token.offline = true;
        assert_rejected(campaign.bank.submit(&request), MerkleDistributorError::TransferFailed);
        assert!(!campaign.bank.has_claimed(&alice));
        assert_eq!(campaign.bank.distributor.total_claimed, 0);

        // A later resubmission goes through once the token ledger recovers
        campaign.bank.token.offline = false;
        campaign.bank.submit(&request).unwrap();
        assert!(campaign.bank.has_claimed(&alice));
    }

    #[test]
    fn test_insufficient_vault_reported_as_transfer_failure() {
        let mut campaign = Campaign::new();
        campaign.bank.token.balance = 99;
        let proof = campaign.tree.proof(0);
        let signature = campaign.sign(&campaign.alice, 100);

        let result = campaign.bank.submit(&ClaimRequest {
            account: campaign.alice.account(),
            amount: 100,
            proof: &proof,
            signature: &signature,
        });
        assert_rejected(result, MerkleDistributorError::TransferFailed);
        assert_eq!(campaign.bank.token.balance, 99);
    }

    #[test]
    fn test_every_entitlement_claims_once() {
        let mut campaign = Campaign::new();
        let claimers = [
            (Claimer::from_seed(1), 100),
            (Claimer::from_seed(2), 50),
            (Claimer::from_seed(3), 25),
            (Claimer::from_seed(4), 10),
        ];

        for (index, (claimer, amount)) in claimers.iter().enumerate() {
            let proof = campaign.tree.proof(index);
            let signature = campaign.sign(claimer, *amount);
            let request = ClaimRequest {
                account: claimer.account(),
                amount: *amount,
                proof: &proof,
                signature: &signature,
            };
            campaign.bank.submit(&request).unwrap();
            assert_rejected(campaign.bank.submit(&request), MerkleDistributorError::AlreadyClaimed);
        }

        assert_eq!(campaign.bank.distributor.total_claimed, 185);
        assert_eq!(campaign.bank.token.balance, VAULT_BALANCE - 185);
    }
}
