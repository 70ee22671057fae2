use crate::SyncError;
use rollup_ledger_db::{Database, DatabaseOperations};
use rollup_ledger_primitives::{RootPair, VerificationCandidate, VerificationStatus};
use std::sync::Arc;

/// Reconciles the two ledgers to find the next unverified batch pair to be checked for fraud,
/// and records the verification outcome.
///
/// Candidates are strictly sequential by batch number: the next candidate only appears once
/// the previous one has been resolved. The actual root-equality and fraud-proof logic is
/// owned by the downstream verifier.
#[derive(Debug)]
pub struct VerificationCandidateSelector {
    /// A reference to the database holding both ledgers.
    database: Arc<Database>,
}

impl VerificationCandidateSelector {
    /// Creates a new [`VerificationCandidateSelector`] with the given [`Database`].
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Returns the lowest-numbered `UNVERIFIED` L1 state root batch paired position for
    /// position with the L2 computed roots of the state commitment chain batch with the same
    /// number. Returns [`None`] when no batch is unverified or when the lowest unverified
    /// batch has no complete L2 counterpart yet; a later batch that happens to have a
    /// counterpart is never returned ahead of it.
    pub async fn next_candidate(&self) -> Result<Option<VerificationCandidate>, SyncError> {
        let Some(batch_number) =
            self.database.get_lowest_unverified_state_root_batch().await?
        else {
            return Ok(None);
        };

        let l1_roots = self.database.get_l1_state_roots(batch_number).await?;
        if l1_roots.is_empty() {
            return Ok(None);
        }
        let l2_roots = self.database.get_state_commitment_chain_roots(batch_number).await?;
        if l2_roots.len() < l1_roots.len() {
            return Ok(None);
        }

        let roots = l1_roots
            .into_iter()
            .zip(l2_roots)
            .map(|(l1_root, l2_root)| RootPair { l1_root, l2_root })
            .collect();
        Ok(Some(VerificationCandidate { batch_number, roots }))
    }

    /// Transitions the L1 state root batch with the provided number from `UNVERIFIED` to
    /// `VERIFIED`. A no-op for missing batches and for batches in any other status, terminal
    /// `FRAUDULENT` and `REMOVED` included.
    pub async fn verify_batch(&self, batch_number: u64) -> Result<(), SyncError> {
        let updated = self
            .database
            .set_state_root_batch_status(
                batch_number,
                VerificationStatus::Unverified,
                VerificationStatus::Verified,
            )
            .await?;
        if !updated {
            tracing::debug!(target: "ledger::sync", batch_number, "No unverified state root batch to verify.");
        }
        Ok(())
    }

    /// Transitions the L1 state root batch with the provided number from `UNVERIFIED` to
    /// `FRAUDULENT`. Same no-op rule as [`Self::verify_batch`].
    pub async fn mark_fraudulent(&self, batch_number: u64) -> Result<(), SyncError> {
        let updated = self
            .database
            .set_state_root_batch_status(
                batch_number,
                VerificationStatus::Unverified,
                VerificationStatus::Fraudulent,
            )
            .await?;
        if !updated {
            tracing::debug!(target: "ledger::sync", batch_number, "No unverified state root batch to mark fraudulent.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        test_utils::{
            finalize_canonical_chain, setup_test_database, test_hash, tx_output,
            unstructured_bytes,
        },
        L1Ingestion, StateCommitmentChainBatchBuilder,
    };
    use arbitrary::Unstructured;

    const TIMESTAMP: u64 = 1_700_000_000;

    async fn insert_finalized_output(
        db: &Arc<Database>,
        u: &mut Unstructured<'_>,
        n: u64,
        state_root: alloy_primitives::B256,
    ) {
        let output = tx_output(u, test_hash(n), state_root, n, TIMESTAMP, 4);
        db.insert_l2_transaction_output(output).await.unwrap();
        finalize_canonical_chain(db).await;
    }

    #[tokio::test]
    async fn test_no_candidate_without_data() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());

        assert!(selector.next_candidate().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_candidate_with_l1_data_only() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());
        let ingestion = L1Ingestion::new(db.clone());

        ingestion
            .insert_rollup_state_roots(test_hash(201), vec![test_hash(101), test_hash(102)])
            .await
            .unwrap();

        assert!(selector.next_candidate().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_candidate_with_l2_data_only() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());
        let builder = StateCommitmentChainBatchBuilder::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        insert_finalized_output(&db, &mut u, 1, test_hash(101)).await;
        builder.try_build_l2_only_batch(1, 10).await.unwrap().unwrap();

        assert!(selector.next_candidate().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_candidate_pairs_roots_positionally() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());
        let builder = StateCommitmentChainBatchBuilder::new(db.clone());
        let ingestion = L1Ingestion::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        ingestion
            .insert_rollup_state_roots(test_hash(201), vec![test_hash(101), test_hash(102)])
            .await
            .unwrap();
        insert_finalized_output(&db, &mut u, 1, test_hash(101)).await;
        insert_finalized_output(&db, &mut u, 2, test_hash(102)).await;
        builder.try_build_l2_only_batch(1, 10).await.unwrap().unwrap();

        let candidate = selector.next_candidate().await.unwrap().unwrap();
        assert_eq!(candidate.batch_number, 0);
        assert_eq!(
            candidate.roots,
            vec![
                RootPair { l1_root: test_hash(101), l2_root: test_hash(101) },
                RootPair { l1_root: test_hash(102), l2_root: test_hash(102) },
            ]
        );
    }

    #[tokio::test]
    async fn test_no_candidate_for_incomplete_l2_counterpart() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());
        let builder = StateCommitmentChainBatchBuilder::new(db.clone());
        let ingestion = L1Ingestion::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        // The L1 batch has 2 roots, the L2 counterpart only 1.
        ingestion
            .insert_rollup_state_roots(test_hash(201), vec![test_hash(101), test_hash(102)])
            .await
            .unwrap();
        insert_finalized_output(&db, &mut u, 1, test_hash(101)).await;
        builder.try_build_l2_only_batch(1, 10).await.unwrap().unwrap();

        assert!(selector.next_candidate().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_terminal_batches_are_never_candidates() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());
        let builder = StateCommitmentChainBatchBuilder::new(db.clone());
        let ingestion = L1Ingestion::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        ingestion
            .insert_rollup_state_roots(test_hash(201), vec![test_hash(101), test_hash(102)])
            .await
            .unwrap();
        insert_finalized_output(&db, &mut u, 1, test_hash(101)).await;
        insert_finalized_output(&db, &mut u, 2, test_hash(102)).await;
        builder.try_build_l2_only_batch(1, 10).await.unwrap().unwrap();
        assert!(selector.next_candidate().await.unwrap().is_some());

        selector.mark_fraudulent(0).await.unwrap();
        assert!(selector.next_candidate().await.unwrap().is_none());
        assert_eq!(
            db.get_state_root_batch_status(0).await.unwrap(),
            Some(VerificationStatus::Fraudulent)
        );

        // A fraudulent batch can never transition to verified.
        selector.verify_batch(0).await.unwrap();
        assert_eq!(
            db.get_state_root_batch_status(0).await.unwrap(),
            Some(VerificationStatus::Fraudulent)
        );
    }

    #[tokio::test]
    async fn test_removed_batches_are_never_candidates() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());
        let builder = StateCommitmentChainBatchBuilder::new(db.clone());
        let ingestion = L1Ingestion::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        ingestion
            .insert_rollup_state_roots(test_hash(201), vec![test_hash(101)])
            .await
            .unwrap();
        insert_finalized_output(&db, &mut u, 1, test_hash(101)).await;
        builder.try_build_l2_only_batch(1, 10).await.unwrap().unwrap();

        // The removal transition is driven by L1 events outside this core; applied through
        // the store directly.
        assert!(db
            .set_state_root_batch_status(
                0,
                VerificationStatus::Unverified,
                VerificationStatus::Removed
            )
            .await
            .unwrap());

        assert!(selector.next_candidate().await.unwrap().is_none());
        selector.verify_batch(0).await.unwrap();
        assert_eq!(
            db.get_state_root_batch_status(0).await.unwrap(),
            Some(VerificationStatus::Removed)
        );
    }

    #[tokio::test]
    async fn test_verification_is_strictly_sequential() {
        let db = setup_test_database().await;
        let selector = VerificationCandidateSelector::new(db.clone());
        let builder = StateCommitmentChainBatchBuilder::new(db.clone());
        let ingestion = L1Ingestion::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        // Two aligned batches on both ledgers.
        ingestion.insert_rollup_state_roots(test_hash(201), vec![test_hash(101)]).await.unwrap();
        ingestion.insert_rollup_state_roots(test_hash(202), vec![test_hash(102)]).await.unwrap();
        insert_finalized_output(&db, &mut u, 1, test_hash(101)).await;
        builder.try_build_l2_only_batch(1, 1).await.unwrap().unwrap();
        insert_finalized_output(&db, &mut u, 2, test_hash(102)).await;
        builder.try_build_l2_only_batch(1, 1).await.unwrap().unwrap();

        // Batch 0 comes first, batch 1 only once 0 has been resolved.
        let candidate = selector.next_candidate().await.unwrap().unwrap();
        assert_eq!(candidate.batch_number, 0);

        // Verifying a batch with the wrong number leaves the sequence untouched.
        selector.verify_batch(5).await.unwrap();
        assert_eq!(selector.next_candidate().await.unwrap().unwrap().batch_number, 0);

        selector.verify_batch(0).await.unwrap();
        assert_eq!(
            db.get_state_root_batch_status(0).await.unwrap(),
            Some(VerificationStatus::Verified)
        );
        let candidate = selector.next_candidate().await.unwrap().unwrap();
        assert_eq!(candidate.batch_number, 1);
        assert_eq!(
            candidate.roots,
            vec![RootPair { l1_root: test_hash(102), l2_root: test_hash(102) }]
        );

        selector.verify_batch(1).await.unwrap();
        assert!(selector.next_candidate().await.unwrap().is_none());
    }
}
