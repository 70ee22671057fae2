use crate::SyncError;
use alloy_primitives::B256;
use rollup_ledger_db::{Database, DatabaseOperations};
use rollup_ledger_primitives::{BatchSubmissionStatus, StateCommitmentBatch};
use std::sync::Arc;

/// Builds state commitment chain batches from outputs finalized on the canonical chain,
/// either L2-only once enough outputs have accumulated, or mirroring an L1-confirmed state
/// root batch to keep the batch numbering of the two ledgers aligned.
#[derive(Debug)]
pub struct StateCommitmentChainBatchBuilder {
    /// A reference to the database used to persist the batches.
    database: Arc<Database>,
}

impl StateCommitmentChainBatchBuilder {
    /// Creates a new [`StateCommitmentChainBatchBuilder`] with the given [`Database`].
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Returns true iff the next state commitment chain batch number to build already exists
    /// as an L1 state root batch, i.e. L1 is ahead of L2 for this batch family.
    pub async fn is_next_batch_appended_on_l1(&self) -> Result<bool, SyncError> {
        let batch_number = self.database.next_state_commitment_chain_batch_number().await?;
        Ok(self.database.l1_state_root_batch_exists(batch_number).await?)
    }

    /// Tries to build the state commitment chain batch that mirrors the L1 state root batch
    /// with the next batch number to build. Takes exactly as many finalized, unbatched
    /// outputs as the L1 batch has roots, in (block number, tx index) order. Returns [`None`]
    /// without writing any rows when L1 is not ahead or fewer outputs are available than the
    /// L1 batch has roots.
    ///
    /// A single-member batch mirrors an already-final L1 record and is created `FINALIZED`
    /// directly; larger batches are created `QUEUED` and go through the regular submission
    /// lifecycle.
    pub async fn try_build_batch_to_match_l1(&self) -> Result<Option<u64>, SyncError> {
        let txn = self.database.tx().await?;
        let batch_number = txn.next_state_commitment_chain_batch_number().await?;
        if !txn.l1_state_root_batch_exists(batch_number).await? {
            txn.rollback().await?;
            return Ok(None);
        }

        let root_count = txn.count_l1_state_roots(batch_number).await? as usize;
        let candidates = txn.get_state_commitment_chain_batch_candidates().await?;
        if root_count == 0 || candidates.len() < root_count {
            txn.rollback().await?;
            return Ok(None);
        }

        let ids: Vec<i64> = candidates.into_iter().take(root_count).map(|(id, _)| id).collect();
        let status = if ids.len() == 1 {
            BatchSubmissionStatus::Finalized
        } else {
            BatchSubmissionStatus::Queued
        };
        txn.insert_state_commitment_chain_batch(batch_number, status).await?;
        txn.assign_state_commitment_chain_batch(ids, batch_number, status).await?;
        txn.commit().await?;

        tracing::debug!(target: "ledger::sync", batch_number, root_count, "Built state commitment chain batch matching L1.");
        Ok(Some(batch_number))
    }

    /// Tries to build an L2-only state commitment chain batch from the finalized, unbatched
    /// outputs, independent of L1. Requires at least `min_count` outputs available, takes up
    /// to `max_count` in (block number, tx index) order and creates the batch `QUEUED`.
    /// Returns the new batch number, or [`None`] when the minimum is unmet.
    pub async fn try_build_l2_only_batch(
        &self,
        min_count: u64,
        max_count: u64,
    ) -> Result<Option<u64>, SyncError> {
        let txn = self.database.tx().await?;
        let candidates = txn.get_state_commitment_chain_batch_candidates().await?;
        if candidates.is_empty() || (candidates.len() as u64) < min_count {
            txn.rollback().await?;
            return Ok(None);
        }

        let ids: Vec<i64> =
            candidates.into_iter().take(max_count as usize).map(|(id, _)| id).collect();
        let batch_number = txn.next_state_commitment_chain_batch_number().await?;
        txn.insert_state_commitment_chain_batch(batch_number, BatchSubmissionStatus::Queued)
            .await?;
        txn.assign_state_commitment_chain_batch(ids, batch_number, BatchSubmissionStatus::Queued)
            .await?;
        txn.commit().await?;

        tracing::debug!(target: "ledger::sync", batch_number, "Built L2-only state commitment chain batch.");
        Ok(Some(batch_number))
    }

    /// Returns the earliest `QUEUED` batch with its ordered member state roots, or [`None`].
    pub async fn next_batch_to_submit(&self) -> Result<Option<StateCommitmentBatch>, SyncError> {
        Ok(self
            .database
            .get_earliest_state_commitment_chain_batch(BatchSubmissionStatus::Queued)
            .await?)
    }

    /// Returns the earliest `SENT` batch with its ordered member state roots, or [`None`].
    pub async fn next_batch_to_finalize(&self) -> Result<Option<StateCommitmentBatch>, SyncError> {
        Ok(self
            .database
            .get_earliest_state_commitment_chain_batch(BatchSubmissionStatus::Sent)
            .await?)
    }

    /// Transitions the batch with the provided number from `QUEUED` to `SENT`, recording the
    /// L1 submission transaction hash. A complete no-op, the hash included, when the number
    /// does not name a `QUEUED` batch.
    pub async fn mark_batch_submitted(
        &self,
        batch_number: u64,
        l1_tx_hash: B256,
    ) -> Result<(), SyncError> {
        self.set_batch_status(
            batch_number,
            BatchSubmissionStatus::Queued,
            BatchSubmissionStatus::Sent,
            l1_tx_hash,
        )
        .await
    }

    /// Transitions the batch with the provided number from `SENT` to `FINALIZED`, recording
    /// the L1 submission transaction hash. Same no-op-on-mismatch rule as
    /// [`Self::mark_batch_submitted`].
    pub async fn mark_batch_finalized(
        &self,
        batch_number: u64,
        l1_tx_hash: B256,
    ) -> Result<(), SyncError> {
        self.set_batch_status(
            batch_number,
            BatchSubmissionStatus::Sent,
            BatchSubmissionStatus::Finalized,
            l1_tx_hash,
        )
        .await
    }

    async fn set_batch_status(
        &self,
        batch_number: u64,
        expected: BatchSubmissionStatus,
        status: BatchSubmissionStatus,
        l1_tx_hash: B256,
    ) -> Result<(), SyncError> {
        let txn = self.database.tx().await?;
        let updated = txn
            .set_state_commitment_chain_batch_status(batch_number, expected, status, l1_tx_hash)
            .await?;
        txn.commit().await?;

        if !updated {
            tracing::debug!(target: "ledger::sync", batch_number, status = status.as_str(), "No matching state commitment chain batch to update.");
        }
        Ok(())
    }
}
