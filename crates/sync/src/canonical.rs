use crate::SyncError;
use alloy_primitives::B256;
use rollup_ledger_db::{Database, DatabaseOperations};
use rollup_ledger_primitives::{BatchSubmissionStatus, TransactionBatch};
use std::sync::Arc;

/// Accumulates L2 transaction outputs that are not yet present in any L1-confirmed canonical
/// chain batch into new batches, bounded by a minimum and maximum cumulative calldata size,
/// and advances those batches through the submission lifecycle.
#[derive(Debug)]
pub struct CanonicalChainBatchBuilder {
    /// A reference to the database used to persist the batches.
    database: Arc<Database>,
}

impl CanonicalChainBatchBuilder {
    /// Creates a new [`CanonicalChainBatchBuilder`] with the given [`Database`].
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Tries to build a new canonical chain batch from the outputs without canonical chain
    /// membership whose rollup transaction, if any, did not originate on L1.
    ///
    /// Candidates are taken in (block number, tx index) order while the running calldata byte
    /// sum stays within `max_calldata_bytes`. Once the sum has reached `min_calldata_bytes`,
    /// the batch is additionally cut at the first candidate whose timestamp leaves the batch's
    /// timestamp window. Returns the new batch number, or [`None`] without writing any rows
    /// when the accumulated size never reaches the minimum.
    pub async fn try_build_batch(
        &self,
        min_calldata_bytes: u64,
        max_calldata_bytes: u64,
    ) -> Result<Option<u64>, SyncError> {
        let txn = self.database.tx().await?;
        let candidates = txn.get_canonical_chain_batch_candidates().await?;

        let mut ids = Vec::new();
        let mut total_bytes: u64 = 0;
        let mut window_timestamp = None;
        for (id, output) in candidates {
            let size = output.calldata.len() as u64;
            if total_bytes.saturating_add(size) > max_calldata_bytes {
                break;
            }
            if window_timestamp.is_some_and(|timestamp| timestamp != output.block_timestamp) &&
                total_bytes >= min_calldata_bytes
            {
                break;
            }
            window_timestamp = Some(output.block_timestamp);
            total_bytes += size;
            ids.push(id);
        }

        if ids.is_empty() || total_bytes < min_calldata_bytes {
            txn.rollback().await?;
            return Ok(None);
        }

        let batch_number = txn.next_canonical_chain_batch_number().await?;
        txn.insert_canonical_chain_batch(batch_number, BatchSubmissionStatus::Queued).await?;
        txn.assign_canonical_chain_batch(ids, batch_number, BatchSubmissionStatus::Queued).await?;
        txn.commit().await?;

        tracing::debug!(target: "ledger::sync", batch_number, total_bytes, "Built canonical chain batch.");
        Ok(Some(batch_number))
    }

    /// Returns the earliest `QUEUED` batch with its ordered member outputs, or [`None`].
    pub async fn next_batch_to_submit(&self) -> Result<Option<TransactionBatch>, SyncError> {
        Ok(self
            .database
            .get_earliest_canonical_chain_batch(BatchSubmissionStatus::Queued)
            .await?)
    }

    /// Returns the earliest `SENT` batch with its ordered member outputs, or [`None`].
    pub async fn next_batch_to_finalize(&self) -> Result<Option<TransactionBatch>, SyncError> {
        Ok(self.database.get_earliest_canonical_chain_batch(BatchSubmissionStatus::Sent).await?)
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
            .set_canonical_chain_batch_status(batch_number, expected, status, l1_tx_hash)
            .await?;
        txn.commit().await?;

        if !updated {
            tracing::debug!(target: "ledger::sync", batch_number, status = status.as_str(), "No matching canonical chain batch to update.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        test_utils::{
            insert_l1_block_with_tx, rollup_tx, setup_test_database, test_hash, unstructured_bytes,
        },
        GethSubmissionScheduler,
    };
    use arbitrary::Unstructured;
    use rollup_ledger_primitives::QueueOrigin;

    const TIMESTAMP: u64 = 1_700_000_000;

    #[tokio::test]
    async fn test_no_batch_without_outputs() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());

        assert_eq!(builder.try_build_batch(1, 10).await.unwrap(), None);
        assert_eq!(db.count_canonical_chain_batches().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_minimum_size_threshold() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let output =
            crate::test_utils::tx_output(&mut u, test_hash(1), test_hash(101), 1, TIMESTAMP, 9);
        db.insert_l2_transaction_output(output).await.unwrap();

        // One byte below the minimum: no batch, no rows.
        assert_eq!(builder.try_build_batch(10, 100).await.unwrap(), None);
        assert_eq!(db.count_canonical_chain_batches().await.unwrap(), 0);

        // Exactly the minimum: the batch is built.
        let output =
            crate::test_utils::tx_output(&mut u, test_hash(2), test_hash(102), 2, TIMESTAMP, 1);
        db.insert_l2_transaction_output(output).await.unwrap();
        assert_eq!(builder.try_build_batch(10, 100).await.unwrap(), Some(0));

        let batch = db.get_canonical_chain_batch(0).await.unwrap().unwrap();
        assert_eq!(batch.status, BatchSubmissionStatus::Queued);
        assert_eq!(batch.transactions.len(), 2);
        assert_eq!(batch.transactions[0].tx_hash, test_hash(1));
        assert_eq!(batch.transactions[1].tx_hash, test_hash(2));
    }

    #[tokio::test]
    async fn test_excludes_outputs_originating_on_l1() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());
        let scheduler = GethSubmissionScheduler::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        // Insert a rollup transaction and an output back-referencing it.
        let (_, l1_tx) = insert_l1_block_with_tx(&db, &mut u, true).await;
        let tx = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 0);
        scheduler.insert_rollup_transactions(l1_tx.hash, vec![tx], false).await.unwrap();
        let (rollup_tx_id, _) = db
            .get_unqueued_rollup_transactions(&[QueueOrigin::SafetyQueue])
            .await
            .unwrap()
            .remove(0);

        let mut output =
            crate::test_utils::tx_output(&mut u, test_hash(1), test_hash(101), 1, TIMESTAMP, 8);
        output.l1_rollup_tx_id = Some(rollup_tx_id);
        db.insert_l2_transaction_output(output).await.unwrap();

        // The L1-originated output is represented on L1 independently and never batched.
        assert_eq!(builder.try_build_batch(1, 100).await.unwrap(), None);
        assert_eq!(db.count_canonical_chain_batches().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_timestamp_boundary_cuts_batch() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let output_1 =
            crate::test_utils::tx_output(&mut u, test_hash(1), test_hash(101), 1, TIMESTAMP, 4);
        let output_2 =
            crate::test_utils::tx_output(&mut u, test_hash(2), test_hash(102), 2, TIMESTAMP + 1, 4);
        db.insert_l2_transaction_output(output_1).await.unwrap();
        db.insert_l2_transaction_output(output_2).await.unwrap();

        // The minimum is met by the first output, so the batch is cut at the timestamp
        // boundary.
        assert_eq!(builder.try_build_batch(1, 100).await.unwrap(), Some(0));
        let batch = db.get_canonical_chain_batch(0).await.unwrap().unwrap();
        assert_eq!(batch.transactions.len(), 1);
        assert_eq!(batch.transactions[0].tx_hash, test_hash(1));

        // A second call picks up the remaining output.
        assert_eq!(builder.try_build_batch(1, 100).await.unwrap(), Some(1));
        let batch = db.get_canonical_chain_batch(1).await.unwrap().unwrap();
        assert_eq!(batch.transactions.len(), 1);
        assert_eq!(batch.transactions[0].tx_hash, test_hash(2));
    }

    #[tokio::test]
    async fn test_timestamp_boundary_ignored_below_minimum() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let output_1 =
            crate::test_utils::tx_output(&mut u, test_hash(1), test_hash(101), 1, TIMESTAMP, 4);
        let output_2 =
            crate::test_utils::tx_output(&mut u, test_hash(2), test_hash(102), 2, TIMESTAMP + 1, 4);
        db.insert_l2_transaction_output(output_1).await.unwrap();
        db.insert_l2_transaction_output(output_2).await.unwrap();

        // The minimum is only reached by spanning the timestamp boundary.
        assert_eq!(builder.try_build_batch(8, 100).await.unwrap(), Some(0));
        let batch = db.get_canonical_chain_batch(0).await.unwrap().unwrap();
        assert_eq!(batch.transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_maximum_size_cutoff() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let output_1 =
            crate::test_utils::tx_output(&mut u, test_hash(1), test_hash(101), 1, TIMESTAMP, 8);
        let output_2 =
            crate::test_utils::tx_output(&mut u, test_hash(2), test_hash(102), 2, TIMESTAMP, 8);
        db.insert_l2_transaction_output(output_1).await.unwrap();
        db.insert_l2_transaction_output(output_2).await.unwrap();

        // Both outputs are 8 bytes: with a maximum of 8 the first batch holds only the first
        // output, the second call batches the rest.
        assert_eq!(builder.try_build_batch(1, 8).await.unwrap(), Some(0));
        let batch = db.get_canonical_chain_batch(0).await.unwrap().unwrap();
        assert_eq!(batch.transactions.len(), 1);
        assert_eq!(batch.transactions[0].tx_hash, test_hash(1));

        assert_eq!(builder.try_build_batch(1, 8).await.unwrap(), Some(1));
        let batch = db.get_canonical_chain_batch(1).await.unwrap().unwrap();
        assert_eq!(batch.transactions.len(), 1);
        assert_eq!(batch.transactions[0].tx_hash, test_hash(2));
    }

    #[tokio::test]
    async fn test_batch_numbers_are_dense() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        for n in 0..3u64 {
            let output = crate::test_utils::tx_output(
                &mut u,
                test_hash(n + 1),
                test_hash(n + 101),
                n + 1,
                TIMESTAMP,
                4,
            );
            db.insert_l2_transaction_output(output).await.unwrap();
            assert_eq!(builder.try_build_batch(1, 100).await.unwrap(), Some(n));
        }
        assert_eq!(db.count_canonical_chain_batches().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_submission_lifecycle() {
        let db = setup_test_database().await;
        let builder = CanonicalChainBatchBuilder::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let output =
            crate::test_utils::tx_output(&mut u, test_hash(1), test_hash(101), 1, TIMESTAMP, 4);
        db.insert_l2_transaction_output(output).await.unwrap();
        builder.try_build_batch(1, 100).await.unwrap().unwrap();

        let to_submit = builder.next_batch_to_submit().await.unwrap().unwrap();
        assert_eq!(to_submit.batch_number, 0);
        assert_eq!(to_submit.status, BatchSubmissionStatus::Queued);
        assert!(builder.next_batch_to_finalize().await.unwrap().is_none());

        // A mark with a stale batch number is a complete no-op.
        builder.mark_batch_submitted(5, test_hash(500)).await.unwrap();
        assert!(builder.next_batch_to_submit().await.unwrap().is_some());

        builder.mark_batch_submitted(0, test_hash(501)).await.unwrap();
        assert!(builder.next_batch_to_submit().await.unwrap().is_none());
        let to_finalize = builder.next_batch_to_finalize().await.unwrap().unwrap();
        assert_eq!(to_finalize.batch_number, 0);
        assert_eq!(to_finalize.submission_tx_hash, Some(test_hash(501)));

        // Submitting an already sent batch does not record the new hash.
        builder.mark_batch_submitted(0, test_hash(502)).await.unwrap();
        let batch = db.get_canonical_chain_batch(0).await.unwrap().unwrap();
        assert_eq!(batch.submission_tx_hash, Some(test_hash(501)));

        builder.mark_batch_finalized(0, test_hash(503)).await.unwrap();
        assert!(builder.next_batch_to_finalize().await.unwrap().is_none());
        let batch = db.get_canonical_chain_batch(0).await.unwrap().unwrap();
        assert_eq!(batch.status, BatchSubmissionStatus::Finalized);
        assert_eq!(batch.submission_tx_hash, Some(test_hash(503)));
    }
}
