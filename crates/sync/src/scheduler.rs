use crate::SyncError;
use alloy_primitives::B256;
use rollup_ledger_db::{Database, DatabaseOperations};
use rollup_ledger_primitives::{GethSubmission, QueueOrigin, RollupTransaction};
use std::sync::Arc;

/// Records rollup transactions decoded from L1 transaction logs and decides which of them
/// must be forwarded to the L2 execution engine.
///
/// Forwarding is gated twice: a transaction is only eligible once its owning L1 block has been
/// marked processed, so partially decoded L1 data is never forwarded, and the queue origin
/// filter lets the different queue types be drained independently and at different cadences.
#[derive(Debug)]
pub struct GethSubmissionScheduler {
    /// A reference to the database used to persist the queue state.
    database: Arc<Database>,
}

impl GethSubmissionScheduler {
    /// Creates a new [`GethSubmissionScheduler`] with the given [`Database`].
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Inserts the rollup transactions decoded from the provided L1 transaction. When
    /// `queue_for_geth` is set, a new queue entry covering the inserted transactions is
    /// created in the same transaction and its index returned; otherwise no queue entry is
    /// created regardless of content. An empty list schedules nothing and returns [`None`].
    pub async fn insert_rollup_transactions(
        &self,
        l1_tx_hash: B256,
        transactions: Vec<RollupTransaction>,
        queue_for_geth: bool,
    ) -> Result<Option<u64>, SyncError> {
        if transactions.is_empty() {
            return Ok(None);
        }

        let txn = self.database.tx().await?;
        let queue_index = if queue_for_geth {
            let queue_index = txn.next_geth_submission_queue_index().await?;
            txn.insert_geth_submission_queue_entry(queue_index, l1_tx_hash).await?;
            Some(queue_index)
        } else {
            None
        };
        txn.insert_rollup_transactions(transactions, queue_index).await?;
        txn.commit().await?;

        Ok(queue_index)
    }

    /// Scans for rollup transactions that are not yet part of any submission queue entry,
    /// belong to a processed L1 block and match the origin filter, ordered by (L1 block
    /// number, L1 tx index, log index, index within submission). Creates exactly one new
    /// `QUEUED` entry covering the qualifying set and returns its index, or [`None`] with no
    /// side effects when nothing qualifies.
    pub async fn queue_next_submission(
        &self,
        allowed_queue_origins: &[QueueOrigin],
    ) -> Result<Option<u64>, SyncError> {
        let txn = self.database.tx().await?;
        let candidates = txn.get_unqueued_rollup_transactions(allowed_queue_origins).await?;
        let Some((_, first)) = candidates.first() else {
            txn.rollback().await?;
            return Ok(None);
        };

        let l1_tx_hash = first.l1_tx_hash;
        let queue_index = txn.next_geth_submission_queue_index().await?;
        txn.insert_geth_submission_queue_entry(queue_index, l1_tx_hash).await?;
        txn.assign_rollup_transactions_to_submission(
            candidates.into_iter().map(|(id, _)| id).collect(),
            queue_index,
        )
        .await?;
        txn.commit().await?;

        tracing::debug!(target: "ledger::sync", queue_index, l1_tx_hash = ?l1_tx_hash, "Queued next geth submission.");
        Ok(Some(queue_index))
    }

    /// Returns the earliest `QUEUED` submission with its ordered member transactions, or
    /// [`None`] when nothing is queued. Transactions of `SENT` entries never surface here.
    pub async fn next_queued_submission(&self) -> Result<Option<GethSubmission>, SyncError> {
        Ok(self.database.get_next_queued_geth_submission().await?)
    }

    /// Transitions the queue entry with the provided index from `QUEUED` to `SENT`. A no-op
    /// when the index does not name a `QUEUED` entry.
    pub async fn mark_submitted_to_geth(&self, queue_index: u64) -> Result<(), SyncError> {
        Ok(self.database.set_geth_submission_sent(queue_index).await?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        test_utils::{insert_l1_block_with_tx, rollup_tx, setup_test_database, unstructured_bytes},
        L1Ingestion,
    };
    use arbitrary::Unstructured;
    use rollup_ledger_primitives::GethSubmissionQueueStatus;

    #[tokio::test]
    async fn test_insert_without_queueing_creates_no_queue_entry() {
        let db = setup_test_database().await;
        let scheduler = GethSubmissionScheduler::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let (_, l1_tx) = insert_l1_block_with_tx(&db, &mut u, true).await;
        let tx_1 = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 0);
        let tx_2 = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 1);

        let queue_index = scheduler
            .insert_rollup_transactions(l1_tx.hash, vec![tx_1, tx_2], false)
            .await
            .unwrap();
        assert_eq!(queue_index, None);
        assert_eq!(db.count_geth_submission_queue_entries().await.unwrap(), 0);
        assert_eq!(db.get_rollup_transactions(l1_tx.hash).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insert_with_queueing_creates_queue_entry() {
        let db = setup_test_database().await;
        let scheduler = GethSubmissionScheduler::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        // An empty transaction list schedules nothing.
        let queue_index =
            scheduler.insert_rollup_transactions(Default::default(), vec![], true).await.unwrap();
        assert_eq!(queue_index, None);

        let (_, l1_tx) = insert_l1_block_with_tx(&db, &mut u, true).await;
        let tx_1 = rollup_tx(&mut u, &l1_tx, QueueOrigin::Sequencer, 0);
        let tx_2 = rollup_tx(&mut u, &l1_tx, QueueOrigin::Sequencer, 1);

        let queue_index = scheduler
            .insert_rollup_transactions(l1_tx.hash, vec![tx_1, tx_2], true)
            .await
            .unwrap();
        assert_eq!(queue_index, Some(0));
        assert_eq!(
            db.get_geth_submission_queue_status(0).await.unwrap(),
            Some(GethSubmissionQueueStatus::Queued)
        );

        // The inserted transactions surface as the next queued submission, re-indexed by
        // their position in the insert call.
        let submission = scheduler.next_queued_submission().await.unwrap().unwrap();
        assert_eq!(submission.submission_index, 0);
        assert_eq!(submission.transactions.len(), 2);
        assert_eq!(submission.transactions[0].l1_tx_log_index, 0);
        assert_eq!(submission.transactions[0].index_within_submission, 0);
        assert_eq!(submission.transactions[1].l1_tx_log_index, 1);
        assert_eq!(submission.transactions[1].index_within_submission, 1);
    }

    #[tokio::test]
    async fn test_queue_gated_on_processed_block() {
        let db = setup_test_database().await;
        let ingestion = L1Ingestion::new(db.clone());
        let scheduler = GethSubmissionScheduler::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        // Insert an unprocessed block with a transaction carrying 2 rollup transactions,
        // without scheduling a submission.
        let (block, l1_tx) = insert_l1_block_with_tx(&db, &mut u, false).await;
        let tx_1 = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 0);
        let tx_2 = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 1);
        let queue_index = scheduler
            .insert_rollup_transactions(l1_tx.hash, vec![tx_1, tx_2], false)
            .await
            .unwrap();
        assert_eq!(queue_index, None);
        assert_eq!(db.count_geth_submission_queue_entries().await.unwrap(), 0);

        // The block is not processed: nothing qualifies, even with a matching origin.
        let queue_index =
            scheduler.queue_next_submission(&[QueueOrigin::SafetyQueue]).await.unwrap();
        assert_eq!(queue_index, None);
        assert_eq!(db.count_geth_submission_queue_entries().await.unwrap(), 0);

        // Once the block is processed the same call queues the transactions.
        ingestion.mark_block_processed(block.hash).await.unwrap();
        let queue_index =
            scheduler.queue_next_submission(&[QueueOrigin::SafetyQueue]).await.unwrap();
        assert_eq!(queue_index, Some(0));
        assert_eq!(
            db.get_geth_submission_queue_status(0).await.unwrap(),
            Some(GethSubmissionQueueStatus::Queued)
        );

        let submission = scheduler.next_queued_submission().await.unwrap().unwrap();
        assert_eq!(submission.submission_index, 0);
        assert_eq!(submission.transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_queue_filters_by_origin() {
        let db = setup_test_database().await;
        let scheduler = GethSubmissionScheduler::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let (_, l1_tx) = insert_l1_block_with_tx(&db, &mut u, true).await;
        let tx_1 = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 0);
        let tx_2 = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 1);
        scheduler.insert_rollup_transactions(l1_tx.hash, vec![tx_1, tx_2], false).await.unwrap();

        // Safety queue transactions are not drained by the sequencer or deposit filters.
        let queue_index = scheduler
            .queue_next_submission(&[QueueOrigin::Sequencer, QueueOrigin::L1ToL2Queue])
            .await
            .unwrap();
        assert_eq!(queue_index, None);
        assert_eq!(db.count_geth_submission_queue_entries().await.unwrap(), 0);

        let queue_index =
            scheduler.queue_next_submission(&[QueueOrigin::SafetyQueue]).await.unwrap();
        assert_eq!(queue_index, Some(0));
    }

    #[tokio::test]
    async fn test_mark_submitted_to_geth() {
        let db = setup_test_database().await;
        let scheduler = GethSubmissionScheduler::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let (_, l1_tx) = insert_l1_block_with_tx(&db, &mut u, true).await;
        let tx_1 = rollup_tx(&mut u, &l1_tx, QueueOrigin::SafetyQueue, 0);
        let queue_index = scheduler
            .insert_rollup_transactions(l1_tx.hash, vec![tx_1], true)
            .await
            .unwrap()
            .unwrap();

        assert!(scheduler.next_queued_submission().await.unwrap().is_some());

        scheduler.mark_submitted_to_geth(queue_index).await.unwrap();

        // Transactions of a SENT entry no longer surface.
        assert!(scheduler.next_queued_submission().await.unwrap().is_none());
        assert_eq!(
            db.get_geth_submission_queue_status(queue_index).await.unwrap(),
            Some(GethSubmissionQueueStatus::Sent)
        );

        // Marking again is a no-op.
        scheduler.mark_submitted_to_geth(queue_index).await.unwrap();
        assert_eq!(
            db.get_geth_submission_queue_status(queue_index).await.unwrap(),
            Some(GethSubmissionQueueStatus::Sent)
        );
    }

    #[tokio::test]
    async fn test_queue_indices_are_dense() {
        let db = setup_test_database().await;
        let scheduler = GethSubmissionScheduler::new(db.clone());

        let bytes = unstructured_bytes();
        let mut u = Unstructured::new(&bytes);

        let (_, l1_tx_1) = insert_l1_block_with_tx(&db, &mut u, true).await;
        let tx_1 = rollup_tx(&mut u, &l1_tx_1, QueueOrigin::L1ToL2Queue, 0);
        let first = scheduler
            .insert_rollup_transactions(l1_tx_1.hash, vec![tx_1], true)
            .await
            .unwrap();
        assert_eq!(first, Some(0));

        let (_, l1_tx_2) = insert_l1_block_with_tx(&db, &mut u, true).await;
        let tx_2 = rollup_tx(&mut u, &l1_tx_2, QueueOrigin::SafetyQueue, 0);
        scheduler.insert_rollup_transactions(l1_tx_2.hash, vec![tx_2], false).await.unwrap();

        let second = scheduler.queue_next_submission(&[QueueOrigin::SafetyQueue]).await.unwrap();
        assert_eq!(second, Some(1));
    }
}
