use super::models;
use crate::{DatabaseConnectionProvider, DatabaseError};

use alloy_primitives::B256;
use rollup_ledger_primitives::{
    BatchSubmissionStatus, GethSubmission, GethSubmissionQueueStatus, L1BlockRecord,
    L1TransactionRecord, L2TransactionOutput, QueueOrigin, RollupTransaction,
    StateCommitmentBatch, TransactionBatch, VerificationStatus,
};
use futures::{Stream, StreamExt};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

/// The [`DatabaseOperations`] trait provides methods for interacting with the database.
///
/// Each method issues its statements against the connection returned by
/// [`DatabaseConnectionProvider::get_connection`], so operations composed inside a
/// [`crate::DatabaseTransaction`] become visible atomically on commit.
#[async_trait::async_trait]
pub trait DatabaseOperations: DatabaseConnectionProvider {
    /// Insert an [`L1BlockRecord`] into the database. A duplicate block hash violates the
    /// primary key and the error is propagated.
    async fn insert_l1_block(
        &self,
        block: L1BlockRecord,
        processed: bool,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", block_hash = ?block.hash, block_number = block.number, "Inserting L1 block into database.");
        let block: models::l1_block::ActiveModel = (block, processed).into();
        block.insert(self.get_connection()).await?;
        Ok(())
    }

    /// Get an [`L1BlockRecord`] and its processed flag by block hash.
    async fn get_l1_block(
        &self,
        block_hash: B256,
    ) -> Result<Option<(L1BlockRecord, bool)>, DatabaseError> {
        Ok(models::l1_block::Entity::find_by_id(block_hash.to_vec())
            .one(self.get_connection())
            .await
            .map(|x| x.map(Into::into))?)
    }

    /// Get an iterator over all ingested L1 blocks and their processed flags.
    async fn get_l1_blocks<'a>(
        &'a self,
    ) -> Result<impl Stream<Item = Result<(L1BlockRecord, bool), DbErr>> + 'a, DatabaseError> {
        Ok(models::l1_block::Entity::find()
            .stream(self.get_connection())
            .await?
            .map(|res| res.map(Into::into)))
    }

    /// Insert the [`L1TransactionRecord`]s of a block. The transaction index within the block
    /// is derived from the position of each record in the provided list.
    async fn insert_l1_transactions(
        &self,
        txs: Vec<L1TransactionRecord>,
    ) -> Result<(), DatabaseError> {
        if txs.is_empty() {
            return Ok(());
        }
        tracing::trace!(target: "ledger::db", count = txs.len(), "Inserting L1 transactions into database.");
        let rows = txs
            .into_iter()
            .enumerate()
            .map(|(tx_index, tx)| models::l1_tx::ActiveModel::from((tx, tx_index as u32)));
        models::l1_tx::Entity::insert_many(rows).exec(self.get_connection()).await?;
        Ok(())
    }

    /// Get the [`L1TransactionRecord`]s of a block, ordered by their index within the block.
    async fn get_l1_transactions(
        &self,
        block_hash: B256,
    ) -> Result<Vec<L1TransactionRecord>, DatabaseError> {
        Ok(models::l1_tx::Entity::find()
            .filter(models::l1_tx::Column::BlockHash.eq(block_hash.to_vec()))
            .order_by_asc(models::l1_tx::Column::TxIndex)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Set the processed flag of the L1 block with the provided hash. A no-op when the block
    /// does not exist.
    async fn set_l1_block_processed(&self, block_hash: B256) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", block_hash = ?block_hash, "Marking L1 block as processed.");
        models::l1_block::Entity::update_many()
            .col_expr(models::l1_block::Column::Processed, Expr::value(true))
            .filter(models::l1_block::Column::BlockHash.eq(block_hash.to_vec()))
            .exec(self.get_connection())
            .await?;
        Ok(())
    }

    /// Insert the provided [`RollupTransaction`]s. When `submission` carries a geth submission
    /// queue index, every inserted transaction is assigned to that entry with its index within
    /// the submission derived from its position in the list.
    async fn insert_rollup_transactions(
        &self,
        txs: Vec<RollupTransaction>,
        submission: Option<u64>,
    ) -> Result<(), DatabaseError> {
        if txs.is_empty() {
            return Ok(());
        }
        tracing::trace!(target: "ledger::db", count = txs.len(), queue_index = ?submission, "Inserting rollup transactions into database.");
        let rows = txs.into_iter().enumerate().map(|(position, tx)| {
            models::l1_rollup_tx::ActiveModel::from((
                tx,
                submission.map(|queue_index| (queue_index, position as u32)),
            ))
        });
        models::l1_rollup_tx::Entity::insert_many(rows).exec(self.get_connection()).await?;
        Ok(())
    }

    /// Get the [`RollupTransaction`]s decoded from the provided L1 transaction, ordered by log
    /// index and index within submission.
    async fn get_rollup_transactions(
        &self,
        l1_tx_hash: B256,
    ) -> Result<Vec<RollupTransaction>, DatabaseError> {
        Ok(models::l1_rollup_tx::Entity::find()
            .filter(models::l1_rollup_tx::Column::L1TxHash.eq(l1_tx_hash.to_vec()))
            .order_by_asc(models::l1_rollup_tx::Column::L1TxLogIndex)
            .order_by_asc(models::l1_rollup_tx::Column::IndexWithinSubmission)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Get the rollup transactions eligible for the next geth submission: not yet part of any
    /// queue entry, belonging to a processed L1 block, and matching the origin filter. Rows are
    /// ordered by (L1 block number, L1 tx index, log index, index within submission) and
    /// returned together with their row ids.
    async fn get_unqueued_rollup_transactions(
        &self,
        origins: &[QueueOrigin],
    ) -> Result<Vec<(i64, RollupTransaction)>, DatabaseError> {
        let rows = models::l1_rollup_tx::Entity::find()
            .join(JoinType::InnerJoin, models::l1_rollup_tx::Relation::L1Transaction.def())
            .join(JoinType::InnerJoin, models::l1_tx::Relation::L1Block.def())
            .filter(models::l1_block::Column::Processed.eq(true))
            .filter(models::l1_rollup_tx::Column::GethSubmissionQueueIndex.is_null())
            .filter(
                models::l1_rollup_tx::Column::QueueOrigin
                    .is_in(origins.iter().map(QueueOrigin::as_str)),
            )
            .order_by_asc(models::l1_rollup_tx::Column::L1BlockNumber)
            .order_by_asc(models::l1_rollup_tx::Column::L1TxIndex)
            .order_by_asc(models::l1_rollup_tx::Column::L1TxLogIndex)
            .order_by_asc(models::l1_rollup_tx::Column::IndexWithinSubmission)
            .all(self.get_connection())
            .await?;
        Ok(rows.into_iter().map(|row| (row.id(), row.into())).collect())
    }

    /// Returns the queue index to use for the next geth submission queue entry.
    async fn next_geth_submission_queue_index(&self) -> Result<u64, DatabaseError> {
        let max = models::geth_submission_queue::Entity::find()
            .select_only()
            .column(models::geth_submission_queue::Column::QueueIndex)
            .order_by_desc(models::geth_submission_queue::Column::QueueIndex)
            .into_tuple::<i64>()
            .one(self.get_connection())
            .await?;
        Ok(max.map_or(0, |max| max as u64 + 1))
    }

    /// Insert a new geth submission queue entry with status `QUEUED`.
    async fn insert_geth_submission_queue_entry(
        &self,
        queue_index: u64,
        l1_tx_hash: B256,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", queue_index, l1_tx_hash = ?l1_tx_hash, "Inserting geth submission queue entry into database.");
        let entry: models::geth_submission_queue::ActiveModel =
            (queue_index, l1_tx_hash, GethSubmissionQueueStatus::Queued).into();
        entry.insert(self.get_connection()).await?;
        Ok(())
    }

    /// Assign the rollup transactions with the provided row ids to a geth submission queue
    /// entry, re-indexing them 0..n in the provided order.
    async fn assign_rollup_transactions_to_submission(
        &self,
        ids: Vec<i64>,
        queue_index: u64,
    ) -> Result<(), DatabaseError> {
        for (index_within_submission, id) in ids.into_iter().enumerate() {
            models::l1_rollup_tx::Entity::update_many()
                .col_expr(
                    models::l1_rollup_tx::Column::GethSubmissionQueueIndex,
                    Expr::value(queue_index as i64),
                )
                .col_expr(
                    models::l1_rollup_tx::Column::IndexWithinSubmission,
                    Expr::value(index_within_submission as i32),
                )
                .filter(models::l1_rollup_tx::Column::Id.eq(id))
                .exec(self.get_connection())
                .await?;
        }
        Ok(())
    }

    /// Get the earliest `QUEUED` geth submission entry with its ordered member transactions.
    /// Transactions belonging to a `SENT` entry never surface here.
    async fn get_next_queued_geth_submission(
        &self,
    ) -> Result<Option<GethSubmission>, DatabaseError> {
        let Some(entry) = models::geth_submission_queue::Entity::find()
            .filter(
                models::geth_submission_queue::Column::Status
                    .eq(GethSubmissionQueueStatus::Queued.as_str()),
            )
            .order_by_asc(models::geth_submission_queue::Column::QueueIndex)
            .one(self.get_connection())
            .await?
        else {
            return Ok(None);
        };

        let transactions: Vec<RollupTransaction> = models::l1_rollup_tx::Entity::find()
            .filter(
                models::l1_rollup_tx::Column::GethSubmissionQueueIndex
                    .eq(entry.queue_index() as i64),
            )
            .order_by_asc(models::l1_rollup_tx::Column::IndexWithinSubmission)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let Some(first) = transactions.first() else { return Ok(None) };
        let (block_number, timestamp) = (first.l1_block_number, first.l1_timestamp);
        Ok(Some(GethSubmission {
            submission_index: entry.queue_index(),
            block_number,
            timestamp,
            transactions,
        }))
    }

    /// Transition the geth submission queue entry with the provided index from `QUEUED` to
    /// `SENT`. A no-op when the index does not name a `QUEUED` entry.
    async fn set_geth_submission_sent(&self, queue_index: u64) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", queue_index, "Marking geth submission as sent.");
        models::geth_submission_queue::Entity::update_many()
            .col_expr(
                models::geth_submission_queue::Column::Status,
                Expr::value(GethSubmissionQueueStatus::Sent.as_str()),
            )
            .filter(models::geth_submission_queue::Column::QueueIndex.eq(queue_index as i64))
            .filter(
                models::geth_submission_queue::Column::Status
                    .eq(GethSubmissionQueueStatus::Queued.as_str()),
            )
            .exec(self.get_connection())
            .await?;
        Ok(())
    }

    /// Get the status of the geth submission queue entry with the provided index.
    async fn get_geth_submission_queue_status(
        &self,
        queue_index: u64,
    ) -> Result<Option<GethSubmissionQueueStatus>, DatabaseError> {
        Ok(models::geth_submission_queue::Entity::find_by_id(queue_index as i64)
            .one(self.get_connection())
            .await?
            .map(|entry| entry.status())
            .transpose()?)
    }

    /// Returns the number of geth submission queue entries.
    async fn count_geth_submission_queue_entries(&self) -> Result<u64, DatabaseError> {
        Ok(models::geth_submission_queue::Entity::find().count(self.get_connection()).await?)
    }

    /// Insert an [`L2TransactionOutput`] into the database. The insert is idempotent, keyed by
    /// transaction hash: re-inserting an output with the same identity is a no-op.
    async fn insert_l2_transaction_output(
        &self,
        output: L2TransactionOutput,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", tx_hash = ?output.tx_hash, block_number = output.block_number, "Inserting L2 transaction output into database.");
        let output: models::l2_tx_output::ActiveModel = output.into();
        models::l2_tx_output::Entity::insert(output)
            .on_conflict(
                OnConflict::column(models::l2_tx_output::Column::TxHash).do_nothing().to_owned(),
            )
            .exec_without_returning(self.get_connection())
            .await?;
        Ok(())
    }

    /// Get an [`L2TransactionOutput`] by transaction hash.
    async fn get_l2_transaction_output(
        &self,
        tx_hash: B256,
    ) -> Result<Option<L2TransactionOutput>, DatabaseError> {
        Ok(models::l2_tx_output::Entity::find()
            .filter(models::l2_tx_output::Column::TxHash.eq(tx_hash.to_vec()))
            .one(self.get_connection())
            .await
            .map(|x| x.map(Into::into))?)
    }

    /// Returns the number of L2 transaction outputs.
    async fn count_l2_transaction_outputs(&self) -> Result<u64, DatabaseError> {
        Ok(models::l2_tx_output::Entity::find().count(self.get_connection()).await?)
    }

    /// Get the outputs eligible for a new canonical chain batch: no canonical chain membership
    /// yet and no originating L1 rollup transaction, ordered by (block number, tx index).
    /// Rows are returned together with their row ids.
    async fn get_canonical_chain_batch_candidates(
        &self,
    ) -> Result<Vec<(i64, L2TransactionOutput)>, DatabaseError> {
        let rows = models::l2_tx_output::Entity::find()
            .filter(models::l2_tx_output::Column::CanonicalChainBatchNumber.is_null())
            .filter(models::l2_tx_output::Column::L1RollupTxId.is_null())
            .order_by_asc(models::l2_tx_output::Column::BlockNumber)
            .order_by_asc(models::l2_tx_output::Column::TxIndex)
            .all(self.get_connection())
            .await?;
        Ok(rows.into_iter().map(|row| (row.id(), row.into())).collect())
    }

    /// Returns the batch number to use for the next canonical chain batch.
    async fn next_canonical_chain_batch_number(&self) -> Result<u64, DatabaseError> {
        let max = models::canonical_chain_batch::Entity::find()
            .select_only()
            .column(models::canonical_chain_batch::Column::BatchNumber)
            .order_by_desc(models::canonical_chain_batch::Column::BatchNumber)
            .into_tuple::<i64>()
            .one(self.get_connection())
            .await?;
        Ok(max.map_or(0, |max| max as u64 + 1))
    }

    /// Insert a new canonical chain batch with the provided number and status.
    async fn insert_canonical_chain_batch(
        &self,
        batch_number: u64,
        status: BatchSubmissionStatus,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", batch_number, status = status.as_str(), "Inserting canonical chain batch into database.");
        let batch: models::canonical_chain_batch::ActiveModel = (batch_number, status).into();
        batch.insert(self.get_connection()).await?;
        Ok(())
    }

    /// Assign the outputs with the provided row ids to a canonical chain batch, indexing them
    /// 0..n in the provided order and mirroring the batch status on the member rows.
    async fn assign_canonical_chain_batch(
        &self,
        ids: Vec<i64>,
        batch_number: u64,
        status: BatchSubmissionStatus,
    ) -> Result<(), DatabaseError> {
        for (batch_index, id) in ids.into_iter().enumerate() {
            models::l2_tx_output::Entity::update_many()
                .col_expr(
                    models::l2_tx_output::Column::CanonicalChainBatchNumber,
                    Expr::value(batch_number as i64),
                )
                .col_expr(
                    models::l2_tx_output::Column::CanonicalChainBatchIndex,
                    Expr::value(batch_index as i32),
                )
                .col_expr(
                    models::l2_tx_output::Column::CanonicalChainStatus,
                    Expr::value(status.as_str()),
                )
                .filter(models::l2_tx_output::Column::Id.eq(id))
                .exec(self.get_connection())
                .await?;
        }
        Ok(())
    }

    /// Get a canonical chain batch with its ordered member outputs by batch number.
    async fn get_canonical_chain_batch(
        &self,
        batch_number: u64,
    ) -> Result<Option<TransactionBatch>, DatabaseError> {
        let Some(batch) = models::canonical_chain_batch::Entity::find_by_id(batch_number as i64)
            .one(self.get_connection())
            .await?
        else {
            return Ok(None);
        };

        let transactions = models::l2_tx_output::Entity::find()
            .filter(models::l2_tx_output::Column::CanonicalChainBatchNumber.eq(batch_number as i64))
            .order_by_asc(models::l2_tx_output::Column::CanonicalChainBatchIndex)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Some(TransactionBatch {
            batch_number: batch.batch_number(),
            status: batch.status()?,
            submission_tx_hash: batch.submission_tx_hash(),
            transactions,
        }))
    }

    /// Get the earliest canonical chain batch with the provided status, together with its
    /// ordered member outputs.
    async fn get_earliest_canonical_chain_batch(
        &self,
        status: BatchSubmissionStatus,
    ) -> Result<Option<TransactionBatch>, DatabaseError> {
        let Some(batch) = models::canonical_chain_batch::Entity::find()
            .filter(models::canonical_chain_batch::Column::Status.eq(status.as_str()))
            .order_by_asc(models::canonical_chain_batch::Column::BatchNumber)
            .one(self.get_connection())
            .await?
        else {
            return Ok(None);
        };
        self.get_canonical_chain_batch(batch.batch_number()).await
    }

    /// Transition the canonical chain batch with the provided number from `expected` to
    /// `status`, recording the L1 submission transaction hash on the batch and mirroring the
    /// status on the member rows. Returns false, leaving all rows untouched, when the batch
    /// number does not name a batch in the `expected` status.
    async fn set_canonical_chain_batch_status(
        &self,
        batch_number: u64,
        expected: BatchSubmissionStatus,
        status: BatchSubmissionStatus,
        l1_tx_hash: B256,
    ) -> Result<bool, DatabaseError> {
        let result = models::canonical_chain_batch::Entity::update_many()
            .col_expr(
                models::canonical_chain_batch::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                models::canonical_chain_batch::Column::SubmissionTxHash,
                Expr::value(l1_tx_hash.to_vec()),
            )
            .filter(models::canonical_chain_batch::Column::BatchNumber.eq(batch_number as i64))
            .filter(models::canonical_chain_batch::Column::Status.eq(expected.as_str()))
            .exec(self.get_connection())
            .await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        models::l2_tx_output::Entity::update_many()
            .col_expr(
                models::l2_tx_output::Column::CanonicalChainStatus,
                Expr::value(status.as_str()),
            )
            .filter(models::l2_tx_output::Column::CanonicalChainBatchNumber.eq(batch_number as i64))
            .exec(self.get_connection())
            .await?;
        Ok(true)
    }

    /// Returns the number of canonical chain batches.
    async fn count_canonical_chain_batches(&self) -> Result<u64, DatabaseError> {
        Ok(models::canonical_chain_batch::Entity::find().count(self.get_connection()).await?)
    }

    /// Get the outputs eligible for a new state commitment chain batch: finalized on the
    /// canonical chain and without state commitment membership yet, ordered by (block number,
    /// tx index). Rows are returned together with their row ids.
    async fn get_state_commitment_chain_batch_candidates(
        &self,
    ) -> Result<Vec<(i64, L2TransactionOutput)>, DatabaseError> {
        let rows = models::l2_tx_output::Entity::find()
            .filter(
                models::l2_tx_output::Column::CanonicalChainStatus
                    .eq(BatchSubmissionStatus::Finalized.as_str()),
            )
            .filter(models::l2_tx_output::Column::StateCommitmentChainBatchNumber.is_null())
            .order_by_asc(models::l2_tx_output::Column::BlockNumber)
            .order_by_asc(models::l2_tx_output::Column::TxIndex)
            .all(self.get_connection())
            .await?;
        Ok(rows.into_iter().map(|row| (row.id(), row.into())).collect())
    }

    /// Returns the batch number to use for the next state commitment chain batch.
    async fn next_state_commitment_chain_batch_number(&self) -> Result<u64, DatabaseError> {
        let max = models::state_commitment_chain_batch::Entity::find()
            .select_only()
            .column(models::state_commitment_chain_batch::Column::BatchNumber)
            .order_by_desc(models::state_commitment_chain_batch::Column::BatchNumber)
            .into_tuple::<i64>()
            .one(self.get_connection())
            .await?;
        Ok(max.map_or(0, |max| max as u64 + 1))
    }

    /// Insert a new state commitment chain batch with the provided number and status.
    async fn insert_state_commitment_chain_batch(
        &self,
        batch_number: u64,
        status: BatchSubmissionStatus,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", batch_number, status = status.as_str(), "Inserting state commitment chain batch into database.");
        let batch: models::state_commitment_chain_batch::ActiveModel =
            (batch_number, status).into();
        batch.insert(self.get_connection()).await?;
        Ok(())
    }

    /// Assign the outputs with the provided row ids to a state commitment chain batch,
    /// indexing them 0..n in the provided order and mirroring the batch status on the member
    /// rows.
    async fn assign_state_commitment_chain_batch(
        &self,
        ids: Vec<i64>,
        batch_number: u64,
        status: BatchSubmissionStatus,
    ) -> Result<(), DatabaseError> {
        for (batch_index, id) in ids.into_iter().enumerate() {
            models::l2_tx_output::Entity::update_many()
                .col_expr(
                    models::l2_tx_output::Column::StateCommitmentChainBatchNumber,
                    Expr::value(batch_number as i64),
                )
                .col_expr(
                    models::l2_tx_output::Column::StateCommitmentChainBatchIndex,
                    Expr::value(batch_index as i32),
                )
                .col_expr(
                    models::l2_tx_output::Column::StateCommitmentChainStatus,
                    Expr::value(status.as_str()),
                )
                .filter(models::l2_tx_output::Column::Id.eq(id))
                .exec(self.get_connection())
                .await?;
        }
        Ok(())
    }

    /// Get a state commitment chain batch with its ordered member state roots by batch number.
    async fn get_state_commitment_chain_batch(
        &self,
        batch_number: u64,
    ) -> Result<Option<StateCommitmentBatch>, DatabaseError> {
        let Some(batch) =
            models::state_commitment_chain_batch::Entity::find_by_id(batch_number as i64)
                .one(self.get_connection())
                .await?
        else {
            return Ok(None);
        };

        let state_roots = self.get_state_commitment_chain_roots(batch_number).await?;
        Ok(Some(StateCommitmentBatch {
            batch_number: batch.batch_number(),
            status: batch.status()?,
            submission_tx_hash: batch.submission_tx_hash(),
            state_roots,
        }))
    }

    /// Get the state roots of the outputs assigned to a state commitment chain batch, ordered
    /// by batch index.
    async fn get_state_commitment_chain_roots(
        &self,
        batch_number: u64,
    ) -> Result<Vec<B256>, DatabaseError> {
        Ok(models::l2_tx_output::Entity::find()
            .filter(
                models::l2_tx_output::Column::StateCommitmentChainBatchNumber
                    .eq(batch_number as i64),
            )
            .order_by_asc(models::l2_tx_output::Column::StateCommitmentChainBatchIndex)
            .all(self.get_connection())
            .await?
            .iter()
            .map(models::l2_tx_output::Model::state_root)
            .collect())
    }

    /// Get the earliest state commitment chain batch with the provided status, together with
    /// its ordered member state roots.
    async fn get_earliest_state_commitment_chain_batch(
        &self,
        status: BatchSubmissionStatus,
    ) -> Result<Option<StateCommitmentBatch>, DatabaseError> {
        let Some(batch) = models::state_commitment_chain_batch::Entity::find()
            .filter(models::state_commitment_chain_batch::Column::Status.eq(status.as_str()))
            .order_by_asc(models::state_commitment_chain_batch::Column::BatchNumber)
            .one(self.get_connection())
            .await?
        else {
            return Ok(None);
        };
        self.get_state_commitment_chain_batch(batch.batch_number()).await
    }

    /// Transition the state commitment chain batch with the provided number from `expected` to
    /// `status`, recording the L1 submission transaction hash on the batch and mirroring the
    /// status on the member rows. Returns false, leaving all rows untouched, when the batch
    /// number does not name a batch in the `expected` status.
    async fn set_state_commitment_chain_batch_status(
        &self,
        batch_number: u64,
        expected: BatchSubmissionStatus,
        status: BatchSubmissionStatus,
        l1_tx_hash: B256,
    ) -> Result<bool, DatabaseError> {
        let result = models::state_commitment_chain_batch::Entity::update_many()
            .col_expr(
                models::state_commitment_chain_batch::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                models::state_commitment_chain_batch::Column::SubmissionTxHash,
                Expr::value(l1_tx_hash.to_vec()),
            )
            .filter(
                models::state_commitment_chain_batch::Column::BatchNumber.eq(batch_number as i64),
            )
            .filter(
                models::state_commitment_chain_batch::Column::Status.eq(expected.as_str()),
            )
            .exec(self.get_connection())
            .await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        models::l2_tx_output::Entity::update_many()
            .col_expr(
                models::l2_tx_output::Column::StateCommitmentChainStatus,
                Expr::value(status.as_str()),
            )
            .filter(
                models::l2_tx_output::Column::StateCommitmentChainBatchNumber
                    .eq(batch_number as i64),
            )
            .exec(self.get_connection())
            .await?;
        Ok(true)
    }

    /// Returns the number of state commitment chain batches.
    async fn count_state_commitment_chain_batches(&self) -> Result<u64, DatabaseError> {
        Ok(models::state_commitment_chain_batch::Entity::find()
            .count(self.get_connection())
            .await?)
    }

    /// Returns the batch number to use for the next L1 rollup state root batch.
    async fn next_l1_state_root_batch_number(&self) -> Result<u64, DatabaseError> {
        let max = models::l1_rollup_state_root_batch::Entity::find()
            .select_only()
            .column(models::l1_rollup_state_root_batch::Column::BatchNumber)
            .order_by_desc(models::l1_rollup_state_root_batch::Column::BatchNumber)
            .into_tuple::<i64>()
            .one(self.get_connection())
            .await?;
        Ok(max.map_or(0, |max| max as u64 + 1))
    }

    /// Insert a new L1 rollup state root batch with status `UNVERIFIED`.
    async fn insert_l1_state_root_batch(
        &self,
        batch_number: u64,
        l1_tx_hash: B256,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "ledger::db", batch_number, l1_tx_hash = ?l1_tx_hash, "Inserting L1 rollup state root batch into database.");
        let batch: models::l1_rollup_state_root_batch::ActiveModel =
            (batch_number, l1_tx_hash).into();
        batch.insert(self.get_connection()).await?;
        Ok(())
    }

    /// Insert the member state roots of an L1 rollup state root batch, indexed by their
    /// position in the provided list.
    async fn insert_l1_state_roots(
        &self,
        batch_number: u64,
        roots: Vec<B256>,
    ) -> Result<(), DatabaseError> {
        if roots.is_empty() {
            return Ok(());
        }
        let rows = roots.into_iter().enumerate().map(|(batch_index, root)| {
            models::l1_rollup_state_root::ActiveModel::from((root, batch_number, batch_index as u32))
        });
        models::l1_rollup_state_root::Entity::insert_many(rows)
            .exec(self.get_connection())
            .await?;
        Ok(())
    }

    /// Returns whether an L1 rollup state root batch with the provided number exists.
    async fn l1_state_root_batch_exists(&self, batch_number: u64) -> Result<bool, DatabaseError> {
        Ok(models::l1_rollup_state_root_batch::Entity::find_by_id(batch_number as i64)
            .one(self.get_connection())
            .await?
            .is_some())
    }

    /// Returns the number of state roots in the L1 rollup state root batch with the provided
    /// number.
    async fn count_l1_state_roots(&self, batch_number: u64) -> Result<u64, DatabaseError> {
        Ok(models::l1_rollup_state_root::Entity::find()
            .filter(models::l1_rollup_state_root::Column::BatchNumber.eq(batch_number as i64))
            .count(self.get_connection())
            .await?)
    }

    /// Get the state roots of an L1 rollup state root batch, ordered by batch index.
    async fn get_l1_state_roots(&self, batch_number: u64) -> Result<Vec<B256>, DatabaseError> {
        Ok(models::l1_rollup_state_root::Entity::find()
            .filter(models::l1_rollup_state_root::Column::BatchNumber.eq(batch_number as i64))
            .order_by_asc(models::l1_rollup_state_root::Column::BatchIndex)
            .all(self.get_connection())
            .await?
            .iter()
            .map(models::l1_rollup_state_root::Model::state_root)
            .collect())
    }

    /// Get the number of the lowest `UNVERIFIED` L1 rollup state root batch.
    async fn get_lowest_unverified_state_root_batch(&self) -> Result<Option<u64>, DatabaseError> {
        Ok(models::l1_rollup_state_root_batch::Entity::find()
            .filter(
                models::l1_rollup_state_root_batch::Column::Status
                    .eq(VerificationStatus::Unverified.as_str()),
            )
            .order_by_asc(models::l1_rollup_state_root_batch::Column::BatchNumber)
            .one(self.get_connection())
            .await?
            .map(|batch| batch.batch_number()))
    }

    /// Get the verification status of the L1 rollup state root batch with the provided number.
    async fn get_state_root_batch_status(
        &self,
        batch_number: u64,
    ) -> Result<Option<VerificationStatus>, DatabaseError> {
        Ok(models::l1_rollup_state_root_batch::Entity::find_by_id(batch_number as i64)
            .one(self.get_connection())
            .await?
            .map(|batch| batch.status())
            .transpose()?)
    }

    /// Transition the L1 rollup state root batch with the provided number from `expected` to
    /// `status`. Returns false, leaving the row untouched, when the batch number does not name
    /// a batch in the `expected` status.
    async fn set_state_root_batch_status(
        &self,
        batch_number: u64,
        expected: VerificationStatus,
        status: VerificationStatus,
    ) -> Result<bool, DatabaseError> {
        tracing::trace!(target: "ledger::db", batch_number, status = status.as_str(), "Updating L1 rollup state root batch status.");
        let result = models::l1_rollup_state_root_batch::Entity::update_many()
            .col_expr(
                models::l1_rollup_state_root_batch::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(
                models::l1_rollup_state_root_batch::Column::BatchNumber.eq(batch_number as i64),
            )
            .filter(
                models::l1_rollup_state_root_batch::Column::Status.eq(expected.as_str()),
            )
            .exec(self.get_connection())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

impl<T> DatabaseOperations for T where T: DatabaseConnectionProvider {}
