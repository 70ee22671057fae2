use crate::SyncError;
use alloy_primitives::B256;
use rollup_ledger_db::{Database, DatabaseOperations};
use rollup_ledger_primitives::{L1BlockRecord, L1TransactionRecord};
use std::sync::Arc;

/// Records L1 blocks, the transactions within them, and the state root batches submitted on
/// L1.
///
/// Blocks are ingested unprocessed by default and marked processed once their rollup-relevant
/// contents have been fully decoded. The processed flag gates the geth submission scheduler.
#[derive(Debug)]
pub struct L1Ingestion {
    /// A reference to the database used to persist the ingested data.
    database: Arc<Database>,
}

impl L1Ingestion {
    /// Creates a new [`L1Ingestion`] with the given [`Database`].
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Inserts an L1 block. A duplicate block hash is an integrity violation and propagates.
    pub async fn insert_block(
        &self,
        block: L1BlockRecord,
        processed: bool,
    ) -> Result<(), SyncError> {
        Ok(self.database.insert_l1_block(block, processed).await?)
    }

    /// Inserts the transactions of an ingested block. The transaction index within the block
    /// is derived from the position of each record in the provided list.
    pub async fn insert_transactions(
        &self,
        txs: Vec<L1TransactionRecord>,
    ) -> Result<(), SyncError> {
        Ok(self.database.insert_l1_transactions(txs).await?)
    }

    /// Inserts an L1 block together with its transactions. The composition is atomic: either
    /// both are visible or neither is.
    pub async fn insert_block_and_transactions(
        &self,
        block: L1BlockRecord,
        txs: Vec<L1TransactionRecord>,
        processed: bool,
    ) -> Result<(), SyncError> {
        let txn = self.database.tx().await?;
        txn.insert_l1_block(block, processed).await?;
        txn.insert_l1_transactions(txs).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Marks the block with the provided hash as processed. A no-op when the block does not
    /// exist.
    pub async fn mark_block_processed(&self, block_hash: B256) -> Result<(), SyncError> {
        Ok(self.database.set_l1_block_processed(block_hash).await?)
    }

    /// Records a batch of state roots submitted on L1, assigning it the next dense batch
    /// number and indexing the roots by their position in the provided list. Returns the new
    /// batch number, or [`None`] for an empty root list.
    pub async fn insert_rollup_state_roots(
        &self,
        l1_tx_hash: B256,
        roots: Vec<B256>,
    ) -> Result<Option<u64>, SyncError> {
        if roots.is_empty() {
            return Ok(None);
        }

        let txn = self.database.tx().await?;
        let batch_number = txn.next_l1_state_root_batch_number().await?;
        txn.insert_l1_state_root_batch(batch_number, l1_tx_hash).await?;
        txn.insert_l1_state_roots(batch_number, roots).await?;
        txn.commit().await?;

        tracing::debug!(target: "ledger::sync", batch_number, l1_tx_hash = ?l1_tx_hash, "Recorded L1 state root batch.");
        Ok(Some(batch_number))
    }
}
