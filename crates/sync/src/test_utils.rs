//! Test helpers shared by the synchronization component tests.

use crate::CanonicalChainBatchBuilder;
use alloy_primitives::{B256, U256};
use arbitrary::{Arbitrary, Unstructured};
use rollup_ledger_db::{Database, DatabaseOperations};
use rollup_ledger_primitives::{
    L1BlockRecord, L1TransactionRecord, L2TransactionOutput, QueueOrigin, RollupTransaction,
};
use std::sync::Arc;

/// Instantiates a new in-memory database with the rollup ledger schema.
pub(crate) async fn setup_test_database() -> Arc<Database> {
    Arc::new(rollup_ledger_db::test_utils::setup_test_db().await)
}

/// Returns a buffer of random bytes for [`Unstructured`] generation.
pub(crate) fn unstructured_bytes() -> Vec<u8> {
    use rand::Rng;
    let mut bytes = vec![0u8; 16384];
    rand::rng().fill(bytes.as_mut_slice());
    bytes
}

/// Returns a deterministic hash for test fixtures.
pub(crate) fn test_hash(n: u64) -> B256 {
    B256::from(U256::from(n))
}

/// Inserts an L1 block together with one transaction and returns both records.
pub(crate) async fn insert_l1_block_with_tx(
    db: &Database,
    u: &mut Unstructured<'_>,
    processed: bool,
) -> (L1BlockRecord, L1TransactionRecord) {
    let block = L1BlockRecord::arbitrary(u).unwrap();
    let tx = L1TransactionRecord { block_hash: block.hash, ..Arbitrary::arbitrary(u).unwrap() };
    db.insert_l1_block(block.clone(), processed).await.unwrap();
    db.insert_l1_transactions(vec![tx.clone()]).await.unwrap();
    (block, tx)
}

/// Returns a rollup transaction decoded from the provided L1 transaction.
pub(crate) fn rollup_tx(
    u: &mut Unstructured<'_>,
    l1_tx: &L1TransactionRecord,
    queue_origin: QueueOrigin,
    log_index: u32,
) -> RollupTransaction {
    RollupTransaction {
        l1_tx_hash: l1_tx.hash,
        l1_tx_index: 0,
        l1_tx_log_index: log_index,
        index_within_submission: 0,
        queue_origin,
        ..Arbitrary::arbitrary(u).unwrap()
    }
}

/// Returns an L2 transaction output with the provided identity and batching-relevant fields.
pub(crate) fn tx_output(
    u: &mut Unstructured<'_>,
    tx_hash: B256,
    state_root: B256,
    block_number: u64,
    block_timestamp: u64,
    calldata_len: usize,
) -> L2TransactionOutput {
    L2TransactionOutput {
        tx_hash,
        state_root,
        block_number,
        block_timestamp,
        tx_index: 0,
        calldata: vec![0xaa; calldata_len].into(),
        l1_rollup_tx_id: None,
        ..Arbitrary::arbitrary(u).unwrap()
    }
}

/// Drives every unbatched output through the full canonical chain lifecycle so it becomes
/// eligible for state commitment batching.
pub(crate) async fn finalize_canonical_chain(db: &Arc<Database>) {
    let builder = CanonicalChainBatchBuilder::new(db.clone());
    while let Some(batch_number) = builder.try_build_batch(0, u64::MAX).await.unwrap() {
        builder.mark_batch_submitted(batch_number, test_hash(9_000 + batch_number)).await.unwrap();
        builder.mark_batch_finalized(batch_number, test_hash(9_100 + batch_number)).await.unwrap();
    }
}
