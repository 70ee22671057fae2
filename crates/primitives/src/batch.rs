use crate::{BatchSubmissionStatus, L2TransactionOutput, RollupTransaction};
use alloy_primitives::B256;

/// A geth submission: a group of rollup transactions queued for forwarding to the L2
/// execution engine under a single queue index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GethSubmission {
    /// The index of the submission in the geth submission queue.
    pub submission_index: u64,
    /// The L1 block number the member transactions originate from.
    pub block_number: u64,
    /// The L1 timestamp the member transactions originate from.
    pub timestamp: u64,
    /// The member transactions, ordered by their index within the submission.
    pub transactions: Vec<RollupTransaction>,
}

/// A canonical chain batch together with its ordered member transaction outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBatch {
    /// The batch number.
    pub batch_number: u64,
    /// The submission status of the batch.
    pub status: BatchSubmissionStatus,
    /// The hash of the L1 transaction the batch was submitted in, once known.
    pub submission_tx_hash: Option<B256>,
    /// The member transaction outputs, ordered by batch index.
    pub transactions: Vec<L2TransactionOutput>,
}

/// A state commitment chain batch together with its ordered member state roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCommitmentBatch {
    /// The batch number.
    pub batch_number: u64,
    /// The submission status of the batch.
    pub status: BatchSubmissionStatus,
    /// The hash of the L1 transaction the batch was submitted in, once known.
    pub submission_tx_hash: Option<B256>,
    /// The member state roots, ordered by batch index.
    pub state_roots: Vec<B256>,
}

/// A pairing of an L1 submitted state root with the L2 computed root at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootPair {
    /// The state root submitted on L1.
    pub l1_root: B256,
    /// The state root computed by the L2 execution engine.
    pub l2_root: B256,
}

/// The next batch pair awaiting fraud verification: the L1 submitted roots of a batch paired
/// position for position with the L2 computed roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCandidate {
    /// The batch number shared by both sides of the pairing.
    pub batch_number: u64,
    /// The paired roots, ordered by batch index.
    pub roots: Vec<RootPair>,
}
