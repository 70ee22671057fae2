//! Primitive types for the rollup ledger.

pub use block::{EcdsaSignature, L1BlockRecord, L1TransactionRecord};
mod block;

pub use transaction::{QueueOrigin, RollupTransaction};
mod transaction;

pub use output::L2TransactionOutput;
mod output;

pub use batch::{
    GethSubmission, RootPair, StateCommitmentBatch, TransactionBatch, VerificationCandidate,
};
mod batch;

pub use status::{
    BatchSubmissionStatus, GethSubmissionQueueStatus, ParseStatusError, VerificationStatus,
};
mod status;
