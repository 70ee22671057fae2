//! The synchronization and batching engine reconciling an L1 chain of record with an L2
//! execution chain.
//!
//! The engine tracks the two independently advancing ledgers through a shared relational
//! store and is responsible for accumulating L2 transaction outputs and state roots into
//! size-bounded batches for submission to L1, deciding when enqueued L1-originated
//! transactions must be forwarded to the L2 execution engine, and reconciling the two ledgers
//! to find the next unverified batch pair to be checked for fraud.
//!
//! Every component holds a reference to the injected [`rollup_ledger_db::Database`] and runs
//! its multi-step operations inside a database transaction, so partial state of a half-built
//! batch is never observable. Batch construction and queue draining are invoked by an
//! external scheduler on whatever cadence it chooses.

pub use ingestion::L1Ingestion;
mod ingestion;

pub use scheduler::GethSubmissionScheduler;
mod scheduler;

pub use canonical::CanonicalChainBatchBuilder;
mod canonical;

pub use state_commitment::StateCommitmentChainBatchBuilder;
mod state_commitment;

pub use verification::VerificationCandidateSelector;
mod verification;

pub use error::SyncError;
mod error;

#[cfg(test)]
mod test_utils;
