use rollup_ledger_db::DatabaseError;

/// A type that represents an error that occurred in a synchronization component.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// An error occurred while interacting with the database.
    #[error("synchronization failed due to database error: {0}")]
    DatabaseError(#[from] DatabaseError),
}
