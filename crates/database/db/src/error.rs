use rollup_ledger_primitives::ParseStatusError;

/// The error type for database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// A database error occurred.
    #[error("database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),
    /// A status string persisted in the database could not be parsed.
    #[error("status parse error: {0}")]
    StatusParseError(#[from] ParseStatusError),
}
