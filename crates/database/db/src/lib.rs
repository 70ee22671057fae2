//! A library responsible for interacting with the rollup ledger database.

mod models;
pub use models::*;

mod connection;
pub use connection::DatabaseConnectionProvider;

mod db;
pub use db::Database;

mod transaction;
pub use transaction::DatabaseTransaction;

mod error;
pub use error::DatabaseError;

mod operations;
pub use operations::DatabaseOperations;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use sea_orm::DbErr;
