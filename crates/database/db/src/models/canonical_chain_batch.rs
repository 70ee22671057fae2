use alloy_primitives::B256;
use rollup_ledger_primitives::{BatchSubmissionStatus, ParseStatusError};
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents a canonical chain batch.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "canonical_chain_batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    batch_number: i64,
    status: String,
    submission_tx_hash: Option<Vec<u8>>,
}

impl Model {
    /// Returns the batch number.
    pub(crate) const fn batch_number(&self) -> u64 {
        self.batch_number as u64
    }

    /// Returns the submission status of the batch.
    pub(crate) fn status(&self) -> Result<BatchSubmissionStatus, ParseStatusError> {
        self.status.parse()
    }

    /// Returns the hash of the L1 transaction the batch was submitted in, once known.
    pub(crate) fn submission_tx_hash(&self) -> Option<B256> {
        self.submission_tx_hash.as_deref().map(B256::from_slice)
    }
}

/// The relation for the canonical chain batch model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the canonical chain batch model.
impl ActiveModelBehavior for ActiveModel {}

impl From<(u64, BatchSubmissionStatus)> for ActiveModel {
    fn from((batch_number, status): (u64, BatchSubmissionStatus)) -> Self {
        Self {
            batch_number: ActiveValue::Set(batch_number as i64),
            status: ActiveValue::Set(status.as_str().to_owned()),
            submission_tx_hash: ActiveValue::Set(None),
        }
    }
}
