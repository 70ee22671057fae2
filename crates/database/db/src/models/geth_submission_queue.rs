use rollup_ledger_primitives::{GethSubmissionQueueStatus, ParseStatusError};
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents a geth submission queue entry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "geth_submission_queue")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    queue_index: i64,
    l1_tx_hash: Vec<u8>,
    status: String,
}

impl Model {
    /// Returns the index of the entry in the queue.
    pub(crate) const fn queue_index(&self) -> u64 {
        self.queue_index as u64
    }

    /// Returns the status of the entry.
    pub(crate) fn status(&self) -> Result<GethSubmissionQueueStatus, ParseStatusError> {
        self.status.parse()
    }
}

/// The relation for the geth submission queue model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the geth submission queue model.
impl ActiveModelBehavior for ActiveModel {}

impl From<(u64, alloy_primitives::B256, GethSubmissionQueueStatus)> for ActiveModel {
    fn from(
        (queue_index, l1_tx_hash, status): (u64, alloy_primitives::B256, GethSubmissionQueueStatus),
    ) -> Self {
        Self {
            queue_index: ActiveValue::Set(queue_index as i64),
            l1_tx_hash: ActiveValue::Set(l1_tx_hash.to_vec()),
            status: ActiveValue::Set(status.as_str().to_owned()),
        }
    }
}
