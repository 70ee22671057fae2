use alloy_primitives::B256;
use rollup_ledger_primitives::{ParseStatusError, VerificationStatus};
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents a batch of state roots submitted on L1, awaiting fraud
/// verification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l1_rollup_state_root_batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    batch_number: i64,
    l1_tx_hash: Vec<u8>,
    status: String,
}

impl Model {
    /// Returns the batch number.
    pub(crate) const fn batch_number(&self) -> u64 {
        self.batch_number as u64
    }

    /// Returns the verification status of the batch.
    pub(crate) fn status(&self) -> Result<VerificationStatus, ParseStatusError> {
        self.status.parse()
    }
}

/// The relation for the L1 rollup state root batch model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the L1 rollup state root batch model.
impl ActiveModelBehavior for ActiveModel {}

impl From<(u64, B256)> for ActiveModel {
    fn from((batch_number, l1_tx_hash): (u64, B256)) -> Self {
        Self {
            batch_number: ActiveValue::Set(batch_number as i64),
            l1_tx_hash: ActiveValue::Set(l1_tx_hash.to_vec()),
            status: ActiveValue::Set(VerificationStatus::Unverified.as_str().to_owned()),
        }
    }
}
