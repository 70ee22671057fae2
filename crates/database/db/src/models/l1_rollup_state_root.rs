use alloy_primitives::B256;
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents a state root submitted on L1, as part of a state root
/// batch.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l1_rollup_state_root")]
pub struct Model {
    #[sea_orm(primary_key)]
    id: i64,
    state_root: Vec<u8>,
    batch_number: i64,
    batch_index: i32,
}

impl Model {
    /// Returns the state root.
    pub(crate) fn state_root(&self) -> B256 {
        B256::from_slice(&self.state_root)
    }
}

/// The relation for the L1 rollup state root model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the L1 rollup state root model.
impl ActiveModelBehavior for ActiveModel {}

impl From<(B256, u64, u32)> for ActiveModel {
    fn from((state_root, batch_number, batch_index): (B256, u64, u32)) -> Self {
        Self {
            id: ActiveValue::NotSet,
            state_root: ActiveValue::Set(state_root.to_vec()),
            batch_number: ActiveValue::Set(batch_number as i64),
            batch_index: ActiveValue::Set(batch_index as i32),
        }
    }
}
