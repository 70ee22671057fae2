use alloy_primitives::{Address, B256};
use rollup_ledger_primitives::L1BlockRecord;
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents an L1 block.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l1_block")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    block_hash: Vec<u8>,
    parent_hash: Vec<u8>,
    block_number: i64,
    block_timestamp: i64,
    nonce: i64,
    difficulty: String,
    gas_limit: String,
    gas_used: String,
    miner: Vec<u8>,
    extra_data: Vec<u8>,
    processed: bool,
}

/// The relation for the L1 block model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the L1 block model.
impl ActiveModelBehavior for ActiveModel {}

impl From<(L1BlockRecord, bool)> for ActiveModel {
    fn from((block, processed): (L1BlockRecord, bool)) -> Self {
        Self {
            block_hash: ActiveValue::Set(block.hash.to_vec()),
            parent_hash: ActiveValue::Set(block.parent_hash.to_vec()),
            block_number: ActiveValue::Set(block.number as i64),
            block_timestamp: ActiveValue::Set(block.timestamp as i64),
            nonce: ActiveValue::Set(block.nonce as i64),
            difficulty: ActiveValue::Set(block.difficulty.to_string()),
            gas_limit: ActiveValue::Set(block.gas_limit.to_string()),
            gas_used: ActiveValue::Set(block.gas_used.to_string()),
            miner: ActiveValue::Set(block.miner.to_vec()),
            extra_data: ActiveValue::Set(block.extra_data.to_vec()),
            processed: ActiveValue::Set(processed),
        }
    }
}

impl From<Model> for (L1BlockRecord, bool) {
    fn from(value: Model) -> Self {
        (
            L1BlockRecord {
                hash: B256::from_slice(&value.block_hash),
                parent_hash: B256::from_slice(&value.parent_hash),
                number: value.block_number as u64,
                timestamp: value.block_timestamp as u64,
                nonce: value.nonce as u64,
                difficulty: value.difficulty.parse().expect("difficulty persisted in database is valid"),
                gas_limit: value.gas_limit.parse().expect("gas limit persisted in database is valid"),
                gas_used: value.gas_used.parse().expect("gas used persisted in database is valid"),
                miner: Address::from_slice(&value.miner),
                extra_data: value.extra_data.into(),
            },
            value.processed,
        )
    }
}
