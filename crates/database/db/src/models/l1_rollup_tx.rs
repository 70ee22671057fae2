use alloy_primitives::{Address, B256};
use rollup_ledger_primitives::RollupTransaction;
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents a rollup transaction decoded from an L1 transaction's logs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l1_rollup_tx")]
pub struct Model {
    #[sea_orm(primary_key)]
    id: i64,
    l1_tx_hash: Vec<u8>,
    l1_tx_index: i32,
    l1_tx_log_index: i32,
    l1_block_number: i64,
    l1_timestamp: i64,
    queue_origin: String,
    index_within_submission: i32,
    geth_submission_queue_index: Option<i64>,
    target: Option<Vec<u8>>,
    calldata: Vec<u8>,
    sender: Option<Vec<u8>>,
    l1_message_sender: Option<Vec<u8>>,
    gas_limit: Option<String>,
    nonce: Option<i64>,
    signature: Option<Vec<u8>>,
}

impl Model {
    /// Returns the row id of the rollup transaction.
    pub(crate) const fn id(&self) -> i64 {
        self.id
    }
}

/// The relation for the rollup transaction model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A relation with the L1 transaction table, where the L1 tx hash column belongs to the
    /// tx hash of the L1 transaction table.
    #[sea_orm(
        belongs_to = "super::l1_tx::Entity",
        from = "Column::L1TxHash",
        to = "super::l1_tx::Column::TxHash"
    )]
    L1Transaction,
}

/// The active model behavior for the rollup transaction model.
impl ActiveModelBehavior for ActiveModel {}

impl From<(RollupTransaction, Option<(u64, u32)>)> for ActiveModel {
    fn from((tx, submission): (RollupTransaction, Option<(u64, u32)>)) -> Self {
        let index_within_submission =
            submission.map_or(tx.index_within_submission, |(_, index)| index);
        Self {
            id: ActiveValue::NotSet,
            l1_tx_hash: ActiveValue::Set(tx.l1_tx_hash.to_vec()),
            l1_tx_index: ActiveValue::Set(tx.l1_tx_index as i32),
            l1_tx_log_index: ActiveValue::Set(tx.l1_tx_log_index as i32),
            l1_block_number: ActiveValue::Set(tx.l1_block_number as i64),
            l1_timestamp: ActiveValue::Set(tx.l1_timestamp as i64),
            queue_origin: ActiveValue::Set(tx.queue_origin.as_str().to_owned()),
            index_within_submission: ActiveValue::Set(index_within_submission as i32),
            geth_submission_queue_index: ActiveValue::Set(
                submission.map(|(queue_index, _)| queue_index as i64),
            ),
            target: ActiveValue::Set(tx.target.map(|t| t.to_vec())),
            calldata: ActiveValue::Set(tx.calldata.to_vec()),
            sender: ActiveValue::Set(tx.sender.map(|s| s.to_vec())),
            l1_message_sender: ActiveValue::Set(tx.l1_message_sender.map(|s| s.to_vec())),
            gas_limit: ActiveValue::Set(tx.gas_limit.map(|g| g.to_string())),
            nonce: ActiveValue::Set(tx.nonce.map(|n| n as i64)),
            signature: ActiveValue::Set(tx.signature.map(|s| s.to_vec())),
        }
    }
}

impl From<Model> for RollupTransaction {
    fn from(value: Model) -> Self {
        Self {
            l1_tx_hash: B256::from_slice(&value.l1_tx_hash),
            l1_tx_index: value.l1_tx_index as u32,
            l1_tx_log_index: value.l1_tx_log_index as u32,
            l1_block_number: value.l1_block_number as u64,
            l1_timestamp: value.l1_timestamp as u64,
            queue_origin: value
                .queue_origin
                .parse()
                .expect("queue origin persisted in database is valid"),
            index_within_submission: value.index_within_submission as u32,
            target: value.target.map(|t| Address::from_slice(&t)),
            calldata: value.calldata.into(),
            sender: value.sender.map(|s| Address::from_slice(&s)),
            l1_message_sender: value.l1_message_sender.map(|s| Address::from_slice(&s)),
            gas_limit: value
                .gas_limit
                .map(|g| g.parse().expect("gas limit persisted in database is valid")),
            nonce: value.nonce.map(|n| n as u64),
            signature: value.signature.map(Into::into),
        }
    }
}
