use alloy_primitives::{Address, B256};
use rollup_ledger_primitives::L2TransactionOutput;
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents an L2 transaction output.
///
/// The output carries two independent batch memberships: the canonical chain membership and
/// the state commitment chain membership. The status columns mirror the status of the owning
/// batch; a `NULL` batch number means the output is unbatched for that family.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l2_tx_output")]
pub struct Model {
    #[sea_orm(primary_key)]
    id: i64,
    tx_hash: Vec<u8>,
    state_root: Vec<u8>,
    block_number: i64,
    block_timestamp: i64,
    tx_index: i32,
    sender: Vec<u8>,
    target: Option<Vec<u8>>,
    nonce: i64,
    gas_limit: String,
    gas_price: String,
    calldata: Vec<u8>,
    signature: Vec<u8>,
    l1_rollup_tx_id: Option<i64>,
    canonical_chain_batch_number: Option<i64>,
    canonical_chain_batch_index: Option<i32>,
    canonical_chain_status: Option<String>,
    state_commitment_chain_batch_number: Option<i64>,
    state_commitment_chain_batch_index: Option<i32>,
    state_commitment_chain_status: Option<String>,
}

impl Model {
    /// Returns the row id of the output.
    pub(crate) const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the state root computed for the output.
    pub(crate) fn state_root(&self) -> B256 {
        B256::from_slice(&self.state_root)
    }
}

/// The relation for the L2 transaction output model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the L2 transaction output model.
impl ActiveModelBehavior for ActiveModel {}

impl From<L2TransactionOutput> for ActiveModel {
    fn from(output: L2TransactionOutput) -> Self {
        Self {
            id: ActiveValue::NotSet,
            tx_hash: ActiveValue::Set(output.tx_hash.to_vec()),
            state_root: ActiveValue::Set(output.state_root.to_vec()),
            block_number: ActiveValue::Set(output.block_number as i64),
            block_timestamp: ActiveValue::Set(output.block_timestamp as i64),
            tx_index: ActiveValue::Set(output.tx_index as i32),
            sender: ActiveValue::Set(output.sender.to_vec()),
            target: ActiveValue::Set(output.target.map(|t| t.to_vec())),
            nonce: ActiveValue::Set(output.nonce as i64),
            gas_limit: ActiveValue::Set(output.gas_limit.to_string()),
            gas_price: ActiveValue::Set(output.gas_price.to_string()),
            calldata: ActiveValue::Set(output.calldata.to_vec()),
            signature: ActiveValue::Set(output.signature.to_vec()),
            l1_rollup_tx_id: ActiveValue::Set(output.l1_rollup_tx_id),
            canonical_chain_batch_number: ActiveValue::Set(None),
            canonical_chain_batch_index: ActiveValue::Set(None),
            canonical_chain_status: ActiveValue::Set(None),
            state_commitment_chain_batch_number: ActiveValue::Set(None),
            state_commitment_chain_batch_index: ActiveValue::Set(None),
            state_commitment_chain_status: ActiveValue::Set(None),
        }
    }
}

impl From<Model> for L2TransactionOutput {
    fn from(value: Model) -> Self {
        Self {
            tx_hash: B256::from_slice(&value.tx_hash),
            state_root: B256::from_slice(&value.state_root),
            block_number: value.block_number as u64,
            block_timestamp: value.block_timestamp as u64,
            tx_index: value.tx_index as u32,
            sender: Address::from_slice(&value.sender),
            target: value.target.map(|t| Address::from_slice(&t)),
            nonce: value.nonce as u64,
            gas_limit: value.gas_limit.parse().expect("gas limit persisted in database is valid"),
            gas_price: value.gas_price.parse().expect("gas price persisted in database is valid"),
            calldata: value.calldata.into(),
            signature: value.signature.into(),
            l1_rollup_tx_id: value.l1_rollup_tx_id,
        }
    }
}
