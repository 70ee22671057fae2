use alloy_primitives::{Address, B256, U256};
use rollup_ledger_primitives::{EcdsaSignature, L1TransactionRecord};
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents an L1 transaction.
///
/// The transaction index within the block is derived from the position of the record in the
/// insert call, never supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l1_tx")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    tx_hash: Vec<u8>,
    block_hash: Vec<u8>,
    tx_index: i32,
    sender: Vec<u8>,
    target: Option<Vec<u8>>,
    nonce: i64,
    gas_limit: String,
    gas_price: String,
    calldata: Vec<u8>,
    sig_r: Vec<u8>,
    sig_s: Vec<u8>,
    sig_v: i64,
}

/// The relation for the L1 transaction model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A relation with the L1 block table, where the block hash column belongs to the block
    /// hash of the L1 block table.
    #[sea_orm(
        belongs_to = "super::l1_block::Entity",
        from = "Column::BlockHash",
        to = "super::l1_block::Column::BlockHash"
    )]
    L1Block,
}

/// The active model behavior for the L1 transaction model.
impl ActiveModelBehavior for ActiveModel {}

impl From<(L1TransactionRecord, u32)> for ActiveModel {
    fn from((tx, tx_index): (L1TransactionRecord, u32)) -> Self {
        Self {
            tx_hash: ActiveValue::Set(tx.hash.to_vec()),
            block_hash: ActiveValue::Set(tx.block_hash.to_vec()),
            tx_index: ActiveValue::Set(tx_index as i32),
            sender: ActiveValue::Set(tx.sender.to_vec()),
            target: ActiveValue::Set(tx.target.map(|t| t.to_vec())),
            nonce: ActiveValue::Set(tx.nonce as i64),
            gas_limit: ActiveValue::Set(tx.gas_limit.to_string()),
            gas_price: ActiveValue::Set(tx.gas_price.to_string()),
            calldata: ActiveValue::Set(tx.calldata.to_vec()),
            sig_r: ActiveValue::Set(tx.signature.r.to_le_bytes_vec()),
            sig_s: ActiveValue::Set(tx.signature.s.to_le_bytes_vec()),
            sig_v: ActiveValue::Set(tx.signature.v as i64),
        }
    }
}

impl From<Model> for L1TransactionRecord {
    fn from(value: Model) -> Self {
        Self {
            hash: B256::from_slice(&value.tx_hash),
            block_hash: B256::from_slice(&value.block_hash),
            sender: Address::from_slice(&value.sender),
            target: value.target.map(|t| Address::from_slice(&t)),
            nonce: value.nonce as u64,
            gas_limit: value.gas_limit.parse().expect("gas limit persisted in database is valid"),
            gas_price: value.gas_price.parse().expect("gas price persisted in database is valid"),
            calldata: value.calldata.into(),
            signature: EcdsaSignature {
                r: U256::from_le_slice(&value.sig_r),
                s: U256::from_le_slice(&value.sig_s),
                v: value.sig_v as u64,
            },
        }
    }
}
