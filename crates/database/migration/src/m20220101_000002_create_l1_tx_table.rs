use super::m20220101_000001_create_l1_block_table::L1Block;
use sea_orm_migration::{prelude::*, schema::*};

const HASH_LENGTH: u32 = 32;
const ADDRESS_LENGTH: u32 = 20;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(L1Tx::Table)
                    .if_not_exists()
                    .col(binary_len(L1Tx::TxHash, HASH_LENGTH).primary_key())
                    .col(binary_len(L1Tx::BlockHash, HASH_LENGTH))
                    .col(integer(L1Tx::TxIndex))
                    .col(binary_len(L1Tx::Sender, ADDRESS_LENGTH))
                    .col(binary_len_null(L1Tx::Target, ADDRESS_LENGTH))
                    .col(big_integer(L1Tx::Nonce))
                    .col(text(L1Tx::GasLimit))
                    .col(text(L1Tx::GasPrice))
                    .col(binary(L1Tx::Calldata))
                    .col(binary_len(L1Tx::SigR, HASH_LENGTH))
                    .col(binary_len(L1Tx::SigS, HASH_LENGTH))
                    .col(big_integer(L1Tx::SigV))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_l1_tx_block_hash")
                            .from(L1Tx::Table, L1Tx::BlockHash)
                            .to(L1Block::Table, L1Block::BlockHash),
                    )
                    .to_owned(),
            )
            .await?;

        // A transaction is uniquely keyed by its hash and by its position within the block.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_l1_tx_block_hash_tx_index")
                    .table(L1Tx::Table)
                    .col(L1Tx::BlockHash)
                    .col(L1Tx::TxIndex)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop().name("idx_l1_tx_block_hash_tx_index").table(L1Tx::Table).to_owned(),
            )
            .await?;
        manager.drop_table(Table::drop().table(L1Tx::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum L1Tx {
    Table,
    TxHash,
    BlockHash,
    TxIndex,
    Sender,
    Target,
    Nonce,
    GasLimit,
    GasPrice,
    Calldata,
    SigR,
    SigS,
    SigV,
}
