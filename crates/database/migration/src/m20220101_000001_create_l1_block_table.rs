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
                    .table(L1Block::Table)
                    .if_not_exists()
                    .col(binary_len(L1Block::BlockHash, HASH_LENGTH).primary_key())
                    .col(binary_len(L1Block::ParentHash, HASH_LENGTH))
                    .col(big_integer(L1Block::BlockNumber))
                    .col(big_integer(L1Block::BlockTimestamp))
                    .col(big_integer(L1Block::Nonce))
                    .col(text(L1Block::Difficulty))
                    .col(text(L1Block::GasLimit))
                    .col(text(L1Block::GasUsed))
                    .col(binary_len(L1Block::Miner, ADDRESS_LENGTH))
                    .col(binary(L1Block::ExtraData))
                    .col(boolean(L1Block::Processed))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(L1Block::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum L1Block {
    Table,
    BlockHash,
    ParentHash,
    BlockNumber,
    BlockTimestamp,
    Nonce,
    Difficulty,
    GasLimit,
    GasUsed,
    Miner,
    ExtraData,
    Processed,
}
