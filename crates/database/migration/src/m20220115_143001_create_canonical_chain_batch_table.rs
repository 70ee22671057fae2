use sea_orm_migration::{prelude::*, schema::*};

const HASH_LENGTH: u32 = 32;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CanonicalChainBatch::Table)
                    .if_not_exists()
                    .col(big_integer(CanonicalChainBatch::BatchNumber).primary_key())
                    .col(text(CanonicalChainBatch::Status))
                    .col(binary_len_null(CanonicalChainBatch::SubmissionTxHash, HASH_LENGTH))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CanonicalChainBatch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CanonicalChainBatch {
    Table,
    BatchNumber,
    Status,
    SubmissionTxHash,
}
