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
                    .table(StateCommitmentChainBatch::Table)
                    .if_not_exists()
                    .col(big_integer(StateCommitmentChainBatch::BatchNumber).primary_key())
                    .col(text(StateCommitmentChainBatch::Status))
                    .col(binary_len_null(StateCommitmentChainBatch::SubmissionTxHash, HASH_LENGTH))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StateCommitmentChainBatch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StateCommitmentChainBatch {
    Table,
    BatchNumber,
    Status,
    SubmissionTxHash,
}
