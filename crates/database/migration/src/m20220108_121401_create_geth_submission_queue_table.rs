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
                    .table(GethSubmissionQueue::Table)
                    .if_not_exists()
                    .col(big_integer(GethSubmissionQueue::QueueIndex).primary_key())
                    .col(binary_len(GethSubmissionQueue::L1TxHash, HASH_LENGTH))
                    .col(text(GethSubmissionQueue::Status))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GethSubmissionQueue::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum GethSubmissionQueue {
    Table,
    QueueIndex,
    L1TxHash,
    Status,
}
