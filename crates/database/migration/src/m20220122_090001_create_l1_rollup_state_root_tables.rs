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
                    .table(L1RollupStateRootBatch::Table)
                    .if_not_exists()
                    .col(big_integer(L1RollupStateRootBatch::BatchNumber).primary_key())
                    .col(binary_len(L1RollupStateRootBatch::L1TxHash, HASH_LENGTH))
                    .col(text(L1RollupStateRootBatch::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(L1RollupStateRoot::Table)
                    .if_not_exists()
                    .col(pk_auto(L1RollupStateRoot::Id))
                    .col(binary_len(L1RollupStateRoot::StateRoot, HASH_LENGTH))
                    .col(big_integer(L1RollupStateRoot::BatchNumber))
                    .col(integer(L1RollupStateRoot::BatchIndex))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_l1_rollup_state_root_batch_number")
                            .from(L1RollupStateRoot::Table, L1RollupStateRoot::BatchNumber)
                            .to(L1RollupStateRootBatch::Table, L1RollupStateRootBatch::BatchNumber),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(L1RollupStateRoot::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(L1RollupStateRootBatch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum L1RollupStateRoot {
    Table,
    Id,
    StateRoot,
    BatchNumber,
    BatchIndex,
}

#[derive(DeriveIden)]
enum L1RollupStateRootBatch {
    Table,
    BatchNumber,
    L1TxHash,
    Status,
}
