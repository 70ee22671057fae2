use super::m20220101_000002_create_l1_tx_table::L1Tx;
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
                    .table(L1RollupTx::Table)
                    .if_not_exists()
                    .col(pk_auto(L1RollupTx::Id))
                    .col(binary_len(L1RollupTx::L1TxHash, HASH_LENGTH))
                    .col(integer(L1RollupTx::L1TxIndex))
                    .col(integer(L1RollupTx::L1TxLogIndex))
                    .col(big_integer(L1RollupTx::L1BlockNumber))
                    .col(big_integer(L1RollupTx::L1Timestamp))
                    .col(text(L1RollupTx::QueueOrigin))
                    .col(integer(L1RollupTx::IndexWithinSubmission))
                    .col(big_integer_null(L1RollupTx::GethSubmissionQueueIndex))
                    .col(binary_len_null(L1RollupTx::Target, ADDRESS_LENGTH))
                    .col(binary(L1RollupTx::Calldata))
                    .col(binary_len_null(L1RollupTx::Sender, ADDRESS_LENGTH))
                    .col(binary_len_null(L1RollupTx::L1MessageSender, ADDRESS_LENGTH))
                    .col(text_null(L1RollupTx::GasLimit))
                    .col(big_integer_null(L1RollupTx::Nonce))
                    .col(binary_null(L1RollupTx::Signature))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_l1_rollup_tx_l1_tx_hash")
                            .from(L1RollupTx::Table, L1RollupTx::L1TxHash)
                            .to(L1Tx::Table, L1Tx::TxHash),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(L1RollupTx::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum L1RollupTx {
    Table,
    Id,
    L1TxHash,
    L1TxIndex,
    L1TxLogIndex,
    L1BlockNumber,
    L1Timestamp,
    QueueOrigin,
    IndexWithinSubmission,
    GethSubmissionQueueIndex,
    Target,
    Calldata,
    Sender,
    L1MessageSender,
    GasLimit,
    Nonce,
    Signature,
}
