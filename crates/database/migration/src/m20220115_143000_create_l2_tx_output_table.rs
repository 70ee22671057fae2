use super::m20220108_121400_create_l1_rollup_tx_table::L1RollupTx;
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
                    .table(L2TxOutput::Table)
                    .if_not_exists()
                    .col(pk_auto(L2TxOutput::Id))
                    .col(binary_len(L2TxOutput::TxHash, HASH_LENGTH).unique_key())
                    .col(binary_len(L2TxOutput::StateRoot, HASH_LENGTH))
                    .col(big_integer(L2TxOutput::BlockNumber))
                    .col(big_integer(L2TxOutput::BlockTimestamp))
                    .col(integer(L2TxOutput::TxIndex))
                    .col(binary_len(L2TxOutput::Sender, ADDRESS_LENGTH))
                    .col(binary_len_null(L2TxOutput::Target, ADDRESS_LENGTH))
                    .col(big_integer(L2TxOutput::Nonce))
                    .col(text(L2TxOutput::GasLimit))
                    .col(text(L2TxOutput::GasPrice))
                    .col(binary(L2TxOutput::Calldata))
                    .col(binary(L2TxOutput::Signature))
                    .col(big_integer_null(L2TxOutput::L1RollupTxId))
                    .col(big_integer_null(L2TxOutput::CanonicalChainBatchNumber))
                    .col(integer_null(L2TxOutput::CanonicalChainBatchIndex))
                    .col(text_null(L2TxOutput::CanonicalChainStatus))
                    .col(big_integer_null(L2TxOutput::StateCommitmentChainBatchNumber))
                    .col(integer_null(L2TxOutput::StateCommitmentChainBatchIndex))
                    .col(text_null(L2TxOutput::StateCommitmentChainStatus))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_l2_tx_output_l1_rollup_tx_id")
                            .from(L2TxOutput::Table, L2TxOutput::L1RollupTxId)
                            .to(L1RollupTx::Table, L1RollupTx::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(L2TxOutput::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum L2TxOutput {
    Table,
    Id,
    TxHash,
    StateRoot,
    BlockNumber,
    BlockTimestamp,
    TxIndex,
    Sender,
    Target,
    Nonce,
    GasLimit,
    GasPrice,
    Calldata,
    Signature,
    L1RollupTxId,
    CanonicalChainBatchNumber,
    CanonicalChainBatchIndex,
    CanonicalChainStatus,
    StateCommitmentChainBatchNumber,
    StateCommitmentChainBatchIndex,
    StateCommitmentChainStatus,
}
