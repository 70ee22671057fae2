use super::{
    m20220108_121400_create_l1_rollup_tx_table::L1RollupTx,
    m20220115_143000_create_l2_tx_output_table::L2TxOutput,
    m20220122_090001_create_l1_rollup_state_root_tables::L1RollupStateRoot,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index for the unqueued rollup transaction scan.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_l1_rollup_tx_queue_scan")
                    .table(L1RollupTx::Table)
                    .col(L1RollupTx::GethSubmissionQueueIndex)
                    .col(L1RollupTx::QueueOrigin)
                    .to_owned(),
            )
            .await?;

        // Indexes for batch membership lookups.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_l2_tx_output_canonical_chain_batch_number")
                    .table(L2TxOutput::Table)
                    .col(L2TxOutput::CanonicalChainBatchNumber)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_l2_tx_output_state_commitment_chain_batch_number")
                    .table(L2TxOutput::Table)
                    .col(L2TxOutput::StateCommitmentChainBatchNumber)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_l1_rollup_state_root_batch_number")
                    .table(L1RollupStateRoot::Table)
                    .col(L1RollupStateRoot::BatchNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop().name("idx_l1_rollup_tx_queue_scan").table(L1RollupTx::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_l2_tx_output_canonical_chain_batch_number")
                    .table(L2TxOutput::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_l2_tx_output_state_commitment_chain_batch_number")
                    .table(L2TxOutput::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_l1_rollup_state_root_batch_number")
                    .table(L1RollupStateRoot::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
