//! Schema migrations for the rollup ledger store.
#![allow(elided_lifetimes_in_paths)]

pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_l1_block_table;
mod m20220101_000002_create_l1_tx_table;
mod m20220108_121400_create_l1_rollup_tx_table;
mod m20220108_121401_create_geth_submission_queue_table;
mod m20220115_143000_create_l2_tx_output_table;
mod m20220115_143001_create_canonical_chain_batch_table;
mod m20220122_090000_create_state_commitment_chain_batch_table;
mod m20220122_090001_create_l1_rollup_state_root_tables;
mod m20220205_160000_add_scan_indexes;

/// The migrator for the rollup ledger schema.
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_l1_block_table::Migration),
            Box::new(m20220101_000002_create_l1_tx_table::Migration),
            Box::new(m20220108_121400_create_l1_rollup_tx_table::Migration),
            Box::new(m20220108_121401_create_geth_submission_queue_table::Migration),
            Box::new(m20220115_143000_create_l2_tx_output_table::Migration),
            Box::new(m20220115_143001_create_canonical_chain_batch_table::Migration),
            Box::new(m20220122_090000_create_state_commitment_chain_batch_table::Migration),
            Box::new(m20220122_090001_create_l1_rollup_state_root_tables::Migration),
            Box::new(m20220205_160000_add_scan_indexes::Migration),
        ]
    }
}
