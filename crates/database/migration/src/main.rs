use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    tracing::info!(target: "ledger::migration", "Running database migrations.");
    cli::run_cli(rollup_ledger_migration::Migrator).await;
    tracing::info!(target: "ledger::migration", "Database migrations complete.")
}
