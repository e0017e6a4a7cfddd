//! Migrate command - schema management without starting the server.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            let pending = pending_count(&db).await?;
            db.run_migrations().await?;
            tracing::info!(applied = pending, "Schema up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Reverted the latest migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in &status {
                println!("{:<48} {}", name, if *applied { "applied" } else { "pending" });
            }
            let pending = status.iter().filter(|(_, applied)| !applied).count();
            println!("{} of {} pending", pending, status.len());
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table, including admin accounts and sessions");
            db.fresh_migrations().await?;
            tracing::info!("Schema rebuilt from scratch");
        }
    }

    Ok(())
}

async fn pending_count(db: &Database) -> AppResult<usize> {
    Ok(db
        .migration_status()
        .await?
        .into_iter()
        .filter(|(_, applied)| !applied)
        .count())
}
