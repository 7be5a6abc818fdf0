use std::time::Duration;

use sea_orm::{
    sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous},
    ConnectOptions, DatabaseConnection,
};

use crate::{config::Config, error::AppError};

/// How long a connection waits on a locked database before failing.
const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    let db = Database::connect(connect_options(&config.database_url)).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds connect options carrying the production SQLite pragmas.
///
/// The pragmas are set on the sqlx connect options so that every connection
/// the pool opens gets them, not only the first one. WAL journaling lets the
/// pollers read while message stats are written.
fn connect_options(database_url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false).map_sqlx_sqlite_opts(|sqlite| {
        sqlite
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(SQLITE_BUSY_TIMEOUT)
    });

    opt
}
