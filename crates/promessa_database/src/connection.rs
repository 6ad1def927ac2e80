//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use promessa_error::{DatabaseError, DatabaseErrorKind, PromessaResult};

/// Migrations baked into the binary at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Establish a connection to the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the connection
/// string.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub fn establish_connection() -> PromessaResult<PgConnection> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })?;
    establish_connection_to(&database_url)
}

/// Establish a connection to the given PostgreSQL database.
pub fn establish_connection_to(database_url: &str) -> PromessaResult<PgConnection> {
    PgConnection::establish(database_url)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())).into())
}

/// Apply any pending embedded migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub fn run_migrations(conn: &mut PgConnection) -> PromessaResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;
    tracing::info!("Database migrations up to date");
    Ok(())
}
