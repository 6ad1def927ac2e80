//! Server startup wiring.

use crate::{create_router, AppState, ServerConfig};
use promessa_database::{
    establish_connection_to, run_migrations, PostgresBudgetRepository, PostgresGuestRepository,
    PostgresRoleRepository, PostgresSeatingRepository, PostgresTaskRepository,
    PostgresTimelineRepository, PostgresVendorRepository,
};
use promessa_error::{PromessaResult, ServerError, ServerErrorKind};
use promessa_interface::IdentityProvider;
use promessa_storage::FileSystemStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Connect to PostgreSQL, apply pending migrations and build the handler
/// state over the shared connection.
pub fn build_state(
    config: &ServerConfig,
    identity: Arc<dyn IdentityProvider>,
) -> PromessaResult<AppState> {
    let mut conn = establish_connection_to(config.database_url())?;
    run_migrations(&mut conn)?;
    let conn = Arc::new(Mutex::new(conn));

    Ok(AppState {
        guests: Arc::new(PostgresGuestRepository::from_arc(conn.clone())),
        seating: Arc::new(PostgresSeatingRepository::from_arc(conn.clone())),
        tasks: Arc::new(PostgresTaskRepository::from_arc(conn.clone())),
        timelines: Arc::new(PostgresTimelineRepository::from_arc(conn.clone())),
        budget: Arc::new(PostgresBudgetRepository::from_arc(conn.clone())),
        vendors: Arc::new(PostgresVendorRepository::from_arc(conn.clone())),
        roles: Arc::new(PostgresRoleRepository::from_arc(conn)),
        identity,
        local: Arc::new(FileSystemStore::new(config.local_store_dir())?),
    })
}

/// Bind the listener and serve the API until the process is stopped.
pub async fn serve(
    config: ServerConfig,
    identity: Arc<dyn IdentityProvider>,
) -> PromessaResult<()> {
    let state = build_state(&config, identity)?;
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                addr: config.bind_addr().clone(),
                reason: e.to_string(),
            })
        })?;
    tracing::info!(addr = %config.bind_addr(), "Serving the Promessa API");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Runtime(e.to_string())).into())
}
