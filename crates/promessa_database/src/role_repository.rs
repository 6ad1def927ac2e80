//! PostgreSQL implementation of `RoleRepository`.

use crate::rows::db_err;
use crate::schema::user_roles;

use promessa_core::Role;
use promessa_error::PromessaResult;
use promessa_interface::RoleRepository;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Diesel-backed role lookup.
pub struct PostgresRoleRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresRoleRepository {
    /// Create a repository owning its connection.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create a repository from a shared connection.
    pub fn from_arc(conn: Arc<Mutex<PgConnection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    #[tracing::instrument(skip(self))]
    async fn role_for_user(&self, user_id: Uuid) -> PromessaResult<Role> {
        let mut conn = self.conn.lock().await;

        let lookup: Result<Option<String>, _> = user_roles::table
            .find(user_id)
            .select(user_roles::role)
            .first(&mut *conn)
            .optional();

        // Best-effort: every failure path resolves to the default role so a
        // broken lookup never locks a user out of the app.
        match lookup {
            Ok(Some(text)) => Ok(Role::from_str(&text).unwrap_or_else(|_| {
                tracing::warn!(%user_id, role = %text, "Unknown role value, defaulting to couple");
                Role::Couple
            })),
            Ok(None) => Ok(Role::Couple),
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "Role lookup failed, defaulting to couple");
                Ok(Role::Couple)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn set_role(&self, user_id: Uuid, role: Role) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        diesel::insert_into(user_roles::table)
            .values((
                user_roles::user_id.eq(user_id),
                user_roles::role.eq(role.to_string()),
            ))
            .on_conflict(user_roles::user_id)
            .do_update()
            .set(user_roles::role.eq(role.to_string()))
            .execute(&mut *conn)
            .map_err(db_err)?;
        Ok(())
    }
}
