//! PostgreSQL implementation of `VendorRepository`.

use crate::rows::{NewVendorRow, VendorChangeset, VendorRow, db_err};
use crate::schema::vendors;

use promessa_core::{NewVendor, Vendor, VendorUpdate};
use promessa_error::{DatabaseError, DatabaseErrorKind, PromessaResult};
use promessa_interface::VendorRepository;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Diesel-backed vendor store.
pub struct PostgresVendorRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresVendorRepository {
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
impl VendorRepository for PostgresVendorRepository {
    #[tracing::instrument(skip(self))]
    async fn list_vendors(&self, user_id: Uuid) -> PromessaResult<Vec<Vendor>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<VendorRow> = vendors::table
            .filter(vendors::user_id.eq(user_id))
            .order(vendors::created_at.asc())
            .select(VendorRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        Ok(rows.into_iter().map(VendorRow::into_core).collect())
    }

    #[tracing::instrument(skip(self, vendor), fields(name = %vendor.name))]
    async fn create_vendor(&self, user_id: Uuid, vendor: NewVendor) -> PromessaResult<Vendor> {
        let mut conn = self.conn.lock().await;

        let row = NewVendorRow {
            id: Uuid::new_v4(),
            user_id,
            name: vendor.name,
            category: vendor.category,
            email: vendor.email,
            phone: vendor.phone,
            cost: vendor.cost,
            booked: vendor.booked,
        };
        let inserted: VendorRow = diesel::insert_into(vendors::table)
            .values(&row)
            .returning(VendorRow::as_returning())
            .get_result(&mut *conn)
            .map_err(db_err)?;

        Ok(inserted.into_core())
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_vendor(
        &self,
        user_id: Uuid,
        vendor_id: Uuid,
        update: VendorUpdate,
    ) -> PromessaResult<Vendor> {
        let mut conn = self.conn.lock().await;

        let changeset = VendorChangeset {
            name: update.name,
            category: update.category,
            email: update.email,
            phone: update.phone,
            cost: update.cost,
            booked: update.booked,
        };

        let scope = vendors::table
            .filter(vendors::user_id.eq(user_id))
            .filter(vendors::id.eq(vendor_id));

        // Diesel rejects an all-default changeset; an empty update is a read.
        let is_empty = matches!(
            changeset,
            VendorChangeset {
                name: None,
                category: None,
                email: None,
                phone: None,
                cost: None,
                booked: None,
            }
        );
        let row: VendorRow = if is_empty {
            scope
                .select(VendorRow::as_select())
                .first(&mut *conn)
                .map_err(db_err)?
        } else {
            diesel::update(scope)
                .set(&changeset)
                .returning(VendorRow::as_returning())
                .get_result(&mut *conn)
                .map_err(db_err)?
        };

        Ok(row.into_core())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_vendor(&self, user_id: Uuid, vendor_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let deleted = diesel::delete(
            vendors::table
                .filter(vendors::user_id.eq(user_id))
                .filter(vendors::id.eq(vendor_id)),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }
}
