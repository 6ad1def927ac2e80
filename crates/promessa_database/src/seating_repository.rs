//! PostgreSQL implementation of `SeatingRepository`.

use crate::rows::{AssignmentRow, NewSeatingTableRow, SeatingTableRow, assignment_row, db_err};
use crate::schema::{seating_tables, table_assignments};

use promessa_core::{NewTable, Occupant, Table};
use promessa_error::{DatabaseError, DatabaseErrorKind, PromessaResult};
use promessa_interface::SeatingRepository;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Diesel-backed seating store: tables plus their assignment rows.
pub struct PostgresSeatingRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresSeatingRepository {
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
impl SeatingRepository for PostgresSeatingRepository {
    #[tracing::instrument(skip(self))]
    async fn list_tables(&self, user_id: Uuid) -> PromessaResult<Vec<Table>> {
        let mut conn = self.conn.lock().await;

        let table_rows: Vec<SeatingTableRow> = seating_tables::table
            .filter(seating_tables::user_id.eq(user_id))
            .order(seating_tables::created_at.asc())
            .select(SeatingTableRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        let assignment_rows: Vec<AssignmentRow> = AssignmentRow::belonging_to(&table_rows)
            .order(table_assignments::created_at.asc())
            .select(AssignmentRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        assignment_rows
            .grouped_by(&table_rows)
            .into_iter()
            .zip(table_rows)
            .map(|(assignments, table)| table.into_core(assignments))
            .collect()
    }

    #[tracing::instrument(skip(self, table), fields(name = %table.name, capacity = table.capacity))]
    async fn insert_table(&self, user_id: Uuid, table: NewTable) -> PromessaResult<Table> {
        let mut conn = self.conn.lock().await;

        let row = NewSeatingTableRow {
            id: Uuid::new_v4(),
            user_id,
            name: table.name,
            capacity: table.capacity,
            special: table.special,
        };
        let inserted: SeatingTableRow = diesel::insert_into(seating_tables::table)
            .values(&row)
            .returning(SeatingTableRow::as_returning())
            .get_result(&mut *conn)
            .map_err(db_err)?;

        inserted.into_core(Vec::new())
    }

    #[tracing::instrument(skip(self))]
    async fn update_table(
        &self,
        user_id: Uuid,
        table_id: Uuid,
        name: &str,
        capacity: i32,
    ) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let updated = diesel::update(
            seating_tables::table
                .filter(seating_tables::user_id.eq(user_id))
                .filter(seating_tables::id.eq(table_id)),
        )
        .set((
            seating_tables::name.eq(name),
            seating_tables::capacity.eq(capacity),
        ))
        .execute(&mut *conn)
        .map_err(db_err)?;

        if updated == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_table(&self, user_id: Uuid, table_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let deleted = diesel::delete(
            seating_tables::table
                .filter(seating_tables::user_id.eq(user_id))
                .filter(seating_tables::id.eq(table_id)),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, occupant), fields(person = %occupant.person.id()))]
    async fn insert_assignment(
        &self,
        user_id: Uuid,
        table_id: Uuid,
        occupant: &Occupant,
    ) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let row = assignment_row(user_id, table_id, occupant);
        diesel::insert_into(table_assignments::table)
            .values(&row)
            .execute(&mut *conn)
            .map_err(db_err)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_assignment(&self, user_id: Uuid, person_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        // Matches whichever side of the reference the person sits on; a
        // person never appears in more than one row.
        diesel::delete(
            table_assignments::table
                .filter(table_assignments::user_id.eq(user_id))
                .filter(
                    table_assignments::guest_id
                        .eq(Some(person_id))
                        .or(table_assignments::member_id.eq(Some(person_id))),
                ),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;
        Ok(())
    }
}
