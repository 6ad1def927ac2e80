//! PostgreSQL implementation of `GuestRepository`.

use crate::rows::{
    GroupMemberRow, GuestChangeset, GuestRow, NewGroupMemberRow, NewGuestRow, db_err,
};
use crate::schema::{group_members, guests};

use promessa_core::{GroupMember, Guest, GuestUpdate, NewGroupMember, NewGuest};
use promessa_error::{DatabaseError, DatabaseErrorKind, PromessaResult};
use promessa_interface::GuestRepository;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Diesel-backed guest directory.
///
/// The connection is wrapped in `Arc<Mutex>` so the repository can be shared
/// across async handlers; each call holds the lock for one complete
/// request/response round trip.
pub struct PostgresGuestRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresGuestRepository {
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

    fn load_guest(conn: &mut PgConnection, user_id: Uuid, guest_id: Uuid) -> PromessaResult<Guest> {
        let row: GuestRow = guests::table
            .filter(guests::user_id.eq(user_id))
            .filter(guests::id.eq(guest_id))
            .select(GuestRow::as_select())
            .first(conn)
            .map_err(db_err)?;

        let members: Vec<GroupMemberRow> = GroupMemberRow::belonging_to(&row)
            .order(group_members::created_at.asc())
            .select(GroupMemberRow::as_select())
            .load(conn)
            .map_err(db_err)?;

        row.into_core(members)
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepository {
    #[tracing::instrument(skip(self))]
    async fn list_guests(&self, user_id: Uuid) -> PromessaResult<Vec<Guest>> {
        let mut conn = self.conn.lock().await;

        let guest_rows: Vec<GuestRow> = guests::table
            .filter(guests::user_id.eq(user_id))
            .order(guests::created_at.asc())
            .select(GuestRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        let member_rows: Vec<GroupMemberRow> = GroupMemberRow::belonging_to(&guest_rows)
            .order(group_members::created_at.asc())
            .select(GroupMemberRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        member_rows
            .grouped_by(&guest_rows)
            .into_iter()
            .zip(guest_rows)
            .map(|(members, guest)| guest.into_core(members))
            .collect()
    }

    #[tracing::instrument(skip(self))]
    async fn get_guest(&self, user_id: Uuid, guest_id: Uuid) -> PromessaResult<Guest> {
        let mut conn = self.conn.lock().await;
        Self::load_guest(&mut conn, user_id, guest_id)
    }

    #[tracing::instrument(skip(self, guest), fields(name = %guest.name))]
    async fn create_guest(&self, user_id: Uuid, guest: NewGuest) -> PromessaResult<Guest> {
        let mut conn = self.conn.lock().await;

        let row = NewGuestRow {
            id: Uuid::new_v4(),
            user_id,
            name: guest.name,
            email: guest.email,
            phone: guest.phone,
            relationship: guest.relationship,
            rsvp: guest.rsvp.to_string(),
            plus_one: guest.plus_one,
            dietary: guest.dietary,
            notes: guest.notes,
        };
        let inserted: GuestRow = diesel::insert_into(guests::table)
            .values(&row)
            .returning(GuestRow::as_returning())
            .get_result(&mut *conn)
            .map_err(db_err)?;

        // Members are discrete follow-up inserts; the store offers no
        // cross-call transaction, so a failure here leaves a member-less
        // guest behind rather than rolling it back.
        let mut members = Vec::with_capacity(guest.members.len());
        for member in guest.members {
            let member_row = NewGroupMemberRow {
                id: Uuid::new_v4(),
                guest_id: inserted.id,
                name: member.name,
                dietary: member.dietary,
                is_child: member.is_child,
            };
            let inserted_member: GroupMemberRow = diesel::insert_into(group_members::table)
                .values(&member_row)
                .returning(GroupMemberRow::as_returning())
                .get_result(&mut *conn)
                .map_err(db_err)?;
            members.push(inserted_member);
        }

        inserted.into_core(members)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_guest(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        update: GuestUpdate,
    ) -> PromessaResult<Guest> {
        let mut conn = self.conn.lock().await;

        let changeset = GuestChangeset {
            name: update.name,
            email: update.email,
            phone: update.phone,
            relationship: update.relationship,
            rsvp: update.rsvp.map(|r| r.to_string()),
            plus_one: update.plus_one,
            dietary: update.dietary,
            notes: update.notes,
        };

        // Diesel rejects an all-default changeset; an empty update is a read.
        let is_empty = matches!(
            changeset,
            GuestChangeset {
                name: None,
                email: None,
                phone: None,
                relationship: None,
                rsvp: None,
                plus_one: None,
                dietary: None,
                notes: None,
            }
        );
        if !is_empty {
            let updated = diesel::update(
                guests::table
                    .filter(guests::user_id.eq(user_id))
                    .filter(guests::id.eq(guest_id)),
            )
            .set(&changeset)
            .execute(&mut *conn)
            .map_err(db_err)?;
            if updated == 0 {
                return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
            }
        }

        Self::load_guest(&mut conn, user_id, guest_id)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_guest(&self, user_id: Uuid, guest_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let deleted = diesel::delete(
            guests::table
                .filter(guests::user_id.eq(user_id))
                .filter(guests::id.eq(guest_id)),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, member), fields(name = %member.name))]
    async fn add_member(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        member: NewGroupMember,
    ) -> PromessaResult<GroupMember> {
        let mut conn = self.conn.lock().await;

        // Ownership check before touching the member table.
        let owned: bool = diesel::select(diesel::dsl::exists(
            guests::table
                .filter(guests::user_id.eq(user_id))
                .filter(guests::id.eq(guest_id)),
        ))
        .get_result(&mut *conn)
        .map_err(db_err)?;
        if !owned {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }

        let row = NewGroupMemberRow {
            id: Uuid::new_v4(),
            guest_id,
            name: member.name,
            dietary: member.dietary,
            is_child: member.is_child,
        };
        let inserted: GroupMemberRow = diesel::insert_into(group_members::table)
            .values(&row)
            .returning(GroupMemberRow::as_returning())
            .get_result(&mut *conn)
            .map_err(db_err)?;

        Ok(inserted.into_core())
    }

    #[tracing::instrument(skip(self))]
    async fn remove_member(&self, user_id: Uuid, member_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let owned_guests = guests::table
            .filter(guests::user_id.eq(user_id))
            .select(guests::id);
        let deleted = diesel::delete(
            group_members::table
                .filter(group_members::id.eq(member_id))
                .filter(group_members::guest_id.eq_any(owned_guests)),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }
}
