//! Diesel row models and their conversions to the core domain types.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use promessa_core::{
    BudgetItem, GroupMember, Guest, Occupant, PersonRef, RsvpStatus, Table, Timeline, Vendor,
    WeddingTask,
};
use promessa_error::{DatabaseError, DatabaseErrorKind, PromessaResult};
use std::str::FromStr;
use uuid::Uuid;

/// A guest row as stored.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::guests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GuestRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: String,
    pub rsvp: String,
    pub plus_one: bool,
    pub dietary: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::guests)]
pub struct NewGuestRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: String,
    pub rsvp: String,
    pub plus_one: bool,
    pub dietary: Option<String>,
    pub notes: Option<String>,
}

/// Partial guest update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::guests)]
pub struct GuestChangeset {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
    pub rsvp: Option<String>,
    pub plus_one: Option<bool>,
    pub dietary: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = crate::schema::group_members)]
#[diesel(belongs_to(GuestRow, foreign_key = guest_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GroupMemberRow {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub name: String,
    pub dietary: Option<String>,
    pub is_child: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::group_members)]
pub struct NewGroupMemberRow {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub name: String,
    pub dietary: Option<String>,
    pub is_child: bool,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::seating_tables)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SeatingTableRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub special: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::seating_tables)]
pub struct NewSeatingTableRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub special: bool,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = crate::schema::table_assignments)]
#[diesel(belongs_to(SeatingTableRow, foreign_key = table_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AssignmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub table_id: Uuid,
    pub guest_id: Option<Uuid>,
    pub member_id: Option<Uuid>,
    pub owner_guest_id: Uuid,
    pub display_name: String,
    pub dietary: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::table_assignments)]
pub struct NewAssignmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub table_id: Uuid,
    pub guest_id: Option<Uuid>,
    pub member_id: Option<Uuid>,
    pub owner_guest_id: Uuid,
    pub display_name: String,
    pub dietary: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub notes: Option<String>,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub category: String,
    pub timeline: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTaskRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub notes: Option<String>,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub category: String,
    pub timeline: String,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::tasks)]
pub struct TaskChangeset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed: Option<bool>,
    pub category: Option<String>,
    pub timeline: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::timelines)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TimelineRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub position: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::timelines)]
pub struct NewTimelineRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub position: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::budget_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BudgetItemRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub description: Option<String>,
    pub estimated: f64,
    pub actual: Option<f64>,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::budget_items)]
pub struct NewBudgetItemRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub description: Option<String>,
    pub estimated: f64,
    pub actual: Option<f64>,
    pub paid: bool,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::budget_items)]
pub struct BudgetItemChangeset {
    pub category: Option<String>,
    pub description: Option<String>,
    pub estimated: Option<f64>,
    pub actual: Option<f64>,
    pub paid: Option<bool>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::vendors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VendorRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cost: Option<f64>,
    pub booked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::vendors)]
pub struct NewVendorRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cost: Option<f64>,
    pub booked: bool,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::vendors)]
pub struct VendorChangeset {
    pub name: Option<String>,
    pub category: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cost: Option<f64>,
    pub booked: Option<bool>,
}

/// Map a diesel error into the workspace error type.
pub(crate) fn db_err(e: diesel::result::Error) -> promessa_error::PromessaError {
    DatabaseError::from(e).into()
}

/// Parse a stored rsvp value, rejecting anything the enum does not know.
pub fn rsvp_from_text(text: &str) -> Result<RsvpStatus, DatabaseError> {
    RsvpStatus::from_str(text).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "unknown rsvp value '{text}'"
        )))
    })
}

impl GroupMemberRow {
    /// Convert into the core type.
    pub fn into_core(self) -> GroupMember {
        GroupMember {
            id: self.id,
            guest_id: self.guest_id,
            name: self.name,
            dietary: self.dietary,
            is_child: self.is_child,
        }
    }
}

impl GuestRow {
    /// Convert into the core type, attaching the guest's member rows.
    pub fn into_core(self, members: Vec<GroupMemberRow>) -> PromessaResult<Guest> {
        let rsvp = rsvp_from_text(&self.rsvp)?;
        Ok(Guest {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            relationship: self.relationship,
            rsvp,
            plus_one: self.plus_one,
            dietary: self.dietary,
            notes: self.notes,
            members: members.into_iter().map(GroupMemberRow::into_core).collect(),
        })
    }
}

impl AssignmentRow {
    /// Convert into the core occupant, resolving the typed person reference.
    pub fn into_core(self) -> PromessaResult<Occupant> {
        let person = match (self.guest_id, self.member_id) {
            (Some(id), None) => PersonRef::Guest { id },
            (None, Some(id)) => PersonRef::Member {
                id,
                guest_id: self.owner_guest_id,
            },
            _ => {
                return Err(DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                    "assignment {} references neither guest nor member",
                    self.id
                )))
                .into());
            }
        };
        Ok(Occupant {
            person,
            name: self.display_name,
            dietary: self.dietary,
        })
    }
}

impl SeatingTableRow {
    /// Convert into the core type, attaching the table's assignment rows.
    pub fn into_core(self, assignments: Vec<AssignmentRow>) -> PromessaResult<Table> {
        let occupants = assignments
            .into_iter()
            .map(AssignmentRow::into_core)
            .collect::<PromessaResult<Vec<_>>>()?;
        Ok(Table {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            capacity: self.capacity,
            special: self.special,
            occupants,
        })
    }
}

impl TaskRow {
    /// Convert into the core type.
    pub fn into_core(self) -> WeddingTask {
        WeddingTask {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            notes: self.notes,
            due_date: self.due_date,
            completed: self.completed,
            category: self.category,
            timeline: self.timeline,
        }
    }
}

impl TimelineRow {
    /// Convert into the core type.
    pub fn into_core(self) -> Timeline {
        Timeline {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            position: self.position,
        }
    }
}

impl BudgetItemRow {
    /// Convert into the core type.
    pub fn into_core(self) -> BudgetItem {
        BudgetItem {
            id: self.id,
            user_id: self.user_id,
            category: self.category,
            description: self.description,
            estimated: self.estimated,
            actual: self.actual,
            paid: self.paid,
        }
    }
}

impl VendorRow {
    /// Convert into the core type.
    pub fn into_core(self) -> Vendor {
        Vendor {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            category: self.category,
            email: self.email,
            phone: self.phone,
            cost: self.cost,
            booked: self.booked,
        }
    }
}

/// Build an assignment row from a core occupant.
pub fn assignment_row(user_id: Uuid, table_id: Uuid, occupant: &Occupant) -> NewAssignmentRow {
    let (guest_id, member_id) = match occupant.person {
        PersonRef::Guest { id } => (Some(id), None),
        PersonRef::Member { id, .. } => (None, Some(id)),
    };
    NewAssignmentRow {
        id: Uuid::new_v4(),
        user_id,
        table_id,
        guest_id,
        member_id,
        owner_guest_id: occupant.person.owner_guest_id(),
        display_name: occupant.name.clone(),
        dietary: occupant.dietary.clone(),
    }
}
