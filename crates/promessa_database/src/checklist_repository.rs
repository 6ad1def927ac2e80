//! PostgreSQL implementations of `TaskRepository` and `TimelineRepository`.

use crate::rows::{NewTaskRow, NewTimelineRow, TaskChangeset, TaskRow, TimelineRow, db_err};
use crate::schema::{tasks, timelines};

use promessa_core::{NewTask, TaskUpdate, Timeline, WeddingTask};
use promessa_error::{DatabaseError, DatabaseErrorKind, PromessaResult};
use promessa_interface::{TaskRepository, TimelineRepository};

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Diesel-backed task store.
pub struct PostgresTaskRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresTaskRepository {
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
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip(self))]
    async fn list_tasks(&self, user_id: Uuid) -> PromessaResult<Vec<WeddingTask>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<TaskRow> = tasks::table
            .filter(tasks::user_id.eq(user_id))
            .order(tasks::due_date.asc())
            .select(TaskRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        Ok(rows.into_iter().map(TaskRow::into_core).collect())
    }

    #[tracing::instrument(skip(self, task), fields(title = %task.title))]
    async fn create_task(&self, user_id: Uuid, task: NewTask) -> PromessaResult<WeddingTask> {
        let mut conn = self.conn.lock().await;

        let row = NewTaskRow {
            id: Uuid::new_v4(),
            user_id,
            title: task.title,
            description: task.description,
            notes: task.notes,
            due_date: task.due_date,
            completed: false,
            category: task.category,
            timeline: task.timeline,
        };
        let inserted: TaskRow = diesel::insert_into(tasks::table)
            .values(&row)
            .returning(TaskRow::as_returning())
            .get_result(&mut *conn)
            .map_err(db_err)?;

        Ok(inserted.into_core())
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        update: TaskUpdate,
    ) -> PromessaResult<WeddingTask> {
        let mut conn = self.conn.lock().await;

        let changeset = TaskChangeset {
            title: update.title,
            description: update.description,
            notes: update.notes,
            due_date: update.due_date,
            completed: update.completed,
            category: update.category,
            timeline: update.timeline,
        };

        let scope = tasks::table
            .filter(tasks::user_id.eq(user_id))
            .filter(tasks::id.eq(task_id));

        // Diesel rejects an all-default changeset; an empty update is a read.
        let is_empty = matches!(
            changeset,
            TaskChangeset {
                title: None,
                description: None,
                notes: None,
                due_date: None,
                completed: None,
                category: None,
                timeline: None,
            }
        );
        let row: TaskRow = if is_empty {
            scope
                .select(TaskRow::as_select())
                .first(&mut *conn)
                .map_err(db_err)?
        } else {
            diesel::update(scope)
                .set(&changeset)
                .returning(TaskRow::as_returning())
                .get_result(&mut *conn)
                .map_err(db_err)?
        };

        Ok(row.into_core())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let deleted = diesel::delete(
            tasks::table
                .filter(tasks::user_id.eq(user_id))
                .filter(tasks::id.eq(task_id)),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn count_tasks_in_timeline(
        &self,
        user_id: Uuid,
        timeline: &str,
    ) -> PromessaResult<usize> {
        let mut conn = self.conn.lock().await;

        let count: i64 = tasks::table
            .filter(tasks::user_id.eq(user_id))
            .filter(tasks::timeline.eq(timeline))
            .count()
            .get_result(&mut *conn)
            .map_err(db_err)?;

        Ok(count as usize)
    }
}

/// Diesel-backed timeline store.
pub struct PostgresTimelineRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresTimelineRepository {
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
impl TimelineRepository for PostgresTimelineRepository {
    #[tracing::instrument(skip(self))]
    async fn list_timelines(&self, user_id: Uuid) -> PromessaResult<Vec<Timeline>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<TimelineRow> = timelines::table
            .filter(timelines::user_id.eq(user_id))
            .order(timelines::position.asc())
            .select(TimelineRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        Ok(rows.into_iter().map(TimelineRow::into_core).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn create_timeline(
        &self,
        user_id: Uuid,
        name: &str,
        position: i32,
    ) -> PromessaResult<Timeline> {
        let mut conn = self.conn.lock().await;

        let row = NewTimelineRow {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            position,
        };
        let inserted: TimelineRow = diesel::insert_into(timelines::table)
            .values(&row)
            .returning(TimelineRow::as_returning())
            .get_result(&mut *conn)
            .map_err(db_err)?;

        Ok(inserted.into_core())
    }

    #[tracing::instrument(skip(self))]
    async fn rename_timeline(
        &self,
        user_id: Uuid,
        timeline_id: Uuid,
        name: &str,
    ) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let updated = diesel::update(
            timelines::table
                .filter(timelines::user_id.eq(user_id))
                .filter(timelines::id.eq(timeline_id)),
        )
        .set(timelines::name.eq(name))
        .execute(&mut *conn)
        .map_err(db_err)?;

        if updated == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn set_position(
        &self,
        user_id: Uuid,
        timeline_id: Uuid,
        position: i32,
    ) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let updated = diesel::update(
            timelines::table
                .filter(timelines::user_id.eq(user_id))
                .filter(timelines::id.eq(timeline_id)),
        )
        .set(timelines::position.eq(position))
        .execute(&mut *conn)
        .map_err(db_err)?;

        if updated == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_timeline(&self, user_id: Uuid, timeline_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let deleted = diesel::delete(
            timelines::table
                .filter(timelines::user_id.eq(user_id))
                .filter(timelines::id.eq(timeline_id)),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }
}
