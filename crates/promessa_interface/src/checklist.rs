//! Checklist data contract: tasks and timelines.

use async_trait::async_trait;
use promessa_core::{NewTask, TaskUpdate, Timeline, WeddingTask};
use promessa_error::PromessaResult;
use uuid::Uuid;

/// Remote-store operations over wedding tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List the user's tasks ordered by due date.
    async fn list_tasks(&self, user_id: Uuid) -> PromessaResult<Vec<WeddingTask>>;

    /// Create a task.
    async fn create_task(&self, user_id: Uuid, task: NewTask) -> PromessaResult<WeddingTask>;

    /// Apply a partial update to a task.
    async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        update: TaskUpdate,
    ) -> PromessaResult<WeddingTask>;

    /// Delete a task.
    async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> PromessaResult<()>;

    /// Count the user's tasks referencing a timeline by name. Used to protect
    /// a referenced timeline from deletion.
    async fn count_tasks_in_timeline(
        &self,
        user_id: Uuid,
        timeline: &str,
    ) -> PromessaResult<usize>;
}

/// Remote-store operations over timelines.
#[async_trait]
pub trait TimelineRepository: Send + Sync {
    /// List the user's timelines ordered by position.
    async fn list_timelines(&self, user_id: Uuid) -> PromessaResult<Vec<Timeline>>;

    /// Insert a timeline at the given position.
    async fn create_timeline(
        &self,
        user_id: Uuid,
        name: &str,
        position: i32,
    ) -> PromessaResult<Timeline>;

    /// Rename a timeline.
    async fn rename_timeline(
        &self,
        user_id: Uuid,
        timeline_id: Uuid,
        name: &str,
    ) -> PromessaResult<()>;

    /// Persist a timeline's sort position. The planner renumbers positions to
    /// stay contiguous before calling this.
    async fn set_position(
        &self,
        user_id: Uuid,
        timeline_id: Uuid,
        position: i32,
    ) -> PromessaResult<()>;

    /// Delete a timeline. The planner rejects the delete while tasks still
    /// reference it.
    async fn delete_timeline(&self, user_id: Uuid, timeline_id: Uuid) -> PromessaResult<()>;
}
