//! Checklist service: tasks and the timelines that bucket them.

use crate::{plan_err, require_name};
use promessa_core::{ChecklistProgress, NewTask, NewTimeline, TaskUpdate, Timeline, WeddingTask};
use promessa_error::{PlannerErrorKind, PromessaResult};
use promessa_interface::{TaskRepository, TimelineRepository};
use std::sync::Arc;
use uuid::Uuid;

/// The checklist for one user.
///
/// Tasks reference timelines by name. The service keeps that reference sound:
/// a task can only point at an existing timeline, renaming a timeline carries
/// its tasks along, and a timeline with tasks cannot be deleted. Timeline
/// positions stay contiguous from zero across every reorder and delete.
#[derive(Clone)]
pub struct ChecklistService {
    user_id: Uuid,
    tasks: Arc<dyn TaskRepository>,
    timelines: Arc<dyn TimelineRepository>,
}

impl ChecklistService {
    /// Bind the service to a user and its repositories.
    pub fn new(
        user_id: Uuid,
        tasks: Arc<dyn TaskRepository>,
        timelines: Arc<dyn TimelineRepository>,
    ) -> Self {
        Self {
            user_id,
            tasks,
            timelines,
        }
    }

    /// All tasks, ordered by due date.
    pub async fn tasks(&self) -> PromessaResult<Vec<WeddingTask>> {
        self.tasks.list_tasks(self.user_id).await
    }

    /// Completion summary over the current task list.
    pub async fn progress(&self) -> PromessaResult<ChecklistProgress> {
        let tasks = self.tasks.list_tasks(self.user_id).await?;
        Ok(ChecklistProgress::compute(&tasks))
    }

    /// Create a task. Its timeline must already exist.
    #[tracing::instrument(skip(self, task), fields(user_id = %self.user_id))]
    pub async fn create_task(&self, task: NewTask) -> PromessaResult<WeddingTask> {
        require_name("Task", &task.title)?;
        self.require_timeline(&task.timeline).await?;
        self.tasks.create_task(self.user_id, task).await
    }

    /// Apply a partial update to a task. A changed timeline must exist.
    #[tracing::instrument(skip(self, update), fields(user_id = %self.user_id))]
    pub async fn update_task(
        &self,
        task_id: Uuid,
        update: TaskUpdate,
    ) -> PromessaResult<WeddingTask> {
        if let Some(title) = &update.title {
            require_name("Task", title)?;
        }
        if let Some(timeline) = &update.timeline {
            self.require_timeline(timeline).await?;
        }
        self.tasks.update_task(self.user_id, task_id, update).await
    }

    /// Flip a task's completion flag.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn toggle_complete(&self, task_id: Uuid) -> PromessaResult<WeddingTask> {
        let tasks = self.tasks.list_tasks(self.user_id).await?;
        let task = tasks
            .iter()
            .find(|t| t.id == task_id)
            .ok_or_else(|| plan_err(PlannerErrorKind::TaskNotFound(task_id)))?;
        self.tasks
            .update_task(
                self.user_id,
                task_id,
                TaskUpdate {
                    completed: Some(!task.completed),
                    ..TaskUpdate::default()
                },
            )
            .await
    }

    /// Delete a task.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn delete_task(&self, task_id: Uuid) -> PromessaResult<()> {
        self.tasks.delete_task(self.user_id, task_id).await
    }

    /// All timelines, ordered by position.
    pub async fn timelines(&self) -> PromessaResult<Vec<Timeline>> {
        self.timelines.list_timelines(self.user_id).await
    }

    /// Create a timeline, appended after the current last position.
    #[tracing::instrument(skip(self, timeline), fields(user_id = %self.user_id))]
    pub async fn create_timeline(&self, timeline: NewTimeline) -> PromessaResult<Timeline> {
        let name = timeline.name.trim();
        require_name("Timeline", name)?;
        let existing = self.timelines.list_timelines(self.user_id).await?;
        if existing.iter().any(|t| t.name == name) {
            return Err(plan_err(PlannerErrorKind::DuplicateTimeline(
                name.to_string(),
            )));
        }
        self.timelines
            .create_timeline(self.user_id, name, existing.len() as i32)
            .await
    }

    /// Rename a timeline and repoint every task that referenced the old name.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn rename_timeline(&self, timeline_id: Uuid, name: &str) -> PromessaResult<Timeline> {
        let name = name.trim();
        require_name("Timeline", name)?;
        let existing = self.timelines.list_timelines(self.user_id).await?;
        let timeline = existing
            .iter()
            .find(|t| t.id == timeline_id)
            .ok_or_else(|| plan_err(PlannerErrorKind::TimelineNotFound(timeline_id.to_string())))?;
        if existing.iter().any(|t| t.id != timeline_id && t.name == name) {
            return Err(plan_err(PlannerErrorKind::DuplicateTimeline(
                name.to_string(),
            )));
        }
        let old_name = timeline.name.clone();
        self.timelines
            .rename_timeline(self.user_id, timeline_id, name)
            .await?;

        // Tasks reference the timeline by name, so carry them along one by
        // one. A failure leaves the remainder pointing at the old name.
        let tasks = self.tasks.list_tasks(self.user_id).await?;
        for task in tasks.iter().filter(|t| t.timeline == old_name) {
            self.tasks
                .update_task(
                    self.user_id,
                    task.id,
                    TaskUpdate {
                        timeline: Some(name.to_string()),
                        ..TaskUpdate::default()
                    },
                )
                .await?;
        }

        Ok(Timeline {
            name: name.to_string(),
            ..timeline.clone()
        })
    }

    /// Swap a timeline with its predecessor. A no-op at the top.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn move_up(&self, timeline_id: Uuid) -> PromessaResult<Vec<Timeline>> {
        self.swap_with_neighbor(timeline_id, -1).await
    }

    /// Swap a timeline with its successor. A no-op at the bottom.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn move_down(&self, timeline_id: Uuid) -> PromessaResult<Vec<Timeline>> {
        self.swap_with_neighbor(timeline_id, 1).await
    }

    /// Delete a timeline no task references, then renumber the rest so the
    /// positions stay contiguous from zero.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn delete_timeline(&self, timeline_id: Uuid) -> PromessaResult<Vec<Timeline>> {
        let existing = self.timelines.list_timelines(self.user_id).await?;
        let timeline = existing
            .iter()
            .find(|t| t.id == timeline_id)
            .ok_or_else(|| plan_err(PlannerErrorKind::TimelineNotFound(timeline_id.to_string())))?;
        let task_count = self
            .tasks
            .count_tasks_in_timeline(self.user_id, &timeline.name)
            .await?;
        if task_count > 0 {
            return Err(plan_err(PlannerErrorKind::TimelineInUse {
                name: timeline.name.clone(),
                task_count,
            }));
        }
        self.timelines
            .delete_timeline(self.user_id, timeline_id)
            .await?;

        let mut remaining: Vec<Timeline> = existing
            .into_iter()
            .filter(|t| t.id != timeline_id)
            .collect();
        for (position, timeline) in remaining.iter_mut().enumerate() {
            let position = position as i32;
            if timeline.position != position {
                self.timelines
                    .set_position(self.user_id, timeline.id, position)
                    .await?;
                timeline.position = position;
            }
        }
        Ok(remaining)
    }

    async fn require_timeline(&self, name: &str) -> PromessaResult<()> {
        let timelines = self.timelines.list_timelines(self.user_id).await?;
        if timelines.iter().any(|t| t.name == name) {
            Ok(())
        } else {
            Err(plan_err(PlannerErrorKind::TimelineNotFound(
                name.to_string(),
            )))
        }
    }

    async fn swap_with_neighbor(
        &self,
        timeline_id: Uuid,
        direction: i32,
    ) -> PromessaResult<Vec<Timeline>> {
        let mut timelines = self.timelines.list_timelines(self.user_id).await?;
        let index = timelines
            .iter()
            .position(|t| t.id == timeline_id)
            .ok_or_else(|| plan_err(PlannerErrorKind::TimelineNotFound(timeline_id.to_string())))?;
        let neighbor = index as i32 + direction;
        if neighbor < 0 || neighbor as usize >= timelines.len() {
            return Ok(timelines);
        }
        let neighbor = neighbor as usize;

        let a = timelines[index].clone();
        let b = timelines[neighbor].clone();
        self.timelines
            .set_position(self.user_id, a.id, b.position)
            .await?;
        self.timelines
            .set_position(self.user_id, b.id, a.position)
            .await?;
        timelines[index].position = b.position;
        timelines[neighbor].position = a.position;
        timelines.swap(index, neighbor);
        Ok(timelines)
    }
}
