//! Checklist types: wedding tasks and the timelines that bucket them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A checklist task owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingTask {
    /// Unique task identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Free-text notes
    pub notes: Option<String>,
    /// Due date
    pub due_date: NaiveDate,
    /// Completion flag
    pub completed: bool,
    /// Category (e.g. "venue", "flowers")
    pub category: String,
    /// Name of the timeline bucketing this task
    pub timeline: String,
}

/// A named, ordered bucket grouping tasks by relative time before the
/// wedding. Positions stay contiguous (0..n) across deletes and moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Unique timeline identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Unique-per-user display name
    pub name: String,
    /// Sort position, contiguous from zero
    pub position: i32,
}

/// Payload for creating a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Free-text notes
    pub notes: Option<String>,
    /// Due date
    pub due_date: NaiveDate,
    /// Category
    pub category: String,
    /// Timeline name the task belongs to
    pub timeline: String,
}

/// Partial update for a task; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New notes
    pub notes: Option<String>,
    /// New due date
    pub due_date: Option<NaiveDate>,
    /// New completion flag
    pub completed: Option<bool>,
    /// New category
    pub category: Option<String>,
    /// New timeline name
    pub timeline: Option<String>,
}

/// Payload for creating a timeline. The new timeline is appended after the
/// user's current last position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTimeline {
    /// Unique-per-user display name
    pub name: String,
}

/// Completion summary over a task list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChecklistProgress {
    /// Total number of tasks
    pub total: usize,
    /// Tasks marked complete
    pub completed: usize,
    /// Completion percentage, 0.0 when the list is empty
    pub percent: f32,
}

impl ChecklistProgress {
    /// Compute progress by linear scan over the source-of-truth task list.
    pub fn compute(tasks: &[WeddingTask]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let percent = if total == 0 {
            0.0
        } else {
            completed as f32 / total as f32 * 100.0
        };
        Self {
            total,
            completed,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool) -> WeddingTask {
        WeddingTask {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Book venue".to_string(),
            description: String::new(),
            notes: None,
            due_date: NaiveDate::from_ymd_opt(2027, 6, 12).unwrap(),
            completed,
            category: "venue".to_string(),
            timeline: "Twelve months before".to_string(),
        }
    }

    #[test]
    fn progress_on_empty_list_is_zero() {
        let progress = ChecklistProgress::compute(&[]);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn progress_counts_completed_tasks() {
        let tasks = vec![task(true), task(true), task(false), task(false)];
        let progress = ChecklistProgress::compute(&tasks);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.percent, 50.0);
    }
}
