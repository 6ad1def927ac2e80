//! Checklist and budget scenarios over in-memory stores.

use async_trait::async_trait;
use chrono::NaiveDate;
use promessa_core::{
    BudgetItem, BudgetItemUpdate, BudgetSettings, NewBudgetItem, NewTask, NewTimeline, TaskUpdate,
    Timeline, WeddingTask,
};
use promessa_error::{PlannerErrorKind, PromessaErrorKind, PromessaResult};
use promessa_interface::{BudgetRepository, TaskRepository, TimelineRepository};
use promessa_planner::{BudgetService, ChecklistService};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct MemoryChecklist {
    tasks: Mutex<Vec<WeddingTask>>,
    timelines: Mutex<Vec<Timeline>>,
}

#[async_trait]
impl TaskRepository for MemoryChecklist {
    async fn list_tasks(&self, user_id: Uuid) -> PromessaResult<Vec<WeddingTask>> {
        let mut tasks: Vec<WeddingTask> = self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.due_date);
        Ok(tasks)
    }

    async fn create_task(&self, user_id: Uuid, task: NewTask) -> PromessaResult<WeddingTask> {
        let created = WeddingTask {
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
        self.tasks.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_task(
        &self,
        _user_id: Uuid,
        task_id: Uuid,
        update: TaskUpdate,
    ) -> PromessaResult<WeddingTask> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks.iter_mut().find(|t| t.id == task_id).unwrap();
        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(completed) = update.completed {
            task.completed = completed;
        }
        if let Some(timeline) = update.timeline {
            task.timeline = timeline;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, _user_id: Uuid, task_id: Uuid) -> PromessaResult<()> {
        self.tasks.lock().unwrap().retain(|t| t.id != task_id);
        Ok(())
    }

    async fn count_tasks_in_timeline(
        &self,
        user_id: Uuid,
        timeline: &str,
    ) -> PromessaResult<usize> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && t.timeline == timeline)
            .count())
    }
}

#[async_trait]
impl TimelineRepository for MemoryChecklist {
    async fn list_timelines(&self, user_id: Uuid) -> PromessaResult<Vec<Timeline>> {
        let mut timelines: Vec<Timeline> = self
            .timelines
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        timelines.sort_by_key(|t| t.position);
        Ok(timelines)
    }

    async fn create_timeline(
        &self,
        user_id: Uuid,
        name: &str,
        position: i32,
    ) -> PromessaResult<Timeline> {
        let created = Timeline {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            position,
        };
        self.timelines.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn rename_timeline(
        &self,
        _user_id: Uuid,
        timeline_id: Uuid,
        name: &str,
    ) -> PromessaResult<()> {
        let mut timelines = self.timelines.lock().unwrap();
        let timeline = timelines.iter_mut().find(|t| t.id == timeline_id).unwrap();
        timeline.name = name.to_string();
        Ok(())
    }

    async fn set_position(
        &self,
        _user_id: Uuid,
        timeline_id: Uuid,
        position: i32,
    ) -> PromessaResult<()> {
        let mut timelines = self.timelines.lock().unwrap();
        let timeline = timelines.iter_mut().find(|t| t.id == timeline_id).unwrap();
        timeline.position = position;
        Ok(())
    }

    async fn delete_timeline(&self, _user_id: Uuid, timeline_id: Uuid) -> PromessaResult<()> {
        self.timelines.lock().unwrap().retain(|t| t.id != timeline_id);
        Ok(())
    }
}

#[derive(Default)]
struct MemoryBudget {
    items: Mutex<Vec<BudgetItem>>,
    settings: Mutex<Option<BudgetSettings>>,
}

#[async_trait]
impl BudgetRepository for MemoryBudget {
    async fn list_items(&self, user_id: Uuid) -> PromessaResult<Vec<BudgetItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_item(&self, user_id: Uuid, item: NewBudgetItem) -> PromessaResult<BudgetItem> {
        let created = BudgetItem {
            id: Uuid::new_v4(),
            user_id,
            category: item.category,
            description: item.description,
            estimated: item.estimated,
            actual: item.actual,
            paid: item.paid,
        };
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_item(
        &self,
        _user_id: Uuid,
        item_id: Uuid,
        update: BudgetItemUpdate,
    ) -> PromessaResult<BudgetItem> {
        let mut items = self.items.lock().unwrap();
        let item = items.iter_mut().find(|i| i.id == item_id).unwrap();
        if let Some(actual) = update.actual {
            item.actual = Some(actual);
        }
        if let Some(paid) = update.paid {
            item.paid = paid;
        }
        Ok(item.clone())
    }

    async fn delete_item(&self, _user_id: Uuid, item_id: Uuid) -> PromessaResult<()> {
        self.items.lock().unwrap().retain(|i| i.id != item_id);
        Ok(())
    }

    async fn get_settings(&self, _user_id: Uuid) -> PromessaResult<Option<BudgetSettings>> {
        Ok(*self.settings.lock().unwrap())
    }

    async fn upsert_settings(&self, settings: BudgetSettings) -> PromessaResult<BudgetSettings> {
        *self.settings.lock().unwrap() = Some(settings);
        Ok(settings)
    }
}

fn planner_kind(err: &promessa_error::PromessaError) -> &PlannerErrorKind {
    match err.kind() {
        PromessaErrorKind::Planner(e) => &e.kind,
        other => panic!("expected a planner error, got {other}"),
    }
}

fn checklist() -> (ChecklistService, Uuid) {
    let store = Arc::new(MemoryChecklist::default());
    let user_id = Uuid::new_v4();
    let service = ChecklistService::new(user_id, store.clone(), store);
    (service, user_id)
}

fn new_task(timeline: &str, due: NaiveDate) -> NewTask {
    NewTask {
        title: "Book venue".to_string(),
        description: String::new(),
        notes: None,
        due_date: due,
        category: "venue".to_string(),
        timeline: timeline.to_string(),
    }
}

fn due(month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, month, 1).unwrap()
}

#[tokio::test]
async fn tasks_require_an_existing_timeline() {
    let (service, _) = checklist();
    let err = service
        .create_task(new_task("Twelve months before", due(6)))
        .await
        .unwrap_err();
    assert!(matches!(
        planner_kind(&err),
        PlannerErrorKind::TimelineNotFound(_)
    ));

    service
        .create_timeline(NewTimeline {
            name: "Twelve months before".to_string(),
        })
        .await
        .unwrap();
    let task = service
        .create_task(new_task("Twelve months before", due(6)))
        .await
        .unwrap();
    assert!(!task.completed);
}

#[tokio::test]
async fn toggling_flips_completion_and_feeds_progress() {
    let (service, _) = checklist();
    service
        .create_timeline(NewTimeline {
            name: "Six months before".to_string(),
        })
        .await
        .unwrap();
    let a = service
        .create_task(new_task("Six months before", due(3)))
        .await
        .unwrap();
    service
        .create_task(new_task("Six months before", due(4)))
        .await
        .unwrap();

    let toggled = service.toggle_complete(a.id).await.unwrap();
    assert!(toggled.completed);
    let progress = service.progress().await.unwrap();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.percent, 50.0);

    let toggled = service.toggle_complete(a.id).await.unwrap();
    assert!(!toggled.completed);

    let ghost = Uuid::new_v4();
    let err = service.toggle_complete(ghost).await.unwrap_err();
    assert_eq!(planner_kind(&err), &PlannerErrorKind::TaskNotFound(ghost));
}

#[tokio::test]
async fn timeline_names_are_unique_per_user() {
    let (service, _) = checklist();
    service
        .create_timeline(NewTimeline {
            name: "Six months before".to_string(),
        })
        .await
        .unwrap();
    let err = service
        .create_timeline(NewTimeline {
            name: "Six months before".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        planner_kind(&err),
        PlannerErrorKind::DuplicateTimeline(_)
    ));

    let err = service
        .create_timeline(NewTimeline {
            name: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(planner_kind(&err), PlannerErrorKind::EmptyName(_)));
}

#[tokio::test]
async fn reordering_swaps_neighbors_and_stops_at_the_edges() {
    let (service, _) = checklist();
    let mut ids = Vec::new();
    for name in ["Twelve months", "Six months", "One month"] {
        ids.push(
            service
                .create_timeline(NewTimeline {
                    name: name.to_string(),
                })
                .await
                .unwrap()
                .id,
        );
    }

    let order = service.move_up(ids[2]).await.unwrap();
    let names: Vec<&str> = order.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Twelve months", "One month", "Six months"]);
    assert_eq!(
        order.iter().map(|t| t.position).collect::<Vec<_>>(),
        [0, 1, 2]
    );

    // Already first and last: both are no-ops.
    let order = service.move_up(ids[0]).await.unwrap();
    assert_eq!(order[0].id, ids[0]);
    let order = service.move_down(ids[1]).await.unwrap();
    assert_eq!(order.last().unwrap().id, ids[1]);
}

#[tokio::test]
async fn referenced_timelines_cannot_be_deleted() {
    let (service, _) = checklist();
    let keep = service
        .create_timeline(NewTimeline {
            name: "Six months before".to_string(),
        })
        .await
        .unwrap();
    service
        .create_task(new_task("Six months before", due(3)))
        .await
        .unwrap();
    service
        .create_task(new_task("Six months before", due(4)))
        .await
        .unwrap();

    let err = service.delete_timeline(keep.id).await.unwrap_err();
    assert_eq!(
        planner_kind(&err),
        &PlannerErrorKind::TimelineInUse {
            name: "Six months before".to_string(),
            task_count: 2,
        }
    );
    assert_eq!(service.timelines().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_timeline_renumbers_the_rest() {
    let (service, _) = checklist();
    let mut ids = Vec::new();
    for name in ["Twelve months", "Six months", "One month"] {
        ids.push(
            service
                .create_timeline(NewTimeline {
                    name: name.to_string(),
                })
                .await
                .unwrap()
                .id,
        );
    }

    let remaining = service.delete_timeline(ids[1]).await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert_eq!(
        remaining.iter().map(|t| t.position).collect::<Vec<_>>(),
        [0, 1]
    );
    assert_eq!(remaining[1].id, ids[2]);
}

#[tokio::test]
async fn renaming_a_timeline_carries_its_tasks() {
    let (service, _) = checklist();
    let timeline = service
        .create_timeline(NewTimeline {
            name: "Six months before".to_string(),
        })
        .await
        .unwrap();
    let task = service
        .create_task(new_task("Six months before", due(3)))
        .await
        .unwrap();

    let renamed = service
        .rename_timeline(timeline.id, "Sei mesi prima")
        .await
        .unwrap();
    assert_eq!(renamed.name, "Sei mesi prima");
    let tasks = service.tasks().await.unwrap();
    assert_eq!(tasks[0].id, task.id);
    assert_eq!(tasks[0].timeline, "Sei mesi prima");
}

#[tokio::test]
async fn budget_rejects_negative_costs_and_summarizes() {
    let budget = BudgetService::new(Uuid::new_v4(), Arc::new(MemoryBudget::default()));

    let err = budget
        .create_item(NewBudgetItem {
            category: "catering".to_string(),
            description: None,
            estimated: -1.0,
            actual: None,
            paid: false,
        })
        .await
        .unwrap_err();
    assert_eq!(planner_kind(&err), &PlannerErrorKind::NegativeCost(-1.0));

    // No settings saved yet: the summary runs against a zero budget.
    let summary = budget.summary().await.unwrap();
    assert_eq!(summary.total_budget, 0.0);

    budget.set_total_budget(20_000.0).await.unwrap();
    let item = budget
        .create_item(NewBudgetItem {
            category: "catering".to_string(),
            description: None,
            estimated: 5_000.0,
            actual: None,
            paid: false,
        })
        .await
        .unwrap();
    budget
        .update_item(
            item.id,
            BudgetItemUpdate {
                actual: Some(5_500.0),
                paid: Some(true),
                ..BudgetItemUpdate::default()
            },
        )
        .await
        .unwrap();

    let summary = budget.summary().await.unwrap();
    assert_eq!(summary.total_estimated, 5_000.0);
    assert_eq!(summary.total_actual, 5_500.0);
    assert_eq!(summary.total_paid, 5_500.0);
    assert_eq!(summary.remaining, 14_500.0);

    let err = budget.set_total_budget(-5.0).await.unwrap_err();
    assert_eq!(planner_kind(&err), &PlannerErrorKind::NegativeCost(-5.0));
}
