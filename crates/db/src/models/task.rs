//! Task board models and DTOs.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub assigned_to_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A checklist entry belonging to a task.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubTask {
    pub id: DbId,
    pub task_id: DbId,
    pub text: String,
    pub is_done: bool,
}

/// A task with its sub-tasks attached.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithSubTasks {
    #[serde(flatten)]
    pub task: Task,
    pub sub_tasks: Vec<SubTask>,
}

/// Sub-task payload used on create and on the wholesale replace.
#[derive(Debug, Clone, Deserialize)]
pub struct SubTaskInput {
    pub text: String,
    #[serde(default)]
    pub is_done: bool,
}

/// DTO for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub assigned_to_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub tags: Option<Vec<String>>,
    pub sub_tasks: Option<Vec<SubTaskInput>>,
}

/// DTO for updating a task. A present `sub_tasks` replaces the checklist
/// wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub assigned_to_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub tags: Option<Vec<String>>,
    pub sub_tasks: Option<Vec<SubTaskInput>>,
}

/// Filters accepted by the task listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub assigned_to_id: Option<DbId>,
    /// When true, only tasks past due and not in a terminal status.
    pub overdue: Option<bool>,
}
