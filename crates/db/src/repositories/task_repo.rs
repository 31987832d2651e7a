//! Repository for the `tasks` and `sub_tasks` tables.

use festa_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::task::{
    CreateTask, SubTask, SubTaskInput, Task, TaskFilter, TaskWithSubTasks, UpdateTask,
};

const COLUMNS: &str = "id, title, description, status, priority, due_date, assigned_to_id, \
                       client_id, event_id, tags, created_at, updated_at";

const SUB_TASK_COLUMNS: &str = "id, task_id, text, is_done";

/// Provides CRUD operations for the task board.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task and its sub-tasks in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<TaskWithSubTasks, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO tasks (title, description, status, priority, due_date, assigned_to_id,
                                client_id, event_id, tags)
             VALUES ($1, $2, COALESCE($3, 'open'), $4, $5, $6, $7, $8, COALESCE($9, '{{}}'))
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.due_date)
            .bind(input.assigned_to_id)
            .bind(input.client_id)
            .bind(input.event_id)
            .bind(&input.tags)
            .fetch_one(&mut *tx)
            .await?;
        if let Some(sub_tasks) = &input.sub_tasks {
            Self::insert_sub_tasks(&mut tx, task.id, sub_tasks).await?;
        }
        let sub_tasks = Self::sub_tasks_in_tx(&mut tx, task.id).await?;
        tx.commit().await?;
        Ok(TaskWithSubTasks { task, sub_tasks })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskWithSubTasks>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let Some(task) = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let sub_tasks = Self::sub_tasks_for(pool, id).await?;
        Ok(Some(TaskWithSubTasks { task, sub_tasks }))
    }

    /// List tasks, optionally filtered by status, assignee, and overdue
    /// state. Overdue means due before now and not in a terminal status.
    pub async fn list(pool: &PgPool, filter: &TaskFilter) -> Result<Vec<TaskWithSubTasks>, sqlx::Error> {
        let overdue_clause = if filter.overdue == Some(true) {
            format!(
                "AND due_date < NOW() AND status NOT IN ('{}', '{}')",
                festa_core::status::TASK_DONE,
                festa_core::status::TASK_CANCELLED
            )
        } else {
            String::new()
        };
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::BIGINT IS NULL OR assigned_to_id = $2)
               {overdue_clause}
             ORDER BY due_date NULLS LAST, created_at DESC"
        );
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(&filter.status)
            .bind(filter.assigned_to_id)
            .fetch_all(pool)
            .await?;
        let mut result = Vec::with_capacity(tasks.len());
        for task in tasks {
            let sub_tasks = Self::sub_tasks_for(pool, task.id).await?;
            result.push(TaskWithSubTasks { task, sub_tasks });
        }
        Ok(result)
    }

    /// Update a task. A present `sub_tasks` replaces the checklist
    /// wholesale, inside the same transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<TaskWithSubTasks>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                due_date = COALESCE($6, due_date),
                assigned_to_id = COALESCE($7, assigned_to_id),
                client_id = COALESCE($8, client_id),
                event_id = COALESCE($9, event_id),
                tags = COALESCE($10, tags),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(task) = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.due_date)
            .bind(input.assigned_to_id)
            .bind(input.client_id)
            .bind(input.event_id)
            .bind(&input.tags)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        if let Some(sub_tasks) = &input.sub_tasks {
            sqlx::query("DELETE FROM sub_tasks WHERE task_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_sub_tasks(&mut tx, id, sub_tasks).await?;
        }
        let sub_tasks = Self::sub_tasks_in_tx(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(TaskWithSubTasks { task, sub_tasks }))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn sub_tasks_for(pool: &PgPool, task_id: DbId) -> Result<Vec<SubTask>, sqlx::Error> {
        let query = format!("SELECT {SUB_TASK_COLUMNS} FROM sub_tasks WHERE task_id = $1 ORDER BY id");
        sqlx::query_as::<_, SubTask>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    async fn sub_tasks_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        task_id: DbId,
    ) -> Result<Vec<SubTask>, sqlx::Error> {
        let query = format!("SELECT {SUB_TASK_COLUMNS} FROM sub_tasks WHERE task_id = $1 ORDER BY id");
        sqlx::query_as::<_, SubTask>(&query)
            .bind(task_id)
            .fetch_all(&mut **tx)
            .await
    }

    async fn insert_sub_tasks(
        tx: &mut Transaction<'_, Postgres>,
        task_id: DbId,
        sub_tasks: &[SubTaskInput],
    ) -> Result<(), sqlx::Error> {
        for sub_task in sub_tasks {
            sqlx::query("INSERT INTO sub_tasks (task_id, text, is_done) VALUES ($1, $2, $3)")
                .bind(task_id)
                .bind(&sub_task.text)
                .bind(sub_task.is_done)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}
