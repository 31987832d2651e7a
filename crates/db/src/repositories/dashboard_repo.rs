//! Read-only aggregate queries behind the dashboard endpoints.

use festa_core::actions::narrate;
use festa_core::period::PeriodRange;
use festa_core::stats::conversion_rate;
use festa_core::status::{
    BUDGET_APPROVED, BUDGET_REJECTED, EVENT_ACTIVE, FUNNEL_PENDING, TASK_TERMINAL,
    TRANSACTION_COMPLETED, TRANSACTION_EXPENSE, TRANSACTION_REVENUE, TRANSACTION_TERMINAL,
};
use festa_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::dashboard::{ActivityEntry, DashboardSummary, FunnelStage, StatusCount};
use crate::repositories::audit_log_repo::AuditLogRepo;

/// Number of audit entries shown in the activity feed.
const ACTIVITY_LIMIT: i64 = 10;

/// Provides the dashboard KPI and funnel queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Assemble the dashboard summary for a period.
    ///
    /// `today_start` bounds the overdue-task check so a task due earlier
    /// today does not count as overdue yet.
    pub async fn summary(
        pool: &PgPool,
        range: &PeriodRange,
        today_start: Timestamp,
    ) -> Result<DashboardSummary, sqlx::Error> {
        let (events_in_period,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM events
             WHERE start_at >= $1 AND start_at < $2 AND status = ANY($3)",
        )
        .bind(range.start)
        .bind(range.end)
        .bind(&EVENT_ACTIVE[..])
        .fetch_one(pool)
        .await?;

        let (revenue, expenses): (f64, f64) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount) FILTER (WHERE kind = $3), 0),
                    COALESCE(SUM(amount) FILTER (WHERE kind = $4), 0)
             FROM transactions
             WHERE status = $5 AND occurred_at >= $1 AND occurred_at < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .bind(TRANSACTION_REVENUE)
        .bind(TRANSACTION_EXPENSE)
        .bind(TRANSACTION_COMPLETED)
        .fetch_one(pool)
        .await?;

        let (new_clients,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM clients WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(pool)
        .await?;

        let (approved, rejected): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE status = $3),
                    COUNT(*) FILTER (WHERE status = $4)
             FROM budgets
             WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .bind(BUDGET_APPROVED)
        .bind(BUDGET_REJECTED)
        .fetch_one(pool)
        .await?;

        let (pending_budgets,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM budgets WHERE status = ANY($1)")
                .bind(&FUNNEL_PENDING[..])
                .fetch_one(pool)
                .await?;

        let (overdue_tasks,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM tasks
             WHERE due_date < $1 AND status <> ALL($2)",
        )
        .bind(today_start)
        .bind(&TASK_TERMINAL[..])
        .fetch_one(pool)
        .await?;

        let (overdue_receivables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM transactions
             WHERE kind = $2 AND due_date < $1 AND status <> ALL($3)",
        )
        .bind(today_start)
        .bind(TRANSACTION_REVENUE)
        .bind(&TRANSACTION_TERMINAL[..])
        .fetch_one(pool)
        .await?;

        let events_by_status = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM events
             WHERE start_at >= $1 AND start_at < $2
             GROUP BY status ORDER BY status",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(pool)
        .await?;

        let recent = AuditLogRepo::recent(pool, ACTIVITY_LIMIT).await?;
        let recent_activity = recent
            .into_iter()
            .map(|log| ActivityEntry {
                message: narrate(&log.action, &log.entity_type, &log.entity_id),
                user_name: log.user_name,
                created_at: log.created_at,
            })
            .collect();

        Ok(DashboardSummary {
            events_in_period,
            revenue,
            expenses,
            new_clients,
            conversion_rate: conversion_rate(approved, rejected),
            pending_budgets,
            overdue_tasks,
            overdue_receivables,
            events_by_status,
            recent_activity,
        })
    }

    /// Budgets in funnel statuses created in the range, grouped by status.
    pub async fn funnel(pool: &PgPool, range: &PeriodRange) -> Result<Vec<FunnelStage>, sqlx::Error> {
        sqlx::query_as::<_, FunnelStage>(
            "SELECT status, COUNT(*) AS count, COALESCE(SUM(total_value), 0) AS total_value
             FROM budgets
             WHERE created_at >= $1 AND created_at < $2
             GROUP BY status ORDER BY status",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(pool)
        .await
    }
}
