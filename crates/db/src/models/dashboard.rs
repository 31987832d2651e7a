//! Read-only aggregate DTOs for the dashboard and report endpoints.

use festa_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::transaction::Transaction;

/// Headline KPIs for the dashboard period.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Confirmed + realized events starting in the period.
    pub events_in_period: i64,
    /// Sum of completed revenue transactions in the period.
    pub revenue: f64,
    /// Sum of completed expense transactions in the period.
    pub expenses: f64,
    pub new_clients: i64,
    /// `approved / (approved + rejected) * 100` over budgets created in the
    /// period, rounded to one decimal.
    pub conversion_rate: f64,
    pub pending_budgets: i64,
    pub overdue_tasks: i64,
    pub overdue_receivables: i64,
    pub events_by_status: Vec<StatusCount>,
    pub recent_activity: Vec<ActivityEntry>,
}

/// A count bucket keyed by status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// One narrated line of the recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub message: String,
    pub user_name: Option<String>,
    pub created_at: Timestamp,
}

/// One funnel stage: budgets in the stage and their combined value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FunnelStage {
    pub status: String,
    pub count: i64,
    pub total_value: f64,
}

/// Aggregates for the financial report.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub expenses_by_category: Vec<CategoryAmount>,
    pub recent_transactions: Vec<Transaction>,
}

/// An amount bucket keyed by category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// Aggregates for the sales report.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    pub total_budgets: i64,
    pub approved: i64,
    pub rejected: i64,
    pub conversion_rate: f64,
    pub approved_value: f64,
    pub average_ticket: f64,
}

/// Per-event profitability line, sorted by profit descending.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventProfitability {
    pub event_id: DbId,
    pub title: String,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub margin: f64,
}
