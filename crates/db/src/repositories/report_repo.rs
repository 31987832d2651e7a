//! Read-only aggregate queries behind the report endpoints.

use festa_core::stats::{conversion_rate, margin};
use festa_core::status::{
    BUDGET_APPROVED, BUDGET_REJECTED, TRANSACTION_COMPLETED, TRANSACTION_EXPENSE,
    TRANSACTION_REVENUE,
};
use festa_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::dashboard::{CategoryAmount, EventProfitability, FinancialReport, SalesReport};
use crate::models::transaction::TransactionFilter;
use crate::repositories::transaction_repo::TransactionRepo;

/// Number of transactions shown in the financial report.
const RECENT_LIMIT: usize = 10;

/// Provides the financial, sales, and profitability reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Revenue/expense/profit sums over completed transactions in the
    /// range, expenses grouped by category, and the most recent
    /// transactions.
    pub async fn financial(
        pool: &PgPool,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<FinancialReport, sqlx::Error> {
        let (revenue, expenses): (f64, f64) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount) FILTER (WHERE kind = $3), 0),
                    COALESCE(SUM(amount) FILTER (WHERE kind = $4), 0)
             FROM transactions
             WHERE status = $5
               AND ($1::TIMESTAMPTZ IS NULL OR occurred_at >= $1)
               AND ($2::TIMESTAMPTZ IS NULL OR occurred_at < $2)",
        )
        .bind(start)
        .bind(end)
        .bind(TRANSACTION_REVENUE)
        .bind(TRANSACTION_EXPENSE)
        .bind(TRANSACTION_COMPLETED)
        .fetch_one(pool)
        .await?;

        let expenses_by_category = sqlx::query_as::<_, CategoryAmount>(
            "SELECT COALESCE(category, 'uncategorized') AS category,
                    COALESCE(SUM(amount), 0) AS amount
             FROM transactions
             WHERE kind = $3 AND status = $4
               AND ($1::TIMESTAMPTZ IS NULL OR occurred_at >= $1)
               AND ($2::TIMESTAMPTZ IS NULL OR occurred_at < $2)
             GROUP BY COALESCE(category, 'uncategorized')
             ORDER BY amount DESC",
        )
        .bind(start)
        .bind(end)
        .bind(TRANSACTION_EXPENSE)
        .bind(TRANSACTION_COMPLETED)
        .fetch_all(pool)
        .await?;

        let mut recent_transactions = TransactionRepo::list(
            pool,
            &TransactionFilter {
                start,
                end,
                ..TransactionFilter::default()
            },
        )
        .await?;
        recent_transactions.truncate(RECENT_LIMIT);

        Ok(FinancialReport {
            revenue,
            expenses,
            profit: revenue - expenses,
            expenses_by_category,
            recent_transactions,
        })
    }

    /// Budget totals, approval counts, conversion rate, and average ticket
    /// over budgets created in the range.
    pub async fn sales(
        pool: &PgPool,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<SalesReport, sqlx::Error> {
        let (total_budgets, approved, rejected, approved_value): (i64, i64, i64, f64) =
            sqlx::query_as(
                "SELECT COUNT(*),
                        COUNT(*) FILTER (WHERE status = $3),
                        COUNT(*) FILTER (WHERE status = $4),
                        COALESCE(SUM(total_value) FILTER (WHERE status = $3), 0)
                 FROM budgets
                 WHERE ($1::TIMESTAMPTZ IS NULL OR created_at >= $1)
                   AND ($2::TIMESTAMPTZ IS NULL OR created_at < $2)",
            )
            .bind(start)
            .bind(end)
            .bind(BUDGET_APPROVED)
            .bind(BUDGET_REJECTED)
            .fetch_one(pool)
            .await?;

        let average_ticket = if approved > 0 {
            approved_value / approved as f64
        } else {
            0.0
        };

        Ok(SalesReport {
            total_budgets,
            approved,
            rejected,
            conversion_rate: conversion_rate(approved, rejected),
            approved_value,
            average_ticket,
        })
    }

    /// Per-event revenue, costs, profit, and margin, sorted by profit
    /// descending. Events without any transaction are left out.
    pub async fn event_profitability(pool: &PgPool) -> Result<Vec<EventProfitability>, sqlx::Error> {
        let rows: Vec<(i64, String, f64, f64)> = sqlx::query_as(
            "SELECT e.id, e.title,
                    COALESCE(SUM(t.amount) FILTER (WHERE t.kind = $1), 0) AS revenue,
                    COALESCE(SUM(t.amount) FILTER (WHERE t.kind = $2), 0) AS costs
             FROM events e
             JOIN transactions t ON t.event_id = e.id
             WHERE t.status = $3
             GROUP BY e.id, e.title
             ORDER BY revenue - costs DESC",
        )
        .bind(TRANSACTION_REVENUE)
        .bind(TRANSACTION_EXPENSE)
        .bind(TRANSACTION_COMPLETED)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(event_id, title, revenue, costs)| {
                let profit = revenue - costs;
                EventProfitability {
                    event_id,
                    title,
                    revenue,
                    costs,
                    profit,
                    margin: margin(revenue, profit),
                }
            })
            .collect())
    }
}
