//! Handlers for the `/reports` resources (read-only aggregates).

use axum::extract::{Query, State};
use axum::Json;
use festa_core::types::Timestamp;
use festa_db::models::dashboard::{EventProfitability, FinancialReport, SalesReport};
use festa_db::repositories::ReportRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Optional half-open date range accepted by the financial and sales
/// reports.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// GET /api/v1/reports/financial?start=&end=
pub async fn financial(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<FinancialReport>> {
    let report = ReportRepo::financial(&state.pool, query.start, query.end).await?;
    Ok(Json(report))
}

/// GET /api/v1/reports/sales?start=&end=
pub async fn sales(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<SalesReport>> {
    let report = ReportRepo::sales(&state.pool, query.start, query.end).await?;
    Ok(Json(report))
}

/// GET /api/v1/reports/event-profitability
pub async fn event_profitability(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<EventProfitability>>> {
    let report = ReportRepo::event_profitability(&state.pool).await?;
    Ok(Json(report))
}
