//! Handlers for the dashboard summary and sales funnel views.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use festa_core::period::{start_of_today, Period, PeriodRange};
use festa_core::types::Timestamp;
use festa_db::models::dashboard::{DashboardSummary, FunnelStage};
use festa_db::repositories::DashboardRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub period: Option<Period>,
}

/// Query parameters for `GET /funnel`. Explicit bounds win over the named
/// period.
#[derive(Debug, Default, Deserialize)]
pub struct FunnelQuery {
    pub period: Option<Period>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// GET /api/v1/dashboard?period=week|month|quarter|year
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardSummary>> {
    let now = Utc::now();
    let range = query.period.unwrap_or_default().range(now);
    let summary = DashboardRepo::summary(&state.pool, &range, start_of_today(now)).await?;
    Ok(Json(summary))
}

/// GET /api/v1/funnel?period=&start=&end=
pub async fn funnel(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<FunnelQuery>,
) -> AppResult<Json<Vec<FunnelStage>>> {
    let range = match (query.start, query.end) {
        (Some(start), Some(end)) => PeriodRange { start, end },
        _ => query.period.unwrap_or_default().range(Utc::now()),
    };
    let stages = DashboardRepo::funnel(&state.pool, &range).await?;
    Ok(Json(stages))
}
