//! Handlers for the team calendar: the event schedule and the upcoming
//! reservation totals.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use festa_core::period::start_of_today;
use festa_db::models::event::{CalendarEvent, ItemReservation};
use festa_db::repositories::CalendarRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/calendar
pub async fn events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let entries = CalendarRepo::events(&state.pool).await?;
    Ok(Json(entries))
}

/// GET /api/v1/calendar/reservations
///
/// Reserved inventory quantities per item across events starting today or
/// later, for availability checks in the planning views.
pub async fn reservations(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<ItemReservation>>> {
    let totals = CalendarRepo::future_reservations(&state.pool, start_of_today(Utc::now())).await?;
    Ok(Json(totals))
}
