//! Handler for the `/audit` listing (admin).

use axum::extract::{Query, State};
use axum::Json;
use festa_db::models::audit::{AuditLog, AuditQuery};
use festa_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::PageResponse;
use crate::state::AppState;

const DEFAULT_PER_PAGE: i64 = 20;

/// GET /api/v1/audit?page=&per_page= (admin)
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Query(query): Query<AuditQuery>,
) -> AppResult<Json<PageResponse<AuditLog>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, 100);
    let result = AuditLogRepo::list(&state.pool, page, per_page).await?;
    Ok(Json(PageResponse::new(
        result.items,
        result.total,
        page,
        per_page,
    )))
}
