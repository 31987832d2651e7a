//! Route definitions for the dashboard summary and sales funnel.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes merged at the API root.
///
/// ```text
/// GET /dashboard   -> summary (?period=week|month|quarter|year)
/// GET /funnel      -> funnel (?period= or ?start=&end=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::summary))
        .route("/funnel", get(dashboard::funnel))
}
