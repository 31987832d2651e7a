//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /financial            -> financial (?start=&end=)
/// GET /sales                -> sales (?start=&end=)
/// GET /event-profitability  -> event_profitability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/financial", get(report::financial))
        .route("/sales", get(report::sales))
        .route("/event-profitability", get(report::event_profitability))
}
