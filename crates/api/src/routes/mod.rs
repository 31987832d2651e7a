pub mod audit;
pub mod auth;
pub mod budgets;
pub mod calendar;
pub mod clients;
pub mod companies;
pub mod contracts;
pub mod dashboard;
pub mod document_templates;
pub mod events;
pub mod feedback;
pub mod health;
pub mod inventory;
pub mod layouts;
pub mod reports;
pub mod roles;
pub mod security;
pub mod services;
pub mod suppliers;
pub mod tasks;
pub mod transactions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/2fa/verify                     verify two-factor code (public)
/// /auth/register                       register user (admin only)
/// /auth/me                             current user
///
/// /security/password                   change own password (PUT)
/// /security/2fa/setup                  provision TOTP secret (POST)
/// /security/2fa/enable                 enable after code check (POST)
/// /security/2fa/disable                disable (POST)
/// /security/activity                   recent own audit entries (GET)
///
/// /users                               list, create (admin only)
/// /users/me                            get, update own profile
/// /users/{id}                          get, update, delete (admin only)
///
/// /roles                               list, create (admin only)
/// /roles/permissions                   permission catalogue (admin only)
/// /roles/{id}                          get, update, delete (admin only)
///
/// /clients                             list, create
/// /clients/{id}                        get, update, delete
///
/// /suppliers                           list, create
/// /suppliers/{id}                      get, update, delete
///
/// /inventory                           list, create
/// /inventory/slim                      slim listing for pickers
/// /inventory/categories                distinct categories
/// /inventory/{id}                      get, update, delete
/// /inventory/{id}/image                upload image (multipart POST)
/// /inventory/{id}/movements            list, record stock movement
///
/// /services                            list, create
/// /services/{id}                       get, update, delete
///
/// /document-templates                  list, create
/// /document-templates/{id}             get, update, delete
///
/// /layouts                             list, create
/// /layouts/{id}                        get, update
///
/// /companies                           list; create (admin only)
/// /companies/{id}                      get; update, delete (admin only)
///
/// /budgets                             list, create
/// /budgets/{id}                        get, update, delete
/// /budgets/{id}/status                 funnel transition (PATCH)
///
/// /contracts                           list, create with custom content
/// /contracts/from-budget               create from budget (POST)
/// /contracts/{id}                      get, delete (403 once signed)
/// /contracts/{id}/content              update content (PUT)
/// /contracts/{id}/status               transition; signing spawns event (PATCH)
///
/// /events                              list, create
/// /events/from-budget                  create directly from budget (POST)
/// /events/{id}                         get, update, delete
/// /events/{id}/finalize                finalize (PATCH)
/// /events/{id}/feedback                feedback for one event (GET)
///
/// /tasks                               list, create
/// /tasks/{id}                          get, update, delete
///
/// /transactions                        list, create
/// /transactions/categories             distinct categories
/// /transactions/{id}                   get, update, delete
/// /transactions/{id}/status            transition (PATCH)
///
/// /feedback                            list, create
/// /feedback/{id}                       get, update, delete
///
/// /calendar                            team calendar of events (GET)
/// /calendar/reservations               upcoming reservation totals (GET)
///
/// /dashboard                           summary KPIs (GET)
/// /funnel                              sales funnel stages (GET)
///
/// /reports/financial                   income vs expense (GET)
/// /reports/sales                       budgets vs contracts vs conversion (GET)
/// /reports/event-profitability         per-event margin (GET)
///
/// /audit                               paginated audit trail (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login, two-factor verification, registration).
        .nest("/auth", auth::router())
        // Own-account security: password change, TOTP lifecycle, activity.
        .nest("/security", security::router())
        // User administration.
        .nest("/users", users::router())
        // Role and permission administration.
        .nest("/roles", roles::router())
        // Core registries.
        .nest("/clients", clients::router())
        .nest("/suppliers", suppliers::router())
        .nest("/inventory", inventory::router())
        .nest("/services", services::router())
        .nest("/document-templates", document_templates::router())
        .nest("/layouts", layouts::router())
        .nest("/companies", companies::router())
        // Sales pipeline: budget -> contract -> event.
        .nest("/budgets", budgets::router())
        .nest("/contracts", contracts::router())
        .nest("/events", events::router())
        // Operations.
        .nest("/tasks", tasks::router())
        .nest("/transactions", transactions::router())
        .nest("/feedback", feedback::router())
        .nest("/calendar", calendar::router())
        // Aggregates (dashboard and funnel sit at the API root).
        .merge(dashboard::router())
        .nest("/reports", reports::router())
        // Audit trail.
        .nest("/audit", audit::router())
}
