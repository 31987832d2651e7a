//! Audit trail recording for handlers.
//!
//! Audit writes are best-effort: a failure to record an entry is logged and
//! swallowed so it never turns a successful mutation into an error response.

use festa_core::types::DbId;
use festa_db::models::audit::CreateAuditLog;
use festa_db::repositories::AuditLogRepo;
use festa_db::DbPool;

/// Record an audit log entry, swallowing any database failure.
pub async fn record(
    pool: &DbPool,
    action: &str,
    entity_type: &str,
    entity_id: impl ToString,
    user_id: Option<DbId>,
    details: Option<serde_json::Value>,
) {
    let entry = CreateAuditLog {
        action: action.to_string(),
        entity_type: entity_type.to_string(),
        entity_id: entity_id.to_string(),
        user_id,
        details,
    };
    if let Err(err) = AuditLogRepo::insert(pool, &entry).await {
        tracing::warn!(error = %err, action, entity_type, "Failed to record audit log entry");
    }
}
