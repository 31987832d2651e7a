//! Role and permission models.

use festa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A role together with the names of its assigned permissions.
#[derive(Debug, Clone, Serialize)]
pub struct RoleWithPermissions {
    #[serde(flatten)]
    pub role: Role,
    pub permissions: Vec<Permission>,
}

/// A permission row from the `permissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Permission {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRole {
    pub name: String,
    /// Permission ids to assign. Defaults to none.
    pub permission_ids: Option<Vec<DbId>>,
}

/// DTO for updating a role. A present `permission_ids` replaces the
/// assignment set wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRole {
    pub name: Option<String>,
    pub permission_ids: Option<Vec<DbId>>,
}
