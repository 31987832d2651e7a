//! Repository for the `roles`, `permissions`, and `role_permissions` tables.

use festa_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::{CreateRole, Permission, Role, RoleWithPermissions, UpdateRole};

const ROLE_COLUMNS: &str = "id, name, created_at";
const PERMISSION_COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for roles and their permission assignments.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a role and its permission assignments in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateRole) -> Result<RoleWithPermissions, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!("INSERT INTO roles (name) VALUES ($1) RETURNING {ROLE_COLUMNS}");
        let role = sqlx::query_as::<_, Role>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;
        if let Some(ids) = &input.permission_ids {
            Self::assign_permissions(&mut tx, role.id, ids).await?;
        }
        let permissions = Self::permissions_for(&mut tx, role.id).await?;
        tx.commit().await?;
        Ok(RoleWithPermissions { role, permissions })
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RoleWithPermissions>, sqlx::Error> {
        let query = format!("SELECT {ROLE_COLUMNS} FROM roles WHERE id = $1");
        let Some(role) = sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let query = format!(
            "SELECT p.id, p.name, p.description FROM permissions p
             JOIN role_permissions rp ON rp.permission_id = p.id
             WHERE rp.role_id = $1 ORDER BY p.name"
        );
        let permissions = sqlx::query_as::<_, Permission>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(Some(RoleWithPermissions { role, permissions }))
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {ROLE_COLUMNS} FROM roles WHERE name = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {ROLE_COLUMNS} FROM roles ORDER BY name");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Update a role. A present `permission_ids` replaces the assignment set
    /// wholesale, inside one transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRole,
    ) -> Result<Option<RoleWithPermissions>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE roles SET name = COALESCE($2, name) WHERE id = $1 RETURNING {ROLE_COLUMNS}"
        );
        let Some(role) = sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        if let Some(ids) = &input.permission_ids {
            sqlx::query("DELETE FROM role_permissions WHERE role_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::assign_permissions(&mut tx, id, ids).await?;
        }
        let permissions = Self::permissions_for(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(RoleWithPermissions { role, permissions }))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_permissions(pool: &PgPool) -> Result<Vec<Permission>, sqlx::Error> {
        let query = format!("SELECT {PERMISSION_COLUMNS} FROM permissions ORDER BY name");
        sqlx::query_as::<_, Permission>(&query)
            .fetch_all(pool)
            .await
    }

    async fn assign_permissions(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        role_id: DbId,
        permission_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        for permission_id in permission_ids {
            sqlx::query("INSERT INTO role_permissions (role_id, permission_id) VALUES ($1, $2)")
                .bind(role_id)
                .bind(permission_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    async fn permissions_for(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        role_id: DbId,
    ) -> Result<Vec<Permission>, sqlx::Error> {
        let query = format!(
            "SELECT p.id, p.name, p.description FROM permissions p
             JOIN role_permissions rp ON rp.permission_id = p.id
             WHERE rp.role_id = $1 ORDER BY p.name"
        );
        sqlx::query_as::<_, Permission>(&query)
            .bind(role_id)
            .fetch_all(&mut **tx)
            .await
    }
}
