//! 实习单位仓库

use crate::models::organization::Organization;
use crate::repositories::traits::OrganizationRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl OrganizationRepositoryTrait for OrganizationRepository {
    async fn list_organizations(&self) -> DatabaseResult<Vec<Organization>> {
        let organizations =
            sqlx::query_as::<_, Organization>("SELECT id, name FROM portal.organizations ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(organizations)
    }

    async fn create_organization(&self, name: String) -> DatabaseResult<Organization> {
        debug!("📝 创建实习单位: {}", name);

        let what = format!("organization {name}");
        let organization = sqlx::query_as::<_, Organization>(
            "INSERT INTO portal.organizations (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, what))?;

        Ok(organization)
    }

    async fn delete_organization(&self, id: i32) -> DatabaseResult<Organization> {
        debug!("🗑️ 删除实习单位: {}", id);

        sqlx::query_as::<_, Organization>("DELETE FROM portal.organizations WHERE id = $1 RETURNING id, name")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("organization {id}")))
    }
}
