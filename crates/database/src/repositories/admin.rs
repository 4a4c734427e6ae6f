//! 管理员仓库

use crate::models::admin::{Admin, AdminCreate};
use crate::repositories::traits::AdminRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AdminRepositoryTrait for AdminRepository {
    async fn get_admin(&self, admin_id: &str) -> DatabaseResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT admin_id, name, password_hash FROM portal.admins WHERE admin_id = $1",
        )
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    async fn create_admin_if_absent(&self, admin: AdminCreate) -> DatabaseResult<bool> {
        debug!("👤 初始化管理员账号: {}", admin.admin_id);

        let result = sqlx::query(
            r#"
            INSERT INTO portal.admins (admin_id, name, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (admin_id) DO NOTHING
            "#,
        )
        .bind(admin.admin_id)
        .bind(admin.name)
        .bind(admin.password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
