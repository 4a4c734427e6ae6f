//! 实习仓库
//!
//! 负责实习相关的数据库操作

use crate::models::internship::{Internship, InternshipCreate, DEFAULT_RECORDED_STATUS};
use crate::repositories::traits::InternshipRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

/// 查询实习时统一返回的字段
const INTERNSHIP_COLUMNS: &str = "id, roll_number, organization_name, role, hr_name, hr_email, hr_phone, \
     starting_date, ending_date, duration_months, stipend, offer_letter, approval_letter, noc, status";

/// 实习仓库结构体
#[derive(Debug, Clone)]
pub struct InternshipRepository {
    pool: PgPool,
}

impl InternshipRepository {
    /// 创建新的实习仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl InternshipRepositoryTrait for InternshipRepository {
    async fn list_internships(&self) -> DatabaseResult<Vec<Internship>> {
        debug!("🔍 获取全部实习记录");

        let sql = format!("SELECT {INTERNSHIP_COLUMNS} FROM portal.internships ORDER BY id");
        let internships = sqlx::query_as::<_, Internship>(&sql).fetch_all(&self.pool).await?;

        debug!("✅ 获取到 {} 条实习记录", internships.len());
        Ok(internships)
    }

    async fn list_internships_by_roll(&self, roll_number: &str) -> DatabaseResult<Vec<Internship>> {
        debug!("🔍 获取学号 {} 的实习记录", roll_number);

        let sql = format!("SELECT {INTERNSHIP_COLUMNS} FROM portal.internships WHERE roll_number = $1 ORDER BY id");
        let internships = sqlx::query_as::<_, Internship>(&sql)
            .bind(roll_number)
            .fetch_all(&self.pool)
            .await?;

        Ok(internships)
    }

    /// 创建实习记录
    ///
    /// 审核状态固定写入 [`DEFAULT_RECORDED_STATUS`]
    async fn create_internship(&self, internship: InternshipCreate) -> DatabaseResult<Internship> {
        debug!("📝 创建实习记录: {:#?}", internship);

        let sql = format!(
            r#"
            INSERT INTO portal.internships (roll_number, organization_name, role, hr_name, hr_email, hr_phone,
                                            starting_date, ending_date, duration_months, stipend,
                                            offer_letter, approval_letter, noc, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {INTERNSHIP_COLUMNS}
            "#
        );
        let created = sqlx::query_as::<_, Internship>(&sql)
            .bind(internship.roll_number)
            .bind(internship.organization_name)
            .bind(internship.role)
            .bind(internship.hr_name)
            .bind(internship.hr_email)
            .bind(internship.hr_phone)
            .bind(internship.starting_date)
            .bind(internship.ending_date)
            .bind(internship.duration_months)
            .bind(internship.stipend)
            .bind(internship.offer_letter)
            .bind(internship.approval_letter)
            .bind(internship.noc)
            .bind(DEFAULT_RECORDED_STATUS)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 实习记录创建成功: id={}", created.id);
        Ok(created)
    }

    async fn update_recorded_status(&self, id: i32, status: String) -> DatabaseResult<Internship> {
        debug!("🔄 更新实习 {} 的审核状态为 {}", id, status);

        let sql = format!("UPDATE portal.internships SET status = $2 WHERE id = $1 RETURNING {INTERNSHIP_COLUMNS}");
        sqlx::query_as::<_, Internship>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("internship {id}")))
    }

    async fn delete_internship(&self, id: i32) -> DatabaseResult<Internship> {
        debug!("🗑️ 删除实习记录: {}", id);

        let sql = format!("DELETE FROM portal.internships WHERE id = $1 RETURNING {INTERNSHIP_COLUMNS}");
        sqlx::query_as::<_, Internship>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("internship {id}")))
    }
}
