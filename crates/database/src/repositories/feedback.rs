//! 反馈仓库

use crate::models::feedback::{Feedback, FeedbackCreate};
use crate::repositories::traits::FeedbackRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FeedbackRepositoryTrait for FeedbackRepository {
    async fn list_feedback(&self) -> DatabaseResult<Vec<Feedback>> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, roll_number, internship_id, skills_learned, technical_skill, communication_skill,
                   team_work, time_management, overall_experience, created_at
            FROM portal.feedback
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(feedback)
    }

    async fn create_feedback(&self, feedback: FeedbackCreate) -> DatabaseResult<Feedback> {
        debug!("📝 保存反馈: {:#?}", feedback);

        let what = format!("feedback of {} for internship {:?}", feedback.roll_number, feedback.internship_id);
        let created = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO portal.feedback (roll_number, internship_id, skills_learned, technical_skill,
                                         communication_skill, team_work, time_management, overall_experience)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, roll_number, internship_id, skills_learned, technical_skill, communication_skill,
                      team_work, time_management, overall_experience, created_at
            "#,
        )
        .bind(feedback.roll_number)
        .bind(feedback.internship_id)
        .bind(feedback.skills_learned)
        .bind(feedback.technical_skill)
        .bind(feedback.communication_skill)
        .bind(feedback.team_work)
        .bind(feedback.time_management)
        .bind(feedback.overall_experience)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, what))?;

        debug!("✅ 反馈保存成功: id={}", created.id);
        Ok(created)
    }

    async fn feedback_exists(&self, roll_number: &str, internship_id: i32) -> DatabaseResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM portal.feedback WHERE roll_number = $1 AND internship_id = $2)",
        )
        .bind(roll_number)
        .bind(internship_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn count_feedback(&self) -> DatabaseResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM portal.feedback")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
