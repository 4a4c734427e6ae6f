//! 反馈仓库 trait 定义

use crate::models::feedback::{Feedback, FeedbackCreate};
use crate::DatabaseResult;

#[async_trait::async_trait]
pub trait FeedbackRepositoryTrait: Send + Sync + 'static {
    async fn list_feedback(&self) -> DatabaseResult<Vec<Feedback>>;

    /// 保存反馈
    ///
    /// 同一学生对同一实习重复提交时返回 [`crate::DatabaseError::Duplicate`]
    async fn create_feedback(&self, feedback: FeedbackCreate) -> DatabaseResult<Feedback>;

    /// 学生是否已经对指定实习提交过反馈
    async fn feedback_exists(&self, roll_number: &str, internship_id: i32) -> DatabaseResult<bool>;

    async fn count_feedback(&self) -> DatabaseResult<i64>;
}
