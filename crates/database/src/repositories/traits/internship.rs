//! 实习仓库 trait 定义

use crate::models::internship::{Internship, InternshipCreate};
use crate::DatabaseResult;

/// 实习仓库trait定义
///
/// 筛选和统计在内存中完成，仓库层只提供简单的全量和等值查询。
#[async_trait::async_trait]
pub trait InternshipRepositoryTrait: Send + Sync + 'static {
    /// 获取全部实习记录，按 id 排序
    async fn list_internships(&self) -> DatabaseResult<Vec<Internship>>;

    /// 获取指定学号的全部实习记录
    async fn list_internships_by_roll(&self, roll_number: &str) -> DatabaseResult<Vec<Internship>>;

    /// 创建实习记录，审核状态默认为 `Pending`
    async fn create_internship(&self, internship: InternshipCreate) -> DatabaseResult<Internship>;

    /// 更新管理员记录的审核状态
    ///
    /// 记录不存在时返回 [`crate::DatabaseError::NotFound`]
    async fn update_recorded_status(&self, id: i32, status: String) -> DatabaseResult<Internship>;

    /// 删除实习记录，返回被删除的记录
    async fn delete_internship(&self, id: i32) -> DatabaseResult<Internship>;
}
