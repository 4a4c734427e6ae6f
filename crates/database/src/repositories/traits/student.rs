//! 学生仓库 trait 定义

use crate::models::student::{Student, StudentCreate, StudentQuery};
use crate::DatabaseResult;

/// 学生仓库trait定义
#[async_trait::async_trait]
pub trait StudentRepositoryTrait: Send + Sync + 'static {
    /// 按学期、班级查询学生列表
    ///
    /// # 参数
    /// - `query`: 查询条件，为 `None` 的字段不参与过滤
    async fn list_students(&self, query: StudentQuery) -> DatabaseResult<Vec<Student>>;

    /// 根据学号查询学生，不存在时返回 `None`
    async fn get_student(&self, roll_number: &str) -> DatabaseResult<Option<Student>>;

    /// 注册学生
    ///
    /// 学号已存在时返回 [`crate::DatabaseError::Duplicate`]
    async fn create_student(&self, student: StudentCreate) -> DatabaseResult<Student>;

    /// 学号不存在时创建学生
    ///
    /// # 返回值
    /// 是否新建了记录
    async fn create_student_if_absent(&self, student: StudentCreate) -> DatabaseResult<bool>;

    /// 学生总数
    async fn count_students(&self) -> DatabaseResult<i64>;
}
