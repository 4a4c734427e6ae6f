//! 实习单位仓库 trait 定义

use crate::models::organization::Organization;
use crate::DatabaseResult;

#[async_trait::async_trait]
pub trait OrganizationRepositoryTrait: Send + Sync + 'static {
    /// 全部单位，按名称排序
    async fn list_organizations(&self) -> DatabaseResult<Vec<Organization>>;

    /// 创建单位，名称重复时返回 [`crate::DatabaseError::Duplicate`]
    async fn create_organization(&self, name: String) -> DatabaseResult<Organization>;

    /// 删除单位，不存在时返回 [`crate::DatabaseError::NotFound`]
    async fn delete_organization(&self, id: i32) -> DatabaseResult<Organization>;
}
