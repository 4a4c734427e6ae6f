//! 管理员仓库 trait 定义

use crate::models::admin::{Admin, AdminCreate};
use crate::DatabaseResult;

#[async_trait::async_trait]
pub trait AdminRepositoryTrait: Send + Sync + 'static {
    /// 根据管理员ID查询账号
    async fn get_admin(&self, admin_id: &str) -> DatabaseResult<Option<Admin>>;

    /// 账号不存在时创建
    ///
    /// # 返回值
    /// 是否新建了记录
    async fn create_admin_if_absent(&self, admin: AdminCreate) -> DatabaseResult<bool>;
}
