//! 管理员数据库模型

/// 管理员账号
///
/// `password_hash` 是 argon2 PHC 格式的哈希字符串，数据库中不保存明文密码。
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Admin {
    pub admin_id: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct AdminCreate {
    pub admin_id: String,
    pub name: String,
    pub password_hash: String,
}
