//! 实习单位数据库模型

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Organization {
    pub id: i32,
    pub name: String,
}
