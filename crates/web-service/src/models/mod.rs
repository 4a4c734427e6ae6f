//! 接口的请求与返回数据定义
//!
//! 这里的类型只用于HTTP层的序列化/反序列化，和 `database` crate 中的数据库模型相互转换。
//! 所有json字段统一使用 camelCase 命名。

pub mod analytics;
pub mod auth;
pub mod common;
pub mod err;
pub mod feedback;
pub mod guest;
pub mod internships;
pub mod organizations;
pub mod students;
