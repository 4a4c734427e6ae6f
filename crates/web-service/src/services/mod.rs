//! 服务层模块
//!
//! 包含业务逻辑实现，路由函数只负责参数提取和返回值封装。
//!
//! - [`filter`]、[`analytics`] 是不依赖仓库的纯函数，方便单元测试
//! - 其余模块的函数接收 [`crate::AppState`]，通过其中的仓库 trait object 访问数据

pub mod analytics;
pub mod auth;
pub mod feedback;
pub mod filter;
pub mod guest;
pub mod internship;
pub mod organization;
pub mod student;
