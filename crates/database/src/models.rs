//! 数据库模型模块
//!
//! 这里定义与数据库表对应的结构体和相关操作

pub mod admin;
pub mod feedback;
pub mod internship;
pub mod organization;
pub mod student;

// 重新导出具体的模型
pub use admin::{Admin, AdminCreate};
pub use feedback::{Feedback, FeedbackCreate};
pub use internship::{Internship, InternshipCreate, DEFAULT_RECORDED_STATUS};
pub use organization::Organization;
pub use student::{Student, StudentCreate, StudentQuery};
