//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod admin;
pub mod feedback;
pub mod internship;
pub mod organization;
pub mod student;
pub mod traits;

// 重新导出具体的类型
pub use admin::AdminRepository;
pub use feedback::FeedbackRepository;
pub use internship::InternshipRepository;
pub use organization::OrganizationRepository;
pub use student::StudentRepository;
pub use traits::{
    AdminRepositoryTrait, FeedbackRepositoryTrait, InternshipRepositoryTrait, OrganizationRepositoryTrait,
    StudentRepositoryTrait,
};
