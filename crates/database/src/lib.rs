//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、查询等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::{
    Admin, AdminCreate, Feedback, FeedbackCreate, Internship, InternshipCreate, Organization, Student, StudentCreate,
    StudentQuery, DEFAULT_RECORDED_STATUS,
};
pub use repositories::{
    AdminRepository, AdminRepositoryTrait, FeedbackRepository, FeedbackRepositoryTrait, InternshipRepository,
    InternshipRepositoryTrait, OrganizationRepository, OrganizationRepositoryTrait, StudentRepository,
    StudentRepositoryTrait,
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
