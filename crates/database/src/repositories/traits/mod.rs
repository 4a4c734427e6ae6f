//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口，每种记录类型一个 trait。
//!
//! ## Trait 约束
//!
//! 所有 Repository trait 都使用同样的约束：
//!
//! ```rust,ignore
//! #[async_trait::async_trait]
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send + Sync`：仓库实例会被多个并发请求同时访问
//! - `'static`：仓库存放在 `Arc<dyn XxxRepositoryTrait>` 中，跟随应用整个生命周期
//!
//! 使用 [`async_trait`] 保证 trait 可以作为 trait object 使用，
//! Web 层的 `AppState` 因此不需要为每个仓库引入一个泛型参数，测试中也可以直接替换为内存实现：
//!
//! ```rust,ignore
//! let state = AppState {
//!     internships: Arc::new(InternshipRepository::new(pool.clone())),
//!     students: Arc::new(StudentRepository::new(pool.clone())),
//!     // ...
//! };
//! ```
//!
//! 所有方法都返回统一的 [`crate::DatabaseResult`]。

pub mod admin;
pub mod feedback;
pub mod internship;
pub mod organization;
pub mod student;

// 重新导出
pub use admin::AdminRepositoryTrait;
pub use feedback::FeedbackRepositoryTrait;
pub use internship::InternshipRepositoryTrait;
pub use organization::OrganizationRepositoryTrait;
pub use student::StudentRepositoryTrait;
