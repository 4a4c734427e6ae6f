//! 🔧 共享库模块
//!
//! 这个模块包含了在多个服务之间共享的通用代码，包括：
//! - 程序配置
//! - 日期时钟抽象（方便测试时固定“今天”）
//! - 实习状态推导
//! - 已知专业（branch）目录

pub mod branch;
pub mod clock;
pub mod models;
pub mod status;

// 重新导出常用类型
pub use branch::{BranchCatalog, OTHER_BRANCH};
pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{AppConfig, GuestConfig, JwtConfig};
pub use status::{derive_status, InternshipStatus, StatusParseError};
