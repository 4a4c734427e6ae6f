//! 实习数据库模型

use chrono::NaiveDate;

/// 实习记录
///
/// `status` 是管理员记录的审核状态（默认 `Pending`），它不是实习的时间状态。
/// 时间状态只能通过 [`shared_lib::derive_status`] 计算。
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Internship {
    pub id: i32,
    pub roll_number: String,
    pub organization_name: String,
    pub role: String,
    pub hr_name: Option<String>,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    pub starting_date: NaiveDate,
    pub ending_date: NaiveDate,
    pub duration_months: Option<f64>,
    pub stipend: Option<f64>,
    pub offer_letter: Option<String>,
    pub approval_letter: Option<String>,
    pub noc: Option<String>,
    pub status: String,
}

/// 实习创建参数
#[derive(Debug, Clone)]
pub struct InternshipCreate {
    pub roll_number: String,
    pub organization_name: String,
    pub role: String,
    pub hr_name: Option<String>,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    pub starting_date: NaiveDate,
    pub ending_date: NaiveDate,
    pub duration_months: Option<f64>,
    pub stipend: Option<f64>,
    pub offer_letter: Option<String>,
    pub approval_letter: Option<String>,
    pub noc: Option<String>,
}

/// 新建实习记录的默认审核状态
pub const DEFAULT_RECORDED_STATUS: &str = "Pending";
