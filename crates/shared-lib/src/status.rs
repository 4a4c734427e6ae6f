//! 实习状态推导
//!
//! 实习的状态不在数据库中权威存储，每次读取时都根据 `(today, 开始日期, 结束日期)` 重新计算。
//! 全项目只允许通过 [`derive_status`] 计算状态。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// 实习的时间状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InternshipStatus {
    /// 尚未开始
    Future,
    /// 进行中（包含开始和结束当天）
    Ongoing,
    /// 已结束
    Past,
}

impl InternshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternshipStatus::Future => "future",
            InternshipStatus::Ongoing => "ongoing",
            InternshipStatus::Past => "past",
        }
    }

    /// 解析查询参数中的状态过滤条件
    ///
    /// 空字符串和 `all` 表示不过滤，返回 `None`。
    pub fn parse_filter(raw: &str) -> Result<Option<Self>, StatusParseError> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown internship status `{0}`, expected one of: future, ongoing, past, all")]
pub struct StatusParseError(pub String);

impl FromStr for InternshipStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "future" => Ok(InternshipStatus::Future),
            "ongoing" => Ok(InternshipStatus::Ongoing),
            "past" => Ok(InternshipStatus::Past),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// 根据今天的日期推导实习状态
///
/// - `today < start` => [`InternshipStatus::Future`]
/// - `today > end` => [`InternshipStatus::Past`]
/// - 其他情况（包括开始当天和结束当天）=> [`InternshipStatus::Ongoing`]
pub fn derive_status(today: NaiveDate, start: NaiveDate, end: NaiveDate) -> InternshipStatus {
    if today < start {
        InternshipStatus::Future
    } else if today > end {
        InternshipStatus::Past
    } else {
        InternshipStatus::Ongoing
    }
}
