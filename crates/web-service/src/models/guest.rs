use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// 访客看板中的一条在实习学生信息
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub semester: Option<String>,
    pub organization_name: String,
}

/// 访客看板
///
/// `categorized` 的结构为 `专业 -> 班级 -> 学生列表`，缺失的专业或班级记为 `Unknown`。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GuestDashboard {
    pub categorized: BTreeMap<String, BTreeMap<String, Vec<RosterEntry>>>,
}
