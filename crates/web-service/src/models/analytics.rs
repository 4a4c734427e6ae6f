use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct BranchCount {
    #[schema(example = "CSE")]
    pub branch: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SemesterCount {
    #[schema(example = "3-1")]
    pub semester: String,
    pub count: u64,
}

/// 图表统计数据
///
/// `branchData` 按已知专业列表的顺序排列，最后是 `Other`；`semesterData` 按学期排序。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReply {
    pub branch_data: Vec<BranchCount>,
    pub semester_data: Vec<SemesterCount>,
}

/// 管理后台首页统计
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: i64,
    pub total_internships: i64,
    pub total_feedbacks: i64,
    /// 审核状态仍为 `Pending` 的实习数量
    pub pending_internships: i64,
    pub future_internships: i64,
    pub ongoing_internships: i64,
    pub past_internships: i64,
}
