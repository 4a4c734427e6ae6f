//! 图表统计
//!
//! 对筛选结果按专业和学期分组计数。

use crate::models::analytics::{AnalyticsReply, BranchCount, SemesterCount};
use crate::services::filter::EnrichedRecord;
use shared_lib::{BranchCatalog, OTHER_BRANCH};
use std::collections::BTreeMap;

/// 学期为空时使用的分组名称
pub const UNKNOWN_SEMESTER: &str = "Unknown";

/// 按专业和学期统计
///
/// 每个已知专业和 `Other` 都会出现在结果中（计数可能为0），专业计数之和等于记录总数。
pub fn aggregate(records: &[EnrichedRecord], branches: &BranchCatalog) -> AnalyticsReply {
    let mut branch_data: Vec<BranchCount> = branches
        .known()
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(OTHER_BRANCH))
        .map(|branch| BranchCount {
            branch: branch.to_string(),
            count: 0,
        })
        .collect();
    let mut semesters: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        let bucket = branches.bucket_for(record.branch.as_deref());
        if let Some(entry) = branch_data.iter_mut().find(|b| b.branch == bucket) {
            entry.count += 1;
        }

        let semester = record
            .semester
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SEMESTER);
        *semesters.entry(semester.to_string()).or_default() += 1;
    }

    AnalyticsReply {
        branch_data,
        semester_data: semesters
            .into_iter()
            .map(|(semester, count)| SemesterCount { semester, count })
            .collect(),
    }
}
