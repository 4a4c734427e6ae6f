//! 实习相关业务逻辑
//!
//! 包括实习申请、全量列表、筛选统计、审核状态修改以及按学号查询档案。
//! 所有返回给接口的实习状态都在这里根据当天日期重新计算。

use crate::models::analytics::{AnalyticsReply, DashboardStats};
use crate::models::common::non_blank;
use crate::models::err::AppError;
use crate::models::internships::{FilterQuery, InternshipInfo, InternshipSubmission, RollProfile};
use crate::services::analytics::aggregate;
use crate::services::filter::{apply_filter, FilterOutcome, InternshipFilter};
use crate::AppState;
use database::{InternshipCreate, StudentCreate, StudentQuery, DEFAULT_RECORDED_STATUS};
use regex::Regex;
use shared_lib::{derive_status, InternshipStatus};
use tracing::{debug, info, warn};
use validator::Validate;

/// 解析实习时长，取字符串中的第一个数字
///
/// `"3 months"` => `3.0`，`"1.5 Months"` => `1.5`
pub fn parse_duration(raw: &str) -> Result<f64, AppError> {
    let number = Regex::new(r"(\d+(?:\.\d+)?)").map_err(|e| AppError::internal(e.to_string()))?;

    let months = number
        .captures(raw)
        .and_then(|cap| cap[1].parse::<f64>().ok())
        .filter(|months| *months > 0.0)
        .ok_or_else(|| AppError::bad_request(format!("invalid duration `{raw}`")))?;

    Ok(months)
}

/// 提交实习申请
///
/// 学号不存在时使用表单中的学生信息创建学生记录。
pub async fn submit_internship(state: &AppState, submission: InternshipSubmission) -> Result<InternshipInfo, AppError> {
    submission.validate()?;
    let duration_months = parse_duration(&submission.duration)?;

    let roll_number = submission.roll_number.trim().to_string();
    let student = StudentCreate {
        roll_number: roll_number.clone(),
        name: submission.name.trim().to_string(),
        branch: non_blank(Some(submission.branch)),
        semester: non_blank(Some(submission.semester)),
        section: non_blank(submission.section),
        email: submission.email.trim().to_string(),
        phone_no: non_blank(submission.phone_no),
    };
    if state.students.create_student_if_absent(student).await? {
        info!("👤 通过实习申请创建了学生 {}", roll_number);
    }

    let created = state
        .internships
        .create_internship(InternshipCreate {
            roll_number,
            organization_name: submission.organization_name.trim().to_string(),
            role: submission.role.trim().to_string(),
            hr_name: non_blank(submission.hr_name),
            hr_email: non_blank(Some(submission.hr_email)),
            hr_phone: non_blank(submission.hr_phone),
            starting_date: submission.starting_date,
            ending_date: submission.ending_date,
            duration_months: Some(duration_months),
            stipend: Some(submission.stipend),
            offer_letter: non_blank(submission.offer_letter),
            approval_letter: non_blank(submission.approval_letter),
            noc: non_blank(submission.noc),
        })
        .await?;

    info!("✅ 已保存实习申请 {} ({})", created.id, created.roll_number);
    let status = derive_status(state.clock.today(), created.starting_date, created.ending_date);
    Ok(InternshipInfo::new(created, status))
}

/// 全部实习记录，附带计算出的状态
pub async fn list_internships(state: &AppState) -> Result<Vec<InternshipInfo>, AppError> {
    let today = state.clock.today();
    let internships = state.internships.list_internships().await?;

    Ok(internships
        .into_iter()
        .map(|i| {
            let status = derive_status(today, i.starting_date, i.ending_date);
            InternshipInfo::new(i, status)
        })
        .collect())
}

/// 按查询参数筛选实习
pub async fn filter_internships(state: &AppState, query: FilterQuery) -> Result<FilterOutcome, AppError> {
    let filter = InternshipFilter::try_from(query)?;
    debug!("🔍 实习筛选条件 {:?}", filter);

    let internships = state.internships.list_internships().await?;
    let students = state.students.list_students(StudentQuery::default()).await?;

    let outcome = apply_filter(
        internships,
        &students,
        &filter,
        &state.config.branches,
        state.clock.today(),
    );
    if outcome.excluded > 0 {
        warn!("⚠️ {} 条实习记录找不到对应学生，已排除", outcome.excluded);
    }

    Ok(outcome)
}

/// 按查询参数筛选后统计，返回统计结果和被排除的记录数
pub async fn analytics(state: &AppState, query: FilterQuery) -> Result<(AnalyticsReply, usize), AppError> {
    let outcome = filter_internships(state, query).await?;
    Ok((aggregate(&outcome.records, &state.config.branches), outcome.excluded))
}

/// 修改管理员记录的审核状态，不影响计算出的时间状态
pub async fn update_recorded_status(state: &AppState, id: i32, status: String) -> Result<InternshipInfo, AppError> {
    let updated = state
        .internships
        .update_recorded_status(id, status.trim().to_string())
        .await?;

    info!("✏️ 实习 {} 的审核状态更新为 {}", id, updated.status);
    let status = derive_status(state.clock.today(), updated.starting_date, updated.ending_date);
    Ok(InternshipInfo::new(updated, status))
}

pub async fn delete_internship(state: &AppState, id: i32) -> Result<InternshipInfo, AppError> {
    let deleted = state.internships.delete_internship(id).await?;

    info!("🗑️ 已删除实习 {}", id);
    let status = derive_status(state.clock.today(), deleted.starting_date, deleted.ending_date);
    Ok(InternshipInfo::new(deleted, status))
}

/// 按学号查询学生及其全部实习
pub async fn roll_profile(state: &AppState, roll_number: &str) -> Result<RollProfile, AppError> {
    let student = state
        .students
        .get_student(roll_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {roll_number} not found")))?;

    let today = state.clock.today();
    let internships = state
        .internships
        .list_internships_by_roll(roll_number)
        .await?
        .into_iter()
        .map(|i| {
            let status = derive_status(today, i.starting_date, i.ending_date);
            InternshipInfo::new(i, status)
        })
        .collect();

    Ok(RollProfile {
        student: student.into(),
        internships,
    })
}

/// 管理后台首页统计
pub async fn dashboard_stats(state: &AppState) -> Result<DashboardStats, AppError> {
    let today = state.clock.today();
    let internships = state.internships.list_internships().await?;

    let mut stats = DashboardStats {
        total_students: state.students.count_students().await?,
        total_internships: internships.len() as i64,
        total_feedbacks: state.feedback.count_feedback().await?,
        pending_internships: 0,
        future_internships: 0,
        ongoing_internships: 0,
        past_internships: 0,
    };

    for internship in &internships {
        if internship.status == DEFAULT_RECORDED_STATUS {
            stats.pending_internships += 1;
        }
        match derive_status(today, internship.starting_date, internship.ending_date) {
            InternshipStatus::Future => stats.future_internships += 1,
            InternshipStatus::Ongoing => stats.ongoing_internships += 1,
            InternshipStatus::Past => stats.past_internships += 1,
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_takes_the_first_number() {
        assert_eq!(parse_duration("3 months").unwrap(), 3.0);
        assert_eq!(parse_duration("1.5 Months").unwrap(), 1.5);
        assert_eq!(parse_duration("6").unwrap(), 6.0);
        assert_eq!(parse_duration("about 2 to 3 months").unwrap(), 2.0);
        assert_eq!(parse_duration("4. months").unwrap(), 4.0);
        assert_eq!(parse_duration(".5 months").unwrap(), 5.0);
        assert_eq!(parse_duration("1.5.2").unwrap(), 1.5);
    }

    #[test]
    fn duration_without_positive_number_is_rejected() {
        assert!(parse_duration("a few months").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("0 months").is_err());
    }
}
