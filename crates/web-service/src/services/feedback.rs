//! 实习反馈
//!
//! 只有实习结束（当天日期 >= 结束日期）之后才能提交反馈，
//! 每个学生对同一次实习只能提交一次。

use crate::models::err::AppError;
use crate::models::feedback::{FeedbackInfo, FeedbackSubmission};
use crate::AppState;
use chrono::NaiveDate;
use database::{FeedbackCreate, Internship};
use tracing::{debug, info};
use validator::Validate;

/// 选出反馈要关联的实习
///
/// - 指定了 `requested` 时，该实习必须属于这个学生且已经结束
/// - 未指定时，选择最近结束的一次实习
///
/// `internships` 应该是该学号下的全部实习记录。
pub fn select_feedback_target<'a>(
    internships: &'a [Internship],
    roll_number: &str,
    requested: Option<i32>,
    today: NaiveDate,
) -> Result<&'a Internship, AppError> {
    let owned = move || internships.iter().filter(move |i| i.roll_number == roll_number);

    if owned().next().is_none() {
        return Err(AppError::bad_request(format!("No internship found for roll number {roll_number}")));
    }

    match requested {
        Some(id) => {
            let internship = owned()
                .find(|i| i.id == id)
                .ok_or_else(|| AppError::bad_request(format!("Internship {id} does not belong to {roll_number}")))?;
            if today < internship.ending_date {
                return Err(AppError::bad_request(format!(
                    "Feedback can be submitted after the internship ends on {}",
                    internship.ending_date
                )));
            }
            Ok(internship)
        }
        None => owned()
            .filter(|i| today >= i.ending_date)
            .max_by_key(|i| (i.ending_date, i.id))
            .ok_or_else(|| {
                AppError::bad_request(format!("No completed internship found for roll number {roll_number}"))
            }),
    }
}

/// 提交反馈
pub async fn submit_feedback(state: &AppState, submission: FeedbackSubmission) -> Result<FeedbackInfo, AppError> {
    submission.validate()?;

    let roll_number = submission.roll_number.trim().to_string();
    let internships = state.internships.list_internships_by_roll(&roll_number).await?;
    let today = state.clock.today();

    let target = select_feedback_target(&internships, &roll_number, submission.internship_id, today)?;
    debug!("📝 学号 {} 的反馈关联到实习 {}", roll_number, target.id);

    if state.feedback.feedback_exists(&roll_number, target.id).await? {
        return Err(AppError::Conflict(format!(
            "Feedback for internship {} has already been submitted",
            target.id
        )));
    }

    let created = state
        .feedback
        .create_feedback(FeedbackCreate {
            roll_number,
            internship_id: Some(target.id),
            skills_learned: submission.skills_learned.trim().to_string(),
            technical_skill: submission.technical_skill,
            communication_skill: submission.communication_skill,
            team_work: submission.team_work,
            time_management: submission.time_management,
            overall_experience: submission.overall_experience.trim().to_string(),
        })
        .await?;

    info!("✅ 已保存学号 {} 的实习反馈 {}", created.roll_number, created.id);
    Ok(created.into())
}

pub async fn list_feedback(state: &AppState) -> Result<Vec<FeedbackInfo>, AppError> {
    let feedback = state.feedback.list_feedback().await?;
    Ok(feedback.into_iter().map(Into::into).collect())
}
