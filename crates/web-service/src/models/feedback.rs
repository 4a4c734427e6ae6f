use chrono::{DateTime, Utc};
use database::Feedback;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 实习反馈表单
///
/// 四项技能评分都是 1 到 5 的整数。
/// `internshipId` 可选，不填时自动关联该学生最近结束的一次实习。
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[schema(example = "20A91A0101")]
    #[validate(length(min = 1, max = 32))]
    pub roll_number: String,

    pub internship_id: Option<i32>,

    #[validate(length(min = 1, max = 2000))]
    pub skills_learned: String,

    #[schema(minimum = 1, maximum = 5)]
    #[validate(range(min = 1, max = 5))]
    pub technical_skill: i32,

    #[schema(minimum = 1, maximum = 5)]
    #[validate(range(min = 1, max = 5))]
    pub communication_skill: i32,

    #[schema(minimum = 1, maximum = 5)]
    #[validate(range(min = 1, max = 5))]
    pub team_work: i32,

    #[schema(minimum = 1, maximum = 5)]
    #[validate(range(min = 1, max = 5))]
    pub time_management: i32,

    #[validate(length(min = 1, max = 2000))]
    pub overall_experience: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInfo {
    pub id: i32,
    pub roll_number: String,
    pub internship_id: Option<i32>,
    pub skills_learned: String,
    pub technical_skill: i32,
    pub communication_skill: i32,
    pub team_work: i32,
    pub time_management: i32,
    pub overall_experience: String,
    pub created_at: DateTime<Utc>,
}

impl From<Feedback> for FeedbackInfo {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id,
            roll_number: f.roll_number,
            internship_id: f.internship_id,
            skills_learned: f.skills_learned,
            technical_skill: f.technical_skill,
            communication_skill: f.communication_skill,
            team_work: f.team_work,
            time_management: f.time_management,
            overall_experience: f.overall_experience,
            created_at: f.created_at,
        }
    }
}
