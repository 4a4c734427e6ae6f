//! 实习反馈数据库模型

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Feedback {
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

#[derive(Debug, Clone)]
pub struct FeedbackCreate {
    pub roll_number: String,
    pub internship_id: Option<i32>,
    pub skills_learned: String,
    pub technical_skill: i32,
    pub communication_skill: i32,
    pub team_work: i32,
    pub time_management: i32,
    pub overall_experience: String,
}
