//! 学生注册与查询

use crate::models::err::AppError;
use crate::models::students::{StudentInfo, StudentListQuery, StudentRegistration};
use crate::AppState;
use tracing::info;
use validator::Validate;

/// 注册学生，学号已存在时返回409
pub async fn register_student(state: &AppState, registration: StudentRegistration) -> Result<StudentInfo, AppError> {
    registration.validate()?;

    let created = state.students.create_student(registration.into()).await?;
    info!("👤 已注册学生 {}", created.roll_number);
    Ok(created.into())
}

pub async fn list_students(state: &AppState, query: StudentListQuery) -> Result<Vec<StudentInfo>, AppError> {
    let students = state.students.list_students(query.into()).await?;
    Ok(students.into_iter().map(Into::into).collect())
}
