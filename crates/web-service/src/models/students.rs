use crate::models::common::non_blank;
use database::{Student, StudentCreate, StudentQuery};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// 学生注册信息
#[derive(Deserialize, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentRegistration {
    #[schema(example = "20A91A0101")]
    #[validate(length(min = 1, max = 32))]
    pub roll_number: String,

    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[schema(example = "CSE")]
    pub branch: Option<String>,

    #[schema(example = "3-1")]
    pub semester: Option<String>,

    pub section: Option<String>,

    #[validate(email)]
    pub email: String,

    pub phone_no: Option<String>,
}

impl From<StudentRegistration> for StudentCreate {
    fn from(reg: StudentRegistration) -> Self {
        Self {
            roll_number: reg.roll_number.trim().to_string(),
            name: reg.name.trim().to_string(),
            branch: non_blank(reg.branch),
            semester: non_blank(reg.semester),
            section: non_blank(reg.section),
            email: reg.email.trim().to_string(),
            phone_no: non_blank(reg.phone_no),
        }
    }
}

/// 学生信息
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    pub roll_number: String,
    pub name: String,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub section: Option<String>,
    pub email: String,
    pub phone_no: Option<String>,
}

impl From<Student> for StudentInfo {
    fn from(s: Student) -> Self {
        Self {
            roll_number: s.roll_number,
            name: s.name,
            branch: s.branch,
            semester: s.semester,
            section: s.section,
            email: s.email,
            phone_no: s.phone_no,
        }
    }
}

/// 学生列表查询参数
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentListQuery {
    #[param(example = "3-1")]
    pub semester: Option<String>,
    pub section: Option<String>,
}

impl From<StudentListQuery> for StudentQuery {
    fn from(q: StudentListQuery) -> Self {
        Self {
            semester: non_blank(q.semester),
            section: non_blank(q.section),
        }
    }
}
