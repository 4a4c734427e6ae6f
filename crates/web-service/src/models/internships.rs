use crate::models::common::non_blank;
use crate::models::students::StudentInfo;
use chrono::NaiveDate;
use database::Internship;
use serde::{Deserialize, Serialize};
use shared_lib::InternshipStatus;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// 实习申请表单
///
/// 表单同时携带学生信息，学号不存在时会顺带创建学生记录。
/// 三个文件字段只是文件引用（路径或URL），文件上传不在本服务处理。
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_submission_dates"))]
pub struct InternshipSubmission {
    #[schema(example = "20A91A0101")]
    #[validate(length(min = 1, max = 32))]
    pub roll_number: String,

    #[schema(example = "Asha")]
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[schema(example = "CSE")]
    #[validate(length(min = 1, max = 32))]
    pub branch: String,

    #[schema(example = "3-1")]
    #[validate(length(min = 1, max = 16))]
    pub semester: String,

    #[schema(example = "A")]
    pub section: Option<String>,

    #[validate(email)]
    pub email: String,

    pub phone_no: Option<String>,

    #[schema(example = "Backend Intern")]
    #[validate(length(min = 1, max = 128))]
    pub role: String,

    #[schema(example = "VNR Solutions Pvt Ltd")]
    #[validate(length(min = 1, max = 256))]
    pub organization_name: String,

    pub hr_name: Option<String>,

    #[validate(email)]
    pub hr_email: String,

    pub hr_phone: Option<String>,

    /// 实习时长，例如 `3 months`、`1.5 Months`，取其中第一个数字
    #[schema(example = "3 months")]
    #[validate(length(min = 1, max = 32))]
    pub duration: String,

    /// 月薪
    #[schema(example = 15000.0)]
    #[validate(range(min = 0.0))]
    pub stipend: f64,

    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub starting_date: NaiveDate,

    #[schema(value_type = String, format = Date, example = "2024-08-31")]
    pub ending_date: NaiveDate,

    pub offer_letter: Option<String>,
    pub approval_letter: Option<String>,
    pub noc: Option<String>,
}

fn validate_submission_dates(submission: &InternshipSubmission) -> Result<(), ValidationError> {
    if submission.starting_date > submission.ending_date {
        let mut err = ValidationError::new("date_order");
        err.message = Some("startingDate must not be after endingDate".into());
        return Err(err);
    }
    Ok(())
}

/// 实习信息
///
/// `status` 是根据当天日期计算出来的时间状态，`recordedStatus` 是管理员记录的审核状态。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InternshipInfo {
    pub id: i32,
    pub roll_number: String,
    pub organization_name: String,
    pub role: String,
    pub hr_name: Option<String>,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub starting_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub ending_date: NaiveDate,
    pub duration_months: Option<f64>,
    pub stipend: Option<f64>,
    pub offer_letter: Option<String>,
    pub approval_letter: Option<String>,
    pub noc: Option<String>,
    #[schema(example = "Pending")]
    pub recorded_status: String,
    pub status: InternshipStatus,
}

impl InternshipInfo {
    pub fn new(internship: Internship, status: InternshipStatus) -> Self {
        Self {
            id: internship.id,
            roll_number: internship.roll_number,
            organization_name: internship.organization_name,
            role: internship.role,
            hr_name: internship.hr_name,
            hr_email: internship.hr_email,
            hr_phone: internship.hr_phone,
            starting_date: internship.starting_date,
            ending_date: internship.ending_date,
            duration_months: internship.duration_months,
            stipend: internship.stipend,
            offer_letter: internship.offer_letter,
            approval_letter: internship.approval_letter,
            noc: internship.noc,
            recorded_status: internship.status,
            status,
        }
    }
}

/// 筛选结果中的实习信息，附带学生的专业、学期、班级
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedInternship {
    #[serde(flatten)]
    pub internship: InternshipInfo,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub section: Option<String>,
}

/// 实习筛选/统计的查询参数
///
/// 所有参数都是可选的，空字符串等同于未设置。
#[derive(Deserialize, Debug, Default, Clone, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// 时间状态：`future`、`ongoing`、`past` 或 `all`
    #[serde(rename = "type")]
    pub status: Option<String>,
    pub semester: Option<String>,
    pub section: Option<String>,
    /// 专业，`Other` 表示不在已知专业列表中
    pub branch: Option<String>,
    /// 开始日期的年份
    pub year: Option<String>,
    /// 开始日期的月份，与年份一起给出时表示下限
    pub month: Option<String>,
    /// 结束日期的年份
    pub end_year: Option<String>,
    /// 结束日期的月份，与年份一起给出时表示上限
    pub end_month: Option<String>,
    /// 公司名称或缩写
    pub company: Option<String>,
}

impl FilterQuery {
    /// 去掉所有空字符串参数
    pub fn normalized(self) -> Self {
        Self {
            status: non_blank(self.status),
            semester: non_blank(self.semester),
            section: non_blank(self.section),
            branch: non_blank(self.branch),
            year: non_blank(self.year),
            month: non_blank(self.month),
            end_year: non_blank(self.end_year),
            end_month: non_blank(self.end_month),
            company: non_blank(self.company),
        }
    }
}

/// 修改审核状态
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct StatusUpdate {
    #[schema(example = "Approved")]
    #[validate(length(min = 1, max = 32))]
    pub status: String,
}

/// 按学号查询的学生档案
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RollProfile {
    pub student: StudentInfo,
    pub internships: Vec<InternshipInfo>,
}
