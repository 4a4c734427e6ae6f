//! 实习筛选引擎
//!
//! 筛选全部在内存中完成，步骤如下：
//!
//! 1. 按计算出来的时间状态过滤
//! 2. 按开始日期、结束日期过滤（边界日期，或者年份/月份精确匹配）
//! 3. 按公司名称（子串）或公司缩写过滤
//! 4. 按学号关联学生，找不到学生的实习被排除并计数
//! 5. 按学生的专业、学期、班级过滤
//!
//! 结果保持仓库返回的原始顺序。

use crate::models::err::AppError;
use crate::models::internships::{EnrichedInternship, FilterQuery, InternshipInfo};
use chrono::{Datelike, NaiveDate};
use database::{Internship, Student};
use shared_lib::{derive_status, BranchCatalog, InternshipStatus};
use std::collections::HashMap;

/// 日期条件
///
/// 年份和月份都给出时是一个边界日期，只给出其中一个时按年份或月份精确匹配。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// 开始日期不早于 / 结束日期不晚于该日期
    Date(NaiveDate),
    Year(i32),
    Month(u32),
}

impl DateBound {
    /// 开始日期条件：边界为该月第一天
    pub fn keeps_start(self, starting_date: NaiveDate) -> bool {
        match self {
            DateBound::Date(from) => starting_date >= from,
            DateBound::Year(year) => starting_date.year() == year,
            DateBound::Month(month) => starting_date.month() == month,
        }
    }

    /// 结束日期条件：边界为该月最后一天
    pub fn keeps_end(self, ending_date: NaiveDate) -> bool {
        match self {
            DateBound::Date(by) => ending_date <= by,
            DateBound::Year(year) => ending_date.year() == year,
            DateBound::Month(month) => ending_date.month() == month,
        }
    }
}

/// 筛选条件，所有字段为 `None` 时不过滤
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternshipFilter {
    pub status: Option<InternshipStatus>,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub section: Option<String>,
    pub company: Option<String>,
    /// 作用于 `startingDate`
    pub start: Option<DateBound>,
    /// 作用于 `endingDate`
    pub end: Option<DateBound>,
}

impl TryFrom<FilterQuery> for InternshipFilter {
    type Error = AppError;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        let query = query.normalized();

        let status = match query.status.as_deref() {
            Some(raw) => InternshipStatus::parse_filter(raw).map_err(AppError::bad_request)?,
            None => None,
        };

        let start = match parse_year_month("year", query.year.as_deref(), "month", query.month.as_deref())? {
            (Some(year), Some(month)) => Some(DateBound::Date(first_day_of_month(year, month)?)),
            (Some(year), None) => Some(DateBound::Year(year)),
            (None, Some(month)) => Some(DateBound::Month(month)),
            (None, None) => None,
        };

        let end = match parse_year_month("endYear", query.end_year.as_deref(), "endMonth", query.end_month.as_deref())? {
            (Some(year), Some(month)) => Some(DateBound::Date(last_day_of_month(year, month)?)),
            (Some(year), None) => Some(DateBound::Year(year)),
            (None, Some(month)) => Some(DateBound::Month(month)),
            (None, None) => None,
        };

        Ok(Self {
            status,
            branch: query.branch,
            semester: query.semester,
            section: query.section,
            company: query.company,
            start,
            end,
        })
    }
}

/// 解析年份和月份参数，格式错误时返回400
fn parse_year_month(
    year_key: &str,
    year: Option<&str>,
    month_key: &str,
    month: Option<&str>,
) -> Result<(Option<i32>, Option<u32>), AppError> {
    let year = year
        .map(|raw| {
            raw.parse::<i32>()
                .ok()
                .filter(|y| (1..=9999).contains(y))
                .ok_or_else(|| AppError::bad_request(format!("invalid {year_key} `{raw}`")))
        })
        .transpose()?;

    let month = month
        .map(|raw| {
            raw.parse::<u32>()
                .ok()
                .filter(|m| (1..=12).contains(m))
                .ok_or_else(|| AppError::bad_request(format!("invalid {month_key} `{raw}`")))
        })
        .transpose()?;

    Ok((year, month))
}

pub fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::bad_request(format!("invalid month {year}-{month}")))
}

pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    first_day_of_month(next_year, next_month)?
        .pred_opt()
        .ok_or_else(|| AppError::bad_request(format!("invalid month {year}-{month}")))
}

/// 公司名称缩写：每个单词的首字母大写后拼接
///
/// `"VNR Solutions Pvt Ltd"` => `"VSPL"`
pub fn acronym(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// 公司名称匹配：忽略大小写的子串匹配，或者查询词是公司缩写的子串
pub fn company_matches(query: &str, organization_name: &str) -> bool {
    let query = query.trim();
    organization_name.to_lowercase().contains(&query.to_lowercase())
        || acronym(organization_name).contains(&query.to_uppercase())
}

/// 关联学生信息后的实习记录
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub internship: Internship,
    pub status: InternshipStatus,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub section: Option<String>,
}

impl From<EnrichedRecord> for EnrichedInternship {
    fn from(record: EnrichedRecord) -> Self {
        Self {
            internship: InternshipInfo::new(record.internship, record.status),
            branch: record.branch,
            semester: record.semester,
            section: record.section,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub records: Vec<EnrichedRecord>,
    /// 因为找不到对应学生而被排除的实习数量
    pub excluded: usize,
}

/// 执行筛选
pub fn apply_filter(
    internships: Vec<Internship>,
    students: &[Student],
    filter: &InternshipFilter,
    branches: &BranchCatalog,
    today: NaiveDate,
) -> FilterOutcome {
    let by_roll: HashMap<&str, &Student> = students.iter().map(|s| (s.roll_number.as_str(), s)).collect();
    let mut outcome = FilterOutcome::default();

    for internship in internships {
        let status = derive_status(today, internship.starting_date, internship.ending_date);

        if filter.status.is_some_and(|wanted| wanted != status) {
            continue;
        }
        if filter.start.is_some_and(|bound| !bound.keeps_start(internship.starting_date)) {
            continue;
        }
        if filter.end.is_some_and(|bound| !bound.keeps_end(internship.ending_date)) {
            continue;
        }
        if let Some(company) = &filter.company {
            if !company_matches(company, &internship.organization_name) {
                continue;
            }
        }

        let Some(student) = by_roll.get(internship.roll_number.as_str()) else {
            outcome.excluded += 1;
            continue;
        };

        if let Some(branch) = &filter.branch {
            if !branches.matches(branch, student.branch.as_deref()) {
                continue;
            }
        }
        if !field_matches(&filter.semester, &student.semester) || !field_matches(&filter.section, &student.section) {
            continue;
        }

        outcome.records.push(EnrichedRecord {
            internship,
            status,
            branch: student.branch.clone(),
            semester: student.semester.clone(),
            section: student.section.clone(),
        });
    }

    outcome
}

fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
        None => true,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn internship(id: i32, roll: &str, company: &str, start: NaiveDate, end: NaiveDate) -> Internship {
        Internship {
            id,
            roll_number: roll.to_string(),
            organization_name: company.to_string(),
            role: "Intern".to_string(),
            hr_name: None,
            hr_email: None,
            hr_phone: None,
            starting_date: start,
            ending_date: end,
            duration_months: None,
            stipend: None,
            offer_letter: None,
            approval_letter: None,
            noc: None,
            status: "Pending".to_string(),
        }
    }

    pub(crate) fn student(roll: &str, branch: Option<&str>, semester: Option<&str>, section: Option<&str>) -> Student {
        Student {
            roll_number: roll.to_string(),
            name: format!("Student {roll}"),
            branch: branch.map(str::to_string),
            semester: semester.map(str::to_string),
            section: section.map(str::to_string),
            email: format!("{roll}@example.com"),
            phone_no: None,
        }
    }

    /// A1 已结束，A2 进行中，A3 的学生不存在
    fn scenario() -> (Vec<Internship>, Vec<Student>) {
        let internships = vec![
            internship(1, "S1", "VNR Solutions Pvt Ltd", date(2024, 6, 1), date(2024, 8, 31)),
            internship(2, "S2", "Acme Corp", date(2024, 12, 1), date(2025, 2, 28)),
            internship(3, "GHOST", "Acme Corp", date(2024, 1, 1), date(2024, 3, 1)),
        ];
        let students = vec![
            student("S1", Some("CSE"), Some("3-1"), Some("A")),
            student("S2", Some("Mining"), Some("4-1"), Some("B")),
        ];
        (internships, students)
    }

    fn run(filter: &InternshipFilter) -> FilterOutcome {
        let (internships, students) = scenario();
        apply_filter(internships, &students, filter, &BranchCatalog::new(["CSE"]), date(2024, 12, 31))
    }

    fn ids(outcome: &FilterOutcome) -> Vec<i32> {
        outcome.records.iter().map(|r| r.internship.id).collect()
    }

    #[test]
    fn empty_filter_returns_the_joined_set() {
        let outcome = run(&InternshipFilter::default());
        assert_eq!(ids(&outcome), vec![1, 2]);
        assert_eq!(outcome.excluded, 1);
        assert_eq!(outcome.records[0].status, InternshipStatus::Past);
        assert_eq!(outcome.records[1].status, InternshipStatus::Ongoing);
        assert_eq!(outcome.records[1].branch.as_deref(), Some("Mining"));
    }

    #[test]
    fn status_filter_uses_computed_status() {
        let past = run(&InternshipFilter {
            status: Some(InternshipStatus::Past),
            ..Default::default()
        });
        assert_eq!(ids(&past), vec![1]);

        let future = run(&InternshipFilter {
            status: Some(InternshipStatus::Future),
            ..Default::default()
        });
        assert!(future.records.is_empty());
    }

    #[test]
    fn other_branch_matches_unknown_branches() {
        let outcome = run(&InternshipFilter {
            branch: Some("Other".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&outcome), vec![2]);
    }

    #[test]
    fn semester_and_section_are_exact() {
        let outcome = run(&InternshipFilter {
            semester: Some("3-1".to_string()),
            section: Some("A".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&outcome), vec![1]);

        let none = run(&InternshipFilter {
            section: Some("a".to_string()),
            ..Default::default()
        });
        assert!(none.records.is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let outcome = run(&InternshipFilter {
            start: Some(DateBound::Date(date(2024, 6, 1))),
            end: Some(DateBound::Date(date(2024, 8, 31))),
            ..Default::default()
        });
        assert_eq!(ids(&outcome), vec![1]);

        let later = run(&InternshipFilter {
            start: Some(DateBound::Date(date(2024, 7, 1))),
            ..Default::default()
        });
        assert_eq!(ids(&later), vec![2]);
    }

    #[test]
    fn lone_year_or_month_matches_exactly() {
        let in_2024 = run(&InternshipFilter {
            start: Some(DateBound::Year(2024)),
            ..Default::default()
        });
        assert_eq!(ids(&in_2024), vec![1, 2]);

        let starts_in_june = run(&InternshipFilter {
            start: Some(DateBound::Month(6)),
            ..Default::default()
        });
        assert_eq!(ids(&starts_in_june), vec![1]);

        let ends_in_2025 = run(&InternshipFilter {
            end: Some(DateBound::Year(2025)),
            ..Default::default()
        });
        assert_eq!(ids(&ends_in_2025), vec![2]);

        let (internships, students) = scenario();
        let mut internships = internships;
        internships.push(internship(4, "S1", "Later Labs", date(2025, 3, 1), date(2025, 5, 31)));
        let outcome = apply_filter(
            internships,
            &students,
            &InternshipFilter {
                start: Some(DateBound::Year(2024)),
                ..Default::default()
            },
            &BranchCatalog::new(["CSE"]),
            date(2024, 12, 31),
        );
        assert_eq!(ids(&outcome), vec![1, 2]);
    }

    #[test]
    fn company_matches_by_substring_or_acronym() {
        assert_eq!(acronym("VNR Solutions Pvt Ltd"), "VSPL");
        assert!(company_matches("VNR", "VNR Solutions Pvt Ltd"));
        assert!(company_matches("vs", "VNR Solutions Pvt Ltd"));
        assert!(company_matches("solutions", "VNR Solutions Pvt Ltd"));
        assert!(!company_matches("VNRS", "VNR Solutions Pvt Ltd"));

        let outcome = run(&InternshipFilter {
            company: Some("VS".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&outcome), vec![1]);
    }

    #[test]
    fn query_parameters_become_month_bounds() {
        let filter = InternshipFilter::try_from(FilterQuery {
            status: Some("ALL".to_string()),
            year: Some("2024".to_string()),
            month: Some("2".to_string()),
            end_year: Some("2024".to_string()),
            end_month: Some("2".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(filter.status, None);
        assert_eq!(filter.start, Some(DateBound::Date(date(2024, 2, 1))));
        assert_eq!(filter.end, Some(DateBound::Date(date(2024, 2, 29))));
    }

    #[test]
    fn partial_year_month_become_exact_matches() {
        let filter = InternshipFilter::try_from(FilterQuery {
            year: Some("2023".to_string()),
            end_month: Some("12".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.start, Some(DateBound::Year(2023)));
        assert_eq!(filter.end, Some(DateBound::Month(12)));

        let month_only = InternshipFilter::try_from(FilterQuery {
            month: Some("3".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(month_only.start, Some(DateBound::Month(3)));
    }

    #[test]
    fn malformed_parameters_are_rejected() {
        let bad = |query: FilterQuery| matches!(InternshipFilter::try_from(query), Err(AppError::BadRequest(_)));

        assert!(bad(FilterQuery {
            status: Some("soon".to_string()),
            ..Default::default()
        }));
        assert!(bad(FilterQuery {
            month: Some("0".to_string()),
            ..Default::default()
        }));
        assert!(bad(FilterQuery {
            year: Some("2024".to_string()),
            month: Some("13".to_string()),
            ..Default::default()
        }));
        assert!(bad(FilterQuery {
            end_year: Some("twenty".to_string()),
            ..Default::default()
        }));
    }

    #[test]
    fn blank_parameters_are_ignored() {
        let filter = InternshipFilter::try_from(FilterQuery {
            status: Some(String::new()),
            company: Some("  ".to_string()),
            month: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter, InternshipFilter::default());
    }
}
