//! 访客看板
//!
//! 展示正在实习的学生，按 `专业 -> 班级` 分组。

use crate::models::err::AppError;
use crate::models::guest::{GuestDashboard, RosterEntry};
use crate::AppState;
use chrono::NaiveDate;
use database::{Internship, Student, StudentQuery};
use shared_lib::{derive_status, InternshipStatus};
use std::collections::{BTreeMap, HashMap};

/// 专业或班级为空时的分组名称
pub const UNKNOWN_GROUP: &str = "Unknown";

fn group_name(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_GROUP)
        .to_string()
}

/// 构建访客看板
///
/// 只包含当天进行中的实习，找不到学生的实习不展示。
pub fn build_roster(internships: &[Internship], students: &[Student], today: NaiveDate) -> GuestDashboard {
    let by_roll: HashMap<&str, &Student> = students.iter().map(|s| (s.roll_number.as_str(), s)).collect();
    let mut categorized: BTreeMap<String, BTreeMap<String, Vec<RosterEntry>>> = BTreeMap::new();

    let ongoing = internships
        .iter()
        .filter(|i| derive_status(today, i.starting_date, i.ending_date) == InternshipStatus::Ongoing);

    for internship in ongoing {
        let Some(student) = by_roll.get(internship.roll_number.as_str()) else {
            continue;
        };

        categorized
            .entry(group_name(student.branch.as_deref()))
            .or_default()
            .entry(group_name(student.section.as_deref()))
            .or_default()
            .push(RosterEntry {
                name: student.name.clone(),
                roll_number: student.roll_number.clone(),
                email: student.email.clone(),
                semester: student.semester.clone(),
                organization_name: internship.organization_name.clone(),
            });
    }

    GuestDashboard { categorized }
}

pub async fn guest_dashboard(state: &AppState) -> Result<GuestDashboard, AppError> {
    let internships = state.internships.list_internships().await?;
    let students = state.students.list_students(StudentQuery::default()).await?;

    Ok(build_roster(&internships, &students, state.clock.today()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::filter::tests::{date, internship, student};

    #[test]
    fn only_ongoing_internships_are_listed_by_branch_and_section() {
        let internships = vec![
            internship(1, "S1", "Acme", date(2024, 12, 1), date(2025, 1, 31)),
            internship(2, "S2", "Beta", date(2024, 1, 1), date(2024, 2, 1)),
            internship(3, "S3", "Gamma", date(2024, 12, 31), date(2025, 3, 1)),
            internship(4, "GHOST", "Delta", date(2024, 12, 1), date(2025, 1, 31)),
        ];
        let students = vec![
            student("S1", Some("CSE"), Some("3-1"), Some("A")),
            student("S2", Some("CSE"), Some("3-1"), Some("A")),
            student("S3", None, Some("2-1"), Some("")),
        ];

        let roster = build_roster(&internships, &students, date(2024, 12, 31));

        let cse_a = &roster.categorized["CSE"]["A"];
        assert_eq!(cse_a.len(), 1);
        assert_eq!(cse_a[0].roll_number, "S1");
        assert_eq!(cse_a[0].organization_name, "Acme");

        let unknown = &roster.categorized["Unknown"]["Unknown"];
        assert_eq!(unknown[0].roll_number, "S3");
        assert_eq!(roster.categorized.len(), 2);
    }
}
