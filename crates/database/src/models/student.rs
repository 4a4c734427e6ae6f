//! 学生数据库模型

/// 学生信息
///
/// 学号 `roll_number` 是唯一键。专业、学期、班级来自表单或历史导入数据，可能为空。
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub roll_number: String,
    pub name: String,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub section: Option<String>,
    pub email: String,
    pub phone_no: Option<String>,
}

/// 学生创建参数
#[derive(Debug, Clone)]
pub struct StudentCreate {
    pub roll_number: String,
    pub name: String,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub section: Option<String>,
    pub email: String,
    pub phone_no: Option<String>,
}

/// 学生列表查询条件，字段为 `None` 时不过滤
#[derive(Debug, Clone, Default)]
pub struct StudentQuery {
    pub semester: Option<String>,
    pub section: Option<String>,
}

impl StudentQuery {
    pub fn matches(&self, student: &Student) -> bool {
        let eq = |wanted: &Option<String>, actual: &Option<String>| match wanted {
            Some(w) => actual.as_deref() == Some(w.as_str()),
            None => true,
        };
        eq(&self.semester, &student.semester) && eq(&self.section, &student.section)
    }
}

impl From<Student> for StudentCreate {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn student(semester: Option<&str>, section: Option<&str>) -> Student {
        Student {
            roll_number: "20A91A0101".to_string(),
            name: "Asha".to_string(),
            branch: Some("CSE".to_string()),
            semester: semester.map(str::to_string),
            section: section.map(str::to_string),
            email: "asha@example.com".to_string(),
            phone_no: None,
        }
    }

    #[test]
    fn empty_query_matches_everyone() {
        assert!(StudentQuery::default().matches(&student(None, None)));
    }

    #[test]
    fn query_fields_are_conjunctive() {
        let query = StudentQuery {
            semester: Some("3-1".to_string()),
            section: Some("A".to_string()),
        };
        assert!(query.matches(&student(Some("3-1"), Some("A"))));
        assert!(!query.matches(&student(Some("3-1"), Some("B"))));
        assert!(!query.matches(&student(None, Some("A"))));
    }
}
