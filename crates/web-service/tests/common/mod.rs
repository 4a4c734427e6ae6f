//! 测试公共工具
//!
//! [`MemoryStore`] 在内存中实现全部仓库 trait，测试不需要PostgreSQL。

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, Utc};
use database::{
    Admin, AdminCreate, AdminRepositoryTrait, DatabaseError, DatabaseResult, Feedback, FeedbackCreate,
    FeedbackRepositoryTrait, Internship, InternshipCreate, InternshipRepositoryTrait, Organization,
    OrganizationRepositoryTrait, Student, StudentCreate, StudentQuery, StudentRepositoryTrait,
    DEFAULT_RECORDED_STATUS,
};
use serde_json::Value;
use shared_lib::{AppConfig, FixedClock};
use std::sync::{Arc, Mutex, MutexGuard};
use tower::ServiceExt;
use web_service::auth::{issue_token, Role};
use web_service::routes::create_app_router;
use web_service::AppState;

pub const ADMIN_ID: &str = "admin";
pub const ADMIN_PASSWORD: &str = "Admin@123";
pub const GUEST_PASSWORD: &str = "Guest@123";

#[derive(Default)]
struct Tables {
    students: Vec<Student>,
    internships: Vec<Internship>,
    feedback: Vec<Feedback>,
    organizations: Vec<Organization>,
    admins: Vec<Admin>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn add_student(&self, roll: &str, branch: Option<&str>, semester: Option<&str>, section: Option<&str>) {
        self.lock().students.push(Student {
            roll_number: roll.to_string(),
            name: format!("Student {roll}"),
            branch: branch.map(str::to_string),
            semester: semester.map(str::to_string),
            section: section.map(str::to_string),
            email: format!("{}@example.com", roll.to_lowercase()),
            phone_no: None,
        });
    }

    pub fn add_internship(&self, roll: &str, company: &str, start: NaiveDate, end: NaiveDate) -> i32 {
        let mut tables = self.lock();
        let id = tables.next_id();
        tables.internships.push(Internship {
            id,
            roll_number: roll.to_string(),
            organization_name: company.to_string(),
            role: "Intern".to_string(),
            hr_name: None,
            hr_email: Some("hr@example.com".to_string()),
            hr_phone: None,
            starting_date: start,
            ending_date: end,
            duration_months: Some(3.0),
            stipend: Some(10000.0),
            offer_letter: None,
            approval_letter: None,
            noc: None,
            status: DEFAULT_RECORDED_STATUS.to_string(),
        });
        id
    }

    pub fn students(&self) -> Vec<Student> {
        self.lock().students.clone()
    }

    pub fn internships(&self) -> Vec<Internship> {
        self.lock().internships.clone()
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.lock().feedback.clone()
    }
}

#[async_trait::async_trait]
impl StudentRepositoryTrait for MemoryStore {
    async fn list_students(&self, query: StudentQuery) -> DatabaseResult<Vec<Student>> {
        Ok(self.lock().students.iter().filter(|s| query.matches(s)).cloned().collect())
    }

    async fn get_student(&self, roll_number: &str) -> DatabaseResult<Option<Student>> {
        Ok(self.lock().students.iter().find(|s| s.roll_number == roll_number).cloned())
    }

    async fn create_student(&self, student: StudentCreate) -> DatabaseResult<Student> {
        let mut tables = self.lock();
        if tables.students.iter().any(|s| s.roll_number == student.roll_number) {
            return Err(DatabaseError::duplicate(format!("student {}", student.roll_number)));
        }
        let created = Student {
            roll_number: student.roll_number,
            name: student.name,
            branch: student.branch,
            semester: student.semester,
            section: student.section,
            email: student.email,
            phone_no: student.phone_no,
        };
        tables.students.push(created.clone());
        Ok(created)
    }

    async fn create_student_if_absent(&self, student: StudentCreate) -> DatabaseResult<bool> {
        match self.create_student(student).await {
            Ok(_) => Ok(true),
            Err(DatabaseError::Duplicate(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn count_students(&self) -> DatabaseResult<i64> {
        Ok(self.lock().students.len() as i64)
    }
}

#[async_trait::async_trait]
impl InternshipRepositoryTrait for MemoryStore {
    async fn list_internships(&self) -> DatabaseResult<Vec<Internship>> {
        Ok(self.lock().internships.clone())
    }

    async fn list_internships_by_roll(&self, roll_number: &str) -> DatabaseResult<Vec<Internship>> {
        Ok(self
            .lock()
            .internships
            .iter()
            .filter(|i| i.roll_number == roll_number)
            .cloned()
            .collect())
    }

    async fn create_internship(&self, internship: InternshipCreate) -> DatabaseResult<Internship> {
        let mut tables = self.lock();
        let created = Internship {
            id: tables.next_id(),
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
            status: DEFAULT_RECORDED_STATUS.to_string(),
        };
        tables.internships.push(created.clone());
        Ok(created)
    }

    async fn update_recorded_status(&self, id: i32, status: String) -> DatabaseResult<Internship> {
        let mut tables = self.lock();
        let internship = tables
            .internships
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("internship {id}")))?;
        internship.status = status;
        Ok(internship.clone())
    }

    async fn delete_internship(&self, id: i32) -> DatabaseResult<Internship> {
        let mut tables = self.lock();
        let index = tables
            .internships
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("internship {id}")))?;
        Ok(tables.internships.remove(index))
    }
}

#[async_trait::async_trait]
impl FeedbackRepositoryTrait for MemoryStore {
    async fn list_feedback(&self) -> DatabaseResult<Vec<Feedback>> {
        Ok(self.lock().feedback.clone())
    }

    async fn create_feedback(&self, feedback: FeedbackCreate) -> DatabaseResult<Feedback> {
        let mut tables = self.lock();
        let duplicate = tables
            .feedback
            .iter()
            .any(|f| f.roll_number == feedback.roll_number && f.internship_id == feedback.internship_id);
        if duplicate {
            return Err(DatabaseError::duplicate(format!("feedback from {}", feedback.roll_number)));
        }
        let created = Feedback {
            id: tables.next_id(),
            roll_number: feedback.roll_number,
            internship_id: feedback.internship_id,
            skills_learned: feedback.skills_learned,
            technical_skill: feedback.technical_skill,
            communication_skill: feedback.communication_skill,
            team_work: feedback.team_work,
            time_management: feedback.time_management,
            overall_experience: feedback.overall_experience,
            created_at: Utc::now(),
        };
        tables.feedback.push(created.clone());
        Ok(created)
    }

    async fn feedback_exists(&self, roll_number: &str, internship_id: i32) -> DatabaseResult<bool> {
        Ok(self
            .lock()
            .feedback
            .iter()
            .any(|f| f.roll_number == roll_number && f.internship_id == Some(internship_id)))
    }

    async fn count_feedback(&self) -> DatabaseResult<i64> {
        Ok(self.lock().feedback.len() as i64)
    }
}

#[async_trait::async_trait]
impl OrganizationRepositoryTrait for MemoryStore {
    async fn list_organizations(&self) -> DatabaseResult<Vec<Organization>> {
        let mut organizations = self.lock().organizations.clone();
        organizations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(organizations)
    }

    async fn create_organization(&self, name: String) -> DatabaseResult<Organization> {
        let mut tables = self.lock();
        if tables.organizations.iter().any(|o| o.name == name) {
            return Err(DatabaseError::duplicate(format!("organization {name}")));
        }
        let created = Organization {
            id: tables.next_id(),
            name,
        };
        tables.organizations.push(created.clone());
        Ok(created)
    }

    async fn delete_organization(&self, id: i32) -> DatabaseResult<Organization> {
        let mut tables = self.lock();
        let index = tables
            .organizations
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("organization {id}")))?;
        Ok(tables.organizations.remove(index))
    }
}

#[async_trait::async_trait]
impl AdminRepositoryTrait for MemoryStore {
    async fn get_admin(&self, admin_id: &str) -> DatabaseResult<Option<Admin>> {
        Ok(self.lock().admins.iter().find(|a| a.admin_id == admin_id).cloned())
    }

    async fn create_admin_if_absent(&self, admin: AdminCreate) -> DatabaseResult<bool> {
        let mut tables = self.lock();
        if tables.admins.iter().any(|a| a.admin_id == admin.admin_id) {
            return Ok(false);
        }
        tables.admins.push(Admin {
            admin_id: admin.admin_id,
            name: admin.name,
            password_hash: admin.password_hash,
        });
        Ok(true)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 测试配置，已知专业只有 `CSE`
pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| {
        let value = match key {
            "DATABASE_URL" => "postgres://localhost/internship_test",
            "JWT_SECRET" => "test-secret",
            "KNOWN_BRANCHES" => "CSE",
            "ADMIN_ID" => ADMIN_ID,
            "ADMIN_PASSWORD" => ADMIN_PASSWORD,
            "GUEST_PASSWORD" => GUEST_PASSWORD,
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap()
}

pub fn test_state(store: Arc<MemoryStore>, today: NaiveDate) -> AppState {
    AppState {
        students: store.clone(),
        internships: store.clone(),
        feedback: store.clone(),
        organizations: store.clone(),
        admins: store,
        clock: Arc::new(FixedClock::new(today)),
        config: Arc::new(test_config()),
    }
}

pub fn make_test_app(store: Arc<MemoryStore>, today: NaiveDate) -> (Router, AppState) {
    let state = test_state(store, today);
    (create_app_router(state.clone()), state)
}

pub fn admin_token(state: &AppState) -> String {
    issue_token(&state.config.jwt, ADMIN_ID, "Admin", Role::Admin).unwrap().0
}

pub fn guest_token(state: &AppState) -> String {
    issue_token(&state.config.jwt, "Guest", "Guest", Role::Guest).unwrap().0
}

/// 发送请求，返回状态码、响应头和json响应体（空响应体为 `Value::Null`）
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, json)
}
