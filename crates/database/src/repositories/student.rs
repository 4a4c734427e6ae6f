//! 学生仓库
//!
//! 负责学生相关的数据库操作

use crate::models::student::{Student, StudentCreate, StudentQuery};
use crate::repositories::traits::StudentRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

/// 学生仓库结构体
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// 创建新的学生仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StudentRepositoryTrait for StudentRepository {
    /// 按学期、班级查询学生列表
    ///
    /// 使用 `$1 IS NULL OR ...` 的方式处理可选参数，避免拼接SQL。
    async fn list_students(&self, query: StudentQuery) -> DatabaseResult<Vec<Student>> {
        debug!("🔍 查询学生 - 学期: {:?}, 班级: {:?}", query.semester, query.section);

        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT roll_number, name, branch, semester, section, email, phone_no
            FROM portal.students
            WHERE ($1::TEXT IS NULL OR semester = $1)
              AND ($2::TEXT IS NULL OR section = $2)
            ORDER BY roll_number
            "#,
        )
        .bind(query.semester)
        .bind(query.section)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 找到 {} 个学生", students.len());
        Ok(students)
    }

    async fn get_student(&self, roll_number: &str) -> DatabaseResult<Option<Student>> {
        debug!("🔍 根据学号获取学生: {}", roll_number);

        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT roll_number, name, branch, semester, section, email, phone_no
            FROM portal.students
            WHERE roll_number = $1
            "#,
        )
        .bind(roll_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn create_student(&self, student: StudentCreate) -> DatabaseResult<Student> {
        debug!("📝 注册学生: {:#?}", student);

        let roll_number = student.roll_number.clone();
        let created = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO portal.students (roll_number, name, branch, semester, section, email, phone_no)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING roll_number, name, branch, semester, section, email, phone_no
            "#,
        )
        .bind(student.roll_number)
        .bind(student.name)
        .bind(student.branch)
        .bind(student.semester)
        .bind(student.section)
        .bind(student.email)
        .bind(student.phone_no)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, format!("student {roll_number}")))?;

        debug!("✅ 学生注册成功: {}", created.roll_number);
        Ok(created)
    }

    async fn create_student_if_absent(&self, student: StudentCreate) -> DatabaseResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO portal.students (roll_number, name, branch, semester, section, email, phone_no)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (roll_number) DO NOTHING
            "#,
        )
        .bind(student.roll_number)
        .bind(student.name)
        .bind(student.branch)
        .bind(student.semester)
        .bind(student.section)
        .bind(student.email)
        .bind(student.phone_no)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_students(&self) -> DatabaseResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM portal.students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
