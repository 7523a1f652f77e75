// src/repositories/course_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult, map_unique_violation},
    models::course::{Course, NewCourse, ParticipantRow},
};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: NewCourse) -> AppResult<i64>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Course>>;
    async fn list_all(&self) -> AppResult<Vec<Course>>;
    async fn list_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<Course>>;
    async fn list_by_student(&self, student_id: i64) -> AppResult<Vec<Course>>;
    /// Removes the course and, by cascade, all of its content and results.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    async fn is_course_owner(&self, course_id: i64, user_id: i64) -> AppResult<bool>;
    async fn is_student_enrolled(&self, course_id: i64, student_id: i64) -> AppResult<bool>;
    /// A repeated enrollment is a `Conflict`.
    async fn enroll(&self, course_id: i64, student_id: i64) -> AppResult<()>;
    async fn unenroll(&self, course_id: i64, student_id: i64) -> AppResult<bool>;
    async fn enrolled_students(&self, course_id: i64) -> AppResult<Vec<ParticipantRow>>;
}

pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, course: NewCourse) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO courses (title, description, teacher_id, created_by, start_date, duration_weeks)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(course.teacher_id)
        .bind(course.created_by)
        .bind(course.start_date)
        .bind(course.duration_weeks)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create course: {:?}", e);
            AppError::from(e)
        })?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT
                c.id, c.title, c.description, c.teacher_id,
                t.full_name AS teacher_name,
                c.created_by, c.is_active, c.start_date, c.duration_weeks
            FROM courses c
            JOIN users t ON t.id = c.teacher_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    async fn list_all(&self) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT
                c.id, c.title, c.description, c.teacher_id,
                t.full_name AS teacher_name,
                c.created_by, c.is_active, c.start_date, c.duration_weeks
            FROM courses c
            JOIN users t ON t.id = c.teacher_id
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    async fn list_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT
                c.id, c.title, c.description, c.teacher_id,
                t.full_name AS teacher_name,
                c.created_by, c.is_active, c.start_date, c.duration_weeks
            FROM courses c
            JOIN users t ON t.id = c.teacher_id
            WHERE c.teacher_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    async fn list_by_student(&self, student_id: i64) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT
                c.id, c.title, c.description, c.teacher_id,
                t.full_name AS teacher_name,
                c.created_by, c.is_active, c.start_date, c.duration_weeks
            FROM courses c
            JOIN users t ON t.id = c.teacher_id
            JOIN enrollments e ON e.course_id = c.id
            WHERE e.student_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_course_owner(&self, course_id: i64, user_id: i64) -> AppResult<bool> {
        let owned: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM courses WHERE id = $1 AND teacher_id = $2)",
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(owned)
    }

    async fn is_student_enrolled(&self, course_id: i64, student_id: i64) -> AppResult<bool> {
        let enrolled: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM enrollments WHERE course_id = $1 AND student_id = $2)",
        )
        .bind(course_id)
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(enrolled)
    }

    async fn enroll(&self, course_id: i64, student_id: i64) -> AppResult<()> {
        sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)")
            .bind(student_id)
            .bind(course_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(
                    e,
                    AppError::Conflict("You are already enrolled in this course".to_string()),
                )
            })?;
        Ok(())
    }

    async fn unenroll(&self, course_id: i64, student_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM enrollments WHERE course_id = $1 AND student_id = $2")
            .bind(course_id)
            .bind(student_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn enrolled_students(&self, course_id: i64) -> AppResult<Vec<ParticipantRow>> {
        let students = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT u.id, u.email, u.full_name, u.role
            FROM enrollments e
            JOIN users u ON u.id = e.student_id
            WHERE e.course_id = $1
            ORDER BY u.full_name
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }
}
