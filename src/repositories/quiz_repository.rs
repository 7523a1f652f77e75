// src/repositories/quiz_repository.rs

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::{
    error::{AppError, AppResult, map_unique_violation},
    models::{
        quiz::{Question, Quiz, QuizRequest, QuizRow, QuizSummary, Submission},
        result::{NewTestResult, ResultReportRow, StudentResult, TestResultReport},
    },
    quiz::{
        attempt::{self, AttemptLedger},
        codec,
    },
};

/// A quiz as written by its author; questions are encoded on the way in.
#[derive(Debug, Clone)]
pub struct QuizDraft {
    pub title: String,
    pub max_score: i32,
    pub questions: Vec<Question>,
}

impl From<QuizRequest> for QuizDraft {
    fn from(request: QuizRequest) -> Self {
        Self {
            title: request.title,
            max_score: request.max_score,
            questions: request.questions,
        }
    }
}

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, section_id: i64, draft: &QuizDraft) -> AppResult<i64>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    /// Replaces title, max score and the whole question list.
    async fn update(&self, id: i64, draft: &QuizDraft) -> AppResult<bool>;
    /// Removes the quiz and, by cascade, its results.
    async fn delete(&self, id: i64) -> AppResult<bool>;
    /// Quiz summaries of all the given sections in one round trip.
    async fn summaries_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<QuizSummary>>;

    /// test -> section -> course -> teacher.
    async fn is_test_owner(&self, test_id: i64, user_id: i64) -> AppResult<bool>;
    async fn find_course_id(&self, test_id: i64) -> AppResult<Option<i64>>;

    /// Grades and stores the single allowed attempt of `student_id`.
    async fn submit_attempt(
        &self,
        test_id: i64,
        student_id: i64,
        submission: &Submission,
    ) -> AppResult<i32>;

    async fn results_for_student(&self, student_id: i64) -> AppResult<Vec<StudentResult>>;
    async fn results_for_course(&self, course_id: i64) -> AppResult<Vec<TestResultReport>>;
    async fn results_for_test(&self, test_id: i64) -> AppResult<Vec<TestResultReport>>;
}

impl TryFrom<QuizRow> for Quiz {
    type Error = AppError;

    fn try_from(row: QuizRow) -> Result<Self, Self::Error> {
        Ok(Quiz {
            questions: codec::decode(&row.content_json)?,
            id: row.id,
            section_id: row.section_id,
            title: row.title,
            max_score: row.max_score,
        })
    }
}

pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Every step of an attempt runs on the connection of one open transaction.
#[async_trait]
impl AttemptLedger for PgConnection {
    async fn has_attempt(&mut self, test_id: i64, student_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM test_results WHERE test_id = $1 AND student_id = $2)",
        )
        .bind(test_id)
        .bind(student_id)
        .fetch_one(&mut *self)
        .await?;
        Ok(exists)
    }

    async fn load_quiz(&mut self, test_id: i64) -> AppResult<Option<Quiz>> {
        let row = sqlx::query_as::<_, QuizRow>(
            "SELECT id, section_id, title, content_json, max_score FROM tests WHERE id = $1",
        )
        .bind(test_id)
        .fetch_optional(&mut *self)
        .await?;
        row.map(Quiz::try_from).transpose()
    }

    async fn record(&mut self, result: NewTestResult) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO test_results (test_id, student_id, score, attempted_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(result.test_id)
        .bind(result.student_id)
        .bind(result.score)
        .bind(result.attempted_at)
        .execute(&mut *self)
        .await
        .map_err(|e| map_unique_violation(e, AppError::DuplicateAttempt))?;
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    async fn create(&self, section_id: i64, draft: &QuizDraft) -> AppResult<i64> {
        let content_json = codec::encode(&draft.questions)?;
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tests (section_id, title, content_json, max_score)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(section_id)
        .bind(&draft.title)
        .bind(content_json)
        .bind(draft.max_score)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create test: {:?}", e);
            AppError::from(e)
        })?;
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let row = sqlx::query_as::<_, QuizRow>(
            "SELECT id, section_id, title, content_json, max_score FROM tests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Quiz::try_from).transpose()
    }

    async fn update(&self, id: i64, draft: &QuizDraft) -> AppResult<bool> {
        let content_json = codec::encode(&draft.questions)?;
        let result = sqlx::query(
            "UPDATE tests SET title = $1, max_score = $2, content_json = $3 WHERE id = $4",
        )
        .bind(&draft.title)
        .bind(draft.max_score)
        .bind(content_json)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn summaries_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<QuizSummary>> {
        let summaries = sqlx::query_as::<_, QuizSummary>(
            "SELECT id, section_id, title, max_score FROM tests WHERE section_id = ANY($1) ORDER BY id",
        )
        .bind(section_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(summaries)
    }

    async fn is_test_owner(&self, test_id: i64, user_id: i64) -> AppResult<bool> {
        let owned: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM tests t
                JOIN course_sections s ON s.id = t.section_id
                JOIN courses c ON c.id = s.course_id
                WHERE t.id = $1 AND c.teacher_id = $2
            )
            "#,
        )
        .bind(test_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(owned)
    }

    async fn find_course_id(&self, test_id: i64) -> AppResult<Option<i64>> {
        let course_id: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT s.course_id
            FROM tests t
            JOIN course_sections s ON s.id = t.section_id
            WHERE t.id = $1
            "#,
        )
        .bind(test_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course_id)
    }

    async fn submit_attempt(
        &self,
        test_id: i64,
        student_id: i64,
        submission: &Submission,
    ) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;
        let score = attempt::submit(&mut *tx, test_id, student_id, submission).await?;
        tx.commit().await?;
        Ok(score)
    }

    async fn results_for_student(&self, student_id: i64) -> AppResult<Vec<StudentResult>> {
        let results = sqlx::query_as::<_, StudentResult>(
            r#"
            SELECT
                r.test_id,
                t.title AS test_title,
                c.id AS course_id,
                c.title AS course_title,
                r.score,
                t.max_score,
                r.attempted_at
            FROM test_results r
            JOIN tests t ON t.id = r.test_id
            JOIN course_sections s ON s.id = t.section_id
            JOIN courses c ON c.id = s.course_id
            WHERE r.student_id = $1
            ORDER BY r.attempted_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(results)
    }

    async fn results_for_course(&self, course_id: i64) -> AppResult<Vec<TestResultReport>> {
        let rows = sqlx::query_as::<_, ResultReportRow>(
            r#"
            SELECT
                r.student_id,
                u.full_name AS student_name,
                u.email AS student_email,
                r.test_id,
                t.title AS test_title,
                r.score,
                t.max_score,
                r.attempted_at
            FROM test_results r
            JOIN tests t ON t.id = r.test_id
            JOIN course_sections s ON s.id = t.section_id
            JOIN users u ON u.id = r.student_id
            WHERE s.course_id = $1
            ORDER BY r.test_id, u.full_name
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(TestResultReport::from).collect())
    }

    async fn results_for_test(&self, test_id: i64) -> AppResult<Vec<TestResultReport>> {
        let rows = sqlx::query_as::<_, ResultReportRow>(
            r#"
            SELECT
                r.student_id,
                u.full_name AS student_name,
                u.email AS student_email,
                r.test_id,
                t.title AS test_title,
                r.score,
                t.max_score,
                r.attempted_at
            FROM test_results r
            JOIN tests t ON t.id = r.test_id
            JOIN course_sections s ON s.id = t.section_id
            JOIN users u ON u.id = r.student_id
            WHERE r.test_id = $1
            ORDER BY u.full_name
            "#,
        )
        .bind(test_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(TestResultReport::from).collect())
    }
}
