// src/models/result.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Represents the 'test_results' table in the database.
/// One row per graded attempt; never updated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct TestResult {
    pub id: i64,
    pub test_id: i64,
    pub student_id: i64,
    pub score: i32,
    pub attempted_at: DateTime<Utc>,
}

/// A graded attempt about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestResult {
    pub test_id: i64,
    pub student_id: i64,
    pub score: i32,
    pub attempted_at: DateTime<Utc>,
}

/// A student's own result, joined with its test and course.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentResult {
    pub test_id: i64,
    pub test_title: String,
    pub course_id: i64,
    pub course_title: String,
    pub score: i32,
    pub max_score: i32,
    pub attempted_at: DateTime<Utc>,
}

/// Raw row for the teacher-facing result reports.
#[derive(Debug, Clone, FromRow)]
pub struct ResultReportRow {
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub test_id: i64,
    pub test_title: String,
    pub score: i32,
    pub max_score: i32,
    pub attempted_at: DateTime<Utc>,
}

/// Result of one student on one test, as listed for teachers and admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResultReport {
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub test_id: i64,
    pub test_title: String,
    pub score: i32,
    pub max_score: i32,
    pub percentage: i32,
    pub attempted_at: DateTime<Utc>,
}

/// Integer percentage of `score` out of `max_score`, 0 for a zero-point test.
pub fn percentage(score: i32, max_score: i32) -> i32 {
    if max_score > 0 {
        ((i64::from(score) * 100) / i64::from(max_score)) as i32
    } else {
        0
    }
}

impl From<ResultReportRow> for TestResultReport {
    fn from(row: ResultReportRow) -> Self {
        Self {
            percentage: percentage(row.score, row.max_score),
            student_id: row.student_id,
            student_name: row.student_name,
            student_email: row.student_email,
            test_id: row.test_id,
            test_title: row.test_title,
            score: row.score,
            max_score: row.max_score,
            attempted_at: row.attempted_at,
        }
    }
}
