// src/quiz/attempt.rs

//! Single-attempt grading.
//!
//! A student gets exactly one graded attempt per test. The check, the grading
//! and the insert all run against one `AttemptLedger`, which storage backends
//! implement over a single transaction. The `(test_id, student_id)` unique
//! constraint remains the final word when two submissions race: a violation on
//! insert surfaces as `DuplicateAttempt` as well.

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        quiz::{Quiz, Submission},
        result::NewTestResult,
    },
    quiz::scoring,
};

/// Storage operations needed to grade one attempt, all within one transaction.
#[async_trait]
pub trait AttemptLedger: Send {
    async fn has_attempt(&mut self, test_id: i64, student_id: i64) -> AppResult<bool>;

    async fn load_quiz(&mut self, test_id: i64) -> AppResult<Option<Quiz>>;

    /// Must return `AppError::DuplicateAttempt` if the pair already has a result.
    async fn record(&mut self, result: NewTestResult) -> AppResult<()>;
}

/// Grades and records a submission. Returns the score.
///
/// Nothing is written unless every step before the insert succeeded, so an
/// aborted request leaves no partial result behind.
pub async fn submit<L>(
    ledger: &mut L,
    test_id: i64,
    student_id: i64,
    submission: &Submission,
) -> AppResult<i32>
where
    L: AttemptLedger + ?Sized,
{
    if ledger.has_attempt(test_id, student_id).await? {
        return Err(AppError::DuplicateAttempt);
    }

    let quiz = ledger
        .load_quiz(test_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Test not found".to_string()))?;

    let score = scoring::score(&quiz.questions, quiz.max_score, submission);

    ledger
        .record(NewTestResult {
            test_id,
            student_id,
            score,
            attempted_at: Utc::now(),
        })
        .await?;

    tracing::info!(test_id, student_id, score, "Graded test attempt");
    Ok(score)
}
