// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// One selectable answer. It has no identity beyond its position in the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
}

/// A multiple-choice question.
/// `correct_option_index` points into `options` by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub correct_option_index: usize,
}

/// Canonical quiz, with its questions already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub max_score: i32,
    pub questions: Vec<Question>,
}

/// Represents the 'tests' table in the database.
/// Questions are kept as encoded text in `content_json`.
#[derive(Debug, Clone, FromRow)]
pub struct QuizRow {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub content_json: String,
    pub max_score: i32,
}

/// Quiz as seen by a test-taker. Questions carry no answer key at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizForTaking {
    pub id: i64,
    pub title: String,
    pub max_score: i32,
    pub questions: Vec<QuestionForTaking>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionForTaking {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// Full-fidelity quiz for owners and admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizForEditing {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub max_score: i32,
    pub questions: Vec<Question>,
}

/// Quiz listing entry inside a section's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct QuizSummary {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub max_score: i32,
}

/// DTO for creating or replacing a quiz.
/// Question bounds are checked by the codec, not here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters."))]
    pub title: String,
    #[validate(range(min = 0, max = 100000, message = "max_score must be between 0 and 100000."))]
    pub max_score: i32,
    pub questions: Vec<Question>,
}

/// One submitted answer. Indices are signed so that out-of-range values are
/// accepted and ignored by the scorer instead of rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmittedAnswer {
    pub question_index: i64,
    pub chosen_option_index: i64,
}

/// A student's answers for one quiz. Transient, consumed once by grading.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Submission {
    pub answers: Vec<SubmittedAnswer>,
}
