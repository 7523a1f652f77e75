// src/quiz/codec.rs

//! At-rest encoding of a quiz's question list.
//!
//! Questions are stored as a JSON array in `tests.content_json`. Order of
//! questions and of options is preserved exactly, since answers refer to them
//! by position.

use crate::{
    error::{AppError, AppResult},
    models::quiz::Question,
};

/// Checks every question has at least one option and a correct index inside them.
pub fn validate(questions: &[Question]) -> AppResult<()> {
    for (index, question) in questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Question {index} must have at least one option"
            )));
        }
        if question.correct_option_index >= question.options.len() {
            return Err(AppError::BadRequest(format!(
                "Question {index}: correct_option_index {} is out of range for {} options",
                question.correct_option_index,
                question.options.len()
            )));
        }
    }
    Ok(())
}

/// Encodes questions for storage. Invalid questions are rejected, never written.
pub fn encode(questions: &[Question]) -> AppResult<String> {
    validate(questions)?;
    serde_json::to_string(questions)
        .map_err(|e| AppError::InternalServerError(format!("Failed to encode quiz: {e}")))
}

/// Decodes stored questions. Anything unreadable is storage corruption.
pub fn decode(text: &str) -> AppResult<Vec<Question>> {
    serde_json::from_str(text).map_err(|e| AppError::MalformedQuizData(e.to_string()))
}
