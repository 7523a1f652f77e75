// src/quiz/scoring.rs

use std::collections::HashMap;

use crate::models::quiz::{Question, Submission};

/// Number of questions answered with their correct option.
/// Answers for indices outside the quiz are ignored. If an index is answered
/// more than once, the last answer counts.
pub fn count_correct(questions: &[Question], submission: &Submission) -> usize {
    let answers: HashMap<i64, i64> = submission
        .answers
        .iter()
        .map(|a| (a.question_index, a.chosen_option_index))
        .collect();

    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(&(*index as i64))
                .is_some_and(|&chosen| chosen == question.correct_option_index as i64)
        })
        .count()
}

/// Grades a submission: `floor(correct / total * max_score)`, 0 for an empty quiz.
/// Every question weighs the same and partial credit is always rounded down.
pub fn score(questions: &[Question], max_score: i32, submission: &Submission) -> i32 {
    let total = questions.len() as i64;
    if total == 0 {
        return 0;
    }
    let correct = count_correct(questions, submission) as i64;
    let max_score = i64::from(max_score.max(0));

    ((correct * max_score) / total) as i32
}
