// src/quiz/projection.rs

use crate::models::quiz::{QuestionForTaking, Quiz, QuizForEditing, QuizForTaking, QuizSummary};

/// View for test-takers. The answer key is dropped, not masked.
pub fn for_taking(quiz: &Quiz) -> QuizForTaking {
    QuizForTaking {
        id: quiz.id,
        title: quiz.title.clone(),
        max_score: quiz.max_score,
        questions: quiz
            .questions
            .iter()
            .map(|q| QuestionForTaking {
                text: q.text.clone(),
                options: q.options.clone(),
            })
            .collect(),
    }
}

/// Full view including correct answers. Callers must have checked authorship.
pub fn for_editing(quiz: &Quiz) -> QuizForEditing {
    QuizForEditing {
        id: quiz.id,
        section_id: quiz.section_id,
        title: quiz.title.clone(),
        max_score: quiz.max_score,
        questions: quiz.questions.clone(),
    }
}

pub fn summary(quiz: &Quiz) -> QuizSummary {
    QuizSummary {
        id: quiz.id,
        section_id: quiz.section_id,
        title: quiz.title.clone(),
        max_score: quiz.max_score,
    }
}
