// src/services/quiz_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    access::{AccessControl, Caller},
    error::{AppError, AppResult},
    models::{
        quiz::{Quiz, QuizForEditing, QuizForTaking, QuizRequest, QuizSummary, Submission},
        result::{StudentResult, TestResultReport},
    },
    quiz::{codec, projection},
    repositories::{ContentRepository, CourseRepository, QuizRepository},
};

/// Quiz authoring, taking, grading and result reports.
///
/// Every operation resolves its target first (`NotFound`), then checks the
/// caller (`Forbidden`), and only then touches storage.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    content: Arc<dyn ContentRepository>,
    courses: Arc<dyn CourseRepository>,
    access: Arc<AccessControl>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        content: Arc<dyn ContentRepository>,
        courses: Arc<dyn CourseRepository>,
        access: Arc<AccessControl>,
    ) -> Self {
        Self {
            quizzes,
            content,
            courses,
            access,
        }
    }

    pub async fn create(
        &self,
        caller: &Caller,
        section_id: i64,
        request: QuizRequest,
    ) -> AppResult<QuizSummary> {
        request.validate()?;
        codec::validate(&request.questions)?;

        if self.content.find_section(section_id).await?.is_none() {
            return Err(AppError::NotFound("Section not found".to_string()));
        }
        self.access.ensure_section_author(caller, section_id).await?;

        let id = self.quizzes.create(section_id, &request.into()).await?;
        let quiz = self.find(id).await?;

        tracing::info!(test_id = id, section_id, author_id = caller.id, "Test created");
        Ok(projection::summary(&quiz))
    }

    pub async fn get_for_editing(&self, caller: &Caller, test_id: i64) -> AppResult<QuizForEditing> {
        let quiz = self.find(test_id).await?;
        self.access.ensure_test_author(caller, test_id).await?;
        Ok(projection::for_editing(&quiz))
    }

    /// Replaces title, max score and questions wholesale.
    pub async fn update(
        &self,
        caller: &Caller,
        test_id: i64,
        request: QuizRequest,
    ) -> AppResult<QuizForEditing> {
        request.validate()?;
        codec::validate(&request.questions)?;

        self.find(test_id).await?;
        self.access.ensure_test_author(caller, test_id).await?;

        if !self.quizzes.update(test_id, &request.into()).await? {
            return Err(AppError::NotFound("Test not found".to_string()));
        }

        tracing::info!(test_id, author_id = caller.id, "Test updated");
        let quiz = self.find(test_id).await?;
        Ok(projection::for_editing(&quiz))
    }

    /// Deleting a test also drops every result recorded for it.
    pub async fn delete(&self, caller: &Caller, test_id: i64) -> AppResult<()> {
        self.find(test_id).await?;
        self.access.ensure_test_author(caller, test_id).await?;

        if !self.quizzes.delete(test_id).await? {
            return Err(AppError::NotFound("Test not found".to_string()));
        }

        tracing::info!(test_id, author_id = caller.id, "Test deleted");
        Ok(())
    }

    /// The answer-free view, for enrolled students, the course owner and admins.
    pub async fn get_for_taking(&self, caller: &Caller, test_id: i64) -> AppResult<QuizForTaking> {
        self.access.ensure_test_viewer(caller, test_id).await?;
        let quiz = self.find(test_id).await?;
        Ok(projection::for_taking(&quiz))
    }

    /// Grades the caller's one and only attempt.
    pub async fn submit(
        &self,
        caller: &Caller,
        test_id: i64,
        submission: &Submission,
    ) -> AppResult<i32> {
        let course_id = self
            .quizzes
            .find_course_id(test_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Test not found".to_string()))?;
        self.access.ensure_enrolled(caller, course_id).await?;

        self.quizzes
            .submit_attempt(test_id, caller.id, submission)
            .await
    }

    pub async fn results_for_student(&self, caller: &Caller) -> AppResult<Vec<StudentResult>> {
        self.quizzes.results_for_student(caller.id).await
    }

    pub async fn results_for_course(
        &self,
        caller: &Caller,
        course_id: i64,
    ) -> AppResult<Vec<TestResultReport>> {
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(AppError::NotFound("Course not found".to_string()));
        }
        self.access.ensure_course_author(caller, course_id).await?;
        self.quizzes.results_for_course(course_id).await
    }

    pub async fn results_for_test(
        &self,
        caller: &Caller,
        test_id: i64,
    ) -> AppResult<Vec<TestResultReport>> {
        self.find(test_id).await?;
        self.access.ensure_test_author(caller, test_id).await?;
        self.quizzes.results_for_test(test_id).await
    }

    async fn find(&self, test_id: i64) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(test_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Test not found".to_string()))
    }
}
