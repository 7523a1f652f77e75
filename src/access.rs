// src/access.rs

//! Who may do what.
//!
//! Authoring actions (create/edit/delete content, read reports) pass for an
//! ADMIN, or for a TEACHER who owns the course at the end of the chain
//! `quiz | task | material -> section -> course -> teacher`. A STUDENT never
//! passes an authoring check. Viewing and taking quizzes is gated by
//! enrollment instead.
//!
//! Ownership lookups return plain booleans; this module turns a `false` into
//! `AppError::Forbidden`. Existence is the caller's business: services look
//! the target up first so that a missing entity is a `NotFound`.

use std::{future::Future, str::FromStr, sync::Arc};

use crate::{
    error::{AppError, AppResult},
    models::user::Role,
    repositories::{ContentRepository, CourseRepository, QuizRepository},
    utils::jwt::Claims,
};

/// The authenticated principal of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: i64,
    pub role: Role,
}

impl Caller {
    pub fn new(id: i64, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Authoring policy given the result of an ownership lookup.
    pub fn may_author(&self, owns: bool) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Teacher => owns,
            Role::Student => false,
        }
    }
}

impl TryFrom<&Claims> for Caller {
    type Error = AppError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::AuthError("Invalid token subject".to_string()))?;
        let role = Role::from_str(&claims.role)
            .map_err(|_| AppError::AuthError("Invalid token role".to_string()))?;
        Ok(Self { id, role })
    }
}

fn forbidden() -> AppError {
    AppError::Forbidden("You do not have permission to perform this action".to_string())
}

/// Ownership and enrollment checks over the storage collaborators.
pub struct AccessControl {
    courses: Arc<dyn CourseRepository>,
    content: Arc<dyn ContentRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl AccessControl {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        content: Arc<dyn ContentRepository>,
        quizzes: Arc<dyn QuizRepository>,
    ) -> Self {
        Self {
            courses,
            content,
            quizzes,
        }
    }

    /// The ownership lookup only runs for teachers.
    async fn ensure_author<F>(&self, caller: &Caller, owns: F) -> AppResult<()>
    where
        F: Future<Output = AppResult<bool>>,
    {
        let owns = match caller.role {
            Role::Teacher => owns.await?,
            Role::Admin | Role::Student => false,
        };

        if caller.may_author(owns) {
            Ok(())
        } else {
            tracing::warn!(caller_id = caller.id, role = %caller.role, "Authoring check failed");
            Err(forbidden())
        }
    }

    pub async fn ensure_course_author(&self, caller: &Caller, course_id: i64) -> AppResult<()> {
        self.ensure_author(caller, self.courses.is_course_owner(course_id, caller.id))
            .await
    }

    pub async fn ensure_section_author(&self, caller: &Caller, section_id: i64) -> AppResult<()> {
        self.ensure_author(caller, self.content.is_section_owner(section_id, caller.id))
            .await
    }

    pub async fn ensure_task_author(&self, caller: &Caller, task_id: i64) -> AppResult<()> {
        self.ensure_author(caller, self.content.is_task_owner(task_id, caller.id))
            .await
    }

    pub async fn ensure_material_author(&self, caller: &Caller, material_id: i64) -> AppResult<()> {
        self.ensure_author(caller, self.content.is_material_owner(material_id, caller.id))
            .await
    }

    pub async fn ensure_test_author(&self, caller: &Caller, test_id: i64) -> AppResult<()> {
        self.ensure_author(caller, self.quizzes.is_test_owner(test_id, caller.id))
            .await
    }

    /// Course pages: ADMIN, the owning teacher, or an enrolled student.
    pub async fn ensure_course_viewer(&self, caller: &Caller, course_id: i64) -> AppResult<()> {
        let allowed = match caller.role {
            Role::Admin => true,
            Role::Teacher => self.courses.is_course_owner(course_id, caller.id).await?,
            Role::Student => {
                self.courses
                    .is_student_enrolled(course_id, caller.id)
                    .await?
            }
        };

        if allowed { Ok(()) } else { Err(forbidden()) }
    }

    /// Resolves the course of a test and checks the caller may see it.
    /// Returns the course id.
    pub async fn ensure_test_viewer(&self, caller: &Caller, test_id: i64) -> AppResult<i64> {
        let course_id = self
            .quizzes
            .find_course_id(test_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Test not found".to_string()))?;

        self.ensure_course_viewer(caller, course_id).await?;
        Ok(course_id)
    }

    /// Only enrolled students take tests. Role alone grants nothing here.
    pub async fn ensure_enrolled(&self, caller: &Caller, course_id: i64) -> AppResult<()> {
        if self
            .courses
            .is_student_enrolled(course_id, caller.id)
            .await?
        {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "You are not enrolled in this course".to_string(),
            ))
        }
    }
}
