// src/models/course.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{
    error::AppError,
    models::{content::SectionWithContent, user::Role},
};

/// A course joined with its teacher's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub created_by: i64,
    pub is_active: bool,
    pub start_date: NaiveDate,
    pub duration_weeks: i32,
}

/// A course about to be inserted.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub teacher_id: i64,
    pub created_by: i64,
    pub start_date: NaiveDate,
    pub duration_weeks: i32,
}

/// DTO for creating a course.
/// `teacher_id` is only honoured when an admin creates the course.
#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 10000))]
    pub description: String,
    pub start_date: NaiveDate,
    #[validate(range(min = 1, max = 104))]
    pub duration_weeks: i32,
    pub teacher_id: Option<i64>,
}

/// Course detail page: the course plus every section with its content.
#[derive(Debug, Serialize)]
pub struct CourseWithContent {
    #[serde(flatten)]
    pub course: Course,
    pub sections: Vec<SectionWithContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ParticipantRow {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = AppError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<Role>().map_err(|_| {
            AppError::InternalServerError(format!("User {} has unknown role '{}'", row.id, row.role))
        })?;
        Ok(Self {
            id: row.id,
            email: row.email,
            full_name: row.full_name,
            role,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseParticipants {
    pub course_id: i64,
    pub teacher: Participant,
    pub students: Vec<Participant>,
}
