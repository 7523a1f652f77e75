// src/models/content.rs

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;
use validator::Validate;

use crate::{error::AppError, models::quiz::QuizSummary};

/// Represents the 'course_sections' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Section {
    pub id: i64,
    pub course_id: i64,
    pub week_number: i32,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    /// Display position within the course.
    pub sort_order: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SectionRequest {
    #[validate(range(min = 0, max = 104))]
    pub week_number: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub description: String,
    #[validate(custom(function = validate_url_string))]
    pub url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

/// Represents the 'tasks' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(max = 20000))]
    pub description: String,
    pub due_date: DateTime<Utc>,
}

/// Kind of a learning material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialType {
    Video,
    Pdf,
    Link,
    Document,
    Other,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Video => "VIDEO",
            MaterialType::Pdf => "PDF",
            MaterialType::Link => "LINK",
            MaterialType::Document => "DOCUMENT",
            MaterialType::Other => "OTHER",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VIDEO" => Ok(MaterialType::Video),
            "PDF" => Ok(MaterialType::Pdf),
            "LINK" => Ok(MaterialType::Link),
            "DOCUMENT" => Ok(MaterialType::Document),
            "OTHER" => Ok(MaterialType::Other),
            other => Err(AppError::BadRequest(format!("Unknown material type '{other}'"))),
        }
    }
}

/// Represents the 'materials' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct MaterialRow {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub url: String,
    #[sqlx(rename = "type")]
    pub material_type: String,
    pub is_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub is_visible: bool,
}

impl TryFrom<MaterialRow> for Material {
    type Error = AppError;

    fn try_from(row: MaterialRow) -> Result<Self, Self::Error> {
        let material_type = row.material_type.parse::<MaterialType>().map_err(|_| {
            AppError::InternalServerError(format!(
                "Material {} has unknown type '{}'",
                row.id, row.material_type
            ))
        })?;
        Ok(Self {
            id: row.id,
            section_id: row.section_id,
            title: row.title,
            url: row.url,
            material_type,
            is_visible: row.is_visible,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MaterialRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub url: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

/// A section with everything attached to it, for the course detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionWithContent {
    #[serde(flatten)]
    pub section: Section,
    pub tasks: Vec<Task>,
    pub materials: Vec<Material>,
    pub tests: Vec<QuizSummary>,
}

fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}
