// src/repositories/mod.rs

pub mod content_repository;
pub mod course_repository;
pub mod quiz_repository;
pub mod user_repository;

pub use content_repository::{ContentRepository, PgContentRepository};
pub use course_repository::{CourseRepository, PgCourseRepository};
pub use quiz_repository::{PgQuizRepository, QuizDraft, QuizRepository};
pub use user_repository::{PgUserRepository, UserRepository};
