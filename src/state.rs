// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::{
    access::AccessControl,
    config::Config,
    repositories::{
        ContentRepository, CourseRepository, PgContentRepository, PgCourseRepository,
        PgQuizRepository, PgUserRepository, QuizRepository, UserRepository,
    },
    services::{ContentService, CourseService, QuizService, UserService},
};

/// The storage backends the services are built on.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub content: Arc<dyn ContentRepository>,
    pub quizzes: Arc<dyn QuizRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            courses: Arc::new(PgCourseRepository::new(pool.clone())),
            content: Arc::new(PgContentRepository::new(pool.clone())),
            quizzes: Arc::new(PgQuizRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<UserService>,
    pub courses: Arc<CourseService>,
    pub content: Arc<ContentService>,
    pub quizzes: Arc<QuizService>,
}

impl AppState {
    pub fn new(config: Config, repos: Repositories) -> Self {
        let access = Arc::new(AccessControl::new(
            repos.courses.clone(),
            repos.content.clone(),
            repos.quizzes.clone(),
        ));

        let users = Arc::new(UserService::new(
            repos.users.clone(),
            config.jwt_secret.clone(),
            config.jwt_expiration,
        ));
        let content = Arc::new(ContentService::new(
            repos.content.clone(),
            repos.courses.clone(),
            repos.quizzes.clone(),
            access.clone(),
        ));
        let courses = Arc::new(CourseService::new(
            repos.courses.clone(),
            repos.users,
            content.clone(),
            access.clone(),
        ));
        let quizzes = Arc::new(QuizService::new(
            repos.quizzes,
            repos.content,
            repos.courses,
            access,
        ));

        Self {
            config,
            users,
            courses,
            content,
            quizzes,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_is_cloneable() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }
}
