// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, auth, content, course, quiz},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

/// Assembles the main application router.
///
/// * Public auth routes, JWT-protected API routes, admin-only routes.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (config and services).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let protected_routes = Router::new()
        .route("/me", get(auth::me))
        .route("/me/results", get(quiz::my_results))
        // Courses & enrollment
        .route("/courses", get(course::list_courses).post(course::create_course))
        .route(
            "/courses/{id}",
            get(course::get_course).delete(course::delete_course),
        )
        .route("/courses/{id}/enroll", post(course::enroll))
        .route(
            "/courses/{id}/students/{student_id}",
            delete(course::unenroll),
        )
        .route("/courses/{id}/participants", get(course::participants))
        .route("/courses/{id}/results", get(quiz::course_results))
        // Content
        .route("/courses/{id}/sections", post(content::create_section))
        .route("/sections/{id}/tasks", post(content::create_task))
        .route("/sections/{id}/materials", post(content::create_material))
        .route("/sections/{id}/tests", post(quiz::create_test))
        .route(
            "/tasks/{id}",
            get(content::get_task)
                .put(content::update_task)
                .delete(content::delete_task),
        )
        .route(
            "/materials/{id}",
            get(content::get_material)
                .put(content::update_material)
                .delete(content::delete_material),
        )
        // Tests
        .route(
            "/tests/{id}",
            get(quiz::get_test)
                .put(quiz::update_test)
                .delete(quiz::delete_test),
        )
        .route("/tests/{id}/edit", get(quiz::get_test_for_editing))
        .route("/tests/{id}/submit", post(quiz::submit_test))
        .route("/tests/{id}/results", get(quiz::test_results))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/users", get(admin::list_users))
        .route(
            "/users/{id}",
            put(admin::update_user).delete(admin::deactivate_user),
        )
        .route("/users/{id}/approve", put(admin::approve_user))
        .route("/reports/teachers", get(admin::list_teachers))
        .route("/reports/students", get(admin::list_students))
        .route("/reports/teachers/{id}/courses", get(admin::teacher_courses))
        .route("/reports/students/{id}/courses", get(admin::student_courses))
        // Double middleware protection: Auth first, then Admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .nest("/api", protected_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
