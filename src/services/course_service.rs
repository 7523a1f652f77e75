// src/services/course_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    access::{AccessControl, Caller},
    error::{AppError, AppResult},
    models::{
        course::{
            Course, CourseParticipants, CourseRequest, CourseWithContent, NewCourse, Participant,
        },
        user::Role,
    },
    repositories::{CourseRepository, UserRepository},
    services::content_service::ContentService,
    utils::html::clean_html,
};

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    users: Arc<dyn UserRepository>,
    content: Arc<ContentService>,
    access: Arc<AccessControl>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        users: Arc<dyn UserRepository>,
        content: Arc<ContentService>,
        access: Arc<AccessControl>,
    ) -> Self {
        Self {
            courses,
            users,
            content,
            access,
        }
    }

    /// Teachers create courses for themselves; an admin may name the teacher.
    pub async fn create(&self, caller: &Caller, request: CourseRequest) -> AppResult<Course> {
        if caller.role == Role::Student {
            return Err(AppError::Forbidden(
                "Only teachers and admins can create courses".to_string(),
            ));
        }
        request.validate()?;

        let teacher_id = match (caller.role, request.teacher_id) {
            (Role::Admin, Some(teacher_id)) => {
                let teacher = self
                    .users
                    .find_by_id(teacher_id)
                    .await?
                    .ok_or_else(|| AppError::BadRequest("Teacher does not exist".to_string()))?;
                if teacher.role != Role::Teacher {
                    return Err(AppError::BadRequest(
                        "Assigned user is not a teacher".to_string(),
                    ));
                }
                teacher_id
            }
            _ => caller.id,
        };

        let id = self
            .courses
            .create(NewCourse {
                title: request.title,
                description: clean_html(&request.description),
                teacher_id,
                created_by: caller.id,
                start_date: request.start_date,
                duration_weeks: request.duration_weeks,
            })
            .await?;

        tracing::info!(course_id = id, teacher_id, created_by = caller.id, "Course created");
        self.find(id).await
    }

    /// Admins see everything, teachers what they teach, students what they attend.
    pub async fn list(&self, caller: &Caller) -> AppResult<Vec<Course>> {
        match caller.role {
            Role::Admin => self.courses.list_all().await,
            Role::Teacher => self.courses.list_by_teacher(caller.id).await,
            Role::Student => self.courses.list_by_student(caller.id).await,
        }
    }

    pub async fn list_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<Course>> {
        self.courses.list_by_teacher(teacher_id).await
    }

    pub async fn list_by_student(&self, student_id: i64) -> AppResult<Vec<Course>> {
        self.courses.list_by_student(student_id).await
    }

    pub async fn get_with_content(
        &self,
        caller: &Caller,
        id: i64,
    ) -> AppResult<CourseWithContent> {
        let course = self.find(id).await?;
        self.access.ensure_course_viewer(caller, id).await?;

        let include_hidden = caller.role != Role::Student;
        let sections = self.content.course_content(id, include_hidden).await?;

        Ok(CourseWithContent { course, sections })
    }

    pub async fn delete(&self, caller: &Caller, id: i64) -> AppResult<()> {
        self.find(id).await?;
        self.access.ensure_course_author(caller, id).await?;

        if !self.courses.delete(id).await? {
            return Err(AppError::NotFound("Course not found".to_string()));
        }
        tracing::info!(course_id = id, deleted_by = caller.id, "Course deleted");
        Ok(())
    }

    pub async fn enroll(&self, caller: &Caller, course_id: i64) -> AppResult<()> {
        if caller.role != Role::Student {
            return Err(AppError::Forbidden(
                "Only students can enroll in courses".to_string(),
            ));
        }

        let course = self.find(course_id).await?;
        if !course.is_active {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        self.courses.enroll(course_id, caller.id).await?;
        tracing::info!(course_id, student_id = caller.id, "Student enrolled");
        Ok(())
    }

    pub async fn unenroll(&self, caller: &Caller, course_id: i64, student_id: i64) -> AppResult<()> {
        self.find(course_id).await?;
        self.access.ensure_course_author(caller, course_id).await?;

        if !self.courses.unenroll(course_id, student_id).await? {
            return Err(AppError::NotFound(
                "Student is not enrolled in this course".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn participants(
        &self,
        caller: &Caller,
        course_id: i64,
    ) -> AppResult<CourseParticipants> {
        let course = self.find(course_id).await?;
        self.access.ensure_course_author(caller, course_id).await?;

        let teacher = self
            .users
            .find_by_id(course.teacher_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalServerError(format!("Course {course_id} has no teacher"))
            })?;

        let students = self
            .courses
            .enrolled_students(course_id)
            .await?
            .into_iter()
            .map(Participant::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(CourseParticipants {
            course_id,
            teacher: Participant {
                id: teacher.id,
                email: teacher.email,
                full_name: teacher.full_name,
                role: teacher.role,
            },
            students,
        })
    }

    async fn find(&self, id: i64) -> AppResult<Course> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}
