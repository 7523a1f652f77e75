// tests/common/mod.rs

//! In-memory storage behind the repository traits, plus fixtures.
//!
//! One `InMemoryDb` implements every repository so ownership lookups can
//! follow the same section -> course -> teacher chain the SQL joins follow.

#![allow(dead_code)]

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use course_portal::{
    access::Caller,
    config::Config,
    error::{AppError, AppResult},
    models::{
        content::{
            Material, MaterialRequest, MaterialType, Section, SectionRequest, Task, TaskRequest,
        },
        course::{Course, NewCourse, ParticipantRow},
        quiz::{
            AnswerOption, Question, Quiz, QuizRequest, QuizRow, QuizSummary, Submission,
            SubmittedAnswer,
        },
        result::{
            NewTestResult, ResultReportRow, StudentResult, TestResult, TestResultReport,
        },
        user::{AdminUserUpdateRequest, NewUser, Role, User},
    },
    quiz::{
        attempt::{self, AttemptLedger},
        codec,
    },
    repositories::{
        ContentRepository, CourseRepository, QuizDraft, QuizRepository, UserRepository,
        user_repository::EMAIL_TAKEN_MESSAGE,
    },
    state::{AppState, Repositories},
    utils::jwt::sign_jwt,
};

pub const TEST_SECRET: &str = "test_secret_for_integration_tests";

#[derive(Debug, Clone)]
struct StoredCourse {
    id: i64,
    title: String,
    description: String,
    teacher_id: i64,
    created_by: i64,
    is_active: bool,
    start_date: NaiveDate,
    duration_weeks: i32,
}

#[derive(Default)]
pub struct Tables {
    next_id: i64,
    users: BTreeMap<i64, User>,
    courses: BTreeMap<i64, StoredCourse>,
    /// (course_id, student_id)
    enrollments: BTreeSet<(i64, i64)>,
    sections: BTreeMap<i64, Section>,
    tasks: BTreeMap<i64, Task>,
    materials: BTreeMap<i64, Material>,
    tests: BTreeMap<i64, QuizRow>,
    results: Vec<TestResult>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn course(&self, stored: &StoredCourse) -> Course {
        Course {
            id: stored.id,
            title: stored.title.clone(),
            description: stored.description.clone(),
            teacher_id: stored.teacher_id,
            teacher_name: self
                .users
                .get(&stored.teacher_id)
                .map(|u| u.full_name.clone())
                .unwrap_or_default(),
            created_by: stored.created_by,
            is_active: stored.is_active,
            start_date: stored.start_date,
            duration_weeks: stored.duration_weeks,
        }
    }

    fn course_of_section(&self, section_id: i64) -> Option<i64> {
        self.sections.get(&section_id).map(|s| s.course_id)
    }

    fn course_of_test(&self, test_id: i64) -> Option<i64> {
        self.tests
            .get(&test_id)
            .and_then(|t| self.course_of_section(t.section_id))
    }

    fn teaches(&self, course_id: Option<i64>, user_id: i64) -> bool {
        course_id
            .and_then(|id| self.courses.get(&id))
            .is_some_and(|c| c.teacher_id == user_id)
    }

    fn delete_test(&mut self, test_id: i64) -> bool {
        self.results.retain(|r| r.test_id != test_id);
        self.tests.remove(&test_id).is_some()
    }

    fn delete_section(&mut self, section_id: i64) {
        self.tasks.retain(|_, t| t.section_id != section_id);
        self.materials.retain(|_, m| m.section_id != section_id);
        let tests: Vec<i64> = self
            .tests
            .values()
            .filter(|t| t.section_id == section_id)
            .map(|t| t.id)
            .collect();
        for test_id in tests {
            self.delete_test(test_id);
        }
        self.sections.remove(&section_id);
    }

    fn report_row(&self, result: &TestResult) -> Option<ResultReportRow> {
        let test = self.tests.get(&result.test_id)?;
        let student = self.users.get(&result.student_id)?;
        Some(ResultReportRow {
            student_id: student.id,
            student_name: student.full_name.clone(),
            student_email: student.email.clone(),
            test_id: test.id,
            test_title: test.title.clone(),
            score: result.score,
            max_score: test.max_score,
            attempted_at: result.attempted_at,
        })
    }
}

/// Runs the attempt steps against the locked tables.
struct LockedLedger<'a> {
    tables: &'a mut Tables,
}

#[async_trait]
impl AttemptLedger for LockedLedger<'_> {
    async fn has_attempt(&mut self, test_id: i64, student_id: i64) -> AppResult<bool> {
        Ok(self
            .tables
            .results
            .iter()
            .any(|r| r.test_id == test_id && r.student_id == student_id))
    }

    async fn load_quiz(&mut self, test_id: i64) -> AppResult<Option<Quiz>> {
        self.tables
            .tests
            .get(&test_id)
            .cloned()
            .map(Quiz::try_from)
            .transpose()
    }

    async fn record(&mut self, result: NewTestResult) -> AppResult<()> {
        if self
            .tables
            .results
            .iter()
            .any(|r| r.test_id == result.test_id && r.student_id == result.student_id)
        {
            return Err(AppError::DuplicateAttempt);
        }
        let id = self.tables.next_id();
        self.tables.results.push(TestResult {
            id,
            test_id: result.test_id,
            student_id: result.student_id,
            score: result.score,
            attempted_at: result.attempted_at,
        });
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDb {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            users: Arc::new(self.clone()),
            courses: Arc::new(self.clone()),
            content: Arc::new(self.clone()),
            quizzes: Arc::new(self.clone()),
        }
    }

    pub async fn result_count(&self, test_id: i64) -> usize {
        self.tables
            .read()
            .await
            .results
            .iter()
            .filter(|r| r.test_id == test_id)
            .count()
    }

    /// Stores a test whose content bypassed the codec.
    pub async fn insert_raw_test(&self, section_id: i64, content_json: &str) -> i64 {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        tables.tests.insert(
            id,
            QuizRow {
                id,
                section_id,
                title: "Corrupt".to_string(),
                content_json: content_json.to_string(),
                max_score: 10,
            },
        );
        id
    }
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn create(&self, user: NewUser) -> AppResult<i64> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AppError::Conflict(format!(
                "Email '{}' already exists",
                user.email
            )));
        }
        let id = tables.next_id();
        tables.users.insert(
            id,
            User {
                id,
                email: user.email,
                password: user.password_hash,
                full_name: user.full_name,
                role: user.role,
                is_active: user.is_active,
                created_at: Some(Utc::now()),
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, role: Option<Role>) -> AppResult<Vec<User>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .rev()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .cloned()
            .collect())
    }

    async fn set_active(&self, id: i64, active: bool) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(&id) {
            Some(user) => {
                user.is_active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update(&self, id: i64, changes: &AdminUserUpdateRequest) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let email_taken = changes
            .email
            .as_ref()
            .is_some_and(|email| tables.users.values().any(|u| u.id != id && &u.email == email));
        if email_taken {
            return Err(AppError::BadRequest(EMAIL_TAKEN_MESSAGE.to_string()));
        }
        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(false);
        };
        if let Some(full_name) = &changes.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        Ok(true)
    }
}

#[async_trait]
impl CourseRepository for InMemoryDb {
    async fn create(&self, course: NewCourse) -> AppResult<i64> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        tables.courses.insert(
            id,
            StoredCourse {
                id,
                title: course.title,
                description: course.description,
                teacher_id: course.teacher_id,
                created_by: course.created_by,
                is_active: true,
                start_date: course.start_date,
                duration_weeks: course.duration_weeks,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Course>> {
        let tables = self.tables.read().await;
        Ok(tables.courses.get(&id).map(|c| tables.course(c)))
    }

    async fn list_all(&self) -> AppResult<Vec<Course>> {
        let tables = self.tables.read().await;
        Ok(tables.courses.values().map(|c| tables.course(c)).collect())
    }

    async fn list_by_teacher(&self, teacher_id: i64) -> AppResult<Vec<Course>> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .values()
            .filter(|c| c.teacher_id == teacher_id)
            .map(|c| tables.course(c))
            .collect())
    }

    async fn list_by_student(&self, student_id: i64) -> AppResult<Vec<Course>> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .values()
            .filter(|c| tables.enrollments.contains(&(c.id, student_id)))
            .map(|c| tables.course(c))
            .collect())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.courses.remove(&id).is_none() {
            return Ok(false);
        }
        tables.enrollments.retain(|(course_id, _)| *course_id != id);
        let sections: Vec<i64> = tables
            .sections
            .values()
            .filter(|s| s.course_id == id)
            .map(|s| s.id)
            .collect();
        for section_id in sections {
            tables.delete_section(section_id);
        }
        Ok(true)
    }

    async fn is_course_owner(&self, course_id: i64, user_id: i64) -> AppResult<bool> {
        Ok(self.tables.read().await.teaches(Some(course_id), user_id))
    }

    async fn is_student_enrolled(&self, course_id: i64, student_id: i64) -> AppResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .enrollments
            .contains(&(course_id, student_id)))
    }

    async fn enroll(&self, course_id: i64, student_id: i64) -> AppResult<()> {
        if !self
            .tables
            .write()
            .await
            .enrollments
            .insert((course_id, student_id))
        {
            return Err(AppError::Conflict(
                "You are already enrolled in this course".to_string(),
            ));
        }
        Ok(())
    }

    async fn unenroll(&self, course_id: i64, student_id: i64) -> AppResult<bool> {
        Ok(self
            .tables
            .write()
            .await
            .enrollments
            .remove(&(course_id, student_id)))
    }

    async fn enrolled_students(&self, course_id: i64) -> AppResult<Vec<ParticipantRow>> {
        let tables = self.tables.read().await;
        let mut students: Vec<ParticipantRow> = tables
            .enrollments
            .iter()
            .filter(|(c, _)| *c == course_id)
            .filter_map(|(_, s)| tables.users.get(s))
            .map(|u| ParticipantRow {
                id: u.id,
                email: u.email.clone(),
                full_name: u.full_name.clone(),
                role: u.role.as_str().to_string(),
            })
            .collect();
        students.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(students)
    }
}

#[async_trait]
impl ContentRepository for InMemoryDb {
    async fn create_section(&self, course_id: i64, section: &SectionRequest) -> AppResult<i64> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        tables.sections.insert(
            id,
            Section {
                id,
                course_id,
                week_number: section.week_number,
                title: section.title.clone(),
                description: section.description.clone(),
                url: section.url.clone(),
                sort_order: section.sort_order,
            },
        );
        Ok(id)
    }

    async fn find_section(&self, id: i64) -> AppResult<Option<Section>> {
        Ok(self.tables.read().await.sections.get(&id).cloned())
    }

    async fn sections_for_course(&self, course_id: i64) -> AppResult<Vec<Section>> {
        let mut sections: Vec<Section> = self
            .tables
            .read()
            .await
            .sections
            .values()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect();
        sections.sort_by_key(|s| (s.sort_order, s.id));
        Ok(sections)
    }

    async fn is_section_owner(&self, section_id: i64, user_id: i64) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.teaches(tables.course_of_section(section_id), user_id))
    }

    async fn create_task(&self, section_id: i64, task: &TaskRequest) -> AppResult<i64> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        tables.tasks.insert(
            id,
            Task {
                id,
                section_id,
                title: task.title.clone(),
                description: task.description.clone(),
                due_date: task.due_date,
            },
        );
        Ok(id)
    }

    async fn find_task(&self, id: i64) -> AppResult<Option<Task>> {
        Ok(self.tables.read().await.tasks.get(&id).cloned())
    }

    async fn update_task(&self, id: i64, task: &TaskRequest) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.tasks.get_mut(&id) {
            Some(stored) => {
                stored.title = task.title.clone();
                stored.description = task.description.clone();
                stored.due_date = task.due_date;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_task(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.tasks.remove(&id).is_some())
    }

    async fn is_task_owner(&self, task_id: i64, user_id: i64) -> AppResult<bool> {
        let tables = self.tables.read().await;
        let course_id = tables
            .tasks
            .get(&task_id)
            .and_then(|t| tables.course_of_section(t.section_id));
        Ok(tables.teaches(course_id, user_id))
    }

    async fn tasks_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .tables
            .read()
            .await
            .tasks
            .values()
            .filter(|t| section_ids.contains(&t.section_id))
            .cloned()
            .collect();
        tasks.sort_by_key(|t| (t.due_date, t.id));
        Ok(tasks)
    }

    async fn create_material(&self, section_id: i64, material: &MaterialRequest) -> AppResult<i64> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        tables.materials.insert(
            id,
            Material {
                id,
                section_id,
                title: material.title.clone(),
                url: material.url.clone(),
                material_type: material.material_type,
                is_visible: material.is_visible,
            },
        );
        Ok(id)
    }

    async fn find_material(&self, id: i64) -> AppResult<Option<Material>> {
        Ok(self.tables.read().await.materials.get(&id).cloned())
    }

    async fn update_material(&self, id: i64, material: &MaterialRequest) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.materials.get_mut(&id) {
            Some(stored) => {
                stored.title = material.title.clone();
                stored.url = material.url.clone();
                stored.material_type = material.material_type;
                stored.is_visible = material.is_visible;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_material(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.materials.remove(&id).is_some())
    }

    async fn is_material_owner(&self, material_id: i64, user_id: i64) -> AppResult<bool> {
        let tables = self.tables.read().await;
        let course_id = tables
            .materials
            .get(&material_id)
            .and_then(|m| tables.course_of_section(m.section_id));
        Ok(tables.teaches(course_id, user_id))
    }

    async fn materials_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<Material>> {
        Ok(self
            .tables
            .read()
            .await
            .materials
            .values()
            .filter(|m| section_ids.contains(&m.section_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuizRepository for InMemoryDb {
    async fn create(&self, section_id: i64, draft: &QuizDraft) -> AppResult<i64> {
        let content_json = codec::encode(&draft.questions)?;
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        tables.tests.insert(
            id,
            QuizRow {
                id,
                section_id,
                title: draft.title.clone(),
                content_json,
                max_score: draft.max_score,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        self.tables
            .read()
            .await
            .tests
            .get(&id)
            .cloned()
            .map(Quiz::try_from)
            .transpose()
    }

    async fn update(&self, id: i64, draft: &QuizDraft) -> AppResult<bool> {
        let content_json = codec::encode(&draft.questions)?;
        let mut tables = self.tables.write().await;
        match tables.tests.get_mut(&id) {
            Some(row) => {
                row.title = draft.title.clone();
                row.max_score = draft.max_score;
                row.content_json = content_json;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.delete_test(id))
    }

    async fn summaries_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<QuizSummary>> {
        // Summary columns only; the stored questions are not decoded.
        Ok(self
            .tables
            .read()
            .await
            .tests
            .values()
            .filter(|t| section_ids.contains(&t.section_id))
            .map(|t| QuizSummary {
                id: t.id,
                section_id: t.section_id,
                title: t.title.clone(),
                max_score: t.max_score,
            })
            .collect())
    }

    async fn is_test_owner(&self, test_id: i64, user_id: i64) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.teaches(tables.course_of_test(test_id), user_id))
    }

    async fn find_course_id(&self, test_id: i64) -> AppResult<Option<i64>> {
        Ok(self.tables.read().await.course_of_test(test_id))
    }

    async fn submit_attempt(
        &self,
        test_id: i64,
        student_id: i64,
        submission: &Submission,
    ) -> AppResult<i32> {
        let mut tables = self.tables.write().await;
        let mut ledger = LockedLedger {
            tables: &mut *tables,
        };
        attempt::submit(&mut ledger, test_id, student_id, submission).await
    }

    async fn results_for_student(&self, student_id: i64) -> AppResult<Vec<StudentResult>> {
        let tables = self.tables.read().await;
        let mut results: Vec<StudentResult> = tables
            .results
            .iter()
            .filter(|r| r.student_id == student_id)
            .filter_map(|r| {
                let test = tables.tests.get(&r.test_id)?;
                let course_id = tables.course_of_section(test.section_id)?;
                let course = tables.courses.get(&course_id)?;
                Some(StudentResult {
                    test_id: test.id,
                    test_title: test.title.clone(),
                    course_id,
                    course_title: course.title.clone(),
                    score: r.score,
                    max_score: test.max_score,
                    attempted_at: r.attempted_at,
                })
            })
            .collect();
        results.sort_by(|a, b| b.attempted_at.cmp(&a.attempted_at));
        Ok(results)
    }

    async fn results_for_course(&self, course_id: i64) -> AppResult<Vec<TestResultReport>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<ResultReportRow> = tables
            .results
            .iter()
            .filter(|r| tables.course_of_test(r.test_id) == Some(course_id))
            .filter_map(|r| tables.report_row(r))
            .collect();
        rows.sort_by(|a, b| {
            (a.test_id, &a.student_name).cmp(&(b.test_id, &b.student_name))
        });
        Ok(rows.into_iter().map(TestResultReport::from).collect())
    }

    async fn results_for_test(&self, test_id: i64) -> AppResult<Vec<TestResultReport>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<ResultReportRow> = tables
            .results
            .iter()
            .filter(|r| r.test_id == test_id)
            .filter_map(|r| tables.report_row(r))
            .collect();
        rows.sort_by(|a, b| a.student_name.cmp(&b.student_name));
        Ok(rows.into_iter().map(TestResultReport::from).collect())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration: 600,
        rust_log: "error".to_string(),
        port: 0,
        admin_email: None,
        admin_password: None,
    }
}

/// A populated system: one course with one section, taught by `teacher`,
/// with `student` enrolled and `outsider` not.
pub struct World {
    pub db: InMemoryDb,
    pub state: AppState,
    pub admin: Caller,
    pub teacher: Caller,
    pub other_teacher: Caller,
    pub student: Caller,
    pub outsider: Caller,
    pub course_id: i64,
    pub section_id: i64,
}

impl World {
    pub async fn new() -> Self {
        let db = InMemoryDb::new();
        let state = AppState::new(test_config(), db.repositories());

        let admin = add_user(&db, "admin@uni.test", "Ada Admin", Role::Admin).await;
        let teacher = add_user(&db, "teacher@uni.test", "Tom Teacher", Role::Teacher).await;
        let other_teacher =
            add_user(&db, "other@uni.test", "Olga Other", Role::Teacher).await;
        let student = add_user(&db, "student@uni.test", "Sam Student", Role::Student).await;
        let outsider = add_user(&db, "outsider@uni.test", "Otto Outsider", Role::Student).await;

        let course_id = CourseRepository::create(
            &db,
            NewCourse {
                title: "Operating Systems".to_string(),
                description: "Processes, memory, files".to_string(),
                teacher_id: teacher.id,
                created_by: teacher.id,
                start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                duration_weeks: 12,
            },
        )
        .await
        .unwrap();

        let section_id = db
            .create_section(
                course_id,
                &SectionRequest {
                    week_number: 1,
                    title: "Week 1".to_string(),
                    description: "Introduction".to_string(),
                    url: None,
                    sort_order: 0,
                },
            )
            .await
            .unwrap();

        db.enroll(course_id, student.id).await.unwrap();

        Self {
            db,
            state,
            admin,
            teacher,
            other_teacher,
            student,
            outsider,
            course_id,
            section_id,
        }
    }

    pub fn token(&self, caller: &Caller) -> String {
        sign_jwt(caller.id, caller.role, TEST_SECRET, 600).unwrap()
    }

    /// Creates the two-question quiz (correct answers 0 and 1) as the course teacher.
    pub async fn create_two_question_quiz(&self) -> i64 {
        self.state
            .quizzes
            .create(&self.teacher, self.section_id, two_question_quiz())
            .await
            .unwrap()
            .id
    }
}

pub async fn add_user(db: &InMemoryDb, email: &str, name: &str, role: Role) -> Caller {
    let id = UserRepository::create(
        db,
        NewUser {
            email: email.to_string(),
            password_hash: "unused".to_string(),
            full_name: name.to_string(),
            role,
            is_active: true,
        },
    )
    .await
    .unwrap();
    Caller::new(id, role)
}

pub fn question(text: &str, options: &[&str], correct_option_index: usize) -> Question {
    Question {
        text: text.to_string(),
        options: options
            .iter()
            .map(|o| AnswerOption {
                text: o.to_string(),
            })
            .collect(),
        correct_option_index,
    }
}

pub fn two_question_quiz() -> QuizRequest {
    QuizRequest {
        title: "Week 1 quiz".to_string(),
        max_score: 10,
        questions: vec![
            question("What is a process?", &["A running program", "A file"], 0),
            question("What does a scheduler do?", &["Stores files", "Picks the next task"], 1),
        ],
    }
}

pub fn answers(pairs: &[(i64, i64)]) -> Submission {
    Submission {
        answers: pairs
            .iter()
            .map(|&(question_index, chosen_option_index)| SubmittedAnswer {
                question_index,
                chosen_option_index,
            })
            .collect(),
    }
}

pub fn material(title: &str, visible: bool) -> MaterialRequest {
    MaterialRequest {
        title: title.to_string(),
        url: "https://example.org/slides.pdf".to_string(),
        material_type: MaterialType::Pdf,
        is_visible: visible,
    }
}
