// src/services/content_service.rs

use std::{collections::HashMap, sync::Arc};

use validator::Validate;

use crate::{
    access::{AccessControl, Caller},
    error::{AppError, AppResult},
    models::content::{
        Material, MaterialRequest, Section, SectionRequest, SectionWithContent, Task, TaskRequest,
    },
    repositories::{ContentRepository, CourseRepository, QuizRepository},
    utils::html::clean_html,
};

/// Sections, tasks and materials, plus the nested course view.
pub struct ContentService {
    content: Arc<dyn ContentRepository>,
    courses: Arc<dyn CourseRepository>,
    quizzes: Arc<dyn QuizRepository>,
    access: Arc<AccessControl>,
}

impl ContentService {
    pub fn new(
        content: Arc<dyn ContentRepository>,
        courses: Arc<dyn CourseRepository>,
        quizzes: Arc<dyn QuizRepository>,
        access: Arc<AccessControl>,
    ) -> Self {
        Self {
            content,
            courses,
            quizzes,
            access,
        }
    }

    pub async fn create_section(
        &self,
        caller: &Caller,
        course_id: i64,
        mut request: SectionRequest,
    ) -> AppResult<Section> {
        request.validate()?;

        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(AppError::NotFound("Course not found".to_string()));
        }
        self.access.ensure_course_author(caller, course_id).await?;

        request.description = clean_html(&request.description);
        let id = self.content.create_section(course_id, &request).await?;
        self.get_section(id).await
    }

    pub async fn get_section(&self, id: i64) -> AppResult<Section> {
        self.content
            .find_section(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Section not found".to_string()))
    }

    pub async fn create_task(
        &self,
        caller: &Caller,
        section_id: i64,
        mut request: TaskRequest,
    ) -> AppResult<Task> {
        request.validate()?;
        self.get_section(section_id).await?;
        self.access.ensure_section_author(caller, section_id).await?;

        request.description = clean_html(&request.description);
        let id = self.content.create_task(section_id, &request).await?;
        self.find_task(id).await
    }

    pub async fn get_task(&self, caller: &Caller, id: i64) -> AppResult<Task> {
        let task = self.find_task(id).await?;
        self.access.ensure_task_author(caller, id).await?;
        Ok(task)
    }

    pub async fn update_task(
        &self,
        caller: &Caller,
        id: i64,
        mut request: TaskRequest,
    ) -> AppResult<Task> {
        request.validate()?;
        self.find_task(id).await?;
        self.access.ensure_task_author(caller, id).await?;

        request.description = clean_html(&request.description);
        if !self.content.update_task(id, &request).await? {
            return Err(AppError::NotFound("Task not found".to_string()));
        }
        self.find_task(id).await
    }

    pub async fn delete_task(&self, caller: &Caller, id: i64) -> AppResult<()> {
        self.find_task(id).await?;
        self.access.ensure_task_author(caller, id).await?;

        if !self.content.delete_task(id).await? {
            return Err(AppError::NotFound("Task not found".to_string()));
        }
        Ok(())
    }

    async fn find_task(&self, id: i64) -> AppResult<Task> {
        self.content
            .find_task(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    pub async fn create_material(
        &self,
        caller: &Caller,
        section_id: i64,
        request: MaterialRequest,
    ) -> AppResult<Material> {
        request.validate()?;
        self.get_section(section_id).await?;
        self.access.ensure_section_author(caller, section_id).await?;

        let id = self.content.create_material(section_id, &request).await?;
        self.find_material(id).await
    }

    pub async fn get_material(&self, caller: &Caller, id: i64) -> AppResult<Material> {
        let material = self.find_material(id).await?;
        self.access.ensure_material_author(caller, id).await?;
        Ok(material)
    }

    pub async fn update_material(
        &self,
        caller: &Caller,
        id: i64,
        request: MaterialRequest,
    ) -> AppResult<Material> {
        request.validate()?;
        self.find_material(id).await?;
        self.access.ensure_material_author(caller, id).await?;

        if !self.content.update_material(id, &request).await? {
            return Err(AppError::NotFound("Material not found".to_string()));
        }
        self.find_material(id).await
    }

    pub async fn delete_material(&self, caller: &Caller, id: i64) -> AppResult<()> {
        self.find_material(id).await?;
        self.access.ensure_material_author(caller, id).await?;

        if !self.content.delete_material(id).await? {
            return Err(AppError::NotFound("Material not found".to_string()));
        }
        Ok(())
    }

    async fn find_material(&self, id: i64) -> AppResult<Material> {
        self.content
            .find_material(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material not found".to_string()))
    }

    /// Every section of a course with its tasks, materials and quiz summaries.
    ///
    /// Children are fetched in one query per kind for the whole set of
    /// sections, then grouped. Hidden materials are dropped unless
    /// `include_hidden` is set.
    pub async fn course_content(
        &self,
        course_id: i64,
        include_hidden: bool,
    ) -> AppResult<Vec<SectionWithContent>> {
        let sections = self.content.sections_for_course(course_id).await?;
        if sections.is_empty() {
            return Ok(Vec::new());
        }

        let section_ids: Vec<i64> = sections.iter().map(|s| s.id).collect();
        let (tasks, materials, tests) = tokio::try_join!(
            self.content.tasks_for_sections(&section_ids),
            self.content.materials_for_sections(&section_ids),
            self.quizzes.summaries_for_sections(&section_ids),
        )?;

        let mut tasks = group_by_section(tasks, |t| t.section_id);
        let mut materials = group_by_section(
            materials
                .into_iter()
                .filter(|m| include_hidden || m.is_visible),
            |m| m.section_id,
        );
        let mut tests = group_by_section(tests, |q| q.section_id);

        Ok(sections
            .into_iter()
            .map(|section| SectionWithContent {
                tasks: tasks.remove(&section.id).unwrap_or_default(),
                materials: materials.remove(&section.id).unwrap_or_default(),
                tests: tests.remove(&section.id).unwrap_or_default(),
                section,
            })
            .collect())
    }
}

/// Buckets items by section id, keeping their relative order.
fn group_by_section<T>(
    items: impl IntoIterator<Item = T>,
    section_of: impl Fn(&T) -> i64,
) -> HashMap<i64, Vec<T>> {
    let mut groups: HashMap<i64, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(section_of(&item)).or_default().push(item);
    }
    groups
}
