// src/repositories/content_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::content::{
        Material, MaterialRequest, MaterialRow, Section, SectionRequest, Task, TaskRequest,
    },
};

/// Sections, tasks and materials of a course.
///
/// Ownership lookups walk leaf -> section -> course -> teacher and answer with
/// a plain `bool`; an unknown id is simply "not owned".
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create_section(&self, course_id: i64, section: &SectionRequest) -> AppResult<i64>;
    async fn find_section(&self, id: i64) -> AppResult<Option<Section>>;
    /// Sections of a course ordered by `sort_order`, then id.
    async fn sections_for_course(&self, course_id: i64) -> AppResult<Vec<Section>>;
    async fn is_section_owner(&self, section_id: i64, user_id: i64) -> AppResult<bool>;

    async fn create_task(&self, section_id: i64, task: &TaskRequest) -> AppResult<i64>;
    async fn find_task(&self, id: i64) -> AppResult<Option<Task>>;
    async fn update_task(&self, id: i64, task: &TaskRequest) -> AppResult<bool>;
    async fn delete_task(&self, id: i64) -> AppResult<bool>;
    async fn is_task_owner(&self, task_id: i64, user_id: i64) -> AppResult<bool>;
    /// Tasks of all the given sections in one round trip.
    async fn tasks_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<Task>>;

    async fn create_material(&self, section_id: i64, material: &MaterialRequest) -> AppResult<i64>;
    async fn find_material(&self, id: i64) -> AppResult<Option<Material>>;
    async fn update_material(&self, id: i64, material: &MaterialRequest) -> AppResult<bool>;
    async fn delete_material(&self, id: i64) -> AppResult<bool>;
    async fn is_material_owner(&self, material_id: i64, user_id: i64) -> AppResult<bool>;
    /// Materials of all the given sections in one round trip.
    async fn materials_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<Material>>;
}

pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn owns(&self, sql: &str, id: i64, user_id: i64) -> AppResult<bool> {
        let owned: bool = sqlx::query_scalar(sql)
            .bind(id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(owned)
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn create_section(&self, course_id: i64, section: &SectionRequest) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO course_sections (course_id, week_number, title, description, url, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(course_id)
        .bind(section.week_number)
        .bind(&section.title)
        .bind(&section.description)
        .bind(&section.url)
        .bind(section.sort_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_section(&self, id: i64) -> AppResult<Option<Section>> {
        let section = sqlx::query_as::<_, Section>(
            r#"
            SELECT id, course_id, week_number, title, description, url, sort_order
            FROM course_sections
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(section)
    }

    async fn sections_for_course(&self, course_id: i64) -> AppResult<Vec<Section>> {
        let sections = sqlx::query_as::<_, Section>(
            r#"
            SELECT id, course_id, week_number, title, description, url, sort_order
            FROM course_sections
            WHERE course_id = $1
            ORDER BY sort_order, id
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sections)
    }

    async fn is_section_owner(&self, section_id: i64, user_id: i64) -> AppResult<bool> {
        self.owns(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM course_sections s
                JOIN courses c ON c.id = s.course_id
                WHERE s.id = $1 AND c.teacher_id = $2
            )
            "#,
            section_id,
            user_id,
        )
        .await
    }

    async fn create_task(&self, section_id: i64, task: &TaskRequest) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tasks (section_id, title, description, due_date) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(section_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_task(&self, id: i64) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, section_id, title, description, due_date FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    async fn update_task(&self, id: i64, task: &TaskRequest) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE tasks SET title = $1, description = $2, due_date = $3 WHERE id = $4",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_task(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_task_owner(&self, task_id: i64, user_id: i64) -> AppResult<bool> {
        self.owns(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM tasks t
                JOIN course_sections s ON s.id = t.section_id
                JOIN courses c ON c.id = s.course_id
                WHERE t.id = $1 AND c.teacher_id = $2
            )
            "#,
            task_id,
            user_id,
        )
        .await
    }

    async fn tasks_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, section_id, title, description, due_date
            FROM tasks
            WHERE section_id = ANY($1)
            ORDER BY due_date, id
            "#,
        )
        .bind(section_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn create_material(&self, section_id: i64, material: &MaterialRequest) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO materials (section_id, title, url, type, is_visible)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(section_id)
        .bind(&material.title)
        .bind(&material.url)
        .bind(material.material_type.as_str())
        .bind(material.is_visible)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_material(&self, id: i64) -> AppResult<Option<Material>> {
        let row = sqlx::query_as::<_, MaterialRow>(
            "SELECT id, section_id, title, url, type, is_visible FROM materials WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Material::try_from).transpose()
    }

    async fn update_material(&self, id: i64, material: &MaterialRequest) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE materials SET title = $1, url = $2, type = $3, is_visible = $4 WHERE id = $5",
        )
        .bind(&material.title)
        .bind(&material.url)
        .bind(material.material_type.as_str())
        .bind(material.is_visible)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_material(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn is_material_owner(&self, material_id: i64, user_id: i64) -> AppResult<bool> {
        self.owns(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM materials m
                JOIN course_sections s ON s.id = m.section_id
                JOIN courses c ON c.id = s.course_id
                WHERE m.id = $1 AND c.teacher_id = $2
            )
            "#,
            material_id,
            user_id,
        )
        .await
    }

    async fn materials_for_sections(&self, section_ids: &[i64]) -> AppResult<Vec<Material>> {
        let rows = sqlx::query_as::<_, MaterialRow>(
            r#"
            SELECT id, section_id, title, url, type, is_visible
            FROM materials
            WHERE section_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(section_ids)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Material::try_from).collect()
    }
}
