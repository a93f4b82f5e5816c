// src/db/content_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        course::{Course, CreateCoursePayload, UpdateCoursePayload},
        news::{CreateNewsPayload, News, UpdateNewsPayload},
    },
};

// Notícias (site público) e cursos (portal do funcionário)
#[derive(Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Notícias
    // ---

    pub async fn list_news(&self, only_published: bool) -> Result<Vec<News>, AppError> {
        let news = sqlx::query_as::<_, News>(
            r#"
            SELECT * FROM news
            WHERE ($1 = FALSE OR published = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(only_published)
        .fetch_all(&self.pool)
        .await?;
        Ok(news)
    }

    pub async fn create_news(&self, author_id: Uuid, payload: &CreateNewsPayload) -> Result<News, AppError> {
        let news = sqlx::query_as::<_, News>(
            r#"
            INSERT INTO news (title, summary, content, image_url, published, author_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(payload.summary.as_deref())
        .bind(&payload.content)
        .bind(payload.image_url.as_deref())
        .bind(payload.published)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(news)
    }

    pub async fn update_news(&self, id: Uuid, payload: &UpdateNewsPayload) -> Result<Option<News>, AppError> {
        let news = sqlx::query_as::<_, News>(
            r#"
            UPDATE news SET
                title = COALESCE($2, title),
                summary = COALESCE($3, summary),
                content = COALESCE($4, content),
                image_url = COALESCE($5, image_url),
                published = COALESCE($6, published),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.title.as_deref())
        .bind(payload.summary.as_deref())
        .bind(payload.content.as_deref())
        .bind(payload.image_url.as_deref())
        .bind(payload.published)
        .fetch_optional(&self.pool)
        .await?;
        Ok(news)
    }

    pub async fn delete_news(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---
    // Cursos
    // ---

    pub async fn list_courses(&self, only_active: bool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT * FROM courses
            WHERE ($1 = FALSE OR active = TRUE)
            ORDER BY title ASC
            "#,
        )
        .bind(only_active)
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    pub async fn create_course(&self, payload: &CreateCoursePayload) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, content_url, duration_hours, active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.title)
        .bind(payload.description.as_deref())
        .bind(payload.content_url.as_deref())
        .bind(payload.duration_hours)
        .bind(payload.active)
        .fetch_one(&self.pool)
        .await?;
        Ok(course)
    }

    pub async fn update_course(&self, id: Uuid, payload: &UpdateCoursePayload) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                content_url = COALESCE($4, content_url),
                duration_hours = COALESCE($5, duration_hours),
                active = COALESCE($6, active),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.title.as_deref())
        .bind(payload.description.as_deref())
        .bind(payload.content_url.as_deref())
        .bind(payload.duration_hours)
        .bind(payload.active)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    pub async fn delete_course(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
