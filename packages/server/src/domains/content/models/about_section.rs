use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::text::split_lines;

/// About section copy. Singleton-by-convention: the page renders the first
/// active row.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct AboutSection {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    /// One bullet point per line.
    pub bullet_points: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AboutSection {
    /// First active about section, if any.
    pub async fn find_active(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM about_sections
             WHERE is_active = TRUE
             ORDER BY created_at
             LIMIT 1",
        )
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub fn bullet_points_list(&self) -> Vec<String> {
        split_lines(&self.bullet_points)
    }
}
