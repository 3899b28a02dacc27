use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::text::split_lines;

/// Newsletter signup section copy. Singleton-by-convention.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct NewsletterContent {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub image: Option<String>,
    /// One benefit per line.
    pub benefits: String,
    pub pdf_file: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsletterContent {
    /// First active newsletter section, if any.
    pub async fn find_active(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM newsletter_content
             WHERE is_active = TRUE
             ORDER BY created_at
             LIMIT 1",
        )
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub fn benefits_list(&self) -> Vec<String> {
        split_lines(&self.benefits)
    }
}
