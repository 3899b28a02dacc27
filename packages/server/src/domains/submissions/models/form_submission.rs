use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Raw payload captured from an external form-relay service.
///
/// The webhook endpoint itself only logs receipt; rows here are created and
/// worked through by the admin tooling.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct FormSubmission {
    pub id: Uuid,
    pub source: String, // 'booking', 'newsletter', 'footer'
    pub form_data: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
    pub processed: bool,
}

impl FormSubmission {
    pub async fn insert(
        source: &str,
        form_data: &serde_json::Value,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO form_submissions (source, form_data)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(source)
        .bind(form_data)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Unworked submissions, newest first.
    pub async fn find_unprocessed(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM form_submissions
             WHERE processed = FALSE
             ORDER BY submitted_at DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn mark_processed(id: Uuid, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE form_submissions SET processed = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
