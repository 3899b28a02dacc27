use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Client testimonial card.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Testimonial {
    pub id: Uuid,
    pub client_name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM testimonials
             WHERE is_active = TRUE
             ORDER BY display_order, created_at DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
