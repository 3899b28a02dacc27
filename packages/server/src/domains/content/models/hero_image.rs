use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Hero banner image shown at the top of the page.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct HeroImage {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub position: String, // 'desktop', 'mobile'
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl HeroImage {
    /// Active hero images in display order.
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM hero_images
             WHERE is_active = TRUE
             ORDER BY display_order, created_at DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
