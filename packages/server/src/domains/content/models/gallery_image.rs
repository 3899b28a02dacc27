use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Gallery grid image. Position selects the layout slot.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct GalleryImage {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub description: String,
    pub position: String, // 'large', 'small', 'tall'
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryImage {
    /// Active gallery images in display order, optionally capped to a
    /// preview count.
    pub async fn find_active(limit: Option<i64>, pool: &PgPool) -> Result<Vec<Self>> {
        match limit {
            Some(limit) => sqlx::query_as::<_, Self>(
                "SELECT * FROM gallery_images
                 WHERE is_active = TRUE
                 ORDER BY display_order, created_at DESC
                 LIMIT $1",
            )
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(Into::into),
            None => sqlx::query_as::<_, Self>(
                "SELECT * FROM gallery_images
                 WHERE is_active = TRUE
                 ORDER BY display_order, created_at DESC",
            )
            .fetch_all(pool)
            .await
            .map_err(Into::into),
        }
    }
}
