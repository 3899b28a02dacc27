use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Global site identity. Singleton row created once by the admin tool and
/// updated in place, never deleted.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct SiteSettings {
    pub id: Uuid,
    pub site_name: String,
    pub logo: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    /// The single settings row, if one has been created yet.
    pub async fn find(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM site_settings ORDER BY created_at LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
