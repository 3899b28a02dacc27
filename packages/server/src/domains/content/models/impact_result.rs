use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A headline impact number ("25%", "100+") with its caption.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ImpactResult {
    pub id: Uuid,
    pub title: String,
    pub value: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ImpactResult {
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM impact_results
             WHERE is_active = TRUE
             ORDER BY display_order, created_at DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
