use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::text::split_commas;

/// A service offering card (keynote speaking, training, sales support).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub service_type: String, // 'keynote', 'training', 'sales'
    pub description: String,
    /// Icon identifier rendered by the frontend, e.g. 'fas fa-microphone'.
    pub icon: String,
    /// Comma-separated topic list.
    pub topics: String,
    pub button_text: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// Active services in display order.
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM services
             WHERE is_active = TRUE
             ORDER BY display_order, created_at DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub fn topics_list(&self) -> Vec<String> {
        split_commas(&self.topics)
    }
}
