use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A newsletter signup. `email` is unique at the store level; that
/// constraint, not the pre-check in the submit activity, is what guarantees
/// at most one row per address under concurrent submissions.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub source: String, // 'newsletter_section', 'footer'
    pub is_active: bool,
    pub agreed_to_terms: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a subscription
#[derive(Debug, Clone)]
pub struct NewNewsletterSubscription {
    pub email: String,
    pub name: String,
    pub source: String,
    pub agreed_to_terms: bool,
}

impl NewsletterSubscription {
    /// Insert a new subscription.
    ///
    /// Returns the raw sqlx error so callers can distinguish a unique
    /// violation (duplicate email race) from other store failures.
    pub async fn insert(
        new: &NewNewsletterSubscription,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO newsletter_subscriptions (email, name, source, agreed_to_terms)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&new.email)
        .bind(&new.name)
        .bind(&new.source)
        .bind(new.agreed_to_terms)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM newsletter_subscriptions WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Deactivate a subscription (unsubscribe handled by the admin tooling).
    pub async fn deactivate(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE newsletter_subscriptions
             SET is_active = FALSE
             WHERE email = $1
             RETURNING *",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
