//! Newsletter signup intake.
//!
//! Duplicate emails are a non-error outcome. The pre-check keeps the common
//! path friendly (it can report the original subscription date); the unique
//! constraint on `email` is what actually guarantees one row per address, so
//! a constraint violation from a concurrent duplicate submit is converted
//! into the same informational outcome.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;

use crate::domains::submissions::error::SubmitError;
use crate::domains::submissions::models::{NewNewsletterSubscription, NewsletterSubscription};

pub const DEFAULT_SOURCE: &str = "newsletter_section";

/// Raw newsletter form payload. Only `email` is required.
#[derive(Debug, Default, Deserialize)]
pub struct NewsletterPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub agreed_to_terms: Option<bool>,
}

impl NewsletterPayload {
    /// Apply trimming and defaults: name falls back to the email local part,
    /// source to the newsletter section, terms agreement to true.
    pub fn normalize(self) -> Result<NewNewsletterSubscription, SubmitError> {
        let email = self.email.as_deref().unwrap_or("").trim().to_string();
        if email.is_empty() {
            return Err(SubmitError::missing("email"));
        }

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

        Ok(NewNewsletterSubscription {
            email,
            name,
            source: self.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            agreed_to_terms: self.agreed_to_terms.unwrap_or(true),
        })
    }
}

#[derive(Debug)]
pub enum NewsletterOutcome {
    Subscribed(NewsletterSubscription),
    /// The email was already on file. `since` is the original subscription
    /// time when known (pre-check path); the lost-race path does not have it.
    AlreadySubscribed { since: Option<DateTime<Utc>> },
}

/// Validate and persist one newsletter signup.
pub async fn submit_newsletter(
    body: &[u8],
    pool: &PgPool,
) -> Result<NewsletterOutcome, SubmitError> {
    let payload: NewsletterPayload =
        serde_json::from_slice(body).map_err(|_| SubmitError::MalformedPayload)?;
    let new = payload.normalize()?;

    // UX shortcut only; the unique constraint below is the real guard.
    if let Some(existing) = NewsletterSubscription::find_by_email(&new.email, pool).await? {
        return Ok(NewsletterOutcome::AlreadySubscribed {
            since: Some(existing.created_at),
        });
    }

    match NewsletterSubscription::insert(&new, pool).await {
        Ok(subscription) => Ok(NewsletterOutcome::Subscribed(subscription)),
        Err(e) if is_unique_violation(&e) => {
            Ok(NewsletterOutcome::AlreadySubscribed { since: None })
        }
        Err(e) => Err(SubmitError::Store(e.into())),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
