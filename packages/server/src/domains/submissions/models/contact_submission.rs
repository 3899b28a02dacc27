use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Contact submission status enum for type-safe transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    New,
    Contacted,
    Booked,
    Cancelled,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::New => write!(f, "new"),
            ContactStatus::Contacted => write!(f, "contacted"),
            ContactStatus::Booked => write!(f, "booked"),
            ContactStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(ContactStatus::New),
            "contacted" => Ok(ContactStatus::Contacted),
            "booked" => Ok(ContactStatus::Booked),
            "cancelled" => Ok(ContactStatus::Cancelled),
            _ => Err(anyhow::anyhow!("Invalid contact status: {}", s)),
        }
    }
}

/// A booking/contact request from the public form.
///
/// Status and notes are mutated only through the admin tooling; the public
/// endpoint always creates rows with status 'new'.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub organization: String,
    pub event_type: String, // 'keynote', 'workshop', 'training', 'consultation'
    pub event_details: String,
    pub status: String, // 'new' -> 'contacted' -> 'booked' | 'cancelled'
    pub submitted_at: DateTime<Utc>,
    pub contacted_at: Option<DateTime<Utc>>,
    pub notes: String,
}

/// Input for creating a new contact submission
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub full_name: String,
    pub email: String,
    pub organization: String,
    pub event_type: String,
    pub event_details: String,
}

impl ContactSubmission {
    /// Insert a new submission with status 'new'.
    pub async fn insert(new: &NewContactSubmission, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO contact_submissions (
                full_name,
                email,
                organization,
                event_type,
                event_details
             )
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.organization)
        .bind(&new.event_type)
        .bind(&new.event_details)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM contact_submissions WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Submissions with a given status, newest first.
    pub async fn find_by_status(status: ContactStatus, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM contact_submissions
             WHERE status = $1
             ORDER BY submitted_at DESC",
        )
        .bind(status.to_string())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Mark a submission contacted, stamping contacted_at.
    pub async fn mark_contacted(id: Uuid, notes: Option<&str>, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE contact_submissions
             SET status = 'contacted',
                 contacted_at = now(),
                 notes = COALESCE($2, notes)
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(notes)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Move a submission to a terminal or intermediate status.
    pub async fn update_status(id: Uuid, status: ContactStatus, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE contact_submissions SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.to_string())
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
