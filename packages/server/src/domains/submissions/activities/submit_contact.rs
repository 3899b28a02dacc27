//! Contact/booking form intake.

use serde::Deserialize;
use sqlx::PgPool;

use crate::domains::submissions::error::SubmitError;
use crate::domains::submissions::models::{ContactSubmission, NewContactSubmission};

/// Raw contact form payload. Every field is optional at the parse layer so
/// that missing-field validation can name the first offender.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_details: Option<String>,
}

impl ContactPayload {
    /// Check required fields in declaration order and produce the insert
    /// input. The first missing or empty field aborts with its name.
    pub fn validate(&self) -> Result<NewContactSubmission, SubmitError> {
        let required = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("organization", &self.organization),
            ("event_type", &self.event_type),
            ("event_details", &self.event_details),
        ];
        for (name, value) in required {
            if value.as_deref().map_or(true, str::is_empty) {
                return Err(SubmitError::missing(name));
            }
        }

        // Checked non-empty above
        Ok(NewContactSubmission {
            full_name: self.full_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            organization: self.organization.clone().unwrap_or_default(),
            event_type: self.event_type.clone().unwrap_or_default(),
            event_details: self.event_details.clone().unwrap_or_default(),
        })
    }
}

/// Validate and persist one contact submission. The created row always has
/// status 'new'.
pub async fn submit_contact(body: &[u8], pool: &PgPool) -> Result<ContactSubmission, SubmitError> {
    let payload: ContactPayload =
        serde_json::from_slice(body).map_err(|_| SubmitError::MalformedPayload)?;
    let new = payload.validate()?;
    let submission = ContactSubmission::insert(&new, pool).await?;
    Ok(submission)
}
