use crate::common::text::humanize_field;

/// Failure taxonomy for the submission endpoints.
///
/// `Display` is the user-facing envelope message; store failure detail stays
/// out of it and is only written to the audit log by the handler.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Body was not parseable as the expected JSON structure.
    #[error("Invalid request data.")]
    MalformedPayload,

    /// A required field was missing or empty. Carries the humanized name.
    #[error("{field} is required.")]
    MissingField { field: String },

    /// Anything else. The wrapped error is for the audit log only.
    #[error("An error occurred. Please try again later.")]
    Store(#[from] anyhow::Error),
}

impl SubmitError {
    /// Build a `MissingField` from the raw payload field name.
    pub fn missing(raw_field: &str) -> Self {
        Self::MissingField {
            field: humanize_field(raw_field),
        }
    }
}
