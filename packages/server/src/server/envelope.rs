use serde::Serialize;
use uuid::Uuid;

/// Uniform JSON shape returned by every submission endpoint:
/// `{status, message, ...}` with optional record identifiers.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<Uuid>,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_message("success", message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_message("info", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_message("error", message)
    }

    /// Bare `{status}` envelope (webhook responses carry no message).
    pub fn status_only(status: &'static str) -> Self {
        Self {
            status,
            message: None,
            submission_id: None,
            subscription_id: None,
        }
    }

    pub fn with_submission_id(mut self, id: Uuid) -> Self {
        self.submission_id = Some(id);
        self
    }

    pub fn with_subscription_id(mut self, id: Uuid) -> Self {
        self.subscription_id = Some(id);
        self
    }

    fn with_message(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            submission_id: None,
            subscription_id: None,
        }
    }
}
