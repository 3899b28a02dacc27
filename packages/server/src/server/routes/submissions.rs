//! Submission endpoints: contact form, newsletter signup, form-relay
//! webhook. All of them translate activity outcomes into the JSON envelope
//! at this boundary; nothing below propagates an unhandled error.

use axum::{body::Bytes, extract::Extension, http::StatusCode, Json};

use crate::domains::audit::{self, LogLevel, Requester};
use crate::domains::submissions::{
    submit_contact, submit_newsletter, NewsletterOutcome, SubmitError,
};
use crate::server::app::AppState;
use crate::server::envelope::Envelope;

/// `POST /api/contact-submit/`
pub async fn contact_submit_handler(
    Extension(state): Extension<AppState>,
    Extension(requester): Extension<Requester>,
    body: Bytes,
) -> (StatusCode, Json<Envelope>) {
    match submit_contact(&body, &state.db_pool).await {
        Ok(submission) => {
            audit::record(
                &state.db_pool,
                LogLevel::Success,
                "contact_form",
                &format!(
                    "New contact submission from {} ({})",
                    submission.full_name, submission.organization
                ),
                Some(&requester),
            )
            .await;

            (
                StatusCode::OK,
                Json(
                    Envelope::success(
                        "Thank you for your booking request! We will review your details \
                         and get back to you within 24 hours.",
                    )
                    .with_submission_id(submission.id),
                ),
            )
        }
        Err(err) => {
            submit_error_response(err, "contact_form", "Contact submission", &state, &requester)
                .await
        }
    }
}

/// `POST /api/newsletter-submit/`
pub async fn newsletter_submit_handler(
    Extension(state): Extension<AppState>,
    Extension(requester): Extension<Requester>,
    body: Bytes,
) -> (StatusCode, Json<Envelope>) {
    match submit_newsletter(&body, &state.db_pool).await {
        Ok(NewsletterOutcome::Subscribed(subscription)) => {
            audit::record(
                &state.db_pool,
                LogLevel::Success,
                "newsletter_form",
                &format!("New newsletter subscription: {}", subscription.email),
                Some(&requester),
            )
            .await;

            (
                StatusCode::OK,
                Json(
                    Envelope::success("Thank you for subscribing to our newsletter!")
                        .with_subscription_id(subscription.id),
                ),
            )
        }
        // Duplicate email is a deliberate non-error outcome.
        Ok(NewsletterOutcome::AlreadySubscribed { since: Some(at) }) => (
            StatusCode::OK,
            Json(Envelope::info(format!(
                "You are already subscribed to our newsletter! (Subscribed on {})",
                at.format("%Y-%m-%d")
            ))),
        ),
        Ok(NewsletterOutcome::AlreadySubscribed { since: None }) => (
            StatusCode::OK,
            Json(Envelope::info(
                "You are already subscribed to our newsletter!",
            )),
        ),
        Err(err) => {
            submit_error_response(
                err,
                "newsletter_form",
                "Newsletter subscription",
                &state,
                &requester,
            )
            .await
        }
    }
}

/// `POST /api/formsubmit-webhook/`
///
/// Backup intake from the external form-relay service. Receipt is logged
/// best-effort; nothing is persisted beyond the log entry.
pub async fn formsubmit_webhook_handler(
    Extension(state): Extension<AppState>,
    Extension(requester): Extension<Requester>,
    body: Bytes,
) -> (StatusCode, Json<Envelope>) {
    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(data) => {
            let subject = data
                .get("_subject")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown");
            audit::record(
                &state.db_pool,
                LogLevel::Info,
                "formsubmit_webhook",
                &format!("Form relay webhook received: {}", subject),
                Some(&requester),
            )
            .await;

            (StatusCode::OK, Json(Envelope::status_only("success")))
        }
        Err(e) => {
            audit::record(
                &state.db_pool,
                LogLevel::Error,
                "formsubmit_webhook",
                &format!("Form relay webhook error: {}", e),
                Some(&requester),
            )
            .await;

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::status_only("error")),
            )
        }
    }
}

/// Map a `SubmitError` to its envelope. Validation problems are the
/// caller's fault (400, named message); store failures are logged with
/// detail and answered with a generic 500.
async fn submit_error_response(
    err: SubmitError,
    source: &str,
    error_label: &str,
    state: &AppState,
    requester: &Requester,
) -> (StatusCode, Json<Envelope>) {
    match err {
        SubmitError::MalformedPayload | SubmitError::MissingField { .. } => (
            StatusCode::BAD_REQUEST,
            Json(Envelope::error(err.to_string())),
        ),
        SubmitError::Store(e) => {
            audit::record(
                &state.db_pool,
                LogLevel::Error,
                source,
                &format!("{} error: {:#}", error_label, e),
                Some(requester),
            )
            .await;

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::error("An error occurred. Please try again later.")),
            )
        }
    }
}
