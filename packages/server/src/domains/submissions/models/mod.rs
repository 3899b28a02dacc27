// Submission models - SQL persistence layer

pub mod contact_submission;
pub mod form_submission;
pub mod newsletter_subscription;

pub use contact_submission::{ContactStatus, ContactSubmission, NewContactSubmission};
pub use form_submission::FormSubmission;
pub use newsletter_subscription::{NewNewsletterSubscription, NewsletterSubscription};
