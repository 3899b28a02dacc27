// Submission activities: validate a raw request body and persist the row.

pub mod submit_contact;
pub mod submit_newsletter;

pub use submit_contact::{submit_contact, ContactPayload};
pub use submit_newsletter::{submit_newsletter, NewsletterOutcome, NewsletterPayload};
