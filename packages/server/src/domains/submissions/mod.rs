// Submissions domain: public form intake and its persistence.

pub mod activities;
pub mod error;
pub mod models;

pub use activities::*;
pub use error::SubmitError;
pub use models::*;
