// Audit domain: best-effort operational log.

pub mod logger;
pub mod models;

pub use logger::{record, Requester};
pub use models::{LogLevel, SystemLog};
