// Content domain: admin-editable sections rendered on the public page.

pub mod data;
pub mod models;

pub use data::*;
pub use models::*;
