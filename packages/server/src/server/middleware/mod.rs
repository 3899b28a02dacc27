// HTTP middleware
pub mod host_filter;
pub mod request_meta;

pub use host_filter::*;
pub use request_meta::*;
