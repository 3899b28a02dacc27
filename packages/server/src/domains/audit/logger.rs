//! Best-effort audit side channel.
//!
//! Losing an entry is acceptable; a store failure here must never reach the
//! handler that asked for the log. Failures go to the tracing stream only.

use sqlx::PgPool;
use std::net::IpAddr;

use super::models::{LogLevel, NewSystemLog, SystemLog};

/// Network identity of the requester, captured by middleware when a request
/// context is available.
#[derive(Debug, Clone, Default)]
pub struct Requester {
    pub ip: Option<IpAddr>,
    pub user_agent: Option<String>,
}

/// Record one audit entry. Infallible from the caller's perspective.
pub async fn record(
    pool: &PgPool,
    level: LogLevel,
    source: &str,
    message: &str,
    requester: Option<&Requester>,
) {
    let entry = NewSystemLog {
        log_level: level,
        message: message.to_string(),
        source: source.to_string(),
        user_ip: requester.and_then(|r| r.ip).map(|ip| ip.to_string()),
        user_agent: requester
            .and_then(|r| r.user_agent.clone())
            .unwrap_or_default(),
    };

    if let Err(e) = SystemLog::insert(&entry, pool).await {
        tracing::error!(error = %e, source, "Failed to write system log entry");
    }
}
