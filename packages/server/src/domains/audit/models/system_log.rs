use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Log level enum for type-safe construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Success => write!(f, "success"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "info" => Ok(LogLevel::Info),
            "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "success" => Ok(LogLevel::Success),
            _ => Err(anyhow::anyhow!("Invalid log level: {}", s)),
        }
    }
}

/// One operational log entry. Never edited; the admin tooling may bulk-purge
/// entries older than a retention window.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct SystemLog {
    pub id: Uuid,
    pub log_level: String, // 'info', 'warning', 'error', 'success'
    pub message: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub user_ip: Option<String>,
    pub user_agent: String,
}

/// Input for creating a log entry
#[derive(Debug, Clone)]
pub struct NewSystemLog {
    pub log_level: LogLevel,
    pub message: String,
    pub source: String,
    pub user_ip: Option<String>,
    pub user_agent: String,
}

impl SystemLog {
    pub async fn insert(new: &NewSystemLog, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO system_logs (log_level, message, source, user_ip, user_agent)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(new.log_level.to_string())
        .bind(&new.message)
        .bind(&new.source)
        .bind(&new.user_ip)
        .bind(&new.user_agent)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Most recent entries, newest first.
    pub async fn recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM system_logs ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete entries older than the retention window. Returns the number
    /// of rows removed.
    pub async fn purge_older_than(days: i64, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM system_logs WHERE created_at < now() - ($1 * INTERVAL '1 day')",
        )
        .bind(days)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
