use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Where uploaded media lives and how its URLs are produced.
///
/// The deployment history toggled between a local media directory and a
/// third-party object store; both collapse to this one enum.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Media served by this process from a local directory.
    Filesystem {
        media_root: PathBuf,
        /// Public mount path, e.g. `/media/`.
        media_url: String,
    },
    /// Media hosted externally; URLs are prefixed with the store's base URL
    /// and nothing is served locally.
    ObjectStore { base_url: String },
}

impl StorageBackend {
    /// Resolve a stored media path (e.g. `hero/main.jpg`) to a public URL.
    pub fn url_for(&self, path: &str) -> String {
        let prefix = match self {
            StorageBackend::Filesystem { media_url, .. } => media_url.as_str(),
            StorageBackend::ObjectStore { base_url } => base_url.as_str(),
        };
        format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub debug: bool,
    /// Host header allow-list. Empty means any host is accepted.
    pub allowed_hosts: Vec<String>,
    /// Origins allowed for cross-site form submission. Empty, or debug mode,
    /// relaxes CORS to any origin.
    pub trusted_origins: Vec<String>,
    pub storage: StorageBackend,
    /// Cap on gallery images embedded in the page. `None` means all.
    pub gallery_preview_limit: Option<i64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let storage = match env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "filesystem".to_string())
            .as_str()
        {
            "filesystem" => StorageBackend::Filesystem {
                media_root: env::var("MEDIA_ROOT")
                    .unwrap_or_else(|_| "media".to_string())
                    .into(),
                media_url: env::var("MEDIA_URL").unwrap_or_else(|_| "/media/".to_string()),
            },
            "object-store" => StorageBackend::ObjectStore {
                base_url: env::var("OBJECT_STORE_BASE_URL")
                    .context("OBJECT_STORE_BASE_URL must be set for the object-store backend")?,
            },
            other => anyhow::bail!("Unknown STORAGE_BACKEND: {}", other),
        };

        let gallery_preview_limit = env::var("GALLERY_PREVIEW_LIMIT")
            .unwrap_or_else(|_| "6".to_string())
            .parse::<i64>()
            .context("GALLERY_PREVIEW_LIMIT must be a number")?;

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            debug: env::var("DEBUG")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            allowed_hosts: env_list("ALLOWED_HOSTS"),
            trusted_origins: env_list("TRUSTED_ORIGINS"),
            storage,
            gallery_preview_limit: match gallery_preview_limit {
                0 => None,
                n => Some(n),
            },
        })
    }
}

/// Read a comma-separated environment variable into a list, dropping blanks.
fn env_list(key: &str) -> Vec<String> {
    env::var(key)
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
