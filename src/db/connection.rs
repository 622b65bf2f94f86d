use std::{path::Path, time::Duration};

use anyhow::{Context, Result, bail};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Database engines reachable through `DATABASE_URL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbEngine {
    Postgres,
    Sqlite,
}

impl DbEngine {
    pub fn from_url(url: &str) -> Result<Self> {
        let normalized = url.trim().to_ascii_lowercase();
        if normalized.starts_with("postgres://") || normalized.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if normalized.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            bail!(
                "unsupported DATABASE_URL '{}'; expected postgres://, postgresql:// or sqlite:",
                redact_url(url)
            )
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Opens the pool described by `cfg` and applies per-engine session settings.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let engine = DbEngine::from_url(&cfg.url)?;
    info!(
        engine = engine.as_str(),
        url = %redact_url(&cfg.url),
        max_connections = cfg.max_connections,
        min_idle = cfg.min_idle,
        "connecting to database"
    );

    if engine == DbEngine::Sqlite {
        ensure_sqlite_dir(&cfg.url).await?;
    }

    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;

    if engine == DbEngine::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
    }
    Ok(db)
}

/// Keeps the scheme and drops credentials, host and path.
pub fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}

async fn ensure_sqlite_dir(url: &str) -> Result<()> {
    let Some(parent) = sqlite_file(url).and_then(Path::parent) else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("creating database directory {}", parent.display()))
}

/// File path of a `sqlite:` url, or `None` for in-memory databases.
fn sqlite_file(url: &str) -> Option<&Path> {
    let rest = url.trim().strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}
