use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Default SQLite file used when no database URL is configured.
pub const DEFAULT_SQLITE_PATH: &str = "contacts.db";

/// Errors raised while resolving the startup configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),
    #[cfg(not(feature = "postgres"))]
    #[error("this build has no PostgreSQL support; rebuild with the `postgres` feature")]
    PostgresDisabled,
}

/// Where contacts are persisted.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Local file-backed SQLite store. `:memory:` opens a private in-memory
    /// database.
    Sqlite { path: PathBuf },
    /// External PostgreSQL server.
    Postgres { url: String },
}

impl DatabaseTarget {
    /// Resolves the target from an optional database URL.
    ///
    /// - unset or blank -> SQLite at `sqlite_path`
    /// - `postgres://` is rewritten to `postgresql://`
    /// - `sqlite:///rel` selects the relative path `rel` and `sqlite:////abs`
    ///   the absolute path `/abs`
    /// - `sqlite://path` and `sqlite:path` select a SQLite file
    pub fn resolve(
        database_url: Option<&str>,
        sqlite_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let url = match database_url.map(str::trim) {
            None | Some("") => {
                return Ok(Self::Sqlite {
                    path: sqlite_path.into(),
                })
            }
            Some(url) => url,
        };

        if let Some(rest) = url.strip_prefix("postgres://") {
            return Ok(Self::Postgres {
                url: format!("postgresql://{rest}"),
            });
        }
        if url.starts_with("postgresql://") {
            return Ok(Self::Postgres {
                url: url.to_string(),
            });
        }
        if let Some(path) = url
            .strip_prefix("sqlite:///")
            .or_else(|| url.strip_prefix("sqlite://"))
            .or_else(|| url.strip_prefix("sqlite:"))
        {
            return Ok(Self::Sqlite {
                path: PathBuf::from(path),
            });
        }

        let scheme = url.split_once(':').map(|(s, _)| s).unwrap_or(url);
        Err(ConfigError::UnsupportedScheme(scheme.to_string()))
    }

    /// Short backend name for logs.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Sqlite { .. } => "sqlite",
            Self::Postgres { .. } => "postgres",
        }
    }
}

// Credentials in the URL must not end up in logs.
impl fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite { path } => f.debug_struct("Sqlite").field("path", path).finish(),
            Self::Postgres { url } => f
                .debug_struct("Postgres")
                .field("url", &redact_url(url))
                .finish(),
        }
    }
}

/// Replaces the userinfo part of a URL with `***`.
///
/// Only the authority (up to the first `/`, `?` or `#` after the scheme) is
/// searched for the `@` separator.
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{scheme}://***{}", &rest[at..]),
        None => url.to_string(),
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application configuration, built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Storage target.
    pub database: DatabaseTarget,
}

impl Config {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database_url: Option<&str>,
        sqlite_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            host: host.into(),
            port,
            database: DatabaseTarget::resolve(database_url, sqlite_path)?,
        })
    }

    /// Address string for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
