use std::{fmt, path::PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

/// Raw process environment, one field per recognised variable.
///
/// Nothing here is defaulted: presence checks run against this struct
/// before [`AppConfig`] fills the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnvSettings {
    pub secret_key: Option<String>,
    pub jwt_secret_key: Option<String>,
    pub database_url: Option<String>,
    pub max_content_length: Option<u64>,
    pub upload_folder: Option<String>,
    pub cors_origins: Option<Vec<String>>,
    pub flask_env: Option<String>,
    pub flask_run_host: Option<String>,
    pub flask_run_port: Option<u16>,
    pub flask_debug: Option<String>,
    pub log_level: Option<String>,
    pub db_max_conns: Option<u32>,
    pub db_min_idle: Option<u32>,
}

impl EnvConfig for EnvSettings {
    const LIST_KEYS: &'static [&'static str] = &["cors_origins"];
}

impl EnvSettings {
    pub fn log_level(&self) -> &str {
        non_empty(self.log_level.as_deref()).unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    /// Level for the subscriber installed before the settings are known to
    /// have loaded, so a load failure is still logged.
    pub fn startup_log_level(settings: Option<&Self>) -> &str {
        settings
            .map(Self::log_level)
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn environment(&self) -> AppEnvironment {
        non_empty(self.flask_env.as_deref())
            .map(AppEnvironment::from)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Production,
    Testing,
    Other(String),
}

impl AppEnvironment {
    pub fn as_str(&self) -> &str {
        match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
            AppEnvironment::Other(name) => name.as_str(),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, AppEnvironment::Production)
    }
}

impl From<&str> for AppEnvironment {
    fn from(value: &str) -> Self {
        match value.trim() {
            "development" => AppEnvironment::Development,
            "production" => AppEnvironment::Production,
            "testing" => AppEnvironment::Testing,
            other => AppEnvironment::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AppEnvironment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    #[serde(skip)]
    pub security: SecurityConfig,
    pub uploads: UploadConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_settings(&EnvSettings::from_env()?)
    }

    /// Builds the application config, substituting fallbacks for anything
    /// the environment leaves out.
    pub fn from_settings(settings: &EnvSettings) -> Result<Self> {
        let cfg = Self {
            general: GeneralConfig {
                host: non_empty(settings.flask_run_host.as_deref())
                    .unwrap_or(defaults::DEFAULT_HOST)
                    .to_string(),
                port: settings.flask_run_port.unwrap_or(defaults::DEFAULT_PORT),
                environment: settings.environment(),
                debug: settings
                    .flask_debug
                    .as_deref()
                    .map(|value| value.trim().eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
                seed_data: settings.flask_env.as_deref() == Some(defaults::SEED_ENVIRONMENT),
            },
            logging: LoggingConfig {
                level: settings.log_level().to_string(),
            },
            database: DatabaseConfig {
                url: non_empty(settings.database_url.as_deref())
                    .unwrap_or(defaults::DEFAULT_DATABASE_URL)
                    .to_string(),
                max_connections: settings
                    .db_max_conns
                    .unwrap_or(defaults::DEFAULT_DB_MAX_CONNECTIONS),
                min_idle: settings.db_min_idle.unwrap_or(defaults::DEFAULT_DB_MIN_IDLE),
            },
            security: SecurityConfig {
                secret_key: non_empty(settings.secret_key.as_deref())
                    .unwrap_or(defaults::FALLBACK_SECRET_KEY)
                    .to_string(),
                jwt_secret_key: non_empty(settings.jwt_secret_key.as_deref())
                    .unwrap_or(defaults::FALLBACK_JWT_SECRET_KEY)
                    .to_string(),
            },
            uploads: UploadConfig {
                folder: PathBuf::from(
                    non_empty(settings.upload_folder.as_deref())
                        .unwrap_or(defaults::DEFAULT_UPLOAD_FOLDER),
                ),
                max_content_length: settings
                    .max_content_length
                    .unwrap_or(defaults::DEFAULT_MAX_CONTENT_LENGTH),
            },
            cors: CorsConfig {
                origins: match settings.cors_origins.as_ref() {
                    Some(origins) if !origins.is_empty() => origins
                        .iter()
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect(),
                    _ => defaults::DEFAULT_CORS_ORIGINS
                        .iter()
                        .map(|origin| origin.to_string())
                        .collect(),
                },
            },
        };

        validate::validate(&cfg)?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
    pub environment: AppEnvironment,
    pub debug: bool,
    /// Seed records are written only when `FLASK_ENV` is literally
    /// `development`; an unset variable only names the environment.
    pub seed_data: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    #[serde(skip)]
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
}

#[derive(Clone)]
pub struct SecurityConfig {
    pub secret_key: String,
    pub jwt_secret_key: String,
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("secret_key", &"<redacted>")
            .field("jwt_secret_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadConfig {
    pub folder: PathBuf,
    pub max_content_length: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_falls_back_to_defaults() {
        let cfg = AppConfig::from_settings(&EnvSettings::default()).expect("defaults are valid");

        assert_eq!(cfg.general.host, "0.0.0.0");
        assert_eq!(cfg.general.port, 5001);
        assert_eq!(cfg.general.environment, AppEnvironment::Development);
        assert!(!cfg.general.seed_data);
        assert!(!cfg.general.debug);
        assert_eq!(cfg.logging.level, "INFO");
        assert_eq!(cfg.database.url, defaults::DEFAULT_DATABASE_URL);
        assert_eq!(cfg.uploads.max_content_length, 16_777_216);
        assert_eq!(cfg.uploads.folder, PathBuf::from("../uploads"));
        assert_eq!(cfg.cors.origins, vec!["http://localhost:5000".to_string()]);
        assert_eq!(
            cfg.security.secret_key,
            "fallback-secret-key-change-in-production"
        );
    }

    #[test]
    fn environment_values_override_defaults() {
        let settings = EnvSettings {
            database_url: Some("postgres://localhost/sems".to_string()),
            flask_env: Some("production".to_string()),
            flask_run_port: Some(8080),
            flask_debug: Some("True".to_string()),
            cors_origins: Some(vec![
                "https://a.example.com".to_string(),
                " https://b.example.com ".to_string(),
            ]),
            max_content_length: Some(1024),
            ..EnvSettings::default()
        };

        let cfg = AppConfig::from_settings(&settings).expect("config should be valid");

        assert_eq!(cfg.general.port, 8080);
        assert!(cfg.general.debug);
        assert!(cfg.general.environment.is_production());
        assert_eq!(cfg.database.url, "postgres://localhost/sems");
        assert_eq!(cfg.uploads.max_content_length, 1024);
        assert_eq!(
            cfg.cors.origins,
            vec![
                "https://a.example.com".to_string(),
                "https://b.example.com".to_string()
            ]
        );
    }

    #[test]
    fn seeding_requires_explicit_development() {
        for (raw, expected) in [
            (Some("development"), true),
            (Some("production"), false),
            (Some("Development"), false),
            (Some(""), false),
            (None, false),
        ] {
            let settings = EnvSettings {
                flask_env: raw.map(str::to_string),
                ..EnvSettings::default()
            };
            let cfg = AppConfig::from_settings(&settings).expect("config should be valid");
            assert_eq!(cfg.general.seed_data, expected, "FLASK_ENV={raw:?}");
        }
    }

    #[test]
    fn startup_log_level_survives_failed_loads() {
        assert_eq!(EnvSettings::startup_log_level(None), "INFO");

        let settings = EnvSettings {
            log_level: Some("WARNING".to_string()),
            ..EnvSettings::default()
        };
        assert_eq!(EnvSettings::startup_log_level(Some(&settings)), "WARNING");
    }

    #[test]
    fn debug_flag_only_accepts_true() {
        for (raw, expected) in [("true", true), ("TRUE", true), ("1", false), ("yes", false)] {
            let settings = EnvSettings {
                flask_debug: Some(raw.to_string()),
                ..EnvSettings::default()
            };
            let cfg = AppConfig::from_settings(&settings).expect("config should be valid");
            assert_eq!(cfg.general.debug, expected, "FLASK_DEBUG={raw}");
        }
    }

    #[test]
    fn unknown_environment_names_are_kept() {
        assert_eq!(AppEnvironment::from("staging").as_str(), "staging");
        assert_eq!(AppEnvironment::from("testing"), AppEnvironment::Testing);
        assert_ne!(AppEnvironment::from("staging"), AppEnvironment::Development);
    }

    #[test]
    fn security_config_debug_output_hides_secrets() {
        let cfg = AppConfig::from_settings(&EnvSettings {
            secret_key: Some("very-secret".to_string()),
            ..EnvSettings::default()
        })
        .expect("config should be valid");

        let rendered = format!("{:?}", cfg.security);
        assert!(!rendered.contains("very-secret"));
    }
}
