use anyhow::{Result, bail};

use super::{AppConfig, EnvSettings, configs::non_empty, defaults};

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.port == 0 {
        errors.push("general.port must be > 0".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if cfg.uploads.max_content_length == 0 {
        errors.push("uploads.max_content_length must be > 0".to_string());
    }

    if cfg.uploads.folder.as_os_str().is_empty() {
        errors.push("uploads.folder must not be empty".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

/// Outcome of the startup environment check.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub missing: Vec<&'static str>,
    pub default_secrets_in_production: bool,
}

impl EnvironmentReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn check_environment(settings: &EnvSettings) -> EnvironmentReport {
    let values = [
        settings.secret_key.as_deref(),
        settings.jwt_secret_key.as_deref(),
        settings.database_url.as_deref(),
    ];
    let missing = defaults::REQUIRED_VARS
        .iter()
        .zip(values)
        .filter(|(_, value)| non_empty(*value).is_none())
        .map(|(name, _)| *name)
        .collect();

    let default_secrets_in_production = settings.environment().is_production()
        && [
            settings.secret_key.as_deref(),
            settings.jwt_secret_key.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|secret| defaults::DEFAULT_SECRETS.iter().any(|known| *known == secret));

    EnvironmentReport {
        missing,
        default_secrets_in_production,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_settings() -> EnvSettings {
        EnvSettings {
            secret_key: Some("s3cr3t".to_string()),
            jwt_secret_key: Some("jwt-s3cr3t".to_string()),
            database_url: Some("sqlite::memory:".to_string()),
            ..EnvSettings::default()
        }
    }

    #[test]
    fn reports_every_missing_required_variable() {
        let report = check_environment(&EnvSettings::default());

        assert!(!report.is_valid());
        assert_eq!(
            report.missing,
            vec!["SECRET_KEY", "JWT_SECRET_KEY", "DATABASE_URL"]
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        let settings = EnvSettings {
            jwt_secret_key: Some("   ".to_string()),
            ..complete_settings()
        };

        assert_eq!(check_environment(&settings).missing, vec!["JWT_SECRET_KEY"]);
    }

    #[test]
    fn complete_environment_passes() {
        let report = check_environment(&complete_settings());
        assert!(report.is_valid());
        assert!(!report.default_secrets_in_production);
    }

    #[test]
    fn default_secret_in_production_is_flagged() {
        let settings = EnvSettings {
            flask_env: Some("production".to_string()),
            jwt_secret_key: Some("dev-jwt-secret-2024-sems-change-in-production".to_string()),
            ..complete_settings()
        };

        let report = check_environment(&settings);
        assert!(report.is_valid());
        assert!(report.default_secrets_in_production);
    }

    #[test]
    fn default_secret_outside_production_is_not_flagged() {
        let settings = EnvSettings {
            flask_env: Some("development".to_string()),
            secret_key: Some("dev-secret-key-2024-sems-foundation".to_string()),
            ..complete_settings()
        };

        assert!(!check_environment(&settings).default_secrets_in_production);
    }

    #[test]
    fn rejects_min_idle_above_pool_size() {
        let settings = EnvSettings {
            db_max_conns: Some(1),
            db_min_idle: Some(4),
            ..complete_settings()
        };

        let err = AppConfig::from_settings(&settings).expect_err("config should be invalid");
        assert!(err.to_string().contains("database.min_idle (4)"));
    }
}
