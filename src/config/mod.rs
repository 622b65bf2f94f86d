pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{
    AppConfig, AppEnvironment, CorsConfig, DatabaseConfig, EnvSettings, GeneralConfig,
    LoggingConfig, SecurityConfig, UploadConfig,
};
pub use envconfig::EnvConfig;
pub use validate::{EnvironmentReport, check_environment};
