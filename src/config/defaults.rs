pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
/// `FLASK_ENV` value that enables seed data.
pub const SEED_ENVIRONMENT: &str = "development";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://../database/development.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 2;
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;
pub const DEFAULT_UPLOAD_FOLDER: &str = "../uploads";
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5000"];

pub const FALLBACK_SECRET_KEY: &str = "fallback-secret-key-change-in-production";
pub const FALLBACK_JWT_SECRET_KEY: &str = "fallback-jwt-secret-change-in-production";

/// Secrets shipped in sample env files. Seeing one of these in production is
/// reported at startup.
pub const DEFAULT_SECRETS: &[&str] = &[
    "your-development-secret-key-change-in-production",
    "your-super-secure-jwt-secret-key-change-this-in-production",
    "dev-secret-key-2024-sems-foundation",
    "dev-jwt-secret-2024-sems-change-in-production",
    FALLBACK_SECRET_KEY,
    FALLBACK_JWT_SECRET_KEY,
];

pub const REQUIRED_VARS: &[&str] = &["SECRET_KEY", "JWT_SECRET_KEY", "DATABASE_URL"];
