use std::net::SocketAddr;

use anyhow::{Context, bail};

use sems_server::{
    app::create_app,
    config::{AppConfig, EnvConfig, EnvSettings, check_environment},
    db::{self, redact_url},
    logging::init_tracing,
    state::AppState,
};

#[tokio::main]
async fn main() {
    let settings = EnvSettings::from_env();
    let log_guard = init_tracing(EnvSettings::startup_log_level(settings.as_ref().ok()));

    let result = match settings {
        Ok(settings) => run(settings).await,
        Err(err) => Err(err.context("failed to load configuration")),
    };
    if let Err(err) = result {
        tracing::error!("server failed: {err:?}");
        drop(log_guard);
        std::process::exit(1);
    }
}

async fn run(settings: EnvSettings) -> anyhow::Result<()> {
    let report = check_environment(&settings);
    if !report.is_valid() {
        for name in &report.missing {
            tracing::error!(variable = *name, "missing required environment variable");
        }
        bail!(
            "missing required environment variables: {}",
            report.missing.join(", ")
        );
    }
    if report.default_secrets_in_production {
        tracing::warn!("default secret keys detected in production; set unique secrets");
    }

    let cfg = AppConfig::from_settings(&settings)?;
    tracing::info!(
        environment = %cfg.general.environment,
        debug = cfg.general.debug,
        database = %redact_url(&cfg.database.url),
        "starting {}",
        sems_server::routes::public::SERVICE_NAME
    );
    if cfg.general.debug {
        tracing::warn!("debug mode is enabled; do not use it in production");
    }

    let db = db::connect(&cfg.database).await?;
    db::init_db(&db, &cfg).await?;

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid bind address {}:{}",
                cfg.general.host, cfg.general.port
            )
        })?;
    let app = create_app(AppState::new(cfg, db));

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
