use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    db::dao::NewTenant,
    services::{ServiceContext, user_service::CreateUser},
};

pub const DEFAULT_TENANT_NAME: &str = "Default Organization";
pub const DEFAULT_TENANT_SLUG: &str = "default";
pub const DEFAULT_TENANT_DESCRIPTION: &str = "Default organization for development";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_ROLE: &str = "Administrator";

/// `(name, description)` of the roles created with the seed data.
pub const DEFAULT_ROLES: [(&str, &str); 3] = [
    (ADMIN_ROLE, "System administrator"),
    ("User", "Regular user"),
    ("Manager", "Department manager"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// At least one tenant existed, nothing was written.
    Skipped,
    Created,
}

/// Creates missing tables and indexes from the registered entities.
pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("sems_server::db::entities::*")
        .sync(db)
        .await
        .context("schema sync failed")?;
    Ok(())
}

/// Syncs the schema and, when `FLASK_ENV=development`, seeds the initial
/// records.
pub async fn init_db(
    db: &DatabaseConnection,
    cfg: &AppConfig,
) -> anyhow::Result<Option<SeedOutcome>> {
    sync_schema(db).await?;
    if !cfg.general.seed_data {
        info!(
            environment = %cfg.general.environment,
            "skipping seed data, FLASK_ENV is not development"
        );
        return Ok(None);
    }
    let services = ServiceContext::new(db, cfg.uploads.folder.clone());
    create_initial_data(&services).await.map(Some)
}

pub async fn create_initial_data(services: &ServiceContext) -> anyhow::Result<SeedOutcome> {
    if services.tenant().first().await?.is_some() {
        info!("database already has data, skipping initial data creation");
        return Ok(SeedOutcome::Skipped);
    }

    let tenant = services
        .tenant()
        .create_tenant(NewTenant {
            name: DEFAULT_TENANT_NAME.to_string(),
            slug: DEFAULT_TENANT_SLUG.to_string(),
            description: Some(DEFAULT_TENANT_DESCRIPTION.to_string()),
            contact_email: Some(DEFAULT_ADMIN_EMAIL.to_string()),
            ..Default::default()
        })
        .await
        .context("creating default tenant")?;

    let roles = services.role();
    let mut admin_role = None;
    for (name, description) in DEFAULT_ROLES {
        let role = roles
            .find_or_create(name, Some(description))
            .await
            .with_context(|| format!("creating role {name}"))?;
        if name == ADMIN_ROLE {
            admin_role = Some(role);
        }
    }
    let admin_role = admin_role.context("administrator role missing from defaults")?;

    let users = services.user();
    let admin = users
        .create_user(CreateUser {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            phone: None,
            tenant_id: tenant.id,
        })
        .await
        .context("creating admin user")?;
    users
        .assign_role(&admin.id, &admin_role.id)
        .await
        .context("assigning administrator role")?;

    info!(tenant = %tenant.slug, admin = %admin.email, "initial data created");
    info!(
        "default admin credentials: {} / {}",
        DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD
    );
    warn!("change the default admin credentials before running in production");
    Ok(SeedOutcome::Created)
}
