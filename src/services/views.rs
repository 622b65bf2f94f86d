//! Serializable projections of the entities returned to API clients.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Serialize;
use uuid::Uuid;

use crate::db::entities::{
    audit_log, file_upload, notification, permission, role, tenant, user,
};

fn rfc3339(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Columns shared by every entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseView {
    pub id: Uuid,
    pub created_at: String,
    pub updated_at: String,
    pub is_active: bool,
}

impl BaseView {
    fn new(
        id: Uuid,
        created_at: &DateTime<FixedOffset>,
        updated_at: &DateTime<FixedOffset>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            created_at: rfc3339(created_at),
            updated_at: rfc3339(updated_at),
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantView {
    #[serde(flatten)]
    pub base: BaseView,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl From<tenant::Model> for TenantView {
    fn from(model: tenant::Model) -> Self {
        Self {
            base: BaseView::new(model.id, &model.created_at, &model.updated_at, model.is_active),
            name: model.name,
            slug: model.slug,
            description: model.description,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            address: model.address,
        }
    }
}

/// User projection; the password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    #[serde(flatten)]
    pub base: BaseView,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub last_login: Option<String>,
    pub tenant_id: Uuid,
    pub roles: Vec<String>,
}

impl UserView {
    pub fn new(model: user::Model, roles: Vec<String>) -> Self {
        Self {
            base: BaseView::new(model.id, &model.created_at, &model.updated_at, model.is_active),
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            last_login: model.last_login.as_ref().map(rfc3339),
            tenant_id: model.tenant_id,
            roles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleView {
    #[serde(flatten)]
    pub base: BaseView,
    pub name: String,
    pub description: Option<String>,
}

impl From<role::Model> for RoleView {
    fn from(model: role::Model) -> Self {
        Self {
            base: BaseView::new(model.id, &model.created_at, &model.updated_at, model.is_active),
            name: model.name,
            description: model.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionView {
    #[serde(flatten)]
    pub base: BaseView,
    pub name: String,
    pub description: Option<String>,
    pub module: Option<String>,
    pub action: Option<String>,
}

impl From<permission::Model> for PermissionView {
    fn from(model: permission::Model) -> Self {
        Self {
            base: BaseView::new(model.id, &model.created_at, &model.updated_at, model.is_active),
            name: model.name,
            description: model.description,
            module: model.module,
            action: model.action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditLogView {
    #[serde(flatten)]
    pub base: BaseView,
    pub user_id: Uuid,
    pub action: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<Uuid>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub user_email: Option<String>,
}

impl AuditLogView {
    pub fn new(model: audit_log::Model, user_email: Option<String>) -> Self {
        Self {
            base: BaseView::new(model.id, &model.created_at, &model.updated_at, model.is_active),
            user_id: model.user_id,
            action: model.action,
            resource_type: model.resource_type,
            resource_id: model.resource_id,
            description: model.description,
            ip_address: model.ip_address,
            user_agent: model.user_agent,
            user_email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationView {
    #[serde(flatten)]
    pub base: BaseView,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: Option<String>,
    pub is_read: bool,
    pub read_at: Option<String>,
}

impl From<notification::Model> for NotificationView {
    fn from(model: notification::Model) -> Self {
        Self {
            base: BaseView::new(model.id, &model.created_at, &model.updated_at, model.is_active),
            user_id: model.user_id,
            title: model.title,
            message: model.message,
            notification_type: model.notification_type,
            is_read: model.is_read,
            read_at: model.read_at.as_ref().map(rfc3339),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileUploadView {
    #[serde(flatten)]
    pub base: BaseView,
    pub user_id: Uuid,
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub description: Option<String>,
}

impl From<file_upload::Model> for FileUploadView {
    fn from(model: file_upload::Model) -> Self {
        Self {
            base: BaseView::new(model.id, &model.created_at, &model.updated_at, model.is_active),
            user_id: model.user_id,
            filename: model.filename,
            original_filename: model.original_filename,
            file_path: model.file_path,
            file_size: model.file_size,
            mime_type: model.mime_type,
            description: model.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::db::dao::fixtures;

    #[test]
    fn user_view_omits_password_hash_and_lists_roles() {
        let id = Uuid::new_v4();
        let view = UserView::new(
            fixtures::user_model(id, "ada@example.com", "$argon2id$secret"),
            vec!["Administrator".to_string()],
        );

        let value = serde_json::to_value(&view).expect("view should serialize");
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["email"], json!("ada@example.com"));
        assert_eq!(value["roles"], json!(["Administrator"]));
        assert_eq!(value["last_login"], json!(null));
        assert_eq!(value["created_at"], json!("2026-01-01T00:00:00.000000Z"));
        assert!(value.get("password_hash").is_none());
    }

    #[test]
    fn notification_view_formats_read_at() {
        let mut model = fixtures::notification_model(Uuid::new_v4(), Uuid::new_v4());
        model.is_read = true;
        model.read_at = Some(fixtures::ts());

        let view = NotificationView::from(model);
        assert!(view.is_read);
        assert_eq!(view.read_at.as_deref(), Some("2026-01-01T00:00:00.000000Z"));
    }

    #[test]
    fn audit_log_view_carries_user_email() {
        let user_id = Uuid::new_v4();
        let model = fixtures::audit_log_model(Uuid::new_v4(), user_id, "login");

        let known = AuditLogView::new(model.clone(), Some("ada@example.com".to_string()));
        let unknown = AuditLogView::new(model, None);

        let value = serde_json::to_value(&known).expect("view should serialize");
        assert_eq!(value["user_email"], json!("ada@example.com"));
        assert_eq!(value["is_active"], json!(true));
        assert_eq!(unknown.user_email, None);
    }
}
