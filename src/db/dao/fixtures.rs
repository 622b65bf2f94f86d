//! Model builders for mock-database tests.

use chrono::{FixedOffset, TimeZone};
use uuid::Uuid;

use crate::db::entities::{audit_log, file_upload, notification, permission, role, tenant, user};

pub fn ts() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

pub fn tenant_model(id: Uuid, slug: &str) -> tenant::Model {
    tenant::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        is_active: true,
        name: format!("Tenant {slug}"),
        slug: slug.to_string(),
        description: None,
        contact_email: None,
        contact_phone: None,
        address: None,
    }
}

pub fn user_model(id: Uuid, email: &str, password_hash: &str) -> user::Model {
    user::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        is_active: true,
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        phone: None,
        last_login: None,
        tenant_id: Uuid::nil(),
    }
}

pub fn role_model(id: Uuid, name: &str) -> role::Model {
    role::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        is_active: true,
        name: name.to_string(),
        description: None,
    }
}

pub fn permission_model(id: Uuid, name: &str, module: &str) -> permission::Model {
    permission::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        is_active: true,
        name: name.to_string(),
        description: None,
        module: Some(module.to_string()),
        action: Some("read".to_string()),
    }
}

pub fn notification_model(id: Uuid, user_id: Uuid) -> notification::Model {
    notification::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        is_active: true,
        user_id,
        title: "Welcome".to_string(),
        message: "Your account is ready".to_string(),
        notification_type: Some("info".to_string()),
        is_read: false,
        read_at: None,
    }
}

pub fn audit_log_model(id: Uuid, user_id: Uuid, action: &str) -> audit_log::Model {
    audit_log::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        is_active: true,
        user_id,
        action: action.to_string(),
        resource_type: Some("User".to_string()),
        resource_id: Some(user_id),
        description: None,
        ip_address: Some("127.0.0.1".to_string()),
        user_agent: None,
    }
}

pub fn file_upload_model(id: Uuid, user_id: Uuid, original: &str) -> file_upload::Model {
    file_upload::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        is_active: true,
        user_id,
        filename: format!("{id}.pdf"),
        original_filename: original.to_string(),
        file_path: format!("../uploads/{id}.pdf"),
        file_size: Some(2048),
        mime_type: Some("application/pdf".to_string()),
        description: None,
    }
}
