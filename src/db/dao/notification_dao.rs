use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult, PaginatedResponse};
use crate::db::entities::{notification, prelude::Notification};

#[derive(Clone)]
pub struct NotificationDao {
    db: DatabaseConnection,
}

impl DaoBase for NotificationDao {
    type Entity = Notification;
    const ENTITY_NAME: &'static str = "Notification";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl NotificationDao {
    pub async fn create_notification(
        &self,
        user_id: &Uuid,
        title: &str,
        message: &str,
        notification_type: Option<&str>,
    ) -> DaoResult<notification::Model> {
        let model = notification::ActiveModel {
            user_id: Set(*user_id),
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            notification_type: Set(notification_type.map(str::to_string)),
            is_read: Set(false),
            read_at: Set(None),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn mark_as_read(
        &self,
        id: &Uuid,
        at: &chrono::DateTime<chrono::FixedOffset>,
    ) -> DaoResult<notification::Model> {
        let at = *at;
        self.update(*id, move |active| {
            active.is_read = Set(true);
            active.read_at = Set(Some(at));
        })
        .await
    }

    pub async fn list_unread_for_user(
        &self,
        user_id: &Uuid,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<notification::Model>> {
        let user_id = *user_id;
        self.find_active(page, page_size, move |query| {
            query
                .filter(notification::Column::UserId.eq(user_id))
                .filter(notification::Column::IsRead.eq(false))
        })
        .await
    }
}
