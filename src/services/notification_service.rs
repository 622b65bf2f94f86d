use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::dao::{NotificationDao, PaginatedResponse},
    db::entities::notification,
    error::AppError,
    services::views::NotificationView,
};

#[derive(Clone)]
pub struct NotificationService {
    notification_dao: NotificationDao,
}

impl NotificationService {
    pub fn new(notification_dao: NotificationDao) -> Self {
        Self { notification_dao }
    }

    /// Creates an unread notification for `user_id`.
    pub async fn notify(
        &self,
        user_id: &Uuid,
        title: &str,
        message: &str,
        notification_type: Option<&str>,
    ) -> Result<notification::Model, AppError> {
        Ok(self
            .notification_dao
            .create_notification(user_id, title, message, notification_type)
            .await?)
    }

    pub async fn mark_as_read(&self, id: &Uuid) -> Result<notification::Model, AppError> {
        let now = Utc::now().fixed_offset();
        Ok(self.notification_dao.mark_as_read(id, &now).await?)
    }

    pub async fn list_unread(
        &self,
        user_id: &Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<PaginatedResponse<NotificationView>, AppError> {
        let page = self
            .notification_dao
            .list_unread_for_user(user_id, page, page_size)
            .await?;
        Ok(page.map(NotificationView::from))
    }
}
