use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult, PaginatedResponse};
use crate::db::entities::{file_upload, prelude::FileUpload};

#[derive(Debug, Clone)]
pub struct NewFileUpload {
    pub user_id: Uuid,
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct FileUploadDao {
    db: DatabaseConnection,
}

impl DaoBase for FileUploadDao {
    type Entity = FileUpload;
    const ENTITY_NAME: &'static str = "FileUpload";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl FileUploadDao {
    pub async fn create_upload(&self, data: NewFileUpload) -> DaoResult<file_upload::Model> {
        let model = file_upload::ActiveModel {
            user_id: Set(data.user_id),
            filename: Set(data.filename),
            original_filename: Set(data.original_filename),
            file_path: Set(data.file_path),
            file_size: Set(data.file_size),
            mime_type: Set(data.mime_type),
            description: Set(data.description),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_for_user(
        &self,
        user_id: &Uuid,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<file_upload::Model>> {
        let user_id = *user_id;
        self.find_active(page, page_size, move |query| {
            query.filter(file_upload::Column::UserId.eq(user_id))
        })
        .await
    }
}
