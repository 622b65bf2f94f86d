use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    db::dao::{FileUploadDao, NewFileUpload, PaginatedResponse},
    db::entities::file_upload,
    error::AppError,
    services::views::FileUploadView,
};

/// Metadata for a file already written by the caller.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub user_id: Uuid,
    pub original_filename: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct FileUploadService {
    file_upload_dao: FileUploadDao,
    upload_folder: PathBuf,
}

impl FileUploadService {
    pub fn new(file_upload_dao: FileUploadDao, upload_folder: PathBuf) -> Self {
        Self {
            file_upload_dao,
            upload_folder,
        }
    }

    /// Random name for the stored copy, keeping the original extension.
    pub fn stored_filename(original: &str) -> String {
        let id = Uuid::new_v4();
        match Path::new(original)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
        {
            Some(ext) => format!("{id}.{}", ext.to_ascii_lowercase()),
            None => id.to_string(),
        }
    }

    pub async fn record_upload(
        &self,
        upload: UploadedFile,
    ) -> Result<file_upload::Model, AppError> {
        if upload.original_filename.trim().is_empty() {
            return Err(AppError::bad_request("Original filename is required"));
        }
        if upload.file_size.is_some_and(|size| size < 0) {
            return Err(AppError::bad_request("File size cannot be negative"));
        }

        let filename = Self::stored_filename(&upload.original_filename);
        let file_path = self.upload_folder.join(&filename).to_string_lossy().into_owned();
        Ok(self
            .file_upload_dao
            .create_upload(NewFileUpload {
                user_id: upload.user_id,
                filename,
                original_filename: upload.original_filename,
                file_path,
                file_size: upload.file_size,
                mime_type: upload.mime_type,
                description: upload.description,
            })
            .await?)
    }

    pub async fn list_for_user(
        &self,
        user_id: &Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<PaginatedResponse<FileUploadView>, AppError> {
        let page = self
            .file_upload_dao
            .list_for_user(user_id, page, page_size)
            .await?;
        Ok(page.map(FileUploadView::from))
    }
}
