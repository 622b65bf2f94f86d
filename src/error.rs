use sea_orm::SqlErr;

use crate::db::dao::DaoLayerError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match &err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::InvalidPagination { .. } => AppError::bad_request(err.to_string()),
            DaoLayerError::Db(db_err) => match db_err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    AppError::conflict(format!("Duplicate value: {detail}"))
                }
                _ => AppError::internal(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn dao_not_found_maps_to_not_found() {
        let err: AppError = DaoLayerError::NotFound {
            entity: "tenant",
            id: Uuid::nil(),
        }
        .into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn dao_pagination_maps_to_bad_request() {
        let err: AppError = DaoLayerError::InvalidPagination {
            page: 0,
            page_size: 10,
        }
        .into();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.message(), "Invalid pagination: page=0 page_size=10");
    }

    #[test]
    fn generic_db_errors_are_internal() {
        let err: AppError = DaoLayerError::Db(DbErr::Custom("boom".to_string())).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
