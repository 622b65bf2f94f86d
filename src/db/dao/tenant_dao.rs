use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{prelude::Tenant, tenant};

#[derive(Debug, Clone, Default)]
pub struct NewTenant {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone)]
pub struct TenantDao {
    db: DatabaseConnection,
}

impl DaoBase for TenantDao {
    type Entity = Tenant;
    const ENTITY_NAME: &'static str = "Tenant";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TenantDao {
    pub async fn create_tenant(&self, data: NewTenant) -> DaoResult<tenant::Model> {
        let model = tenant::ActiveModel {
            name: Set(data.name),
            slug: Set(data.slug),
            description: Set(data.description),
            contact_email: Set(data.contact_email),
            contact_phone: Set(data.contact_phone),
            address: Set(data.address),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> DaoResult<Option<tenant::Model>> {
        let slug = slug.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(tenant::Column::Slug.eq(slug))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    /// Oldest tenant regardless of its active flag.
    pub async fn first(&self) -> DaoResult<Option<tenant::Model>> {
        Tenant::find()
            .order_by_asc(tenant::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::TenantDao;
    use crate::db::dao::{DaoBase, DaoLayerError, fixtures};
    use crate::db::entities::tenant;

    #[tokio::test]
    async fn find_by_slug_returns_first_match() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[fixtures::tenant_model(id, "default")]])
            .into_connection();
        let dao = TenantDao::new(&db);

        let found = dao
            .find_by_slug("default")
            .await
            .expect("query should succeed");
        assert_eq!(found.map(|t| t.id), Some(id));
    }

    #[tokio::test]
    async fn first_returns_none_on_empty_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tenant::Model>::new()])
            .into_connection();
        let dao = TenantDao::new(&db);

        assert!(dao.first().await.expect("query should succeed").is_none());
    }

    #[tokio::test]
    async fn soft_delete_updates_instead_of_deleting() {
        let id = Uuid::new_v4();
        let existing = fixtures::tenant_model(id, "acme");
        let mut deactivated = existing.clone();
        deactivated.is_active = false;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing]])
            .append_query_results([[deactivated]])
            .into_connection();
        let dao = TenantDao::new(&db);

        let model = dao.soft_delete(id).await.expect("soft delete should succeed");
        assert!(!model.is_active);
        drop(dao);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("UPDATE"), "expected an UPDATE in {log}");
        assert!(!log.contains("DELETE"), "soft delete must not issue DELETE: {log}");
    }

    #[tokio::test]
    async fn soft_delete_of_unknown_id_is_not_found() {
        let missing = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tenant::Model>::new()])
            .into_connection();
        let dao = TenantDao::new(&db);

        let err = dao
            .soft_delete(missing)
            .await
            .expect_err("missing tenant should fail");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "Tenant", id } if id == missing
        ));
    }

    #[tokio::test]
    async fn find_rejects_oversized_pages_without_querying() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let dao = TenantDao::new(&db);

        let err = dao
            .find(1, 500, None, |query| query)
            .await
            .expect_err("page size above the limit should fail");
        assert!(matches!(
            err,
            DaoLayerError::InvalidPagination {
                page: 1,
                page_size: 500
            }
        ));
    }
}
