use crate::{
    db::dao::RoleDao,
    db::entities::role,
    error::AppError,
    services::views::RoleView,
};

#[derive(Clone)]
pub struct RoleService {
    role_dao: RoleDao,
}

impl RoleService {
    pub fn new(role_dao: RoleDao) -> Self {
        Self { role_dao }
    }

    pub async fn create_role(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<role::Model, AppError> {
        Ok(self.role_dao.create_role(name, description).await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, AppError> {
        Ok(self.role_dao.find_by_name(name).await?)
    }

    /// Returns the role named `name`, creating it when absent.
    pub async fn find_or_create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<role::Model, AppError> {
        if let Some(existing) = self.role_dao.find_by_name(name).await? {
            return Ok(existing);
        }
        self.create_role(name, description).await
    }

    pub fn view(&self, model: role::Model) -> RoleView {
        RoleView::from(model)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::RoleService;
    use crate::db::dao::{DaoBase, RoleDao, fixtures};
    use crate::db::entities::role;

    #[tokio::test]
    async fn find_or_create_reuses_existing_role() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[fixtures::role_model(id, "User")]])
            .into_connection();
        let service = RoleService::new(RoleDao::new(&db));

        let role = service
            .find_or_create("User", Some("Regular user"))
            .await
            .expect("lookup should succeed");
        assert_eq!(role.id, id);
        drop(service);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("INSERT"), "existing role must not be inserted: {log}");
    }

    #[tokio::test]
    async fn find_or_create_inserts_missing_role() {
        let created = fixtures::role_model(Uuid::new_v4(), "Manager");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<role::Model>::new()])
            .append_query_results([[created.clone()]])
            .into_connection();
        let service = RoleService::new(RoleDao::new(&db));

        let role = service
            .find_or_create("Manager", Some("Department manager"))
            .await
            .expect("insert should succeed");
        assert_eq!(role, created);
        drop(service);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("INSERT"), "missing role should be inserted: {log}");
    }
}
