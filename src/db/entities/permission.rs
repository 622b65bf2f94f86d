use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

// Not linked to roles or users yet.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: Option<String>,
    /// e.g. `maintenance`, `education`
    pub module: Option<String>,
    /// e.g. `read`, `write`, `delete`
    pub action: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
