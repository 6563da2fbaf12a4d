//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Translation history table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "translation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Caller address taken from `X-Forwarded-For`
    pub ip_address: String,

    #[sea_orm(column_type = "Text")]
    pub input_text: String,

    #[sea_orm(column_type = "Text")]
    pub translated_text: String,

    /// Insert timestamp
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
