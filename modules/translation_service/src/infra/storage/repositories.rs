//! SeaORM repository implementations

use crate::contract::{NewTranslation, Translation};
use crate::domain::repository::TranslationRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmTranslationRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTranslationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TranslationRepository for SeaOrmTranslationRepository {
    async fn save(&self, translation: &NewTranslation) -> Result<Translation> {
        let active: entity::ActiveModel = translation.into();
        let model = active.insert(&*self.db).await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Translation>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Translation>> {
        let results = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(entity::Entity::find().count(&*self.db).await?)
    }
}
