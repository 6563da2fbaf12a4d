//! Entity to model mappers

use super::entity;
use crate::contract::{NewTranslation, Translation};

impl From<entity::Model> for Translation {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            ip_address: entity.ip_address,
            input_text: entity.input_text,
            translated_text: entity.translated_text,
            created_at: entity.created_at,
        }
    }
}

impl From<&NewTranslation> for entity::ActiveModel {
    fn from(model: &NewTranslation) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            ip_address: Set(model.ip_address.clone()),
            input_text: Set(model.input_text.clone()),
            translated_text: Set(model.translated_text.clone()),
            created_at: Set(chrono::Utc::now()),
        }
    }
}
