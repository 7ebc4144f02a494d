use sea_orm::*;
use tracing::{instrument, warn};

use crate::entity::{instance, save};
use crate::error::RegistryError;
use crate::models::file::{NewExternalFile, validate_new_external_file};
use crate::utils::filename::storage_reference;

/// Logical storage directory for save uploads.
pub const SAVE_UPLOAD_DIR: &str = "saves";

#[instrument(skip(db, req), fields(name = %req.name))]
pub async fn create_save(
    db: &DatabaseConnection,
    req: NewExternalFile,
) -> Result<save::Model, RegistryError> {
    validate_new_external_file(&req)?;
    let file = storage_reference(SAVE_UPLOAD_DIR, &req.file)
        .map_err(|e| RegistryError::Validation(e.message().into()))?;

    let new_save = save::ActiveModel {
        name: Set(req.name.trim().to_string()),
        version: Set(req.version.trim().to_string()),
        file: Set(file),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    Ok(new_save.insert(db).await?)
}

#[instrument(skip(db))]
pub async fn get_save(db: &DatabaseConnection, id: i32) -> Result<save::Model, RegistryError> {
    find_save(db, id).await
}

pub async fn list_saves(db: &DatabaseConnection) -> Result<Vec<save::Model>, RegistryError> {
    Ok(save::Entity::find()
        .order_by_asc(save::Column::Id)
        .all(db)
        .await?)
}

/// Delete a save upload. Same policy as pak deletion: referencing instances
/// keep their dangling `save_id`.
#[instrument(skip(db))]
pub async fn delete_save(db: &DatabaseConnection, id: i32) -> Result<(), RegistryError> {
    find_save(db, id).await?;

    let referencing = instance::Entity::find()
        .filter(instance::Column::SaveId.eq(id))
        .count(db)
        .await?;
    if referencing > 0 {
        warn!("Deleting save {id} still referenced by {referencing} instance(s)");
    }

    save::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

async fn find_save<C: ConnectionTrait>(db: &C, id: i32) -> Result<save::Model, RegistryError> {
    save::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Save {id} not found")))
}
