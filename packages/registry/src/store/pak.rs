use sea_orm::*;
use tracing::{instrument, warn};

use crate::entity::{instance, pak};
use crate::error::RegistryError;
use crate::models::file::{NewExternalFile, validate_new_external_file};
use crate::utils::filename::storage_reference;

/// Logical storage directory for pak uploads.
pub const PAK_UPLOAD_DIR: &str = "paks";

#[instrument(skip(db, req), fields(name = %req.name))]
pub async fn create_pak(
    db: &DatabaseConnection,
    req: NewExternalFile,
) -> Result<pak::Model, RegistryError> {
    validate_new_external_file(&req)?;
    let file = storage_reference(PAK_UPLOAD_DIR, &req.file)
        .map_err(|e| RegistryError::Validation(e.message().into()))?;

    let new_pak = pak::ActiveModel {
        name: Set(req.name.trim().to_string()),
        version: Set(req.version.trim().to_string()),
        file: Set(file),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    Ok(new_pak.insert(db).await?)
}

#[instrument(skip(db))]
pub async fn get_pak(db: &DatabaseConnection, id: i32) -> Result<pak::Model, RegistryError> {
    find_pak(db, id).await
}

pub async fn list_paks(db: &DatabaseConnection) -> Result<Vec<pak::Model>, RegistryError> {
    Ok(pak::Entity::find()
        .order_by_asc(pak::Column::Id)
        .all(db)
        .await?)
}

/// Delete a pak upload.
///
/// Instances referencing it are left untouched: their `pak_id` keeps
/// pointing at the deleted row and resolves to NotFound from then on.
#[instrument(skip(db))]
pub async fn delete_pak(db: &DatabaseConnection, id: i32) -> Result<(), RegistryError> {
    find_pak(db, id).await?;

    let referencing = instance::Entity::find()
        .filter(instance::Column::PakId.eq(id))
        .count(db)
        .await?;
    if referencing > 0 {
        warn!("Deleting pak {id} still referenced by {referencing} instance(s)");
    }

    pak::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

async fn find_pak<C: ConnectionTrait>(db: &C, id: i32) -> Result<pak::Model, RegistryError> {
    pak::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Pak {id} not found")))
}
