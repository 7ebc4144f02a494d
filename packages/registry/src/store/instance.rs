use sea_orm::*;
use tracing::instrument;

use crate::entity::{instance, pak, save};
use crate::error::RegistryError;
use crate::models::instance::{
    NewInstance, UpdateInstance, validate_new_instance, validate_update_instance,
};

#[instrument(skip(db, req), fields(name = %req.name))]
pub async fn create_instance(
    db: &DatabaseConnection,
    req: NewInstance,
) -> Result<instance::Model, RegistryError> {
    validate_new_instance(&req)?;

    let txn = db.begin().await?;

    ensure_pak_exists(&txn, req.pak_id).await?;
    ensure_save_exists(&txn, req.save_id).await?;

    let new_instance = instance::ActiveModel {
        name: Set(req.name.trim().to_string()),
        port: Set(req.port),
        revision: Set(req.revision),
        lang: Set(req.lang),
        pak_id: Set(req.pak_id),
        save_id: Set(req.save_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_instance.insert(&txn).await?;
    txn.commit().await?;

    Ok(model)
}

#[instrument(skip(db))]
pub async fn get_instance(
    db: &DatabaseConnection,
    id: i32,
) -> Result<instance::Model, RegistryError> {
    find_instance(db, id).await
}

/// Look up an instance by its unique name.
#[instrument(skip(db))]
pub async fn get_instance_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<instance::Model, RegistryError> {
    instance::Entity::find()
        .filter(instance::Column::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Instance '{name}' not found")))
}

pub async fn list_instances(
    db: &DatabaseConnection,
) -> Result<Vec<instance::Model>, RegistryError> {
    Ok(instance::Entity::find()
        .order_by_asc(instance::Column::Name)
        .all(db)
        .await?)
}

#[instrument(skip(db, patch), fields(id))]
pub async fn update_instance(
    db: &DatabaseConnection,
    id: i32,
    patch: UpdateInstance,
) -> Result<instance::Model, RegistryError> {
    validate_update_instance(&patch)?;

    if patch == UpdateInstance::default() {
        return find_instance(db, id).await;
    }

    let txn = db.begin().await?;

    let existing = find_instance(&txn, id).await?;
    let mut active: instance::ActiveModel = existing.into();

    if let Some(ref name) = patch.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(port) = patch.port {
        active.port = Set(port);
    }
    if let Some(revision) = patch.revision {
        active.revision = Set(revision);
    }
    if let Some(lang) = patch.lang {
        active.lang = Set(lang);
    }
    if let Some(pak_id) = patch.pak_id {
        ensure_pak_exists(&txn, pak_id).await?;
        active.pak_id = Set(pak_id);
    }
    if let Some(save_id) = patch.save_id {
        ensure_save_exists(&txn, save_id).await?;
        active.save_id = Set(save_id);
    }

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(model)
}

#[instrument(skip(db))]
pub async fn delete_instance(db: &DatabaseConnection, id: i32) -> Result<(), RegistryError> {
    find_instance(db, id).await?;
    instance::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

/// Resolve the pak referenced by an instance.
///
/// The reference survives deletion of its target, so the lookup can fail
/// with NotFound even for an existing instance.
#[instrument(skip(db))]
pub async fn pak_for_instance(
    db: &DatabaseConnection,
    id: i32,
) -> Result<pak::Model, RegistryError> {
    let inst = find_instance(db, id).await?;
    pak::Entity::find_by_id(inst.pak_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            RegistryError::NotFound(format!(
                "Pak {} referenced by instance '{}' no longer exists",
                inst.pak_id, inst.name
            ))
        })
}

/// Resolve the save referenced by an instance. Same caveat as
/// [`pak_for_instance`].
#[instrument(skip(db))]
pub async fn save_for_instance(
    db: &DatabaseConnection,
    id: i32,
) -> Result<save::Model, RegistryError> {
    let inst = find_instance(db, id).await?;
    save::Entity::find_by_id(inst.save_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            RegistryError::NotFound(format!(
                "Save {} referenced by instance '{}' no longer exists",
                inst.save_id, inst.name
            ))
        })
}

async fn find_instance<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<instance::Model, RegistryError> {
    instance::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("Instance {id} not found")))
}

async fn ensure_pak_exists<C: ConnectionTrait>(db: &C, pak_id: i32) -> Result<(), RegistryError> {
    if pak::Entity::find_by_id(pak_id).one(db).await?.is_none() {
        return Err(RegistryError::ReferentialIntegrity(format!(
            "Pak {pak_id} does not exist"
        )));
    }
    Ok(())
}

async fn ensure_save_exists<C: ConnectionTrait>(db: &C, save_id: i32) -> Result<(), RegistryError> {
    if save::Entity::find_by_id(save_id).one(db).await?.is_none() {
        return Err(RegistryError::ReferentialIntegrity(format!(
            "Save {save_id} does not exist"
        )));
    }
    Ok(())
}
