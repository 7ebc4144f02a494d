use serde::Deserialize;

use crate::error::RegistryError;

use super::shared::{validate_lang, validate_required_text};

#[derive(Debug, Clone, Deserialize)]
pub struct NewInstance {
    pub name: String,
    pub port: i32,
    pub revision: i32,
    pub lang: String,
    pub pak_id: i32,
    pub save_id: i32,
}

/// PATCH semantics: only provided fields are modified.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateInstance {
    pub name: Option<String>,
    pub port: Option<i32>,
    pub revision: Option<i32>,
    pub lang: Option<String>,
    pub pak_id: Option<i32>,
    pub save_id: Option<i32>,
}

pub fn validate_new_instance(req: &NewInstance) -> Result<(), RegistryError> {
    validate_required_text(&req.name, "name")?;
    validate_lang(&req.lang)?;
    Ok(())
}

pub fn validate_update_instance(req: &UpdateInstance) -> Result<(), RegistryError> {
    if let Some(ref name) = req.name {
        validate_required_text(name, "name")?;
    }
    if let Some(ref lang) = req.lang {
        validate_lang(lang)?;
    }
    Ok(())
}
