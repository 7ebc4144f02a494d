use serde::Deserialize;

use crate::error::RegistryError;

use super::shared::validate_required_text;

/// Field set shared by every uploaded file record. Pak and save uploads have
/// the same shape; only their storage grouping differs.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExternalFile {
    pub name: String,
    pub version: String,
    /// Filename of the uploaded content. The store turns it into a storage
    /// reference under the upload directory of the record kind.
    pub file: String,
}

pub fn validate_new_external_file(req: &NewExternalFile) -> Result<(), RegistryError> {
    validate_required_text(&req.name, "name")?;
    validate_required_text(&req.version, "version")?;
    validate_required_text(&req.file, "file")?;
    Ok(())
}
