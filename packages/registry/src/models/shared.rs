use crate::error::RegistryError;

/// Maximum length of an instance language code.
pub const LANG_MAX_CHARS: usize = 2;

/// Validate a required text field (non-empty after trimming).
pub fn validate_required_text(value: &str, field: &str) -> Result<(), RegistryError> {
    if value.trim().is_empty() {
        return Err(RegistryError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate a language code. Any non-empty string of at most two characters
/// passes; codes are not checked against real languages.
pub fn validate_lang(lang: &str) -> Result<(), RegistryError> {
    validate_required_text(lang, "lang")?;
    if lang.chars().count() > LANG_MAX_CHARS {
        return Err(RegistryError::Validation(
            "Language code must be at most 2 characters".into(),
        ));
    }
    Ok(())
}
