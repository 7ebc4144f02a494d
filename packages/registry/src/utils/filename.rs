/// Why an upload filename was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum FilenameError {
    /// Filename is empty or whitespace-only.
    Empty,
    /// Filename contains path separators (`/` or `\`).
    PathSeparator,
    /// Filename is a path traversal component (`..`).
    Traversal,
    /// Filename starts with a dot (hidden file).
    Hidden,
    /// Filename contains null bytes or other control characters.
    Control,
}

impl FilenameError {
    /// Returns a human-readable error message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Filename cannot be empty",
            Self::PathSeparator => "Invalid filename: path separators are not allowed",
            Self::Traversal => "Invalid filename: '..' is not allowed",
            Self::Hidden => "Invalid filename: hidden files (starting with '.') are not allowed",
            Self::Control => "Invalid filename: control characters are not allowed",
        }
    }
}

/// Validates an upload filename (a single flat path segment).
pub fn validate_upload_filename(filename: &str) -> Result<&str, FilenameError> {
    let trimmed = filename.trim();

    if trimmed.is_empty() {
        return Err(FilenameError::Empty);
    }

    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(FilenameError::Control);
    }

    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(FilenameError::PathSeparator);
    }

    if trimmed == ".." {
        return Err(FilenameError::Traversal);
    }

    if trimmed.starts_with('.') {
        return Err(FilenameError::Hidden);
    }

    Ok(trimmed)
}

/// Computes the storage reference for an upload: `{dir}/{filename}`.
pub fn storage_reference(dir: &str, filename: &str) -> Result<String, FilenameError> {
    let name = validate_upload_filename(filename)?;
    Ok(format!("{dir}/{name}"))
}
