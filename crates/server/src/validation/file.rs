//! Checks run on an uploaded file before it is sent to the document store.

use shared_types::{error_type, FormError};

pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "csv", "doc", "docx", "jpg", "jpeg", "msg", "odp", "ods", "odt", "pdf", "png", "ppt", "pptx",
    "rtf", "txt", "xls", "xlsx",
];

pub const MAX_FILE_NAME_LENGTH: usize = 150;

const FORBIDDEN_NAME_CHARS: &[char] = &['|', '*', '?', ':', '<', '>', '/', '\\', '$', '"'];

pub fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

pub fn has_valid_file_name(file_name: &str) -> bool {
    let stem_ok = file_name
        .rsplit_once('.')
        .is_some_and(|(stem, _)| !stem.trim().is_empty());
    stem_ok
        && !file_name.starts_with('.')
        && file_name.chars().count() <= MAX_FILE_NAME_LENGTH
        && !file_name
            .chars()
            .any(|c| c.is_control() || FORBIDDEN_NAME_CHARS.contains(&c))
}

/// First problem with the file, reported against `property_name`.
///
/// The name is checked before the extension so that `bad|name.exe` reports
/// the name.
pub fn check_file(
    property_name: &str,
    file_name: &str,
    size: usize,
    max_bytes: usize,
) -> Option<FormError> {
    let error = if !has_valid_file_name(file_name) {
        error_type::INVALID_FILE_NAME
    } else if !has_allowed_extension(file_name) {
        error_type::INVALID_FILE_FORMAT
    } else if size == 0 || size > max_bytes {
        error_type::INVALID_FILE_SIZE
    } else {
        return None;
    };
    Some(FormError::new(error, property_name))
}
