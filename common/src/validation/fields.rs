use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const COURSE_CODE_MAX: usize = 15;
pub const COURSE_NAME_MAX: usize = 40;
pub const TEMPLATE_NAME_MAX: usize = 40;
pub const SECTION_CODE_MAX: usize = 15;
pub const SECTION_NAME_MAX: usize = 50;
pub const QUESTION_LABEL_MAX: usize = 25;
pub const QUESTION_TEXT_MAX: usize = 100;
pub const VOCABULARY_ENTRY_MAX: usize = 100;
/// Per-option limit of the vocabulary text box, tighter than the stored one.
pub const VOCABULARY_TEXT_ENTRY_MAX: usize = 50;
pub const FILETYPE_MAX: usize = 25;
/// Upper bound of a positive small integer column.
pub const MIN_WORDS_MAX: i64 = 32767;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("valid slug regex"));

/// Trims surrounding whitespace and refuses blank input.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_string())
}

/// Length is counted in characters, not bytes.
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

/// A required short identifier made of letters, digits, `-` and `_`.
pub fn slug(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = required(field, value)?;
    max_len(field, &value, max)?;
    if !SLUG_RE.is_match(&value) {
        return Err(ValidationError::InvalidSlug { field });
    }
    Ok(value)
}

pub fn in_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(value)
}
