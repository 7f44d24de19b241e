//! Centralized validation and helper functions.

/// Maximum number of genotype entries accepted from a single input (DOS protection)
pub const MAX_GENOTYPE_ENTRIES: usize = 1_000;

/// Longest genotype code accepted. Descriptive results are short phrases.
pub const MAX_CODE_LENGTH: usize = 64;

/// Largest text input accepted from a file or request body
pub const MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Validate that a string looks like a genotype code.
///
/// Codes are non-empty, bounded in length, and free of control characters.
/// Nothing beyond that is checked; whether a code is meaningful for a locus is
/// the registry's concern.
///
/// # Examples
///
/// ```
/// use coat_decoder::utils::validation::is_valid_code;
///
/// assert!(is_valid_code("M*m"));
/// assert!(is_valid_code("Intense Red Pigmentation"));
/// assert!(!is_valid_code(""));
/// assert!(!is_valid_code("ee\u{0}"));
/// ```
#[must_use]
pub fn is_valid_code(s: &str) -> bool {
    !s.is_empty() && s.len() <= MAX_CODE_LENGTH && !s.chars().any(char::is_control)
}

/// Trim a raw genotype code.
/// Returns None if the trimmed input is not a valid code.
#[must_use]
pub fn normalize_code(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if is_valid_code(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

/// Check if adding another genotype entry would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new entry.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_entry_limit(count: usize) -> Option<String> {
    if count >= MAX_GENOTYPE_ENTRIES {
        Some(format!(
            "Too many genotype entries: adding another would exceed maximum of {MAX_GENOTYPE_ENTRIES}"
        ))
    } else {
        None
    }
}

/// Input validation error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("Input too large: exceeds {MAX_INPUT_SIZE} bytes")]
    InputTooLarge,
    #[error("Input content appears malformed or is not text")]
    InvalidContent,
}

/// Validate text input before parsing
///
/// Checks size limits, rejects binary content, and requires UTF-8.
///
/// # Errors
///
/// Returns `ValidationError::EmptyInput` for blank input,
/// `ValidationError::InputTooLarge` past [`MAX_INPUT_SIZE`], or
/// `ValidationError::InvalidContent` for binary or non-UTF-8 data.
pub fn validate_text_content(content: &[u8]) -> Result<&str, ValidationError> {
    if content.len() > MAX_INPUT_SIZE {
        return Err(ValidationError::InputTooLarge);
    }

    // Check for excessive non-printable characters
    let non_printable_count = content
        .iter()
        .filter(|&&b| b < 9 || (b > 13 && b < 32))
        .count();

    // Allow up to 5% non-printable characters
    if content.len() > 100 && non_printable_count > content.len() / 20 {
        return Err(ValidationError::InvalidContent);
    }

    let text = std::str::from_utf8(content).map_err(|_| ValidationError::InvalidContent)?;
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    Ok(text)
}
