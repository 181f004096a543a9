//! Input text normalization.
//!
//! Ensures that texts differing only in whitespace map to the same cache entry.

/// Errors that can occur during text normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextNormalizationError {
    #[error("Text must not be empty")]
    Empty,

    #[error("Text exceeds the maximum length of {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Normalizes input text to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Edges**: Leading and trailing whitespace is removed
/// 2. **Inner whitespace**: Every run of Unicode whitespace (spaces, tabs,
///    newlines) collapses into a single ASCII space
/// 3. **Case**: Preserved ("GREAT" and "great" are distinct inputs)
///
/// The length limit is checked against the normalized form, in characters.
///
/// # Errors
///
/// Returns [`TextNormalizationError::Empty`] if nothing but whitespace remains.
/// Returns [`TextNormalizationError::TooLong`] if the result is longer than
/// `max_chars`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_text("  I   love\n\tthis  ", 100).unwrap(),
///     "I love this"
/// );
/// ```
pub fn normalize_text(input: &str, max_chars: usize) -> Result<String, TextNormalizationError> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");

    if normalized.is_empty() {
        return Err(TextNormalizationError::Empty);
    }

    let actual = normalized.chars().count();
    if actual > max_chars {
        return Err(TextNormalizationError::TooLong {
            max: max_chars,
            actual,
        });
    }

    Ok(normalized)
}
