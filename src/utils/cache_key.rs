//! Cache key derivation for analysis results.

use sha2::{Digest, Sha256};

/// Builds the cache key for a normalized text analysed with `model`.
///
/// The key has the form `{model}:{sha256_hex(text)}`; the cache backend adds
/// its own namespace prefix. Hashing keeps keys short and bounded regardless
/// of input length.
///
/// # Examples
///
/// ```ignore
/// let key = cache_key("llama3", "great");
/// assert!(key.starts_with("llama3:"));
/// assert_eq!(key.len(), "llama3:".len() + 64);
/// ```
pub fn cache_key(model: &str, normalized_text: &str) -> String {
    let digest = Sha256::digest(normalized_text.as_bytes());
    format!("{}:{}", model, hex::encode(digest))
}
