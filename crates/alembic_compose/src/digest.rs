//! Content digest of rendered documents.

/// Lowercase hex BLAKE3 digest of a rendered document
#[must_use]
pub fn document_digest(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
