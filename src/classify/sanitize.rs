//! Filesystem-safe path segment normalization.

/// Characters rejected by the most restrictive supported filesystem
/// (NTFS/FAT), plus control characters.
fn is_disallowed(c: char) -> bool {
    c.is_control() || matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
}

/// Normalize free text into one safe path segment: disallowed characters
/// become a space, whitespace runs collapse, the result is trimmed.
///
/// Idempotent: sanitizing an already-sanitized string returns it unchanged.
/// The result can be empty when the input holds no allowed character;
/// callers that need a name use [`sanitize_or`].
pub fn sanitize(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if is_disallowed(c) { ' ' } else { c })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`sanitize`], falling back to a caller-supplied literal when the result
/// would be empty.
pub fn sanitize_or(text: &str, fallback: &str) -> String {
    let cleaned = sanitize(text);
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}
