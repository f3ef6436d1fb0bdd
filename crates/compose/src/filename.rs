//! Deterministic, filesystem-safe filename derivation.
//!
//! The pattern is `{First}_{Last}_{Kind}.pdf`. Name components come from
//! user-entered records, so anything outside a conservative character set
//! (slashes, quotes, control characters) collapses to underscores.

use parchment_types::DocKind;

/// Reduces one name component to `[A-Za-z0-9-]` with runs of anything else
/// collapsed to a single underscore. An empty result becomes "Student".
pub fn sanitize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_filler = true;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            last_was_filler = false;
        } else if !last_was_filler {
            out.push('_');
            last_was_filler = true;
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "Student".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derives the output filename for a record's export.
///
/// Deterministic: the same names and kind always produce the same filename.
pub fn derive_filename(first_name: &str, last_name: &str, kind: DocKind) -> String {
    let mut parts = vec![sanitize_component(first_name)];
    if !last_name.trim().is_empty() {
        parts.push(sanitize_component(last_name));
    }
    parts.push(kind.label().to_string());
    format!("{}.pdf", parts.join("_"))
}
