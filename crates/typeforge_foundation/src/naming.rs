//! Case conversion for generated symbol and file names.

use convert_case::{Case, Casing};

/// Converts a symbol name to `kebab-case` (`JsonNullableFilter` → `json-nullable-filter`).
#[must_use]
pub fn kebab(name: &str) -> String {
    name.to_case(Case::Kebab)
}

/// Upper-cases the first character only, leaving the rest untouched.
///
/// Back-relation fields are embedded in symbol names this way, so
/// `followedBy` becomes `FollowedBy` rather than being re-split.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
