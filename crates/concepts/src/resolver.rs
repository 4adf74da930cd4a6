//! Tolerant concept-id resolution
//!
//! Callers hold a mix of display titles and already-canonical
//! identifiers; [`resolve_concept_id`] accepts either and falls back
//! to the input unchanged on a miss.

use crate::index::{concept_id_from_title, NAMESPACE_PREFIXES};
use std::borrow::Cow;
use tracing::debug;

/// Whether `s` already carries a recognized namespace prefix
pub fn is_concept_id(s: &str) -> bool {
    NAMESPACE_PREFIXES.iter().any(|p| s.starts_with(p))
}

/// Resolve a display title or identifier to a concept identifier
///
/// Resolution order:
/// 1. input with a recognized namespace prefix is returned unchanged
/// 2. otherwise the title table is consulted
/// 3. otherwise the input is returned unchanged as a best-effort
///    fallback, with no guarantee of validity downstream
///
/// # Examples
///
/// ```
/// use devroad_concepts::resolve_concept_id;
///
/// assert_eq!(resolve_concept_id("Herança"), "java-oop-inheritance");
/// assert_eq!(resolve_concept_id("java-intro"), "java-intro");
/// assert_eq!(resolve_concept_id("Typo Title"), "Typo Title");
/// ```
pub fn resolve_concept_id(title_or_id: &str) -> Cow<'_, str> {
    if is_concept_id(title_or_id) {
        return Cow::Borrowed(title_or_id);
    }
    match concept_id_from_title(title_or_id) {
        Some(id) => Cow::Borrowed(id),
        None => {
            debug!(input = title_or_id, "no concept id for input, passing through");
            Cow::Borrowed(title_or_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_input_passes_through_unchanged() {
        // "java-intro" is also a mapped value's target; the prefix
        // check must win before any table lookup.
        assert_eq!(resolve_concept_id("java-intro"), "java-intro");
        assert_eq!(resolve_concept_id("sql-joins"), "sql-joins");
    }

    #[test]
    fn known_title_resolves_to_mapped_id() {
        assert_eq!(resolve_concept_id("Herança"), "java-oop-inheritance");
        assert_eq!(resolve_concept_id("Polimorfismo"), "java-oop-polymorphism");
    }

    #[test]
    fn unknown_input_passes_through_unchanged() {
        assert_eq!(
            resolve_concept_id("Unknown Title Not In Table"),
            "Unknown Title Not In Table"
        );
    }

    #[test]
    fn unknown_prefixed_id_still_passes_through() {
        // Not in any table, but carries a valid prefix.
        assert_eq!(resolve_concept_id("java-made-up"), "java-made-up");
    }

    #[test]
    fn is_concept_id_checks_prefix_only() {
        assert!(is_concept_id("java-intro"));
        assert!(is_concept_id("css-"));
        assert!(!is_concept_id("Herança"));
        assert!(!is_concept_id("rust-intro"));
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(resolve_concept_id(""), "");
    }
}
