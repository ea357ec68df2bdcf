use once_cell::sync::Lazy;
use regex::Regex;

static HYPHEN_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\s+").expect("valid regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Canonical search form of a text.
///
/// Lower-cases, joins words split by a hyphenated line break (`-` followed by
/// whitespace), collapses whitespace runs to a single space and trims.
/// Hyphen joining must run before whitespace collapsing.
pub fn normalize_for_search(text: &str) -> String {
    let lowered = text.to_lowercase();
    let joined = HYPHEN_BREAK.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUN.replace_all(&joined, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn joins_hyphenated_line_breaks() {
        let normalized = normalize_for_search("Nachhal-\ntigkeit");
        assert_eq!(normalized, "nachhaltigkeit");
        assert_eq!(normalized, normalize_for_search("Nachhaltigkeit"));
        assert!(!normalized.contains('-'));
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(
            normalize_for_search("  GHG \t  Protocol\n\nScope 2  "),
            "ghg protocol scope 2"
        );
    }

    #[test]
    fn keeps_hyphens_inside_words() {
        assert_eq!(normalize_for_search("CSR-RUG"), "csr-rug");
        assert_eq!(normalize_for_search("14064-1"), "14064-1");
    }

    #[test]
    fn hyphen_before_spaces_is_removed_too() {
        // Same rule as the line-break case: the alias "Scope-2- Emissionen"
        // and the text "Scope-2-\nEmissionen" meet in the middle.
        assert_eq!(normalize_for_search("Scope-2- Emissionen"), "scope-2emissionen");
        assert_eq!(normalize_for_search("Scope-2-\nEmissionen"), "scope-2emissionen");
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(normalize_for_search("ÖKOLOGISCH Nachhaltige"), "ökologisch nachhaltige");
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize_for_search(" \n\t "), "");
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(text in "\\PC{0,64}") {
            let once = normalize_for_search(&text);
            prop_assert_eq!(normalize_for_search(&once), once);
        }

        #[test]
        fn normalization_is_idempotent_on_break_heavy_text(text in "[a-zA-Z \\-\n\t]{0,64}") {
            let once = normalize_for_search(&text);
            prop_assert_eq!(normalize_for_search(&once), once);
        }
    }
}
