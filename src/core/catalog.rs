//! Fixed catalog of Unicode whitespace variants used as space substitutes.

use serde::Serialize;

/// One named substitution rule: the literal sequence that replaces each ASCII space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpaceVariant {
    pub label: &'static str,
    pub sequence: &'static str,
    pub description: &'static str,
}

/// Error looking up a variant by label.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),
}

const fn variant(
    label: &'static str,
    sequence: &'static str,
    description: &'static str,
) -> SpaceVariant {
    SpaceVariant {
        label,
        sequence,
        description,
    }
}

/// All variants, in display order. Labels are unique.
pub const CATALOG: &[SpaceVariant] = &[
    variant(
        "Em Space",
        "\u{2003}",
        "Width of one em; the widest common typographic space.",
    ),
    variant("En Space", "\u{2002}", "Half an em wide."),
    variant(
        "Thin Space",
        "\u{2009}",
        "About a fifth of an em; used between digits and units.",
    ),
    variant("Thin Space*2", "\u{2009}\u{2009}", "Two thin spaces back to back."),
    variant(
        "Hair Space",
        "\u{200A}",
        "Narrowest visible space; nearly invisible in most fonts.",
    ),
    variant(
        "Narrow, Hair",
        "\u{202F}\u{200A}",
        "Narrow no-break space followed by a hair space.",
    ),
    variant(
        "Thin, Hair",
        " \u{2009}\u{200A}",
        "Ordinary space, thin space, then hair space.",
    ),
    variant(
        "Hair Space*3",
        "\u{200A}\u{200A}\u{200A}",
        "Three hair spaces; close to the width of a normal space.",
    ),
    variant(
        "Narrow No-Break",
        "\u{202F}",
        "Thin-width space that never allows a line break.",
    ),
    variant(
        "Narrow No-Break*2",
        "\u{202F}\u{202F}",
        "Two narrow no-break spaces.",
    ),
    variant(
        "Six-Per-Em Space",
        "\u{2006}",
        "One sixth of an em wide.",
    ),
    variant(
        "Punctuation Space",
        "\u{2008}",
        "Width of a period in the current font.",
    ),
    variant(
        "Figure Space",
        "\u{2007}",
        "Width of a digit; keeps numbers aligned in tables.",
    ),
    variant(
        "Zero Width Space",
        "\u{200B}",
        "Invisible; words render joined but may break across lines.",
    ),
    variant(
        "Word Joiner",
        "\u{2060}",
        "Invisible; words render joined and never break.",
    ),
];

/// Look up a variant by its exact label.
pub fn find(label: &str) -> Option<&'static SpaceVariant> {
    CATALOG.iter().find(|v| v.label == label)
}

/// Look up a variant by label, ignoring ASCII case. Used by the CLI.
pub fn find_ignore_case(label: &str) -> Result<&'static SpaceVariant, CatalogError> {
    CATALOG
        .iter()
        .find(|v| v.label.eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| CatalogError::UnknownVariant(label.to_string()))
}

/// Usage description for a label, if it exists.
pub fn description(label: &str) -> Option<&'static str> {
    find(label).map(|v| v.description)
}

/// Labels in display order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|v| v.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let set: HashSet<_> = labels().collect();
        assert_eq!(set.len(), CATALOG.len());
    }

    #[test]
    fn every_sequence_is_non_empty() {
        assert!(CATALOG.iter().all(|v| !v.sequence.is_empty()));
    }

    #[test]
    fn every_sequence_is_whitespace_or_joiner() {
        // Zero width space and word joiner are format characters, not White_Space.
        for v in CATALOG {
            for c in v.sequence.chars() {
                assert!(
                    c.is_whitespace() || c == '\u{200B}' || c == '\u{2060}',
                    "{} contains {:?}",
                    v.label,
                    c
                );
            }
        }
    }

    #[test]
    fn find_em_space() {
        let v = find("Em Space").expect("em space");
        assert_eq!(v.sequence, "\u{2003}");
    }

    #[test]
    fn find_is_case_sensitive() {
        assert!(find("em space").is_none());
    }

    #[test]
    fn find_ignore_case_trims_and_matches() {
        let v = find_ignore_case("  hair space ").expect("hair space");
        assert_eq!(v.label, "Hair Space");
    }

    #[test]
    fn find_ignore_case_unknown() {
        assert_eq!(
            find_ignore_case("Tab"),
            Err(CatalogError::UnknownVariant("Tab".to_string()))
        );
    }

    #[test]
    fn description_lookup() {
        assert!(description("Word Joiner").is_some_and(|d| d.contains("never break")));
        assert!(description("Nope").is_none());
    }
}
