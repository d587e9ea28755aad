//! Custom combination builder: an ordered, duplicate-free list of catalog labels
//! whose sequences are concatenated into one ad-hoc substitution rule.

use crate::core::catalog::{self, CatalogError};
use crate::core::spacing;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomCombination {
    selection: Vec<&'static str>,
    pending: Option<&'static str>,
}

impl CustomCombination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pending label (the one `add` will append).
    pub fn select(&mut self, label: &str) -> Result<(), CatalogError> {
        let variant =
            catalog::find(label).ok_or_else(|| CatalogError::UnknownVariant(label.to_string()))?;
        self.pending = Some(variant.label);
        Ok(())
    }

    /// True when `add` would append the pending label.
    pub fn can_add(&self) -> bool {
        self.pending.is_some_and(|p| !self.selection.contains(&p))
    }

    /// Append the pending label and clear it. Empty or duplicate is a no-op.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        if let Some(label) = self.pending.take() {
            self.selection.push(label);
            log::debug!("custom combination: added {}", label);
        }
        true
    }

    /// Remove `label` from the selection. Returns false if it was not selected.
    pub fn remove(&mut self, label: &str) -> bool {
        match self.selection.iter().position(|l| *l == label) {
            Some(idx) => {
                self.selection.remove(idx);
                log::debug!("custom combination: removed {}", label);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &[&'static str] {
        &self.selection
    }

    pub fn pending(&self) -> Option<&'static str> {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Concatenation of the selected sequences, in selection order.
    pub fn sequence(&self) -> String {
        self.selection
            .iter()
            .filter_map(|l| catalog::find(l))
            .map(|v| v.sequence)
            .collect()
    }

    pub fn preview(&self, input: &str) -> String {
        spacing::substitute(input, &self.sequence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(labels: &[&str]) -> CustomCombination {
        let mut combo = CustomCombination::new();
        for l in labels {
            combo.select(l).expect("known label");
            combo.add();
        }
        combo
    }

    #[test]
    fn new_is_empty() {
        let combo = CustomCombination::new();
        assert!(combo.is_empty());
        assert_eq!(combo.pending(), None);
        assert_eq!(combo.sequence(), "");
        assert!(!combo.can_add());
    }

    #[test]
    fn select_unknown_label_fails_and_keeps_pending() {
        let mut combo = CustomCombination::new();
        combo.select("Em Space").expect("known");
        assert_eq!(
            combo.select("Tab"),
            Err(CatalogError::UnknownVariant("Tab".to_string()))
        );
        assert_eq!(combo.pending(), Some("Em Space"));
    }

    #[test]
    fn add_appends_and_clears_pending() {
        let mut combo = CustomCombination::new();
        combo.select("Hair Space").expect("known");
        assert!(combo.add());
        assert_eq!(combo.selection(), &["Hair Space"]);
        assert_eq!(combo.pending(), None);
    }

    #[test]
    fn add_without_pending_is_noop() {
        let mut combo = with(&["Em Space"]);
        assert!(!combo.add());
        assert_eq!(combo.selection(), &["Em Space"]);
    }

    #[test]
    fn add_duplicate_is_noop() {
        let mut combo = with(&["Em Space"]);
        combo.select("Em Space").expect("known");
        assert!(!combo.can_add());
        assert!(!combo.add());
        assert_eq!(combo.selection(), &["Em Space"]);
        // Pending stays, so the user can pick something else.
        assert_eq!(combo.pending(), Some("Em Space"));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut combo = with(&["Em Space"]);
        assert!(!combo.remove("Hair Space"));
        assert_eq!(combo.selection(), &["Em Space"]);
    }

    #[test]
    fn remove_then_add_moves_to_end() {
        let mut combo = with(&["Em Space", "Thin Space", "Hair Space"]);
        assert!(combo.remove("Em Space"));
        combo.select("Em Space").expect("known");
        combo.add();
        assert_eq!(combo.selection(), &["Thin Space", "Hair Space", "Em Space"]);
    }

    #[test]
    fn thin_then_hair_sequence_and_preview() {
        let combo = with(&["Thin Space", "Hair Space"]);
        assert_eq!(combo.sequence(), "\u{2009}\u{200A}");
        assert_eq!(combo.preview("a b"), "a\u{2009}\u{200A}b");
    }

    #[test]
    fn order_matters() {
        let a = with(&["Thin Space", "Hair Space"]);
        let b = with(&["Hair Space", "Thin Space"]);
        assert_ne!(a.sequence(), b.sequence());
    }

    #[test]
    fn empty_selection_preview_removes_spaces() {
        let combo = CustomCombination::new();
        assert_eq!(combo.preview("a b c"), "abc");
    }

    #[test]
    fn clear_empties_selection() {
        let mut combo = with(&["Em Space", "En Space"]);
        combo.clear();
        assert!(combo.is_empty());
    }
}
