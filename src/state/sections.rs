//! Scroll-tracked section visibility.
//!
//! This module tracks which content sections are currently inside the
//! viewport. Enter/exit events arrive in scroll order, not document order;
//! the visible list is kept sorted by each section's fixed ordinal so the
//! first entry is always the section "primarily in view".

use std::collections::HashMap;

use rfolio::site::Section;

/// State related to section visibility on the current page.
///
/// Responsibilities:
/// - Holding the static section catalog for the current route
/// - Maintaining the visible list in ascending ordinal order
/// - Answering which section is primarily in view
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    /// Static catalog for the current page
    catalog: Vec<Section>,
    /// Sections currently in the viewport, ascending by ordinal
    visible_order: Vec<Section>,
    /// Visibility flag per section id
    visible: HashMap<&'static str, bool>,
}

impl SectionTracker {
    /// Creates a tracker with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the section catalog for the current page. Visibility state
    /// is left untouched; route changes call [`Self::reset_visible`].
    pub fn set_catalog(&mut self, sections: &[Section]) {
        self.catalog = sections.to_vec();
    }

    // ===== Queries =====

    /// The catalog installed for the current page.
    pub fn catalog(&self) -> &[Section] {
        &self.catalog
    }

    /// Sections currently visible, ascending by ordinal.
    pub fn visible_order(&self) -> &[Section] {
        &self.visible_order
    }

    /// The section primarily in view: the visible one with the lowest
    /// ordinal.
    pub fn primary(&self) -> Option<&Section> {
        self.visible_order.first()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    // ===== Mutations =====

    /// Marks a section visible, inserting it into the ordered list at the
    /// position preserving ascending ordinals. Unknown ids and already
    /// visible ids are ignored.
    pub fn set_visible(&mut self, id: &str) {
        let Some(section) = self.catalog.iter().find(|s| s.id == id).copied() else {
            return;
        };
        if self.is_visible(section.id) {
            return;
        }

        let position = self
            .visible_order
            .iter()
            .position(|s| s.index > section.index)
            .unwrap_or(self.visible_order.len());
        self.visible_order.insert(position, section);
        self.visible.insert(section.id, true);
    }

    /// Marks a section hidden and removes it from the ordered list.
    pub fn set_hidden(&mut self, id: &str) {
        if let Some(position) = self.visible_order.iter().position(|s| s.id == id) {
            let section = self.visible_order.remove(position);
            self.visible.insert(section.id, false);
        }
    }

    /// Clears all visibility state (route change).
    pub fn reset_visible(&mut self) {
        self.visible_order.clear();
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Section> {
        vec![
            Section { index: 0, id: "a", title: "A" },
            Section { index: 1, id: "b", title: "B" },
            Section { index: 2, id: "c", title: "C" },
            Section { index: 3, id: "d", title: "D" },
        ]
    }

    fn tracker() -> SectionTracker {
        let mut tracker = SectionTracker::new();
        tracker.set_catalog(&catalog());
        tracker
    }

    fn visible_ids(tracker: &SectionTracker) -> Vec<&'static str> {
        tracker.visible_order().iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_visible_list_sorts_by_ordinal_regardless_of_arrival_order() {
        let mut tracker = tracker();
        tracker.set_visible("c");
        tracker.set_visible("a");
        tracker.set_visible("b");

        assert_eq!(visible_ids(&tracker), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_primary_is_lowest_visible_ordinal() {
        let mut tracker = tracker();
        assert!(tracker.primary().is_none());

        tracker.set_visible("d");
        tracker.set_visible("b");
        assert_eq!(tracker.primary().unwrap().id, "b");

        tracker.set_hidden("b");
        assert_eq!(tracker.primary().unwrap().id, "d");
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut tracker = tracker();
        tracker.set_visible("zebra");

        assert!(visible_ids(&tracker).is_empty());
        assert!(!tracker.is_visible("zebra"));
    }

    #[test]
    fn test_redundant_set_visible_does_not_duplicate() {
        let mut tracker = tracker();
        tracker.set_visible("b");
        tracker.set_visible("b");

        assert_eq!(visible_ids(&tracker), vec!["b"]);
    }

    #[test]
    fn test_membership_matches_visibility_map() {
        let mut tracker = tracker();
        // A scroll-like sequence with re-entries and exits.
        for (action, id) in [
            ("show", "b"),
            ("show", "d"),
            ("show", "a"),
            ("hide", "b"),
            ("show", "c"),
            ("hide", "a"),
            ("show", "a"),
        ] {
            match action {
                "show" => tracker.set_visible(id),
                _ => tracker.set_hidden(id),
            }
        }

        assert_eq!(visible_ids(&tracker), vec!["a", "c", "d"]);
        for section in catalog() {
            assert_eq!(
                tracker.is_visible(section.id),
                visible_ids(&tracker).contains(&section.id),
            );
        }
    }

    #[test]
    fn test_hide_then_show_reinserts_in_order() {
        let mut tracker = tracker();
        tracker.set_visible("a");
        tracker.set_visible("b");
        tracker.set_visible("c");
        tracker.set_hidden("b");
        tracker.set_visible("b");

        assert_eq!(visible_ids(&tracker), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = tracker();
        tracker.set_visible("a");
        tracker.set_visible("b");
        tracker.reset_visible();

        assert!(tracker.visible_order().is_empty());
        assert!(!tracker.is_visible("a"));
        assert_eq!(tracker.catalog().len(), 4, "catalog survives a reset");
    }
}
