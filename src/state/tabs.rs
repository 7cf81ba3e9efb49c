//! Open-tab state management.
//!
//! This module encapsulates the ordered list of open tabs and the active
//! tab key: which "files" the visitor has opened and in what order.

use rfolio::site::{FileKind, Page};

/// One open tab in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub href: String,
    pub title: String,
    pub kind: FileKind,
}

impl From<Page> for Tab {
    fn from(page: Page) -> Self {
        Self {
            href: page.href.to_string(),
            title: page.title.to_string(),
            kind: page.kind,
        }
    }
}

/// State related to the open-tab strip.
///
/// Responsibilities:
/// - Tracking the ordered list of open tabs
/// - Tracking which tab is active
/// - Reordering tabs from drag targets
///
/// All operations are total: unknown keys are ignored, never an error.
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    /// Open tabs in visual order
    open: Vec<Tab>,
    /// Key of the active tab (empty when nothing is open)
    current: String,
}

impl TabRegistry {
    /// Creates a registry with no open tabs.
    pub fn new() -> Self {
        Self {
            open: Vec::new(),
            current: String::new(),
        }
    }

    // ===== Queries =====

    /// Returns the open tabs in visual order.
    pub fn open_tabs(&self) -> &[Tab] {
        &self.open
    }

    /// Returns the active tab key, or `""` when nothing is open.
    pub fn current_href(&self) -> &str {
        &self.current
    }

    /// Returns the active tab, if any.
    pub fn current_tab(&self) -> Option<&Tab> {
        self.open.iter().find(|tab| tab.href == self.current)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    // ===== Mutations =====

    /// Opens the tab if its key is new and always makes it active.
    pub fn set_current(&mut self, tab: Tab) {
        if !self.open.iter().any(|open| open.href == tab.href) {
            self.open.push(tab.clone());
        }
        self.current = tab.href;
    }

    /// Closes the tab with the given key.
    ///
    /// If the closed tab was active, activation falls back to its
    /// predecessor in the pre-removal order, then to its successor, then to
    /// nothing.
    pub fn close(&mut self, href: &str) {
        let Some(closing) = self.position(href) else {
            return;
        };
        let was_active = self.current == href;
        self.open.remove(closing);

        if was_active {
            self.current = if closing > 0 {
                self.open[closing - 1].href.clone()
            } else {
                self.open.first().map(|tab| tab.href.clone()).unwrap_or_default()
            };
        }
    }

    /// Relocates `from` adjacent to `to`: after it when the origin sat
    /// earlier in the list, before it otherwise. No-op when either key is
    /// missing.
    pub fn move_tab(&mut self, from: &str, to: &str) {
        let (Some(initial), Some(target)) = (self.position(from), self.position(to)) else {
            return;
        };
        if initial == target {
            return;
        }
        let tab = self.open.remove(initial);
        // Removing first shifts a later target left one slot, so the
        // target's original index lands the tab after it when dragging
        // right and before it when dragging left.
        self.open.insert(target, tab);
    }

    /// Relocates a tab to the tail. No-op when absent or the only tab.
    pub fn move_to_end(&mut self, href: &str) {
        if self.open.len() == 1 {
            return;
        }
        let Some(index) = self.position(href) else {
            return;
        };
        let tab = self.open.remove(index);
        self.open.push(tab);
    }

    fn position(&self, href: &str) -> Option<usize> {
        self.open.iter().position(|tab| tab.href == href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(href: &str) -> Tab {
        Tab {
            href: href.to_string(),
            title: href.to_string(),
            kind: FileKind::Rust,
        }
    }

    fn registry_with(hrefs: &[&str]) -> TabRegistry {
        let mut registry = TabRegistry::new();
        for href in hrefs {
            registry.set_current(tab(href));
        }
        registry
    }

    fn order(registry: &TabRegistry) -> Vec<&str> {
        registry.open_tabs().iter().map(|t| t.href.as_str()).collect()
    }

    #[test]
    fn test_set_current_appends_new_and_activates() {
        let mut registry = registry_with(&["/"]);
        registry.set_current(tab("/projects"));

        assert_eq!(order(&registry), vec!["/", "/projects"]);
        assert_eq!(registry.current_href(), "/projects");
    }

    #[test]
    fn test_set_current_on_open_tab_only_activates() {
        let mut registry = registry_with(&["/", "/projects"]);
        registry.set_current(tab("/"));

        assert_eq!(order(&registry), vec!["/", "/projects"]);
        assert_eq!(registry.current_href(), "/");
    }

    #[test]
    fn test_close_active_tab_falls_back_to_predecessor() {
        let mut registry = registry_with(&["/", "/projects"]);
        registry.close("/projects");

        assert_eq!(order(&registry), vec!["/"]);
        assert_eq!(registry.current_href(), "/");
    }

    #[test]
    fn test_close_active_middle_tab_selects_predecessor() {
        let mut registry = registry_with(&["/a", "/b", "/c"]);
        registry.set_current(tab("/b"));
        registry.close("/b");

        assert_eq!(registry.current_href(), "/a");
    }

    #[test]
    fn test_close_active_first_tab_selects_successor() {
        let mut registry = registry_with(&["/a", "/b"]);
        registry.set_current(tab("/a"));
        registry.close("/a");

        assert_eq!(registry.current_href(), "/b");
    }

    #[test]
    fn test_close_only_tab_leaves_empty_active_key() {
        let mut registry = registry_with(&["/"]);
        registry.close("/");

        assert!(registry.is_empty());
        assert_eq!(registry.current_href(), "");
    }

    #[test]
    fn test_close_inactive_tab_keeps_active_key() {
        let mut registry = registry_with(&["/a", "/b", "/c"]);
        registry.close("/a");

        assert_eq!(order(&registry), vec!["/b", "/c"]);
        assert_eq!(registry.current_href(), "/c");
    }

    #[test]
    fn test_close_unknown_key_is_a_no_op() {
        let mut registry = registry_with(&["/a"]);
        registry.close("/missing");

        assert_eq!(order(&registry), vec!["/a"]);
        assert_eq!(registry.current_href(), "/a");
    }

    #[test]
    fn test_move_tab_rightward_lands_after_target() {
        let mut registry = registry_with(&["/a", "/b", "/c", "/d"]);
        registry.move_tab("/a", "/c");

        assert_eq!(order(&registry), vec!["/b", "/c", "/a", "/d"]);
    }

    #[test]
    fn test_move_tab_leftward_lands_before_target() {
        let mut registry = registry_with(&["/a", "/b", "/c", "/d"]);
        registry.move_tab("/d", "/b");

        assert_eq!(order(&registry), vec!["/a", "/d", "/b", "/c"]);
    }

    #[test]
    fn test_move_tab_round_trips_two_tabs() {
        let mut registry = registry_with(&["/a", "/b"]);
        registry.move_tab("/b", "/a");
        assert_eq!(order(&registry), vec!["/b", "/a"]);

        registry.move_tab("/a", "/b");
        assert_eq!(order(&registry), vec!["/a", "/b"]);
    }

    #[test]
    fn test_move_tab_onto_itself_is_a_no_op() {
        let mut registry = registry_with(&["/a", "/b", "/c"]);
        registry.move_tab("/b", "/b");

        assert_eq!(order(&registry), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_move_tab_with_missing_key_is_a_no_op() {
        let mut registry = registry_with(&["/a", "/b"]);
        registry.move_tab("/a", "/missing");
        registry.move_tab("/missing", "/a");

        assert_eq!(order(&registry), vec!["/a", "/b"]);
    }

    #[test]
    fn test_move_to_end() {
        let mut registry = registry_with(&["/a", "/b", "/c"]);
        registry.move_to_end("/a");

        assert_eq!(order(&registry), vec!["/b", "/c", "/a"]);
    }

    #[test]
    fn test_move_to_end_is_a_no_op_for_singleton_or_missing() {
        let mut registry = registry_with(&["/a"]);
        registry.move_to_end("/a");
        assert_eq!(order(&registry), vec!["/a"]);

        let mut registry = registry_with(&["/a", "/b"]);
        registry.move_to_end("/missing");
        assert_eq!(order(&registry), vec!["/a", "/b"]);
    }
}
