//! Route state.
//!
//! The application has no browser history; the current route is a plain
//! value. UI code queues navigation requests here and the navigation
//! coordinator drains them once per frame, so every route change funnels
//! through one place.

/// Current route plus pending navigation intents.
///
/// Responsibilities:
/// - Hold the route whose page is being rendered
/// - Queue navigation requests from tab clicks, tree clicks, and search hits
/// - Queue scroll-to-section requests from the outline
#[derive(Debug, Clone)]
pub struct RouteState {
    current: String,
    requested: Option<String>,
    scroll_target: Option<&'static str>,
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteState {
    /// Creates route state pointing at the home page.
    pub fn new() -> Self {
        Self {
            current: "/".to_string(),
            requested: None,
            scroll_target: None,
        }
    }

    // ===== Queries =====

    /// The route currently on screen.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_current(&self, href: &str) -> bool {
        self.current == href
    }

    // ===== Mutations =====

    /// Queues a navigation request. The last request in a frame wins.
    pub fn request(&mut self, href: impl Into<String>) {
        self.requested = Some(href.into());
    }

    /// Queues a scroll to a section anchor on the current page.
    pub fn request_section(&mut self, id: &'static str) {
        self.scroll_target = Some(id);
    }

    /// Drains the pending navigation request, if any.
    pub fn take_request(&mut self) -> Option<String> {
        self.requested.take()
    }

    /// Drains the pending scroll target, if any.
    pub fn take_scroll_target(&mut self) -> Option<&'static str> {
        self.scroll_target.take()
    }

    /// Records that navigation to `href` has been applied.
    pub fn commit(&mut self, href: impl Into<String>) {
        self.current = href.into();
    }
}
