pub mod indexing;
pub mod seo;
pub mod server;
pub mod site;
pub mod theme;

// Export the site catalog
pub use site::{
    all_urls, find_page, find_project, home_page, priority_urls, FileKind, Page, Project,
    Section, SkillExtension, WorkEntry, BASE_URL, HOME_SECTIONS, PROJECTS, SKILL_EXTENSIONS,
    WORK_HISTORY,
};

// Export SEO document rendering
pub use seo::{robots_txt, sitemap_entries, sitemap_xml, structured_data};

// Export the indexing stack
pub use indexing::{
    Delays, GoogleIndexingApi, IndexingClient, IndexingError, IndexingOutcome, NotificationType,
    ServiceAccountKey, UrlNotificationApi,
};

// Export the web surface
pub use server::{router, serve, ServerState};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};
