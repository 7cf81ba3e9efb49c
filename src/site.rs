//! Static site catalog shared by the GUI, the web server, and the CLI.
//!
//! Everything the portfolio publishes is described here: the routable pages,
//! the home-page sections, project entries, work history, and the skill
//! catalog. The rest of the crate treats this module as the single source of
//! truth for what exists on the site.

pub const BASE_URL: &str = "https://adrianvega.dev";
pub const OWNER_NAME: &str = "Adrian Vega";
pub const OWNER_TITLE: &str = "Systems & Web Engineer";
pub const SITE_NAME: &str = "Adrian Vega — Systems & Web Engineer Portfolio";
pub const SITE_DESCRIPTION: &str = "Systems and web engineer building network tooling, \
    data services, and interactive frontends. Rust, TypeScript, and Python, with a \
    soft spot for well-instrumented backends and editor-grade UI.";

/// Icon family for a routable page, mirrored in the tab strip and the
/// explorer tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    About,
    Rust,
    React,
    Python,
    Markdown,
    Config,
}

/// A routable page: the home page or one of the project pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub href: &'static str,
    pub title: &'static str,
    pub kind: FileKind,
}

/// One scroll-tracked section of the home page. `index` is the fixed document
/// order used to keep the visible-section list sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub index: usize,
    pub id: &'static str,
    pub title: &'static str,
}

pub const HOME_SECTIONS: [Section; 5] = [
    Section { index: 0, id: "about-me", title: "About Me" },
    Section { index: 1, id: "work-experience", title: "Work Experience" },
    Section { index: 2, id: "skills", title: "Skills" },
    Section { index: 3, id: "my-work", title: "My Work" },
    Section { index: 4, id: "contact", title: "Contact Me" },
];

/// A portfolio project with its own page under `/apps/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub href: &'static str,
    pub kind: FileKind,
    pub description: &'static str,
    pub stack: &'static [&'static str],
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "PacketLens.rs",
        href: "/apps/packet-lens",
        kind: FileKind::Rust,
        description: "Network capture inspector that decodes pcap streams into a \
            searchable session timeline, with protocol dissectors for TCP, TLS, and \
            HTTP/2 and a ring-buffer capture mode for long-running hosts.",
        stack: &["Rust", "tokio", "pcap", "egui"],
    },
    Project {
        title: "Flightdeck.tsx",
        href: "/apps/flightdeck",
        kind: FileKind::React,
        description: "Operations dashboard aggregating deploy status, error budgets, \
            and on-call schedules into one board, with live updates over server-sent \
            events and a keyboard-first command palette.",
        stack: &["TypeScript", "React", "Node.js", "PostgreSQL"],
    },
    Project {
        title: "CorpusSearch.py",
        href: "/apps/corpus-search",
        kind: FileKind::Python,
        description: "Self-hosted semantic search service over internal documents: \
            sentence-embedding index, incremental crawler, and a ranked-snippet API \
            serving under 50ms at the median.",
        stack: &["Python", "FastAPI", "FAISS", "Redis"],
    },
    Project {
        title: "RelayCache.rs",
        href: "/apps/relay-cache",
        kind: FileKind::Rust,
        description: "Edge HTTP cache with stale-while-revalidate semantics, consistent \
            hashing across peers, and a hot-key detector that spreads surging entries \
            before they melt a shard.",
        stack: &["Rust", "hyper", "tower", "Prometheus"],
    },
    Project {
        title: "StudioKit.tsx",
        href: "/apps/studio-kit",
        kind: FileKind::React,
        description: "Accessible component library and design-token pipeline used by \
            three product teams, themeable at runtime and documented with live \
            playground examples.",
        stack: &["TypeScript", "React", "Storybook", "CSS"],
    },
    Project {
        title: "FieldNotes.md",
        href: "/apps/field-notes",
        kind: FileKind::Markdown,
        description: "Public engineering notebook: postmortem write-ups, performance \
            investigations, and long-form notes, rendered from a git-backed markdown \
            tree with backlinks.",
        stack: &["Markdown", "Rust", "axum"],
    },
];

/// Work history entries rendered in the experience section and the timeline
/// sub-panel, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const WORK_HISTORY: [WorkEntry; 3] = [
    WorkEntry {
        company: "Sable Systems",
        role: "Senior Software Engineer",
        period: "2023 — Present",
        highlights: &[
            "Own the ingest path of a telemetry platform handling 40k events/s, rewritten from a Python prototype into Rust services",
            "Cut p99 query latency from 2.1s to 180ms by moving hot aggregations into a columnar cache",
            "Run the on-call rotation and the postmortem process for the data platform group",
        ],
    },
    WorkEntry {
        company: "Northbeam Analytics",
        role: "Software Engineer",
        period: "2021 — 2023",
        highlights: &[
            "Built customer-facing dashboards in React/TypeScript backed by a GraphQL gateway",
            "Introduced contract tests between the gateway and six backend teams",
            "Shipped the usage-based billing pipeline end to end",
        ],
    },
    WorkEntry {
        company: "Creekside Labs",
        role: "Software Developer",
        period: "2019 — 2021",
        highlights: &[
            "Maintained a Django monolith and carved its reporting module into a standalone service",
            "Automated the release process from a wiki checklist into a one-command deploy",
        ],
    },
];

/// A skill rendered as an installable extension card in the extensions panel
/// and as a plain entry in the skills section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillExtension {
    pub name: &'static str,
    pub publisher: &'static str,
    pub description: &'static str,
    pub downloads: &'static str,
    pub rating: f32,
    pub installed: bool,
    pub popular: bool,
    pub recommended: bool,
}

pub const SKILL_EXTENSIONS: [SkillExtension; 10] = [
    SkillExtension {
        name: "Rust",
        publisher: "systems",
        description: "Services, CLIs, and desktop tools. Comfortable across tokio, axum, and egui.",
        downloads: "6.2M",
        rating: 5.0,
        installed: true,
        popular: true,
        recommended: true,
    },
    SkillExtension {
        name: "TypeScript",
        publisher: "web",
        description: "Strictly-typed frontends and Node services, five years in production.",
        downloads: "5.8M",
        rating: 4.9,
        installed: true,
        popular: true,
        recommended: true,
    },
    SkillExtension {
        name: "React",
        publisher: "web",
        description: "Component architecture, hooks, and state machines for non-trivial UIs.",
        downloads: "5.1M",
        rating: 4.8,
        installed: true,
        popular: true,
        recommended: false,
    },
    SkillExtension {
        name: "Python",
        publisher: "data",
        description: "Data plumbing, ML service scaffolding, and the occasional scientific script.",
        downloads: "4.4M",
        rating: 4.7,
        installed: true,
        popular: true,
        recommended: false,
    },
    SkillExtension {
        name: "PostgreSQL",
        publisher: "data",
        description: "Schema design, query planning, and keeping the ORM honest.",
        downloads: "3.9M",
        rating: 4.8,
        installed: true,
        popular: false,
        recommended: true,
    },
    SkillExtension {
        name: "Kubernetes",
        publisher: "infra",
        description: "Deploying and debugging workloads; writing the manifests so others do not have to.",
        downloads: "2.7M",
        rating: 4.3,
        installed: true,
        popular: false,
        recommended: false,
    },
    SkillExtension {
        name: "Observability",
        publisher: "infra",
        description: "Tracing-first instrumentation, RED dashboards, and alerts that page for real causes.",
        downloads: "1.9M",
        rating: 4.9,
        installed: true,
        popular: false,
        recommended: true,
    },
    SkillExtension {
        name: "GraphQL",
        publisher: "web",
        description: "Gateway design and schema stewardship across team boundaries.",
        downloads: "1.6M",
        rating: 4.2,
        installed: false,
        popular: false,
        recommended: false,
    },
    SkillExtension {
        name: "Redis",
        publisher: "data",
        description: "Caching layers, rate limiters, and stream consumers.",
        downloads: "2.2M",
        rating: 4.5,
        installed: false,
        popular: true,
        recommended: false,
    },
    SkillExtension {
        name: "CI/CD",
        publisher: "infra",
        description: "Pipelines that stay green: build caching, flake quarantine, preview deploys.",
        downloads: "3.1M",
        rating: 4.6,
        installed: true,
        popular: false,
        recommended: false,
    },
];

pub fn home_page() -> Page {
    Page { href: "/", title: "About Me", kind: FileKind::About }
}

/// Resolves a route to its page descriptor. Unknown routes return `None`;
/// navigation falls back to the home page.
pub fn find_page(href: &str) -> Option<Page> {
    if href == "/" {
        return Some(home_page());
    }
    PROJECTS
        .iter()
        .find(|p| p.href == href)
        .map(|p| Page { href: p.href, title: p.title, kind: p.kind })
}

pub fn find_project(href: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.href == href)
}

/// Every URL the site publishes: the base URL, one anchor per home section,
/// and one page per project.
pub fn all_urls(base_url: &str) -> Vec<String> {
    let mut urls = Vec::with_capacity(1 + HOME_SECTIONS.len() + PROJECTS.len());
    urls.push(base_url.to_string());
    for section in &HOME_SECTIONS {
        urls.push(format!("{}/#{}", base_url, section.id));
    }
    for project in &PROJECTS {
        urls.push(format!("{}{}", base_url, project.href));
    }
    urls
}

/// The URLs worth resubmitting on a quick update: the home page plus the
/// about and work anchors.
pub fn priority_urls(base_url: &str) -> Vec<String> {
    vec![
        base_url.to_string(),
        format!("{}/#about-me", base_url),
        format!("{}/#my-work", base_url),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ordinals_match_positions() {
        for (i, section) in HOME_SECTIONS.iter().enumerate() {
            assert_eq!(section.index, i);
        }
    }

    #[test]
    fn test_page_hrefs_are_unique() {
        let mut seen = HashSet::new();
        assert!(seen.insert(home_page().href));
        for project in &PROJECTS {
            assert!(seen.insert(project.href), "duplicate href {}", project.href);
        }
    }

    #[test]
    fn test_find_page_resolves_home_and_projects() {
        assert_eq!(find_page("/"), Some(home_page()));
        let page = find_page("/apps/packet-lens").unwrap();
        assert_eq!(page.title, "PacketLens.rs");
        assert_eq!(page.kind, FileKind::Rust);
        assert_eq!(find_page("/apps/nonexistent"), None);
    }

    #[test]
    fn test_all_urls_covers_base_sections_and_projects() {
        let urls = all_urls(BASE_URL);
        assert_eq!(urls.len(), 1 + HOME_SECTIONS.len() + PROJECTS.len());
        assert_eq!(urls[0], BASE_URL);
        assert!(urls.contains(&format!("{}/#about-me", BASE_URL)));
        assert!(urls.contains(&format!("{}/apps/field-notes", BASE_URL)));
    }

    #[test]
    fn test_priority_urls_are_a_subset_of_all_urls() {
        let all: HashSet<String> = all_urls(BASE_URL).into_iter().collect();
        for url in priority_urls(BASE_URL) {
            assert!(all.contains(&url), "{} not published", url);
        }
    }
}
