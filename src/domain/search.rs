//! Catalog search.
//!
//! Backs the search panel: a case-insensitive substring match over the
//! static site catalog (projects, home sections, work history, skills),
//! grouped for display. Pure functions over the catalog so the matching
//! rules are testable without a UI.

use rfolio::site::{HOME_SECTIONS, PROJECTS, SKILL_EXTENSIONS, WORK_HISTORY};

/// Display group a hit belongs to, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchGroup {
    Projects,
    Sections,
    Experience,
    Skills,
}

impl SearchGroup {
    pub fn title(self) -> &'static str {
        match self {
            SearchGroup::Projects => "PROJECTS",
            SearchGroup::Sections => "SECTIONS",
            SearchGroup::Experience => "EXPERIENCE",
            SearchGroup::Skills => "SKILLS",
        }
    }
}

/// What clicking a hit should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// Navigate to a project page.
    OpenRoute(&'static str),
    /// Navigate home and scroll to a section anchor.
    RevealSection(&'static str),
}

/// One search result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub group: SearchGroup,
    pub label: &'static str,
    pub detail: &'static str,
    pub action: SearchAction,
}

/// Searches the whole catalog. Blank queries match nothing; results come
/// back grouped in [`SearchGroup`] order.
pub fn search_catalog(query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    for project in &PROJECTS {
        let in_stack = project.stack.iter().any(|s| matches(s, &needle));
        if matches(project.title, &needle) || matches(project.description, &needle) || in_stack {
            hits.push(SearchHit {
                group: SearchGroup::Projects,
                label: project.title,
                detail: project.description,
                action: SearchAction::OpenRoute(project.href),
            });
        }
    }

    for section in &HOME_SECTIONS {
        if matches(section.title, &needle) || matches(section.id, &needle) {
            hits.push(SearchHit {
                group: SearchGroup::Sections,
                label: section.title,
                detail: "",
                action: SearchAction::RevealSection(section.id),
            });
        }
    }

    for entry in &WORK_HISTORY {
        if matches(entry.company, &needle) || matches(entry.role, &needle) {
            hits.push(SearchHit {
                group: SearchGroup::Experience,
                label: entry.company,
                detail: entry.period,
                action: SearchAction::RevealSection("work-experience"),
            });
        }
    }

    for skill in &SKILL_EXTENSIONS {
        if matches(skill.name, &needle) || matches(skill.description, &needle) {
            hits.push(SearchHit {
                group: SearchGroup::Skills,
                label: skill.name,
                detail: skill.publisher,
                action: SearchAction::RevealSection("skills"),
            });
        }
    }

    hits.sort_by_key(|hit| hit.group);
    hits
}

fn matches(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search_catalog("").is_empty());
        assert!(search_catalog("   ").is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let hits = search_catalog("PACKETLENS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "PacketLens.rs");
        assert_eq!(hits[0].action, SearchAction::OpenRoute("/apps/packet-lens"));
    }

    #[test]
    fn test_projects_match_on_stack_entries() {
        let hits = search_catalog("tokio");
        assert!(hits
            .iter()
            .any(|h| h.group == SearchGroup::Projects && h.label == "PacketLens.rs"));
    }

    #[test]
    fn test_section_hits_reveal_their_anchor() {
        let hits = search_catalog("contact");
        let section = hits
            .iter()
            .find(|h| h.group == SearchGroup::Sections)
            .expect("contact section should match");
        assert_eq!(section.action, SearchAction::RevealSection("contact"));
    }

    #[test]
    fn test_experience_hits_point_at_the_work_section() {
        let hits = search_catalog("Northbeam");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].group, SearchGroup::Experience);
        assert_eq!(
            hits[0].action,
            SearchAction::RevealSection("work-experience")
        );
    }

    #[test]
    fn test_results_come_back_in_group_order() {
        // "rust" appears in projects and in at least one skill card.
        let hits = search_catalog("rust");
        let groups: Vec<SearchGroup> = hits.iter().map(|h| h.group).collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
        assert!(groups.contains(&SearchGroup::Projects));
        assert!(groups.contains(&SearchGroup::Skills));
    }
}
