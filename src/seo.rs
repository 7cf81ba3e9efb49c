//! SEO document rendering: sitemap.xml, robots.txt, and the JSON-LD
//! structured-data block embedded in the home page shell.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::site::{self, HOME_SECTIONS, PROJECTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
}

/// Builds the sitemap entry list: the home page ranks highest, section
/// anchors next, project pages last.
pub fn sitemap_entries(base_url: &str) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(1 + HOME_SECTIONS.len() + PROJECTS.len());

    entries.push(SitemapEntry {
        loc: base_url.to_string(),
        changefreq: ChangeFrequency::Weekly,
        priority: 1.0,
    });

    for section in &HOME_SECTIONS {
        let (changefreq, priority) = match section.id {
            "my-work" => (ChangeFrequency::Weekly, 0.9),
            "about-me" | "work-experience" => (ChangeFrequency::Monthly, 0.9),
            _ => (ChangeFrequency::Monthly, 0.8),
        };
        entries.push(SitemapEntry {
            loc: format!("{}/#{}", base_url, section.id),
            changefreq,
            priority,
        });
    }

    for project in &PROJECTS {
        entries.push(SitemapEntry {
            loc: format!("{}{}", base_url, project.href),
            changefreq: ChangeFrequency::Monthly,
            priority: 0.7,
        });
    }

    entries
}

/// Renders the sitemap as XML. `lastmod` applies to every entry; the server
/// passes the current date.
pub fn sitemap_xml(base_url: &str, lastmod: NaiveDate) -> String {
    let entries = sitemap_entries(base_url);
    let mut xml = String::with_capacity(entries.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in &entries {
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{}</loc>", xml_escape(&entry.loc));
        let _ = writeln!(xml, "    <lastmod>{}</lastmod>", lastmod);
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq.as_str());
        let _ = writeln!(xml, "    <priority>{}</priority>", entry.priority);
        let _ = writeln!(xml, "  </url>");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Renders robots.txt: everything crawlable except the API and admin
/// surfaces, with a pointer to the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /api/\n\
         Disallow: /admin/\n\
         \n\
         Sitemap: {}/sitemap.xml\n",
        base_url
    )
}

/// The schema.org graph describing the site owner, the site itself, and the
/// project list.
pub fn structured_data(base_url: &str) -> Value {
    let projects: Vec<Value> = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": {
                    "@type": "SoftwareApplication",
                    "name": project.title,
                    "url": format!("{}{}", base_url, project.href),
                    "description": project.description,
                    "applicationCategory": "DeveloperApplication",
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Person",
                "@id": format!("{}/#person", base_url),
                "name": site::OWNER_NAME,
                "url": base_url,
                "jobTitle": site::OWNER_TITLE,
                "description": site::SITE_DESCRIPTION,
                "knowsAbout": site::SKILL_EXTENSIONS
                    .iter()
                    .map(|s| s.name)
                    .collect::<Vec<_>>(),
            },
            {
                "@type": "WebSite",
                "@id": format!("{}/#website", base_url),
                "name": site::SITE_NAME,
                "url": base_url,
                "publisher": { "@id": format!("{}/#person", base_url) },
            },
            {
                "@type": "ItemList",
                "@id": format!("{}/#projects", base_url),
                "name": "Projects",
                "itemListElement": projects,
            }
        ]
    })
}

/// Minimal HTML shell served at `/`: the structured-data script plus a plain
/// text rendition of the portfolio for crawlers. The interactive experience
/// lives in the desktop app.
pub fn home_html(base_url: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", xml_escape(site::SITE_NAME));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        xml_escape(site::SITE_DESCRIPTION)
    );
    let _ = writeln!(html, "<link rel=\"canonical\" href=\"{}\">", xml_escape(base_url));
    let _ = writeln!(
        html,
        "<script type=\"application/ld+json\">{}</script>",
        structured_data(base_url)
    );
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", xml_escape(site::OWNER_NAME));
    let _ = writeln!(html, "<p>{}</p>", xml_escape(site::SITE_DESCRIPTION));
    html.push_str("<ul>\n");
    for project in &PROJECTS {
        let _ = writeln!(
            html,
            "<li><a href=\"{}{}\">{}</a> — {}</li>",
            xml_escape(base_url),
            xml_escape(project.href),
            xml_escape(project.title),
            xml_escape(project.description)
        );
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
