//! XML sitemap: one `<url>` per (static page × locale), each listing every
//! language variant as an `hreflang` alternate.

use std::fmt::Write as _;

use quick_xml::escape::escape;
use time::{macros::format_description, Date};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::locale::{localized_path, Locale};
use crate::pages::{ChangeFrequency, Page, STATIC_PAGES};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Clone, PartialEq)]
pub struct Alternate {
    /// Locale code or `x-default`.
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub page: Page,
    pub locale: Locale,
    pub loc: String,
    pub last_modified: Date,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: Vec<Alternate>,
}

/// Cross product of [`STATIC_PAGES`] and [`Locale::ALL`], page-major.
pub fn sitemap_entries(config: &SiteConfig, last_modified: Date) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(STATIC_PAGES.len() * Locale::ALL.len());

    for page in STATIC_PAGES {
        let path = page.path();
        let alternates = alternates_for(config, &path);

        for locale in Locale::ALL {
            entries.push(SitemapEntry {
                page,
                locale,
                loc: config.absolute_url(&localized_path(locale, &path)),
                last_modified,
                change_frequency: page.change_frequency(),
                priority: page.priority(),
                alternates: alternates.clone(),
            });
        }
    }

    entries
}

fn alternates_for(config: &SiteConfig, path: &str) -> Vec<Alternate> {
    let mut alternates: Vec<Alternate> = Locale::ALL
        .into_iter()
        .map(|locale| Alternate {
            hreflang: locale.code().to_string(),
            href: config.absolute_url(&localized_path(locale, path)),
        })
        .collect();
    alternates.push(Alternate {
        hreflang: "x-default".to_string(),
        href: config.absolute_url(&localized_path(Locale::DEFAULT, path)),
    });
    alternates
}

/// Serialize entries as a sitemap `urlset` document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String, SiteError> {
    let date_format = format_description!("[year]-[month]-[day]");
    let mut xml = String::with_capacity(entries.len() * 1024);

    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        xml,
        r#"<urlset xmlns="{SITEMAP_NS}" xmlns:xhtml="{XHTML_NS}">"#
    )?;

    for entry in entries {
        writeln!(xml, "  <url>")?;
        writeln!(xml, "    <loc>{}</loc>", escape(entry.loc.as_str()))?;
        writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.format(date_format)?
        )?;
        writeln!(
            xml,
            "    <changefreq>{}</changefreq>",
            entry.change_frequency.as_str()
        )?;
        writeln!(xml, "    <priority>{:.1}</priority>", entry.priority)?;
        for alt in &entry.alternates {
            writeln!(
                xml,
                r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}"/>"#,
                escape(alt.hreflang.as_str()),
                escape(alt.href.as_str())
            )?;
        }
        writeln!(xml, "  </url>")?;
    }

    writeln!(xml, "</urlset>")?;
    Ok(xml)
}

/// Build and render the sitemap in one go.
pub fn build_sitemap(config: &SiteConfig, fallback_date: Date) -> Result<String, SiteError> {
    let last_modified = config.content_updated_date().unwrap_or(fallback_date);
    render_sitemap(&sitemap_entries(config, last_modified))
}

/// `robots.txt` allowing everything and pointing at the sitemap.
pub fn render_robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        config.absolute_url("/sitemap.xml")
    )
}
