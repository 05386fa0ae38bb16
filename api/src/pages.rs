//! Static page registry. Paths here are locale-free; see [`crate::locale`]
//! for how they are prefixed.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionSlug {
    Spraying,
    Spreading,
    Mapping,
    Accessories,
}

impl CollectionSlug {
    pub const ALL: [CollectionSlug; 4] = [
        CollectionSlug::Spraying,
        CollectionSlug::Spreading,
        CollectionSlug::Mapping,
        CollectionSlug::Accessories,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionSlug::Spraying => "spraying",
            CollectionSlug::Spreading => "spreading",
            CollectionSlug::Mapping => "mapping",
            CollectionSlug::Accessories => "accessories",
        }
    }
}

impl fmt::Display for CollectionSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionSlug {
    type Err = SiteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        CollectionSlug::ALL
            .into_iter()
            .find(|slug| slug.as_str() == raw)
            .ok_or_else(|| SiteError::UnknownPage(raw.to_string()))
    }
}

/// Sitemap `changefreq` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Products,
    Collection(CollectionSlug),
    About,
    Contact,
}

/// Every page the site serves, in navigation order.
pub const STATIC_PAGES: [Page; 8] = [
    Page::Home,
    Page::Products,
    Page::Collection(CollectionSlug::Spraying),
    Page::Collection(CollectionSlug::Spreading),
    Page::Collection(CollectionSlug::Mapping),
    Page::Collection(CollectionSlug::Accessories),
    Page::About,
    Page::Contact,
];

impl Page {
    pub fn path(self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Products => "/products".to_string(),
            Page::Collection(slug) => format!("/products/{slug}"),
            Page::About => "/about".to_string(),
            Page::Contact => "/contact".to_string(),
        }
    }

    pub fn change_frequency(self) -> ChangeFrequency {
        match self {
            Page::Home | Page::Products => ChangeFrequency::Weekly,
            Page::Collection(_) => ChangeFrequency::Monthly,
            Page::About | Page::Contact => ChangeFrequency::Yearly,
        }
    }

    /// Sitemap priority weight in `[0.0, 1.0]`.
    pub fn priority(self) -> f32 {
        match self {
            Page::Home => 1.0,
            Page::Products => 0.9,
            Page::Collection(_) => 0.8,
            Page::About | Page::Contact => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn page_paths_are_unique() {
        let paths: HashSet<_> = STATIC_PAGES.iter().map(|p| p.path()).collect();
        assert_eq!(paths.len(), STATIC_PAGES.len());
    }

    #[test]
    fn every_collection_has_a_page() {
        for slug in CollectionSlug::ALL {
            assert!(STATIC_PAGES.contains(&Page::Collection(slug)));
        }
    }

    #[test]
    fn collection_slugs_parse_exactly() {
        for slug in CollectionSlug::ALL {
            assert_eq!(slug.as_str().parse::<CollectionSlug>().ok(), Some(slug));
        }
        assert!("Spraying".parse::<CollectionSlug>().is_err());
        assert!("tractors".parse::<CollectionSlug>().is_err());
    }

    #[test]
    fn priorities_are_in_range() {
        for page in STATIC_PAGES {
            let p = page.priority();
            assert!((0.0..=1.0).contains(&p));
        }
        assert_eq!(Page::Home.priority(), 1.0);
    }
}
