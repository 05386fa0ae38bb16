//! Static site content: product collections, products, hero slides and the
//! statistics band. Display text lives in the FTL files; these tables only
//! hold message ids, numbers and model names.

use api::{CollectionSlug, Page};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collection {
    pub slug: CollectionSlug,
    pub title_key: &'static str,
    pub summary_key: &'static str,
}

/// A single numeric spec. `key` is a Fluent message taking `$value`,
/// so units and word order stay per-language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spec {
    pub key: &'static str,
    pub value: f64,
    pub decimals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    /// Model names are not translated.
    pub model: &'static str,
    pub collection: CollectionSlug,
    pub tagline_key: &'static str,
    pub specs: &'static [Spec],
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroSlide {
    pub id: &'static str,
    pub eyebrow_key: &'static str,
    pub title_key: &'static str,
    pub body_key: &'static str,
    pub cta_key: &'static str,
    pub target: Page,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRecord {
    pub value: f64,
    pub decimals: u8,
    pub suffix: &'static str,
    pub label_key: &'static str,
}

pub const COLLECTIONS: [Collection; 4] = [
    Collection {
        slug: CollectionSlug::Spraying,
        title_key: "collection-spraying-title",
        summary_key: "collection-spraying-summary",
    },
    Collection {
        slug: CollectionSlug::Spreading,
        title_key: "collection-spreading-title",
        summary_key: "collection-spreading-summary",
    },
    Collection {
        slug: CollectionSlug::Mapping,
        title_key: "collection-mapping-title",
        summary_key: "collection-mapping-summary",
    },
    Collection {
        slug: CollectionSlug::Accessories,
        title_key: "collection-accessories-title",
        summary_key: "collection-accessories-summary",
    },
];

pub const PRODUCTS: [Product; 10] = [
    Product {
        id: "as-20",
        model: "AS-20 Compact",
        collection: CollectionSlug::Spraying,
        tagline_key: "product-as20-tagline",
        specs: &[
            Spec { key: "spec-tank", value: 20.0, decimals: 0 },
            Spec { key: "spec-swath", value: 7.0, decimals: 0 },
            Spec { key: "spec-flow", value: 6.0, decimals: 0 },
        ],
        featured: false,
    },
    Product {
        id: "as-40",
        model: "AS-40",
        collection: CollectionSlug::Spraying,
        tagline_key: "product-as40-tagline",
        specs: &[
            Spec { key: "spec-tank", value: 40.0, decimals: 0 },
            Spec { key: "spec-swath", value: 11.0, decimals: 0 },
            Spec { key: "spec-flow", value: 12.0, decimals: 0 },
        ],
        featured: true,
    },
    Product {
        id: "as-70-pro",
        model: "AS-70 Pro",
        collection: CollectionSlug::Spraying,
        tagline_key: "product-as70-tagline",
        specs: &[
            Spec { key: "spec-tank", value: 70.0, decimals: 0 },
            Spec { key: "spec-swath", value: 13.5, decimals: 1 },
            Spec { key: "spec-flow", value: 24.0, decimals: 0 },
        ],
        featured: false,
    },
    Product {
        id: "gs-50",
        model: "GS-50",
        collection: CollectionSlug::Spreading,
        tagline_key: "product-gs50-tagline",
        specs: &[
            Spec { key: "spec-payload", value: 50.0, decimals: 0 },
            Spec { key: "spec-hopper", value: 70.0, decimals: 0 },
            Spec { key: "spec-spread-rate", value: 108.0, decimals: 0 },
        ],
        featured: true,
    },
    Product {
        id: "gs-100",
        model: "GS-100 Heavy",
        collection: CollectionSlug::Spreading,
        tagline_key: "product-gs100-tagline",
        specs: &[
            Spec { key: "spec-payload", value: 100.0, decimals: 0 },
            Spec { key: "spec-hopper", value: 130.0, decimals: 0 },
            Spec { key: "spec-spread-rate", value: 200.0, decimals: 0 },
        ],
        featured: false,
    },
    Product {
        id: "mx-2",
        model: "MX-2 Mapper",
        collection: CollectionSlug::Mapping,
        tagline_key: "product-mx2-tagline",
        specs: &[
            Spec { key: "spec-flight-time", value: 55.0, decimals: 0 },
            Spec { key: "spec-coverage", value: 200.0, decimals: 0 },
            Spec { key: "spec-gsd", value: 2.5, decimals: 1 },
        ],
        featured: true,
    },
    Product {
        id: "mx-2-rtk",
        model: "MX-2 RTK",
        collection: CollectionSlug::Mapping,
        tagline_key: "product-mx2rtk-tagline",
        specs: &[
            Spec { key: "spec-flight-time", value: 50.0, decimals: 0 },
            Spec { key: "spec-coverage", value: 180.0, decimals: 0 },
            Spec { key: "spec-accuracy", value: 1.5, decimals: 1 },
        ],
        featured: false,
    },
    Product {
        id: "b30",
        model: "Smart Battery B30",
        collection: CollectionSlug::Accessories,
        tagline_key: "product-b30-tagline",
        specs: &[
            Spec { key: "spec-capacity", value: 30000.0, decimals: 0 },
            Spec { key: "spec-cycles", value: 1500.0, decimals: 0 },
        ],
        featured: false,
    },
    Product {
        id: "c9",
        model: "Rapid Charger C9",
        collection: CollectionSlug::Accessories,
        tagline_key: "product-c9-tagline",
        specs: &[
            Spec { key: "spec-output", value: 9000.0, decimals: 0 },
            Spec { key: "spec-charge-time", value: 9.0, decimals: 0 },
        ],
        featured: false,
    },
    Product {
        id: "rtk-base",
        model: "RTK Base Station",
        collection: CollectionSlug::Accessories,
        tagline_key: "product-rtkbase-tagline",
        specs: &[
            Spec { key: "spec-accuracy", value: 1.0, decimals: 1 },
            Spec { key: "spec-range", value: 5.0, decimals: 0 },
        ],
        featured: false,
    },
];

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        id: "spray",
        eyebrow_key: "hero-spray-eyebrow",
        title_key: "hero-spray-title",
        body_key: "hero-spray-body",
        cta_key: "hero-spray-cta",
        target: Page::Collection(CollectionSlug::Spraying),
    },
    HeroSlide {
        id: "spread",
        eyebrow_key: "hero-spread-eyebrow",
        title_key: "hero-spread-title",
        body_key: "hero-spread-body",
        cta_key: "hero-spread-cta",
        target: Page::Collection(CollectionSlug::Spreading),
    },
    HeroSlide {
        id: "map",
        eyebrow_key: "hero-map-eyebrow",
        title_key: "hero-map-title",
        body_key: "hero-map-body",
        cta_key: "hero-map-cta",
        target: Page::Collection(CollectionSlug::Mapping),
    },
];

pub const STATS: [StatRecord; 4] = [
    StatRecord {
        value: 2_400_000.0,
        decimals: 0,
        suffix: "+",
        label_key: "stat-hectares-label",
    },
    StatRecord {
        value: 18_500.0,
        decimals: 0,
        suffix: "+",
        label_key: "stat-drones-label",
    },
    StatRecord {
        value: 46.0,
        decimals: 0,
        suffix: "",
        label_key: "stat-countries-label",
    },
    StatRecord {
        value: 90.0,
        decimals: 0,
        suffix: "%",
        label_key: "stat-water-label",
    },
];

pub fn collection(slug: CollectionSlug) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.slug == slug)
}

pub fn products_in(slug: CollectionSlug) -> impl Iterator<Item = &'static Product> {
    PRODUCTS.iter().filter(move |p| p.collection == slug)
}

pub fn featured_products() -> impl Iterator<Item = &'static Product> {
    PRODUCTS.iter().filter(|p| p.featured)
}

/// Every message id referenced from the tables above.
pub fn message_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for c in &COLLECTIONS {
        keys.extend([c.title_key, c.summary_key]);
    }
    for p in &PRODUCTS {
        keys.push(p.tagline_key);
        keys.extend(p.specs.iter().map(|s| s.key));
    }
    for s in &HERO_SLIDES {
        keys.extend([s.eyebrow_key, s.title_key, s.body_key, s.cta_key]);
    }
    keys.extend(STATS.iter().map(|s| s.label_key));
    keys.sort_unstable();
    keys.dedup();
    keys
}
