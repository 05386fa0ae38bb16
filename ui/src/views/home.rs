use api::locale::localized_path;
use api::{Locale, Page};
use dioxus::prelude::*;

use crate::catalog::featured_products;
use crate::components::{CallToAction, CollectionGrid, FadeIn, HeroSlider, ProductCard, StatsSection};
use crate::t;

#[component]
pub fn HomePage(locale: Locale) -> Element {
    rsx! {
        document::Title { {t!(locale, "home-meta-title")} }

        div { class: "page page-home",
            HeroSlider { locale }

            section { class: "section page-home__collections",
                FadeIn {
                    h2 { class: "section__title", {t!(locale, "home-collections-title")} }
                    p { class: "section__lead", {t!(locale, "home-collections-lead")} }
                }
                CollectionGrid { locale }
            }

            StatsSection { locale }

            section { class: "section page-home__featured",
                FadeIn { delay_ms: 150,
                    h2 { class: "section__title", {t!(locale, "home-featured-title")} }
                }
                div { class: "product-grid",
                    for product in featured_products() {
                        ProductCard { key: "{product.id}", locale, product: *product }
                    }
                }
            }

            CallToAction {
                title: t!(locale, "cta-title"),
                body: t!(locale, "cta-body"),
                primary_label: t!(locale, "cta-primary"),
                primary_href: localized_path(locale, &Page::Contact.path()),
                secondary_label: t!(locale, "cta-secondary"),
                secondary_href: localized_path(locale, &Page::Products.path()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_links_stay_in_locale() {
        let html = dioxus_ssr::render_element(rsx! { HomePage { locale: Locale::Fr } });
        assert!(html.contains(r#"href="/fr/contact""#), "{html}");
        assert!(html.contains(r#"href="/fr/products/mapping""#));
        assert!(!html.contains(r#"href="/contact""#));
    }

    #[test]
    fn default_locale_links_are_unprefixed() {
        let html = dioxus_ssr::render_element(rsx! { HomePage { locale: Locale::En } });
        assert!(html.contains(r#"href="/contact""#), "{html}");
        assert!(!html.contains(r#"href="/en/"#));
    }
}
