use api::locale::localized_path;
use api::{CollectionSlug, Locale, Page};
use dioxus::prelude::*;

use crate::catalog::{collection, products_in};
use crate::components::{ButtonLink, ButtonVariant, ProductCard};
use crate::i18n::tr;
use crate::t;

use super::page_title;
use super::NotFoundPage;

/// One product collection. Slugs come straight from the URL, so an unknown
/// collection renders the not-found page.
#[component]
pub fn CollectionPage(locale: Locale, slug: CollectionSlug) -> Element {
    let Some(collection) = collection(slug) else {
        return rsx! { NotFoundPage { locale } };
    };
    let title = tr(locale, collection.title_key);

    rsx! {
        document::Title { {page_title(locale, &title)} }

        div { class: "page page-collection page-collection--{slug}",
            nav { class: "breadcrumb", aria_label: t!(locale, "breadcrumb-label"),
                a { href: localized_path(locale, &Page::Products.path()), {t!(locale, "nav-products")} }
                span { class: "breadcrumb__sep", aria_hidden: "true", "/" }
                span { aria_current: "page", "{title}" }
            }
            header { class: "page__header",
                h1 { class: "page__title", "{title}" }
                p { class: "page__lead", {tr(locale, collection.summary_key)} }
            }
            div { class: "product-grid",
                for product in products_in(slug) {
                    ProductCard { key: "{product.id}", locale, product: *product }
                }
            }
            ButtonLink {
                href: localized_path(locale, &Page::Contact.path()),
                variant: ButtonVariant::Secondary,
                {t!(locale, "collection-contact-cta")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_products_of_the_collection() {
        let html = dioxus_ssr::render_element(rsx! {
            CollectionPage { locale: Locale::En, slug: CollectionSlug::Spreading }
        });
        let expected = products_in(CollectionSlug::Spreading).count();
        assert_eq!(html.matches("<article class=\"product-card").count(), expected);
        assert!(html.contains("GS-50"));
        assert!(!html.contains("MX-2"));
    }
}
