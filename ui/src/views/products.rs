use api::Locale;
use dioxus::prelude::*;

use crate::catalog::{products_in, COLLECTIONS};
use crate::components::{CollectionGrid, ProductCard};
use crate::i18n::tr;
use crate::t;

use super::page_title;

#[component]
pub fn ProductsPage(locale: Locale) -> Element {
    let name = t!(locale, "nav-products");

    rsx! {
        document::Title { {page_title(locale, &name)} }

        div { class: "page page-products",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "products-title")} }
                p { class: "page__lead", {t!(locale, "products-lead")} }
            }

            CollectionGrid { locale }

            for collection in COLLECTIONS.iter() {
                section {
                    key: "{collection.slug}",
                    id: "{collection.slug}",
                    class: "section",
                    h2 { class: "section__title", {tr(locale, collection.title_key)} }
                    div { class: "product-grid",
                        for product in products_in(collection.slug) {
                            ProductCard { key: "{product.id}", locale, product: *product }
                        }
                    }
                }
            }
        }
    }
}
