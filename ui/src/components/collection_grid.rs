use api::locale::localized_path;
use api::{Locale, Page};
use dioxus::prelude::*;

use crate::catalog::{products_in, COLLECTIONS};
use crate::i18n::tr;
use crate::t;

/// Cards linking to every product collection.
#[component]
pub fn CollectionGrid(locale: Locale) -> Element {
    rsx! {
        ul { class: "collection-grid",
            for collection in COLLECTIONS.iter() {
                li {
                    key: "{collection.slug}",
                    class: "collection-card collection-card--{collection.slug}",
                    a {
                        class: "collection-card__link",
                        href: localized_path(locale, &Page::Collection(collection.slug).path()),
                        h3 { class: "collection-card__title", {tr(locale, collection.title_key)} }
                        p { class: "collection-card__summary", {tr(locale, collection.summary_key)} }
                        span { class: "collection-card__count",
                            {t!(locale, "collection-count", count = products_in(collection.slug).count())}
                        }
                    }
                }
            }
        }
    }
}
