use api::locale::localized_path;
use api::Locale;
use dioxus::prelude::*;

use crate::components::ButtonLink;
use crate::t;

use super::page_title;

#[component]
pub fn NotFoundPage(locale: Locale) -> Element {
    let name = t!(locale, "not-found-title");

    rsx! {
        document::Title { {page_title(locale, &name)} }

        div { class: "page page-not-found",
            h1 { class: "page__title", "{name}" }
            p { class: "page__lead", {t!(locale, "not-found-body")} }
            ButtonLink { href: localized_path(locale, "/"), {t!(locale, "not-found-home")} }
        }
    }
}
