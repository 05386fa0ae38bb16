use api::Locale;
use dioxus::prelude::*;

use crate::components::{FadeIn, StatsSection};
use crate::t;

use super::page_title;

#[component]
pub fn AboutPage(locale: Locale) -> Element {
    let name = t!(locale, "nav-about");

    rsx! {
        document::Title { {page_title(locale, &name)} }

        div { class: "page page-about",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "about-title")} }
                p { class: "page__lead", {t!(locale, "about-lead")} }
            }
            FadeIn {
                section { class: "section page-about__story",
                    h2 { class: "section__title", {t!(locale, "about-mission-title")} }
                    p { {t!(locale, "about-mission-body")} }
                }
            }
            FadeIn { delay_ms: 200,
                section { class: "section page-about__story",
                    h2 { class: "section__title", {t!(locale, "about-service-title")} }
                    p { {t!(locale, "about-service-body")} }
                }
            }
            StatsSection { locale }
        }
    }
}
