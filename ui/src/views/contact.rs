use api::Locale;
use dioxus::prelude::*;

use crate::components::{ButtonLink, ButtonSize};
use crate::t;

use super::page_title;

const SALES_EMAIL: &str = "sales@agrisky.example";
const SUPPORT_EMAIL: &str = "support@agrisky.example";
const PHONE: &str = "+1 555 0134";

/// Static contact details; there is no form backend.
#[component]
pub fn ContactPage(locale: Locale) -> Element {
    let name = t!(locale, "nav-contact");

    rsx! {
        document::Title { {page_title(locale, &name)} }

        div { class: "page page-contact",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "contact-title")} }
                p { class: "page__lead", {t!(locale, "contact-lead")} }
            }
            div { class: "contact-grid",
                section { class: "contact-card",
                    h2 { class: "contact-card__title", {t!(locale, "contact-sales-title")} }
                    p { {t!(locale, "contact-sales-body")} }
                    ButtonLink { href: format!("mailto:{SALES_EMAIL}"), size: ButtonSize::Lg,
                        "{SALES_EMAIL}"
                    }
                }
                section { class: "contact-card",
                    h2 { class: "contact-card__title", {t!(locale, "contact-support-title")} }
                    p { {t!(locale, "contact-support-body")} }
                    a { class: "contact-card__link", href: format!("mailto:{SUPPORT_EMAIL}"), "{SUPPORT_EMAIL}" }
                }
                section { class: "contact-card",
                    h2 { class: "contact-card__title", {t!(locale, "contact-phone-title")} }
                    p { {t!(locale, "contact-phone-hours")} }
                    a { class: "contact-card__link", href: "tel:+15550134", "{PHONE}" }
                }
            }
        }
    }
}
