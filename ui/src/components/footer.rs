use api::locale::localized_path;
use api::{Locale, Page};
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SiteFooter(locale: Locale) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__name", "AgriSky" }
                    p { class: "footer__tagline", {t!(locale, "footer-tagline")} }
                }
                nav { class: "footer__links", aria_label: t!(locale, "footer-nav-label"),
                    a { href: localized_path(locale, &Page::Products.path()), {t!(locale, "nav-products")} }
                    a { href: localized_path(locale, &Page::About.path()), {t!(locale, "nav-about")} }
                    a { href: localized_path(locale, &Page::Contact.path()), {t!(locale, "nav-contact")} }
                    a { href: "/sitemap.xml", {t!(locale, "footer-sitemap")} }
                }
                p { class: "footer__legal", {t!(locale, "footer-rights", company = "AgriSky Robotics")} }
            }
        }
    }
}
