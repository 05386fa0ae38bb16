use api::locale::{localized_path, prefixed_path};
use api::{Locale, Page};
use dioxus::prelude::*;

use crate::t;

/// Top-level pages shown in the navigation, in order.
const NAV_PAGES: [Page; 4] = [Page::Home, Page::Products, Page::About, Page::Contact];

fn nav_label(locale: Locale, page: Page) -> String {
    match page {
        Page::Home => t!(locale, "nav-home"),
        Page::Products | Page::Collection(_) => t!(locale, "nav-products"),
        Page::About => t!(locale, "nav-about"),
        Page::Contact => t!(locale, "nav-contact"),
    }
}

/// Collection pages highlight the "Products" entry.
fn is_current(nav: Page, current: Page) -> bool {
    match (nav, current) {
        (Page::Products, Page::Collection(_)) => true,
        _ => nav == current,
    }
}

/// Link target for switching `current` into `target`.
///
/// Always prefixed (also `/en/...`): the locale middleware stores the choice in
/// the cookie and then redirects the default locale to its unprefixed URL.
pub fn switch_href(target: Locale, current: Page) -> String {
    prefixed_path(target, &current.path())
}

/// Localized site header: brand, page links and the locale switcher.
///
/// The switcher uses plain anchors so the change goes through a full request
/// (cookie update + canonical redirect) instead of client-side routing.
#[component]
pub fn SiteNavbar(locale: Locale, current: Page) -> Element {
    let mut menu_open = use_signal(|| false);

    let links = NAV_PAGES.into_iter().map(|page| {
        let href = localized_path(locale, &page.path());
        let label = nav_label(locale, page);
        let class = if is_current(page, current) {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        };
        rsx! {
            Link {
                key: "{href}",
                class,
                to: href.clone(),
                onclick: move |_| menu_open.set(false),
                "{label}"
            }
        }
    });

    let menu_class = if menu_open() {
        "navbar__menu navbar__menu--open"
    } else {
        "navbar__menu"
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                // Brand
                Link {
                    class: "navbar__brand",
                    to: localized_path(locale, "/"),
                    span { class: "navbar__brand-mark", aria_hidden: "true" }
                    span { class: "navbar__brand-name", "AgriSky" }
                    span { class: "navbar__brand-subtitle", {t!(locale, "tagline")} }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_expanded: "{menu_open()}",
                    aria_controls: "navbar-menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    span { class: "visually-hidden", {t!(locale, "nav-menu-toggle")} }
                    span { class: "navbar__toggle-bar", aria_hidden: "true" }
                }

                div { id: "navbar-menu", class: menu_class,
                    nav { class: "navbar__links", aria_label: t!(locale, "nav-primary-label"),
                        {links}
                    }

                    // Locale switcher
                    div { class: "navbar__locale",
                        span { class: "visually-hidden", {t!(locale, "nav-language-label")} }
                        ul { class: "navbar__locale-list",
                            for target in Locale::ALL {
                                li { key: "{target}",
                                    a {
                                        class: if target == locale { "navbar__locale-link navbar__locale-link--active" } else { "navbar__locale-link" },
                                        href: switch_href(target, current),
                                        hreflang: target.code(),
                                        lang: target.code(),
                                        title: target.native_name(),
                                        {target.code().to_uppercase()}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
