use api::locale::strip_locale_prefix;
use api::{CollectionSlug, Locale, LocalePrefix, Page};
use dioxus::prelude::*;

use ui::components::{SiteFooter, SiteNavbar};
use ui::views::{AboutPage, CollectionPage, ContactPage, HomePage, NotFoundPage, ProductsPage};

/// Default-locale pages live at the root; every other locale is nested
/// under `/:lang`. The server middleware redirects `/en/...` before it
/// reaches the router.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/products")]
        Products {},
        #[route("/products/:slug")]
        Collection { slug: CollectionSlug },
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},

        #[nest("/:lang")]
            #[route("/")]
            LocalizedHome { lang: LocalePrefix },
            #[route("/products")]
            LocalizedProducts { lang: LocalePrefix },
            #[route("/products/:slug")]
            LocalizedCollection { lang: LocalePrefix, slug: CollectionSlug },
            #[route("/about")]
            LocalizedAbout { lang: LocalePrefix },
            #[route("/contact")]
            LocalizedContact { lang: LocalePrefix },
        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn locale(&self) -> Locale {
        match self {
            Route::Home {}
            | Route::Products {}
            | Route::Collection { .. }
            | Route::About {}
            | Route::Contact {} => Locale::DEFAULT,
            Route::LocalizedHome { lang }
            | Route::LocalizedProducts { lang }
            | Route::LocalizedCollection { lang, .. }
            | Route::LocalizedAbout { lang }
            | Route::LocalizedContact { lang } => lang.0,
            Route::NotFound { segments } => {
                strip_locale_prefix(&segments_path(segments)).0.unwrap_or(Locale::DEFAULT)
            }
        }
    }

    /// Page shown for this route; unknown paths highlight nothing but keep
    /// the switcher pointing at the home page.
    fn page(&self) -> Page {
        match self {
            Route::Home {} | Route::LocalizedHome { .. } | Route::NotFound { .. } => Page::Home,
            Route::Products {} | Route::LocalizedProducts { .. } => Page::Products,
            Route::Collection { slug } | Route::LocalizedCollection { slug, .. } => {
                Page::Collection(*slug)
            }
            Route::About {} | Route::LocalizedAbout { .. } => Page::About,
            Route::Contact {} | Route::LocalizedContact { .. } => Page::Contact,
        }
    }
}

fn segments_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use api::middleware::with_site_routes;
    use api::SiteConfig;
    use dioxus::logger::tracing::{error, info};

    dioxus::logger::initialize_default();

    let config = match SiteConfig::load() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!(%err, "invalid site configuration");
            std::process::exit(1);
        }
    };

    let address = dioxus::cli_config::fullstack_address_or_localhost();
    let router = axum::Router::new().serve_dioxus_application(ServeConfigBuilder::default(), App);
    let router = with_site_routes(router, config.clone());

    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%address, %err, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(%address, base_url = %config.base_url, "serving site");
    if let Err(err) = axum::serve(listener, router.into_make_service()).await {
        error!(%err, "server stopped");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Shared chrome: navbar, page outlet and footer, all in the route's locale.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let locale = route.locale();

    rsx! {
        div { class: "site", lang: locale.code(),
            SiteNavbar { locale, current: route.page() }
            main { class: "site__main", Outlet::<Route> {} }
            SiteFooter { locale }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomePage { locale: Locale::DEFAULT } }
}

#[component]
fn Products() -> Element {
    rsx! { ProductsPage { locale: Locale::DEFAULT } }
}

#[component]
fn Collection(slug: CollectionSlug) -> Element {
    rsx! { CollectionPage { locale: Locale::DEFAULT, slug } }
}

#[component]
fn About() -> Element {
    rsx! { AboutPage { locale: Locale::DEFAULT } }
}

#[component]
fn Contact() -> Element {
    rsx! { ContactPage { locale: Locale::DEFAULT } }
}

#[component]
fn LocalizedHome(lang: LocalePrefix) -> Element {
    rsx! { HomePage { locale: lang.0 } }
}

#[component]
fn LocalizedProducts(lang: LocalePrefix) -> Element {
    rsx! { ProductsPage { locale: lang.0 } }
}

#[component]
fn LocalizedCollection(lang: LocalePrefix, slug: CollectionSlug) -> Element {
    rsx! { CollectionPage { locale: lang.0, slug } }
}

#[component]
fn LocalizedAbout(lang: LocalePrefix) -> Element {
    rsx! { AboutPage { locale: lang.0 } }
}

#[component]
fn LocalizedContact(lang: LocalePrefix) -> Element {
    rsx! { ContactPage { locale: lang.0 } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let route = Route::NotFound { segments };
    rsx! { NotFoundPage { locale: route.locale() } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::locale::localized_path;
    use api::STATIC_PAGES;

    fn parse(path: &str) -> Route {
        path.parse::<Route>()
            .unwrap_or_else(|err| panic!("{path} did not parse: {err}"))
    }

    #[test]
    fn every_localized_page_has_a_route() {
        for locale in Locale::ALL {
            for page in STATIC_PAGES {
                let path = localized_path(locale, &page.path());
                let route = parse(&path);
                assert_eq!(route.locale(), locale, "{path}");
                assert_eq!(route.page(), page, "{path}");
            }
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(matches!(parse("/tractors"), Route::NotFound { .. }));
        assert!(matches!(parse("/es/products/balloons"), Route::NotFound { .. }));
        assert_eq!(parse("/ru/nowhere").locale(), Locale::Ru);
        assert_eq!(parse("/nowhere").locale(), Locale::DEFAULT);
    }

    #[test]
    fn lang_segment_must_be_an_exact_code() {
        for path in ["/ES/about", "/EN/about", "/pt-BR/about", "/Zh"] {
            let route = parse(path);
            assert!(matches!(route, Route::NotFound { .. }), "{path} -> {route:?}");
            assert_eq!(route.locale(), Locale::DEFAULT, "{path}");
            assert_eq!(route.page(), Page::Home, "{path}");
        }
        assert_eq!(parse("/es/about").locale(), Locale::Es);
    }
}
