//! Axum glue: locale middleware plus the sitemap and robots handlers.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use time::OffsetDateTime;
use tracing::{debug, error, warn};

use crate::config::SiteConfig;
use crate::locale::Locale;
use crate::redirect::{decide, LocaleDecision, LocaleRequest};
use crate::sitemap::{build_sitemap, render_robots};

/// Path prefixes that never carry page content.
const BYPASS_PREFIXES: &[&str] = &["/_dioxus", "/api/", "/assets/", "/wasm/"];

/// Mount `/sitemap.xml` and `/robots.txt` and wrap everything in the locale middleware.
pub fn with_site_routes(router: Router, config: Arc<SiteConfig>) -> Router {
    let site = Router::new()
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        .with_state(config.clone());

    router
        .merge(site)
        .layer(middleware::from_fn_with_state(config, locale_middleware))
}

/// Redirects or forwards page requests according to [`decide`].
///
/// Forwarded requests carry the resolved [`Locale`] as a request extension.
pub async fn locale_middleware(
    State(config): State<Arc<SiteConfig>>,
    mut request: Request,
    next: Next,
) -> Response {
    if !is_page_path(request.uri().path()) {
        return next.run(request).await;
    }

    let facts = locale_request(&config, request.uri(), request.headers());
    match decide(&facts) {
        LocaleDecision::Redirect {
            location,
            set_cookie,
        } => {
            debug!(path = %facts.path, %location, country = ?facts.geo_country, "locale redirect");
            let mut response = Redirect::temporary(&location).into_response();
            append_locale_cookie(&config, response.headers_mut(), set_cookie);
            response
        }
        LocaleDecision::Continue { locale, set_cookie } => {
            request.extensions_mut().insert(locale);
            let mut response = next.run(request).await;
            append_locale_cookie(&config, response.headers_mut(), set_cookie);
            response
        }
    }
}

pub async fn sitemap_handler(State(config): State<Arc<SiteConfig>>) -> Response {
    match build_sitemap(&config, OffsetDateTime::now_utc().date()) {
        Ok(xml) => (
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            xml,
        )
            .into_response(),
        Err(err) => {
            error!(%err, "failed to render sitemap");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn robots_handler(State(config): State<Arc<SiteConfig>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&config),
    )
        .into_response()
}

/// Assets, framework endpoints and anything that looks like a file skip locale routing.
pub fn is_page_path(path: &str) -> bool {
    if BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return false;
    }
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    !last_segment.contains('.')
}

fn locale_request(config: &SiteConfig, uri: &Uri, headers: &HeaderMap) -> LocaleRequest {
    LocaleRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        cookie_locale: cookie_value(headers, &config.locale_cookie),
        geo_country: header_str(headers, &config.geo_header),
        accept_language: header_str(headers, header::ACCEPT_LANGUAGE.as_str()),
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// First value of cookie `name` across all `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
}

fn append_locale_cookie(config: &SiteConfig, headers: &mut HeaderMap, locale: Option<Locale>) {
    let Some(locale) = locale else {
        return;
    };
    let cookie = format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        config.locale_cookie, locale, config.cookie_max_age_secs
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(err) => warn!(%err, cookie = %config.locale_cookie, "skipping invalid locale cookie"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, extract::Extension};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    async fn echo_locale(locale: Option<Extension<Locale>>) -> String {
        locale
            .map(|Extension(l)| l.code().to_string())
            .unwrap_or_else(|| "none".to_string())
    }

    fn app() -> Router {
        let pages = Router::new()
            .route("/", get(echo_locale))
            .route("/about", get(echo_locale))
            .route("/es", get(echo_locale))
            .route("/assets/logo.svg", get(echo_locale));
        with_site_routes(pages, Arc::new(SiteConfig::default()))
    }

    fn get_request(uri: &str, headers: &[(&str, &str)]) -> Request {
        let mut builder = axum::http::Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn geo_header_redirects_root_visit() {
        let response = app()
            .oneshot(get_request("/", &[("cf-ipcountry", "AR")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/es");
    }

    #[tokio::test]
    async fn cookie_suppresses_geo_redirect() {
        let response = app()
            .oneshot(get_request(
                "/",
                &[("cf-ipcountry", "AR"), ("cookie", "theme=dark; AGRISKY_LOCALE=en")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "en");
    }

    #[tokio::test]
    async fn prefixed_page_sets_cookie_and_exposes_locale() {
        let response = app().oneshot(get_request("/es", &[])).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("AGRISKY_LOCALE=es;"));
        assert_eq!(body_text(response).await, "es");
    }

    #[tokio::test]
    async fn default_prefix_redirects_to_canonical_path() {
        let response = app()
            .oneshot(get_request("/en/about?ref=nav", &[]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/about?ref=nav");
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[tokio::test]
    async fn default_prefix_redirect_never_leaves_the_host() {
        let response = app()
            .oneshot(get_request("/en//evil.example/phish", &[]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/evil.example/phish");
    }

    #[tokio::test]
    async fn assets_bypass_locale_routing() {
        let response = app()
            .oneshot(get_request(
                "/assets/logo.svg",
                &[("accept-language", "fr")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "none");
    }

    #[tokio::test]
    async fn sitemap_is_served_as_xml() {
        let response = app()
            .oneshot(get_request("/sitemap.xml", &[("cf-ipcountry", "BR")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/xml; charset=utf-8"
        );
        assert!(body_text(response).await.contains("<urlset"));
    }

    #[test]
    fn page_path_filter() {
        assert!(is_page_path("/"));
        assert!(is_page_path("/fr/products/spraying"));
        assert!(!is_page_path("/robots.txt"));
        assert!(!is_page_path("/_dioxus/ws"));
        assert!(!is_page_path("/assets/main.css"));
    }

    #[test]
    fn cookie_lookup_handles_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::COOKIE, HeaderValue::from_static("b=2; AGRISKY_LOCALE=\"pt\""));
        assert_eq!(
            cookie_value(&headers, "AGRISKY_LOCALE").as_deref(),
            Some("pt")
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }
}
