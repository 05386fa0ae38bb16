//! Locale redirect decision.
//!
//! Two steps run in order:
//!
//! 1. [`geo_redirect`]: a first visit to `/` (no prefix, no cookie) is sent to
//!    the locale mapped from the visitor's country, unless that is the default.
//! 2. [`route_locale`]: the general prefix routing every other request goes
//!    through (cookie, then `Accept-Language`, then default).
//!
//! Both are pure; the axum glue lives in [`crate::middleware`].

use crate::locale::{
    localized_path, negotiate_accept_language, resolve_country, strip_locale_prefix, Locale,
};

/// Facts about an incoming page request that the decision depends on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleRequest {
    pub path: String,
    pub query: Option<String>,
    /// Raw locale cookie value, unvalidated.
    pub cookie_locale: Option<String>,
    /// Raw ISO country code from the geo header.
    pub geo_country: Option<String>,
    pub accept_language: Option<String>,
}

impl LocaleRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_cookie(mut self, value: impl Into<String>) -> Self {
        self.cookie_locale = Some(value.into());
        self
    }

    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.geo_country = Some(code.into());
        self
    }

    pub fn with_accept_language(mut self, header: impl Into<String>) -> Self {
        self.accept_language = Some(header.into());
        self
    }

    fn cookie(&self) -> Option<Locale> {
        self.cookie_locale.as_deref()?.parse().ok()
    }

    fn location(&self, path: String) -> String {
        match self.query.as_deref() {
            Some(q) if !q.is_empty() => format!("{path}?{q}"),
            _ => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDecision {
    /// Answer with a temporary redirect.
    Redirect {
        location: String,
        set_cookie: Option<Locale>,
    },
    /// Serve the request in `locale`.
    Continue {
        locale: Locale,
        set_cookie: Option<Locale>,
    },
}

impl LocaleDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, LocaleDecision::Redirect { .. })
    }

    pub fn set_cookie(&self) -> Option<Locale> {
        match self {
            LocaleDecision::Redirect { set_cookie, .. }
            | LocaleDecision::Continue { set_cookie, .. } => *set_cookie,
        }
    }
}

/// Country-based redirect for first visits to the root.
///
/// Returns `None` when the path carries a locale prefix, when any locale cookie
/// is present (even an invalid one), for every path other than `/`, and when the
/// country resolves to the default locale.
pub fn geo_redirect(request: &LocaleRequest) -> Option<LocaleDecision> {
    let (prefix, _) = strip_locale_prefix(&request.path);
    if prefix.is_some() || request.cookie_locale.is_some() || request.path != "/" {
        return None;
    }

    let locale = resolve_country(request.geo_country.as_deref());
    if locale.is_default() {
        return None;
    }

    Some(LocaleDecision::Redirect {
        location: request.location(localized_path(locale, "/")),
        set_cookie: None,
    })
}

/// Prefix-based locale routing with cookie and `Accept-Language` detection.
pub fn route_locale(request: &LocaleRequest) -> LocaleDecision {
    let cookie = request.cookie();
    let (prefix, rest) = strip_locale_prefix(&request.path);

    match prefix {
        // `/en/...` is never canonical; strip it and remember the choice.
        Some(locale) if locale.is_default() => LocaleDecision::Redirect {
            location: request.location(same_origin_path(rest)),
            set_cookie: (cookie != Some(locale)).then_some(locale),
        },
        Some(locale) => LocaleDecision::Continue {
            locale,
            set_cookie: (cookie != Some(locale)).then_some(locale),
        },
        None => {
            let preferred = cookie
                .or_else(|| {
                    request
                        .accept_language
                        .as_deref()
                        .and_then(negotiate_accept_language)
                })
                .unwrap_or(Locale::DEFAULT);

            if preferred.is_default() {
                LocaleDecision::Continue {
                    locale: preferred,
                    set_cookie: None,
                }
            } else {
                LocaleDecision::Redirect {
                    location: request.location(localized_path(preferred, &request.path)),
                    set_cookie: None,
                }
            }
        }
    }
}

/// Collapse the leading run of `/` and `\` to a single `/`.
///
/// Browsers read `//host` and `/\host` as protocol-relative URLs, so a
/// `Location` built from a request path must never start with either.
fn same_origin_path(path: &str) -> String {
    let rest = path.trim_start_matches(['/', '\\']);
    format!("/{rest}")
}

/// Full decision: geo redirect first, prefix routing otherwise.
pub fn decide(request: &LocaleRequest) -> LocaleDecision {
    geo_redirect(request).unwrap_or_else(|| route_locale(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::country_table;
    use pretty_assertions::assert_eq;

    fn redirect_to(location: &str) -> LocaleDecision {
        LocaleDecision::Redirect {
            location: location.to_string(),
            set_cookie: None,
        }
    }

    #[test]
    fn root_visit_from_mapped_country_redirects() {
        let req = LocaleRequest::new("/").with_country("BR");
        assert_eq!(geo_redirect(&req), Some(redirect_to("/pt")));
        assert_eq!(decide(&req), redirect_to("/pt"));
    }

    #[test]
    fn root_visit_keeps_query_string() {
        let req = LocaleRequest::new("/")
            .with_country("MX")
            .with_query("utm_source=fair");
        assert_eq!(decide(&req), redirect_to("/es?utm_source=fair"));
    }

    #[test]
    fn english_or_unknown_country_does_not_geo_redirect() {
        for country in ["US", "DE", "", "zz"] {
            let req = LocaleRequest::new("/").with_country(country);
            assert_eq!(geo_redirect(&req), None, "country {country:?}");
        }
        assert_eq!(geo_redirect(&LocaleRequest::new("/")), None);
    }

    #[test]
    fn geo_redirect_never_fires_with_prefix_or_cookie() {
        for (country, _) in country_table() {
            for locale in Locale::ALL {
                let prefixed = LocaleRequest::new(localized_path(locale, "/"))
                    .with_country(*country);
                if !locale.is_default() {
                    assert_eq!(geo_redirect(&prefixed), None);
                }
                let prefixed_default =
                    LocaleRequest::new(format!("/{}", locale.code())).with_country(*country);
                assert_eq!(geo_redirect(&prefixed_default), None);

                let with_cookie = LocaleRequest::new("/")
                    .with_country(*country)
                    .with_cookie(locale.code());
                assert_eq!(geo_redirect(&with_cookie), None);
            }
        }
    }

    #[test]
    fn geo_redirect_ignores_non_root_paths() {
        let req = LocaleRequest::new("/products").with_country("FR");
        assert_eq!(geo_redirect(&req), None);
    }

    #[test]
    fn invalid_cookie_still_blocks_geo_redirect() {
        let req = LocaleRequest::new("/").with_country("RU").with_cookie("klingon");
        assert_eq!(geo_redirect(&req), None);
        // Routing then ignores the unusable cookie.
        assert_eq!(
            decide(&req),
            LocaleDecision::Continue {
                locale: Locale::En,
                set_cookie: None
            }
        );
    }

    #[test]
    fn default_prefix_is_stripped() {
        let req = LocaleRequest::new("/en/about");
        assert_eq!(
            decide(&req),
            LocaleDecision::Redirect {
                location: "/about".into(),
                set_cookie: Some(Locale::En),
            }
        );

        let req = LocaleRequest::new("/en").with_cookie("en");
        assert_eq!(decide(&req), redirect_to("/"));
    }

    #[test]
    fn default_prefix_redirect_stays_on_this_host() {
        for path in [
            "/en//evil.example/phish",
            "/en/\\evil.example",
            "/en/\\/evil.example",
            "/en///evil.example",
        ] {
            let LocaleDecision::Redirect { location, .. } = decide(&LocaleRequest::new(path)) else {
                panic!("{path} should redirect");
            };
            assert!(location.starts_with('/'), "{path} -> {location}");
            assert!(!location.starts_with("//"), "{path} -> {location}");
            assert!(!location.starts_with("/\\"), "{path} -> {location}");
        }
        assert_eq!(
            decide(&LocaleRequest::new("/en//evil.example/phish").with_cookie("en")),
            redirect_to("/evil.example/phish")
        );
    }

    #[test]
    fn prefixed_request_continues_and_updates_cookie() {
        let req = LocaleRequest::new("/zh/products").with_cookie("es");
        assert_eq!(
            decide(&req),
            LocaleDecision::Continue {
                locale: Locale::Zh,
                set_cookie: Some(Locale::Zh),
            }
        );

        let req = LocaleRequest::new("/zh/products").with_cookie("zh");
        assert_eq!(decide(&req).set_cookie(), None);
    }

    #[test]
    fn cookie_wins_over_accept_language_for_unprefixed_paths() {
        let req = LocaleRequest::new("/contact")
            .with_cookie("fr")
            .with_accept_language("es");
        assert_eq!(decide(&req), redirect_to("/fr/contact"));
    }

    #[test]
    fn accept_language_applies_without_cookie() {
        let req = LocaleRequest::new("/about").with_accept_language("ru-RU,ru;q=0.9");
        assert_eq!(decide(&req), redirect_to("/ru/about"));

        let req = LocaleRequest::new("/about").with_accept_language("en-GB,en;q=0.9");
        assert!(!decide(&req).is_redirect());
    }

    #[test]
    fn geo_redirect_takes_precedence_over_accept_language() {
        let req = LocaleRequest::new("/")
            .with_country("CN")
            .with_accept_language("fr");
        assert_eq!(decide(&req), redirect_to("/zh"));
    }
}
