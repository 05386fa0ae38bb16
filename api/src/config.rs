//! Site configuration: embedded `site.toml` defaults plus environment overrides.

use serde::Deserialize;
use time::{macros::format_description, Date};

use crate::error::SiteError;

const DEFAULT_SITE_TOML: &str = include_str!("../site.toml");

pub const ENV_BASE_URL: &str = "AGRISKY_BASE_URL";
pub const ENV_GEO_HEADER: &str = "AGRISKY_GEO_HEADER";
pub const ENV_LOCALE_COOKIE: &str = "AGRISKY_LOCALE_COOKIE";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Absolute origin used for sitemap URLs, no trailing slash.
    pub base_url: String,
    /// Request header carrying the visitor's ISO country code.
    #[serde(default = "default_geo_header")]
    pub geo_header: String,
    /// Cookie that remembers the chosen locale.
    #[serde(default = "default_locale_cookie")]
    pub locale_cookie: String,
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_secs: u64,
    /// `YYYY-MM-DD`; stamped into sitemap `<lastmod>`.
    #[serde(default)]
    pub content_updated: Option<String>,
}

fn default_geo_header() -> String {
    "cf-ipcountry".to_string()
}

fn default_locale_cookie() -> String {
    "AGRISKY_LOCALE".to_string()
}

fn default_cookie_max_age() -> u64 {
    60 * 60 * 24 * 365
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(src: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded defaults with environment overrides applied.
    pub fn load() -> Result<Self, SiteError> {
        let mut config: SiteConfig = toml::from_str(DEFAULT_SITE_TOML)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Override fields from a key lookup (the environment in production).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(header) = non_empty(ENV_GEO_HEADER) {
            self.geo_header = header.trim().to_ascii_lowercase();
        }
        if let Some(cookie) = non_empty(ENV_LOCALE_COOKIE) {
            self.locale_cookie = cookie.trim().to_string();
        }
    }

    fn validate(&self) -> Result<(), SiteError> {
        let url = self.base_url.as_str();
        let has_scheme = url.starts_with("https://") || url.starts_with("http://");
        let host = url.split_once("://").map(|(_, h)| h).unwrap_or_default();
        if !has_scheme || host.is_empty() || url.ends_with('/') {
            return Err(SiteError::BaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Parsed `content_updated`, if present and well formed.
    pub fn content_updated_date(&self) -> Option<Date> {
        let raw = self.content_updated.as_deref()?;
        Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
    }

    /// Absolute URL for an already localized path.
    pub fn absolute_url(&self, path: &str) -> String {
        if path == "/" {
            format!("{}/", self.base_url)
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.agrisky.example".to_string(),
            geo_header: default_geo_header(),
            locale_cookie: default_locale_cookie(),
            cookie_max_age_secs: default_cookie_max_age(),
            content_updated: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn embedded_defaults_parse() {
        let config = SiteConfig::from_toml(DEFAULT_SITE_TOML).unwrap();
        assert_eq!(config.geo_header, "cf-ipcountry");
        assert!(config.content_updated_date().is_some());
    }

    #[test]
    fn missing_optional_keys_use_defaults() {
        let config = SiteConfig::from_toml(r#"base_url = "https://drones.test""#).unwrap();
        assert_eq!(config.locale_cookie, "AGRISKY_LOCALE");
        assert_eq!(config.cookie_max_age_secs, 31_536_000);
        assert_eq!(config.content_updated_date(), None);
    }

    #[test]
    fn rejects_relative_or_slash_terminated_base_url() {
        assert!(matches!(
            SiteConfig::from_toml(r#"base_url = "www.agrisky.example""#),
            Err(SiteError::BaseUrl(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml(r#"base_url = "https://agrisky.example/""#),
            Err(SiteError::BaseUrl(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml("base_url = 42"),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn overrides_replace_non_empty_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_BASE_URL, "https://staging.agrisky.example/"),
            (ENV_GEO_HEADER, "X-Country"),
            (ENV_LOCALE_COOKIE, "   "),
        ]);
        let mut config = SiteConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "https://staging.agrisky.example");
        assert_eq!(config.geo_header, "x-country");
        assert_eq!(config.locale_cookie, "AGRISKY_LOCALE");
    }

    #[test]
    fn absolute_url_keeps_root_slash() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url("/"), "https://www.agrisky.example/");
        assert_eq!(
            config.absolute_url("/es/about"),
            "https://www.agrisky.example/es/about"
        );
    }
}
