//! Error type shared by the site glue.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A locale code outside the supported set.
    #[error("unsupported locale: {0:?}")]
    UnsupportedLocale(String),
    /// `site.toml` (embedded or overridden) could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),
    /// Base URL must be absolute http(s) without a trailing slash.
    #[error("invalid base url {0:?}: expected http(s)://host without trailing slash")]
    BaseUrl(String),
    /// A collection slug that is not part of the catalog.
    #[error("unknown page: {0:?}")]
    UnknownPage(String),
    /// Writing the sitemap document failed.
    #[error("sitemap serialization failed: {0}")]
    Sitemap(#[from] std::fmt::Error),
    /// Formatting a sitemap `lastmod` date failed.
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}
