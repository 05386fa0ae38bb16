//! Server-side glue for the AgriSky site: supported locales, the static page
//! registry, the locale redirect decision, sitemap generation and site config.
//!
//! Everything except [`middleware`] is plain data and pure functions so the
//! `ui` crate can share it on every target (including wasm). The axum layer is
//! behind the `server` feature.

pub mod config;
pub mod error;
pub mod locale;
pub mod pages;
pub mod redirect;
pub mod sitemap;

#[cfg(any(feature = "server", test))]
pub mod middleware;

pub use config::SiteConfig;
pub use error::SiteError;
pub use locale::{Locale, LocalePrefix};
pub use pages::{CollectionSlug, Page, STATIC_PAGES};
