//! Shared UI crate for the AgriSky site: translations, catalog data,
//! components and page views. Platform crates only add routing and the server.

use dioxus::prelude::*;

pub mod animation;
pub mod catalog;
pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

pub use api::{Locale, Page};

/// Site-wide stylesheet.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
