//! Internationalization (i18n) support for `agrisky-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading + Fluent fallback chain)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/agrisky-ui.ftl   (fallback/reference)
//!   es/agrisky-ui.ftl
//!   pt/agrisky-ui.ftl
//!   fr/agrisky-ui.ftl
//!   ru/agrisky-ui.ftl
//!   zh/agrisky-ui.ftl
//! ```
//!
//! Unlike a desktop app there is no single "current" language: the locale is
//! part of every URL and the server renders several locales concurrently. So
//! each [`Locale`] gets its own loader, built once, with `en` as fallback.
//!
//! Usage in a component:
//! ```ignore
//! let label = crate::t!(locale, "nav-home");
//! let footer = crate::t!(locale, "footer-rights", company = "AgriSky");
//! ```
//!
//! Keys that only exist at runtime (catalog data) go through [`tr`].
//!
//! To add a new locale:
//! 1. Add the variant to `api::Locale`.
//! 2. Copy `en/agrisky-ui.ftl` to `i18n/<code>/agrisky-ui.ftl` and translate
//!    each value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
use std::collections::HashMap;

use api::Locale;
use dioxus::logger::tracing::warn;
use fluent::FluentValue;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Translation macro bound to a locale.
/// Examples:
///     t!(locale, "nav-home")
///     t!(locale, "collection-count", count = 3)
///
/// Expands to `fl!(loader(locale), ...)`, so keys are checked against the
/// fallback FTL file at compile time.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the FTL filename in every locale folder).
const DOMAIN: &str = "agrisky-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// One loader per locale, indexed in `Locale::ALL` order.
static LOADERS: Lazy<Vec<FluentLanguageLoader>> =
    Lazy::new(|| Locale::ALL.into_iter().map(build_loader).collect());

fn language_id(locale: Locale) -> LanguageIdentifier {
    locale.code().parse().unwrap_or_default()
}

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, language_id(Locale::DEFAULT));
    // Bidi isolation marks would leak into attribute values and digit strings.
    loader.set_use_isolating(false);

    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[language_id(locale)]) {
        warn!(locale = locale.code(), %err, "failed loading translations; using fallback only");
    }
    loader
}

/// Loader for `locale`. Messages missing in that locale resolve through `en`.
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    let index = Locale::ALL
        .iter()
        .position(|l| *l == locale)
        .unwrap_or_default();
    &LOADERS[index]
}

/// Runtime-keyed lookup for ids stored in data tables.
pub fn tr(locale: Locale, key: &str) -> String {
    loader(locale).get(key)
}

/// Runtime-keyed lookup with Fluent arguments.
pub fn tr_args<'a>(locale: Locale, key: &str, args: HashMap<&'a str, FluentValue<'a>>) -> String {
    loader(locale).get_args(key, args)
}

/// Whether `key` exists in the fallback bundle.
pub fn has_key(key: &str) -> bool {
    loader(Locale::DEFAULT).has(key)
}

/// List embedded locale folders (e.g. `["en", "es", ...]`), sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
