//! Supported locales, the country → locale table and path prefix helpers.
//!
//! URL policy is "as-needed": the default locale (`en`) lives at the
//! unprefixed paths, every other locale under `/{code}`.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    En,
    Es,
    Pt,
    Fr,
    Ru,
    Zh,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    /// All supported locales, default first.
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::Es,
        Locale::Pt,
        Locale::Fr,
        Locale::Ru,
        Locale::Zh,
    ];

    /// URL prefix and Fluent folder name.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Pt => "pt",
            Locale::Fr => "fr",
            Locale::Ru => "ru",
            Locale::Zh => "zh",
        }
    }

    /// Language name written in the language itself (for the switcher).
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
            Locale::Pt => "Português",
            Locale::Fr => "Français",
            Locale::Ru => "Русский",
            Locale::Zh => "中文",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    /// Exact, case-sensitive match on [`Locale::code`].
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// A locale as it appears in a URL prefix.
///
/// Unlike `Locale`'s `FromStr` (cookies, headers), only the exact lower-case
/// code parses, so `/ES/...` and `/pt-BR/...` are not locale routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalePrefix(pub Locale);

impl FromStr for LocalePrefix {
    type Err = SiteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Locale::from_code(raw)
            .map(LocalePrefix)
            .ok_or_else(|| SiteError::UnsupportedLocale(raw.to_string()))
    }
}

impl fmt::Display for LocalePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.code())
    }
}

impl From<LocalePrefix> for Locale {
    fn from(prefix: LocalePrefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    /// Accepts bare codes (`es`) and region-qualified tags (`pt-BR`, `zh_CN`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let primary = raw
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == primary)
            .ok_or_else(|| SiteError::UnsupportedLocale(raw.to_string()))
    }
}

/// ISO-3166 alpha-2 country → locale. Countries not listed resolve to the default.
const COUNTRY_LOCALES: &[(&str, Locale)] = &[
    // English-speaking markets are listed so the table documents them explicitly.
    ("US", Locale::En),
    ("GB", Locale::En),
    ("IE", Locale::En),
    ("CA", Locale::En),
    ("AU", Locale::En),
    ("NZ", Locale::En),
    ("IN", Locale::En),
    ("ZA", Locale::En),
    ("NG", Locale::En),
    ("KE", Locale::En),
    // Spanish
    ("ES", Locale::Es),
    ("MX", Locale::Es),
    ("AR", Locale::Es),
    ("CO", Locale::Es),
    ("CL", Locale::Es),
    ("PE", Locale::Es),
    ("VE", Locale::Es),
    ("EC", Locale::Es),
    ("GT", Locale::Es),
    ("CU", Locale::Es),
    ("BO", Locale::Es),
    ("DO", Locale::Es),
    ("HN", Locale::Es),
    ("PY", Locale::Es),
    ("SV", Locale::Es),
    ("NI", Locale::Es),
    ("CR", Locale::Es),
    ("PA", Locale::Es),
    ("UY", Locale::Es),
    // Portuguese
    ("BR", Locale::Pt),
    ("PT", Locale::Pt),
    ("AO", Locale::Pt),
    ("MZ", Locale::Pt),
    // French
    ("FR", Locale::Fr),
    ("BE", Locale::Fr),
    ("LU", Locale::Fr),
    ("MA", Locale::Fr),
    ("DZ", Locale::Fr),
    ("TN", Locale::Fr),
    ("SN", Locale::Fr),
    ("CI", Locale::Fr),
    ("CM", Locale::Fr),
    // Russian
    ("RU", Locale::Ru),
    ("BY", Locale::Ru),
    ("KZ", Locale::Ru),
    ("KG", Locale::Ru),
    ("UZ", Locale::Ru),
    // Chinese
    ("CN", Locale::Zh),
    ("TW", Locale::Zh),
    ("HK", Locale::Zh),
    ("MO", Locale::Zh),
    ("SG", Locale::Zh),
];

/// Raw table view, mainly for tests and diagnostics.
pub fn country_table() -> &'static [(&'static str, Locale)] {
    COUNTRY_LOCALES
}

/// Look up a country code (case-insensitive, surrounding whitespace ignored).
pub fn locale_for_country(code: &str) -> Option<Locale> {
    let code = code.trim();
    COUNTRY_LOCALES
        .iter()
        .find(|(country, _)| country.eq_ignore_ascii_case(code))
        .map(|(_, locale)| *locale)
}

/// Resolve an optional geo header value, falling through to the default locale.
pub fn resolve_country(code: Option<&str>) -> Locale {
    code.and_then(locale_for_country).unwrap_or(Locale::DEFAULT)
}

/// Split a leading `/{code}` segment off `path`.
///
/// The returned remainder is always rooted: `/es` yields `(Some(Es), "/")`.
pub fn strip_locale_prefix(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };

    // Only exact lower-case codes count as a prefix; `/EN` is an ordinary path.
    match Locale::from_code(first) {
        Some(locale) if rest.is_empty() => (Some(locale), "/"),
        Some(locale) => (Some(locale), rest),
        None => (None, path),
    }
}

/// Build the public path of `path` for `locale` (default locale unprefixed).
pub fn localized_path(locale: Locale, path: &str) -> String {
    if locale.is_default() {
        return path.to_string();
    }
    prefixed_path(locale, path)
}

/// Always-prefixed form, also for the default locale.
pub fn prefixed_path(locale: Locale, path: &str) -> String {
    if path == "/" || path.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}{}", locale.code(), path)
    }
}

/// Pick the best supported locale from an `Accept-Language` header.
///
/// Entries are ranked by `q` (default 1.0); equal weights keep header order.
/// `q=0` means "not acceptable" and is skipped, as is the `*` wildcard.
/// Weights outside `0..=1` (or not numbers at all) invalidate their entry.
pub fn negotiate_accept_language(header: &str) -> Option<Locale> {
    let mut ranked: Vec<(usize, f32, Locale)> = header
        .split(',')
        .enumerate()
        .filter_map(|(position, entry)| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let weight = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);
            // Out-of-range or NaN weights are malformed; drop the entry.
            if !(weight > 0.0 && weight <= 1.0) {
                return None;
            }
            let locale = tag.parse::<Locale>().ok()?;
            Some((position, weight, locale))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.first().map(|(_, _, locale)| *locale)
}
