//! Locale-aware number formatting for statistics and product specs.

use api::Locale;

/// Digit-group and decimal separators for `locale`.
pub fn separators(locale: Locale) -> (char, char) {
    match locale {
        Locale::En | Locale::Zh => (',', '.'),
        Locale::Es | Locale::Pt => ('.', ','),
        // Narrow no-break space, as used by French and Russian typography.
        Locale::Fr | Locale::Ru => ('\u{202F}', ','),
    }
}

/// Format `value` with `decimals` fraction digits and thousands grouping.
///
/// Non-finite input renders as an em dash placeholder.
pub fn format_grouped(value: f64, decimals: u8, locale: Locale) -> String {
    if !value.is_finite() {
        return "—".into();
    }

    let (group, decimal) = separators(locale);
    let raw = format!("{:.*}", decimals as usize, value.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));

    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    if value.is_sign_negative() && raw.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(group);
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push(decimal);
        out.push_str(frac_part);
    }
    out
}

/// Statistic display: grouped number plus a literal suffix (`+`, `%`).
pub fn format_stat(value: f64, decimals: u8, suffix: &str, locale: Locale) -> String {
    format!("{}{suffix}", format_grouped(value, decimals, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_per_locale() {
        assert_eq!(format_grouped(2_400_000.0, 0, Locale::En), "2,400,000");
        assert_eq!(format_grouped(2_400_000.0, 0, Locale::Es), "2.400.000");
        assert_eq!(format_grouped(18_500.0, 0, Locale::Fr), "18\u{202F}500");
        assert_eq!(format_grouped(999.0, 0, Locale::Pt), "999");
    }

    #[test]
    fn keeps_requested_decimals() {
        assert_eq!(format_grouped(13.5, 1, Locale::En), "13.5");
        assert_eq!(format_grouped(13.5, 1, Locale::Ru), "13,5");
        assert_eq!(format_grouped(1234.567, 2, Locale::Es), "1.234,57");
    }

    #[test]
    fn handles_sign_and_non_finite() {
        assert_eq!(format_grouped(-1500.0, 0, Locale::En), "-1,500");
        assert_eq!(format_grouped(-0.0, 0, Locale::En), "0");
        assert_eq!(format_grouped(f64::NAN, 0, Locale::En), "—");
    }

    #[test]
    fn stat_suffix_is_appended() {
        assert_eq!(format_stat(90.0, 0, "%", Locale::En), "90%");
        assert_eq!(format_stat(46.0, 0, "", Locale::Zh), "46");
    }
}
