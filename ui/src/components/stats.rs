use api::Locale;
use dioxus::prelude::*;

use crate::animation::{CountUp, RunOnce};
use crate::catalog::{StatRecord, STATS};
use crate::core::{format, timing};
use crate::i18n::tr;
use crate::t;

/// Band of animated headline figures.
#[component]
pub fn StatsSection(locale: Locale) -> Element {
    rsx! {
        section { class: "stats", aria_labelledby: "stats-heading",
            h2 { id: "stats-heading", class: "stats__heading", {t!(locale, "stats-heading")} }
            ul { class: "stats__list",
                for (index, stat) in STATS.iter().enumerate() {
                    StatCounter { key: "{index}", locale, stat: *stat }
                }
            }
        }
    }
}

/// Counts from zero up to the record's value once, after the first mount.
///
/// The final figure is also exposed through `aria-label` so screen readers never
/// announce intermediate values.
#[component]
pub fn StatCounter(locale: Locale, stat: StatRecord) -> Element {
    let mut shown = use_signal(|| 0.0_f64);
    let mut run_once = use_signal(RunOnce::default);

    use_effect(move || {
        if !run_once.with_mut(|guard| guard.try_start()) {
            return;
        }
        spawn(async move {
            let animation = CountUp::new(stat.value, CountUp::DEFAULT_DURATION_MS);
            let started = timing::now_ms();
            loop {
                let elapsed = timing::now_ms() - started;
                shown.set(animation.value_at(elapsed));
                if animation.is_finished(elapsed) {
                    break;
                }
                timing::next_frame().await;
            }
        });
    });

    let display = format::format_stat(shown(), stat.decimals, stat.suffix, locale);
    let final_value = format::format_stat(stat.value, stat.decimals, stat.suffix, locale);
    let label = tr(locale, stat.label_key);

    rsx! {
        li { class: "stats__item",
            span {
                class: "stats__value",
                aria_label: "{final_value}",
                "{display}"
            }
            span { class: "stats__label", "{label}" }
        }
    }
}
