use api::locale::localized_path;
use api::Locale;
use dioxus::prelude::*;

use crate::animation::SliderState;
use crate::catalog::{HeroSlide, HERO_SLIDES};
use crate::components::button::{ButtonLink, ButtonSize};
use crate::core::timing;
use crate::i18n::tr;
use crate::t;

/// Delay between automatic slide changes.
pub const AUTO_ADVANCE_MS: u64 = 6_000;

/// Landing-page banner rotating through [`HERO_SLIDES`].
///
/// Auto-advance starts after mount (client only) and pauses while hovered or
/// focused; the task is dropped with the component.
#[component]
pub fn HeroSlider(locale: Locale) -> Element {
    let mut slider = use_signal(|| SliderState::new(HERO_SLIDES.len()));
    let mut paused = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            loop {
                timing::sleep_ms(AUTO_ADVANCE_MS).await;
                if !*paused.peek() {
                    slider.with_mut(|s| s.next());
                }
            }
        });
    });

    let state = slider();

    rsx! {
        section {
            class: "hero",
            "aria-roledescription": "carousel",
            aria_label: t!(locale, "hero-label"),
            onmouseenter: move |_| paused.set(true),
            onmouseleave: move |_| paused.set(false),
            onfocusin: move |_| paused.set(true),
            onfocusout: move |_| paused.set(false),

            div { class: "hero__track",
                for (index, slide) in HERO_SLIDES.iter().enumerate() {
                    HeroSlideView {
                        key: "{slide.id}",
                        locale,
                        slide: *slide,
                        active: state.is_active(index),
                        position: t!(locale, "hero-slide-position", current = (index + 1), total = HERO_SLIDES.len()),
                    }
                }
            }

            div { class: "hero__controls",
                button {
                    r#type: "button",
                    class: "hero__arrow hero__arrow--prev",
                    aria_label: t!(locale, "hero-prev"),
                    onclick: move |_| slider.with_mut(|s| s.prev()),
                    "‹"
                }
                div { class: "hero__dots", role: "tablist",
                    for index in 0..state.len() {
                        button {
                            key: "{index}",
                            r#type: "button",
                            role: "tab",
                            class: if state.is_active(index) { "hero__dot hero__dot--active" } else { "hero__dot" },
                            aria_selected: if state.is_active(index) { "true" } else { "false" },
                            aria_label: t!(locale, "hero-go-to", number = (index + 1)),
                            onclick: move |_| slider.with_mut(|s| s.go_to(index)),
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "hero__arrow hero__arrow--next",
                    aria_label: t!(locale, "hero-next"),
                    onclick: move |_| slider.with_mut(|s| s.next()),
                    "›"
                }
            }
        }
    }
}

#[component]
fn HeroSlideView(locale: Locale, slide: HeroSlide, active: bool, position: String) -> Element {
    let class = if active {
        format!("hero__slide hero__slide--{} hero__slide--active", slide.id)
    } else {
        format!("hero__slide hero__slide--{}", slide.id)
    };

    rsx! {
        article {
            class,
            role: "group",
            "aria-roledescription": "slide",
            aria_label: position,
            aria_hidden: if active { "false" } else { "true" },
            div { class: "hero__content",
                p { class: "hero__eyebrow", {tr(locale, slide.eyebrow_key)} }
                h1 { class: "hero__title", {tr(locale, slide.title_key)} }
                p { class: "hero__body", {tr(locale, slide.body_key)} }
                ButtonLink {
                    href: localized_path(locale, &slide.target.path()),
                    size: ButtonSize::Lg,
                    {tr(locale, slide.cta_key)}
                }
            }
        }
    }
}
