use dioxus::prelude::*;

use super::button::{ButtonLink, ButtonSize, ButtonVariant};

/// Closing call-to-action band.
#[component]
pub fn CallToAction(
    title: String,
    body: String,
    primary_label: String,
    primary_href: String,
    secondary_label: Option<String>,
    secondary_href: Option<String>,
) -> Element {
    rsx! {
        section { class: "cta",
            div { class: "cta__inner",
                h2 { class: "cta__title", "{title}" }
                p { class: "cta__body", "{body}" }
                div { class: "cta__actions",
                    ButtonLink { href: primary_href, size: ButtonSize::Lg, "{primary_label}" }
                    if let (Some(label), Some(href)) = (secondary_label, secondary_href) {
                        ButtonLink {
                            href,
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Lg,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
