use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn modifier(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::Outline => "btn--outline",
            ButtonVariant::Ghost => "btn--ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn modifier(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn--sm",
            ButtonSize::Md => "btn--md",
            ButtonSize::Lg => "btn--lg",
        }
    }
}

/// `btn btn--{variant} btn--{size}` plus `btn--block` for full-width buttons.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, block: bool) -> String {
    let mut class = format!("btn {} {}", variant.modifier(), size.modifier());
    if block {
        class.push_str(" btn--block");
    }
    class
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: button_class(variant, size, block),
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Anchor styled as a button. Plain `a` so navigation always passes through
/// the server-side locale routing.
#[component]
pub fn ButtonLink(
    #[props(into)] href: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] block: bool,
    children: Element,
) -> Element {
    rsx! {
        a { class: button_class(variant, size, block), href, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_combines_variant_and_size() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), false),
            "btn btn--primary btn--md"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Lg, true),
            "btn btn--ghost btn--lg btn--block"
        );
    }

    #[test]
    fn link_renders_as_anchor() {
        let html = dioxus_ssr::render_element(rsx! {
            ButtonLink {
                href: "/es/contact",
                variant: ButtonVariant::Outline,
                size: ButtonSize::Sm,
                "Contacto"
            }
        });
        assert!(html.contains(r#"href="/es/contact""#), "{html}");
        assert!(html.contains("btn btn--outline btn--sm"), "{html}");
        assert!(html.contains("Contacto"));
    }

    #[test]
    fn disabled_button_renders_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { disabled: true, variant: ButtonVariant::Secondary, "Send" }
        });
        assert!(html.contains("disabled"), "{html}");
        assert!(html.contains("btn--secondary"));
    }
}
