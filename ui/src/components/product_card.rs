use std::collections::HashMap;

use api::Locale;
use dioxus::prelude::*;
use fluent::FluentValue;

use crate::catalog::{Product, Spec};
use crate::core::format;
use crate::i18n::{tr, tr_args};

/// Spec line with the number formatted for `locale` and the unit/wording from FTL.
pub fn spec_line(locale: Locale, spec: &Spec) -> String {
    let value = format::format_grouped(spec.value, spec.decimals, locale);
    let args = HashMap::from([("value", FluentValue::from(value))]);
    tr_args(locale, spec.key, args)
}

#[component]
pub fn ProductCard(locale: Locale, product: Product) -> Element {
    let specs: Vec<String> = product.specs.iter().map(|s| spec_line(locale, s)).collect();

    rsx! {
        article { class: "product-card product-card--{product.collection}", id: "{product.id}",
            div { class: "product-card__visual", aria_hidden: "true" }
            div { class: "product-card__body",
                h3 { class: "product-card__model", "{product.model}" }
                p { class: "product-card__tagline", {tr(locale, product.tagline_key)} }
                ul { class: "product-card__specs",
                    for line in specs {
                        li { class: "product-card__spec", "{line}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRODUCTS;

    #[test]
    fn spec_lines_use_locale_number_format() {
        let as70 = PRODUCTS.iter().find(|p| p.id == "as-70-pro").unwrap();
        let swath = as70.specs.iter().find(|s| s.key == "spec-swath").unwrap();
        assert_eq!(spec_line(Locale::En, swath), "13.5 m spray width");
        assert!(spec_line(Locale::Fr, swath).contains("13,5"));
    }

    #[test]
    fn card_lists_every_spec() {
        let product = PRODUCTS[0];
        let html = dioxus_ssr::render_element(rsx! { ProductCard { locale: Locale::En, product } });
        assert_eq!(html.matches("product-card__spec\"").count(), product.specs.len());
        assert!(html.contains(product.model));
    }
}
