//! Reusable site components. Every component takes the active [`api::Locale`]
//! as a prop instead of reading global state, so server renders of different
//! locales never interfere.

pub mod button;
pub mod collection_grid;
pub mod cta;
pub mod fade_in;
pub mod footer;
pub mod hero_slider;
pub mod product_card;
pub mod site_navbar;
pub mod stats;

pub use button::{Button, ButtonLink, ButtonSize, ButtonVariant};
pub use collection_grid::CollectionGrid;
pub use cta::CallToAction;
pub use fade_in::FadeIn;
pub use footer::SiteFooter;
pub use hero_slider::HeroSlider;
pub use product_card::ProductCard;
pub use site_navbar::SiteNavbar;
pub use stats::{StatCounter, StatsSection};
