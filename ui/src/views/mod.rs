mod about;
mod collection;
mod contact;
mod home;
mod not_found;
mod products;

pub use about::AboutPage;
pub use collection::CollectionPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;

use api::Locale;

use crate::t;

/// `<title>` text: page name followed by the brand.
pub(crate) fn page_title(locale: Locale, page_name: &str) -> String {
    t!(locale, "page-title", page = page_name)
}
