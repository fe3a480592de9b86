mod locale;
mod store;

pub use locale::{DEFAULT_LOCALE, normalize_locale};
pub use store::Translations;
