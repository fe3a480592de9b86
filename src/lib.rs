pub mod api;
pub mod config;
pub mod content;
pub mod copy;
pub mod error;
pub mod i18n;
pub mod motion;

pub use api::BackendClient;
pub use copy::CopySync;
pub use error::QueryError;
pub use i18n::{Translations, normalize_locale};
pub use motion::ReducedMotion;
