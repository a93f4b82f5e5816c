pub mod error;
pub mod geo;
pub mod i18n;
