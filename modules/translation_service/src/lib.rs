//! Translation Service Module
//!
//! Translates text word by word through the RapidAPI Google Translate
//! endpoints, keeps a history of completed translations and exposes both
//! over REST.

// Public exports
pub mod contract;
pub use contract::{
    Language, LanguageRole, Page, TranslateCommand, Translation, TranslationApi, TranslationError,
};

pub mod module;
pub use module::TranslationServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
