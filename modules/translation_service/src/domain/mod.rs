//! Domain layer - business logic and services

pub mod provider;
pub mod repository;
pub mod retry;
pub mod service;
pub mod validation;

pub use provider::TranslationProvider;
pub use repository::TranslationRepository;
pub use retry::RetryPolicy;
pub use service::{Service, ServiceOptions};
