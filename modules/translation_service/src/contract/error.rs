//! Contract error types for translation service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use std::fmt;
use thiserror::Error;

/// Which side of a translation a language code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Source,
    Target,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Translation service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// Request rejected before reaching the upstream
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Language code is not offered by the upstream
    #[error("Unknown {role} language: {code}")]
    LanguageNotFound { role: LanguageRole, code: String },

    /// Upstream could not be reached or answered with an unreadable body
    #[error("Translation resource access error: {message}")]
    UpstreamAccess { message: String },

    /// Upstream answered with a non-success HTTP status
    #[error("Translation resource returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    /// Stored record not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TranslationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream_access(message: impl Into<String>) -> Self {
        Self::UpstreamAccess {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether repeating the same call may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::UpstreamAccess { .. } => true,
            Self::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
