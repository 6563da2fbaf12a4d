//! Input validation for translation requests

use crate::contract::{LanguageRole, TranslationError};

/// Address recorded when the caller did not send `X-Forwarded-For`
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";

/// Validate the text to translate
///
/// Rejects blank text and text longer than `max_len` characters.
pub fn validate_input_text(text: &str, max_len: usize) -> Result<(), TranslationError> {
    if text.trim().is_empty() {
        return Err(TranslationError::validation("inputText must not be blank"));
    }

    let len = text.chars().count();
    if len > max_len {
        return Err(TranslationError::validation(format!(
            "inputText is {} characters long, the maximum is {}",
            len, max_len
        )));
    }

    Ok(())
}

/// Validate a language code before it is checked against the supported list
pub fn validate_language_code(role: LanguageRole, code: &str) -> Result<(), TranslationError> {
    if code.trim().is_empty() {
        return Err(TranslationError::validation(format!(
            "{}Language must not be blank",
            role
        )));
    }
    Ok(())
}

/// Client address from an `X-Forwarded-For` header value
///
/// The first hop is the originating client.
pub fn client_ip(forwarded_for: Option<&str>) -> String {
    forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(DEFAULT_CLIENT_IP)
        .to_string()
}
