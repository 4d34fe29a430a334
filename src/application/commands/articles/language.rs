// src/application/commands/articles/language.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::language::{LanguageCode, LanguageSettings},
};

/// Parse a language code and require it to be one of the configured
/// languages. Translations in unserved languages would be unreachable
/// from every URL, so writes reject them outright.
pub fn supported_language(
    settings: &LanguageSettings,
    code: String,
) -> ApplicationResult<LanguageCode> {
    let language = LanguageCode::new(code)?;
    if settings.is_supported(&language) {
        Ok(language)
    } else {
        Err(ApplicationError::validation(format!(
            "language {language} is not configured"
        )))
    }
}
