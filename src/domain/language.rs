// src/domain/language.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Normalized language code such as `en`, `de` or `pt-br`.
///
/// Codes are lowercased on construction; a primary subtag of 2-3 ASCII
/// letters may be followed by `-` separated alphanumeric subtags of 2-8
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_ascii_lowercase();
        if !is_valid_code(&value) {
            return Err(DomainError::Validation(format!(
                "invalid language code: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_code(value: &str) -> bool {
    let mut subtags = value.split('-');
    let primary = match subtags.next() {
        Some(tag) => tag,
        None => return false,
    };
    if !(2..=3).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_lowercase()) {
        return false;
    }
    subtags.all(|tag| {
        (2..=8).contains(&tag.len()) && tag.bytes().all(|b| b.is_ascii_alphanumeric())
    })
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

/// Configured language policy: which languages the service speaks, which
/// chain to walk when a translation is missing, and whether untranslated
/// content is served through fallbacks or hidden.
#[derive(Debug, Clone)]
pub struct LanguageSettings {
    default_language: LanguageCode,
    languages: Vec<LanguageCode>,
    fallbacks: Vec<LanguageCode>,
    hide_untranslated: bool,
}

impl LanguageSettings {
    pub fn new(
        default_language: LanguageCode,
        languages: Vec<LanguageCode>,
        fallbacks: Vec<LanguageCode>,
        hide_untranslated: bool,
    ) -> DomainResult<Self> {
        if languages.is_empty() {
            return Err(DomainError::Validation(
                "at least one language must be configured".into(),
            ));
        }
        if !languages.contains(&default_language) {
            return Err(DomainError::Validation(format!(
                "default language {default_language} is not among the configured languages"
            )));
        }
        Ok(Self {
            default_language,
            languages,
            fallbacks,
            hide_untranslated,
        })
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    pub fn hide_untranslated(&self) -> bool {
        self.hide_untranslated
    }

    pub fn is_supported(&self, code: &LanguageCode) -> bool {
        self.languages.contains(code)
    }

    /// Languages to try for a request in `requested` order: the requested
    /// code itself, then the configured fallbacks, then the default
    /// language, without duplicates.
    pub fn resolution_order(&self, requested: &LanguageCode) -> Vec<LanguageCode> {
        let mut order = Vec::with_capacity(self.fallbacks.len() + 2);
        let mut push = |code: &LanguageCode, order: &mut Vec<LanguageCode>| {
            if !order.contains(code) {
                order.push(code.clone());
            }
        };
        push(requested, &mut order);
        for fallback in &self.fallbacks {
            push(fallback, &mut order);
        }
        push(&self.default_language, &mut order);
        order
    }
}
