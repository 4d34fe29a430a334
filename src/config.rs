// src/config.rs
use crate::domain::language::{LanguageCode, LanguageSettings};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    language_settings: LanguageSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://glossa.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

fn parse_languages(var: &str, fallback: &str) -> Result<Vec<LanguageCode>, ConfigError> {
    env::var(var)
        .unwrap_or_else(|_| fallback.to_string())
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            LanguageCode::new(code).map_err(|err| ConfigError::Invalid(format!("{var}: {err}")))
        })
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables. All keys have
    /// defaults; language-policy values are validated on load so a broken
    /// setup fails at startup rather than per request.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        let default_language = LanguageCode::new(
            env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
        )
        .map_err(|err| ConfigError::Invalid(format!("DEFAULT_LANGUAGE: {err}")))?;

        let languages = parse_languages("LANGUAGES", "en")?;
        let fallbacks = parse_languages("FALLBACK_LANGUAGES", "")?;

        let hide_untranslated = env::var("HIDE_UNTRANSLATED")
            .ok()
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let language_settings =
            LanguageSettings::new(default_language, languages, fallbacks, hide_untranslated)
                .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            language_settings,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn language_settings(&self) -> &LanguageSettings {
        &self.language_settings
    }
}
