// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

// SQLite reports constraint violations through the message rather than a
// named constraint, e.g. "UNIQUE constraint failed: article_translations.slug".
const UNIQUE_TRANSLATION_SLUG: &str = "article_translations.slug";
const UNIQUE_TRANSLATION_LANGUAGE: &str = "article_translations.article_id";

// SQLite extended result codes.
const CODE_CONSTRAINT_UNIQUE: &str = "2067";
const CODE_CONSTRAINT_PRIMARY_KEY: &str = "1555";
const CODE_CONSTRAINT_FOREIGN_KEY: &str = "787";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if message.contains(UNIQUE_TRANSLATION_SLUG) {
                return DomainError::Conflict("slug already exists".into());
            }
            if message.contains(UNIQUE_TRANSLATION_LANGUAGE) {
                return DomainError::Conflict(
                    "translation already exists for this language".into(),
                );
            }
            if message.contains("FOREIGN KEY constraint failed") {
                return DomainError::Validation("referenced record does not exist".into());
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    CODE_CONSTRAINT_UNIQUE | CODE_CONSTRAINT_PRIMARY_KEY => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    CODE_CONSTRAINT_FOREIGN_KEY => {
                        return DomainError::Validation(
                            "referenced record does not exist".into(),
                        );
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
