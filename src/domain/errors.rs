// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure taxonomy shared by entities, value objects and repositories.
/// `Conflict` covers the uniqueness rules of the translation model: the
/// global slug constraint, one translation per language, and the rule that
/// an article keeps at least one translation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
