// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleListCursor, ArticleReadRepository},
        errors::DomainError,
        language::LanguageSettings,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) settings: Arc<LanguageSettings>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, settings: Arc<LanguageSettings>) -> Self {
        Self {
            read_repo,
            settings,
        }
    }

    pub(super) fn normalize_limit(&self, limit: u32) -> u32 {
        const DEFAULT_LIMIT: u32 = 20;
        const MAX_LIMIT: u32 = 100;

        if limit == 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        }
    }

    pub(super) fn decode_cursor(
        &self,
        token: Option<&str>,
    ) -> ApplicationResult<Option<ArticleListCursor>> {
        match token {
            Some(value) => match ArticleListCursor::decode(value) {
                Ok(cursor) => Ok(Some(cursor)),
                Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
                Err(other) => Err(ApplicationError::from(other)),
            },
            None => Ok(None),
        }
    }
}
