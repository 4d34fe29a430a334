// src/application/queries/categories/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        category::{Category, CategoryId, CategoryRepository},
        language::LanguageSettings,
    },
};

pub struct CategoryQueryService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) settings: Arc<LanguageSettings>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>, settings: Arc<LanguageSettings>) -> Self {
        Self { repo, settings }
    }

    pub(super) async fn require(&self, id: i64) -> ApplicationResult<Category> {
        let id = CategoryId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
