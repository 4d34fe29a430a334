// src/application/queries/categories/list.rs
use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

impl CategoryQueryService {
    /// Categories are a small hand-curated set; the listing is unpaginated.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
