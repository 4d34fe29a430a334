// src/application/queries/categories/get.rs
use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

pub struct GetCategoryByIdQuery {
    pub id: i64,
}

impl CategoryQueryService {
    pub async fn get_category_by_id(
        &self,
        query: GetCategoryByIdQuery,
    ) -> ApplicationResult<CategoryDto> {
        let category = self.require(query.id).await?;
        Ok(category.into())
    }
}
