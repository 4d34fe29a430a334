// src/application/queries/categories/views.rs
use super::CategoryQueryService;
use crate::{
    application::{
        dto::{StackedCategoryDto, TabularCategoryDto},
        error::ApplicationResult,
    },
    domain::category::{StackedCategory, TabularCategory},
};

/// The presentational category variants. Both read the same rows; they
/// differ only in how the articles of a category are rendered inline.
pub struct GetStackedCategoryQuery {
    pub id: i64,
}

pub struct GetTabularCategoryQuery {
    pub id: i64,
}

impl CategoryQueryService {
    pub async fn get_stacked_category(
        &self,
        query: GetStackedCategoryQuery,
    ) -> ApplicationResult<StackedCategoryDto> {
        let category = self.require(query.id).await?;
        let articles = self.repo.articles_in(category.id).await?;
        Ok(StackedCategoryDto::new(
            StackedCategory::from(category),
            &articles,
            &self.settings,
        ))
    }

    pub async fn get_tabular_category(
        &self,
        query: GetTabularCategoryQuery,
    ) -> ApplicationResult<TabularCategoryDto> {
        let category = self.require(query.id).await?;
        let articles = self.repo.articles_in(category.id).await?;
        Ok(TabularCategoryDto::new(
            TabularCategory::from(category),
            &articles,
            &self.settings,
        ))
    }

    pub async fn list_stacked_categories(&self) -> ApplicationResult<Vec<StackedCategoryDto>> {
        let categories = self.repo.list().await?;
        let mut views = Vec::with_capacity(categories.len());
        for category in categories {
            let articles = self.repo.articles_in(category.id).await?;
            views.push(StackedCategoryDto::new(
                StackedCategory::from(category),
                &articles,
                &self.settings,
            ));
        }
        Ok(views)
    }

    pub async fn list_tabular_categories(&self) -> ApplicationResult<Vec<TabularCategoryDto>> {
        let categories = self.repo.list().await?;
        let mut views = Vec::with_capacity(categories.len());
        for category in categories {
            let articles = self.repo.articles_in(category.id).await?;
            views.push(TabularCategoryDto::new(
                TabularCategory::from(category),
                &articles,
                &self.settings,
            ));
        }
        Ok(views)
    }
}
