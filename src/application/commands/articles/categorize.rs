// src/application/commands/articles/categorize.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleUpdate},
        category::CategoryId,
    },
};

/// Assign the article to a category, or clear the reference with `None`.
pub struct AssignCategoryCommand {
    pub id: i64,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn assign_category(
        &self,
        command: AssignCategoryCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(command.id)?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        article.set_category(category_id, now);

        // An unknown category id surfaces as a foreign-key violation from
        // the store and maps to a validation error.
        let update = ArticleUpdate::new(id, article.updated_at).with_category(category_id);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
